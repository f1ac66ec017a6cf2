//! Draw-and-open-poll.

use super::{Invocation, Watchparty, WatchpartyError};
use crate::ports::poll_presenter::PollPresenter;
use crate::ports::store::{ExclusionStore, ProposalStore};
use tracing::{debug, info, warn};
use watchparty_domain::{DomainError, Poll, selection};

impl<P, E, V> Watchparty<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    /// Draw two candidates and open the poll.
    ///
    /// Declined with `PollAlreadyActive` before anything is rendered while a
    /// poll is open. The poll is only recorded as open once the presenter has
    /// rendered it.
    pub async fn draw(&self, invocation: &Invocation) -> Result<Poll, WatchpartyError> {
        let mut state = self.state.lock().await;
        state.ensure_channel(&invocation.channel)?;

        if state.poll.is_open() {
            debug!(participant = %invocation.participant, "Draw declined: poll already active");
            return Err(DomainError::PollAlreadyActive.into());
        }

        let registry = self.proposals.load().await?;
        let [first, second] = selection::draw(&registry, &mut state.rng)
            .inspect_err(|e| debug!("Draw declined: {}", e))?;

        let poll = Poll::new(
            self.config.poll_question.clone(),
            first,
            second,
            self.config.poll_duration,
        );

        if let Err(e) = self.presenter.open_poll(&invocation.channel, &poll).await {
            warn!("Failed to render poll, staying idle: {}", e);
            return Err(e.into());
        }
        state.poll.start(poll.clone())?;

        let [a, b] = poll.candidates();
        info!(requested_by = %invocation.participant, first = %a, second = %b, "Poll opened");
        Ok(poll)
    }
}
