//! Channel binding.

use super::{Invocation, Watchparty, WatchpartyError};
use crate::ports::poll_presenter::PollPresenter;
use crate::ports::store::{ExclusionStore, ProposalStore};
use tracing::{debug, info};
use watchparty_domain::{ChannelId, DomainError};

impl<P, E, V> Watchparty<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    /// Restrict the workflow to `channel`. Administrators only.
    ///
    /// May be issued from any channel and re-run to move the binding. Moving
    /// it while a poll is open is declined, since the vote-closed
    /// notification would then arrive from a channel no longer accepted.
    /// Returns the previous binding.
    pub async fn bind_channel(
        &self,
        invocation: &Invocation,
        is_admin: bool,
        channel: ChannelId,
    ) -> Result<Option<ChannelId>, WatchpartyError> {
        if !is_admin {
            debug!(participant = %invocation.participant, "Setup declined: not an administrator");
            return Err(WatchpartyError::PermissionDenied);
        }

        let mut state = self.state.lock().await;
        if state.poll.is_open() && state.channel.as_ref() != Some(&channel) {
            return Err(DomainError::PollAlreadyActive.into());
        }

        let previous = state.channel.replace(channel.clone());
        info!(by = %invocation.participant, %channel, "Workflow bound to channel");
        Ok(previous)
    }

    /// Whether requests from `channel` are currently accepted.
    ///
    /// Fails with `Unbound` or `WrongChannel` exactly as the workflow
    /// operations themselves would.
    pub async fn check_channel(&self, channel: &ChannelId) -> Result<(), WatchpartyError> {
        self.state.lock().await.ensure_channel(channel)
    }
}
