//! Vote-closed handling and resolution.
//!
//! Closing the poll and moving the winner happen under the workflow lock:
//!
//! 1. the poll goes back to `Idle` whatever happens next
//! 2. the winner is removed from its owner's list (abort on failure, the
//!    exclusion list is untouched)
//! 3. the winner is appended to the exclusion list
//! 4. proposals are saved, then exclusions; if the second save fails the
//!    original proposals are written back

use super::{Watchparty, WatchpartyError};
use crate::ports::poll_presenter::PollPresenter;
use crate::ports::store::{ExclusionStore, ProposalStore};
use tracing::{error, info, warn};
use watchparty_domain::{Candidate, ChannelId, VoteTally, WinnerDecision};

impl<P, E, V> Watchparty<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    /// Handle the vote-closed notification for `channel`.
    ///
    /// Notifications for any other channel are ignored with `WrongChannel`
    /// and leave the poll untouched.
    pub async fn close_poll(
        &self,
        channel: &ChannelId,
        tally: &VoteTally,
    ) -> Result<WinnerDecision, WatchpartyError> {
        let mut state = self.state.lock().await;
        state.ensure_channel(channel)?;

        let decision = state.poll.on_vote_closed(tally).inspect_err(|e| {
            if e.is_malformed_notification() {
                warn!("Discarded poll after malformed tally: {}", e);
            }
        })?;
        info!(
            winner = %decision.winner,
            votes = decision.winner_votes,
            runner_up_votes = decision.runner_up_votes,
            tie_break = decision.tie_break,
            "Poll closed"
        );

        self.resolve(&decision.winner).await?;

        if let Err(e) = self.presenter.announce_resolution(channel, &decision).await {
            warn!("Resolution applied but could not be announced: {}", e);
        }
        Ok(decision)
    }

    /// Move the winning film from its owner's list to the exclusion list.
    async fn resolve(&self, winner: &Candidate) -> Result<(), WatchpartyError> {
        let original = self.proposals.load().await?;
        let mut registry = original.clone();
        registry
            .remove(&winner.participant, &winner.title)
            .inspect_err(|e| match original.owner_of(&winner.title) {
                Some(owner) => warn!(%owner, "Resolution aborted, winner moved to another list: {}", e),
                None => warn!("Resolution aborted, winner no longer proposed: {}", e),
            })?;

        let mut exclusions = self.exclusions.load().await?;
        exclusions.append(winner.title.clone());

        self.proposals.save(&registry).await?;
        if let Err(e) = self.exclusions.save(&exclusions).await {
            error!("Failed to save exclusions, restoring proposals: {}", e);
            if let Err(restore) = self.proposals.save(&original).await {
                error!(title = %winner.title, "Failed to restore proposals: {}", restore);
            }
            return Err(e.into());
        }

        info!(
            participant = %winner.participant,
            title = %winner.title,
            "Moved winner to the exclusion list"
        );
        Ok(())
    }
}
