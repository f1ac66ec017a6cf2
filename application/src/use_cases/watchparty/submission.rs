//! Proposal submission, removal and listing.

use super::{Invocation, Watchparty, WatchpartyError};
use crate::ports::poll_presenter::PollPresenter;
use crate::ports::store::{ExclusionStore, ProposalStore};
use tracing::{debug, info};
use watchparty_domain::{DomainError, ProposalRegistry, removal_key};

impl<P, E, V> Watchparty<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    /// Add a proposal for the invoking participant.
    ///
    /// Returns the title as stored (trimmed).
    pub async fn submit(
        &self,
        invocation: &Invocation,
        title: &str,
    ) -> Result<String, WatchpartyError> {
        let state = self.state.lock().await;
        state.ensure_channel(&invocation.channel)?;

        let mut registry = self.proposals.load().await?;
        let stored = registry
            .submit(&invocation.participant, title, self.config.proposal_limit)
            .inspect_err(|e| debug!(participant = %invocation.participant, "Submission declined: {}", e))?;

        if self.config.reject_excluded && self.exclusions.load().await?.contains(&stored) {
            debug!(participant = %invocation.participant, title = %stored, "Declined previously selected film");
            return Err(DomainError::PreviouslySelected { title: stored }.into());
        }

        self.proposals.save(&registry).await?;

        info!(participant = %invocation.participant, title = %stored, "Proposal added");
        Ok(stored)
    }

    /// Remove one of the invoking participant's proposals (exact title).
    pub async fn remove(
        &self,
        invocation: &Invocation,
        title: &str,
    ) -> Result<String, WatchpartyError> {
        let state = self.state.lock().await;
        state.ensure_channel(&invocation.channel)?;

        let mut registry = self.proposals.load().await?;
        let removed = registry
            .remove(&invocation.participant, removal_key(title))
            .inspect_err(|e| debug!(participant = %invocation.participant, "Removal declined: {}", e))?;
        self.proposals.save(&registry).await?;

        info!(participant = %invocation.participant, title = %removed, "Proposal removed");
        Ok(removed)
    }

    /// Current proposals of every participant
    pub async fn list(&self, invocation: &Invocation) -> Result<ProposalRegistry, WatchpartyError> {
        let state = self.state.lock().await;
        state.ensure_channel(&invocation.channel)?;
        Ok(self.proposals.load().await?)
    }

    /// Titles of the invoking participant matching `partial`, for removal autocomplete
    pub async fn suggest(
        &self,
        invocation: &Invocation,
        partial: &str,
    ) -> Result<Vec<String>, WatchpartyError> {
        let state = self.state.lock().await;
        state.ensure_channel(&invocation.channel)?;
        let registry = self.proposals.load().await?;
        Ok(registry.suggest(&invocation.participant, partial))
    }
}
