//! The proposal registry: every participant's pending proposals.

use super::list::ProposalList;
use super::title::{duplicate_key, sanitize_title};
use crate::core::error::DomainError;
use crate::core::identity::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of pending proposals a participant may hold.
pub const DEFAULT_PROPOSAL_LIMIT: usize = 2;

/// Mapping of participant → pending proposals.
///
/// Invariants enforced at submission time:
/// - a participant holds at most `limit` proposals
/// - no two proposals anywhere in the registry share a duplicate key
///
/// Participants are kept in id order so a seeded draw is reproducible.
/// A participant whose last proposal was removed keeps an empty list.
///
/// # Example
///
/// ```
/// use watchparty_domain::{DomainError, ParticipantId, ProposalRegistry};
///
/// let mut registry = ProposalRegistry::new();
/// let alice = ParticipantId::from("alice");
/// let bob = ParticipantId::from("bob");
///
/// registry.submit(&alice, "Dune", 2).unwrap();
/// assert!(matches!(
///     registry.submit(&bob, "dune", 2),
///     Err(DomainError::Duplicate { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalRegistry {
    lists: BTreeMap<ParticipantId, ProposalList>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the full mapping
    pub fn snapshot(&self) -> &BTreeMap<ParticipantId, ProposalList> {
        &self.lists
    }

    pub fn get(&self, participant: &ParticipantId) -> Option<&ProposalList> {
        self.lists.get(participant)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &ProposalList)> {
        self.lists.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.total_proposals() == 0
    }

    pub fn total_proposals(&self) -> usize {
        self.lists.values().map(ProposalList::len).sum()
    }

    /// Whether a proposal with the same duplicate key exists for anyone
    pub fn is_proposed(&self, title: &str) -> bool {
        let key = duplicate_key(title);
        self.lists
            .values()
            .flat_map(ProposalList::iter)
            .any(|t| duplicate_key(t) == key)
    }

    /// Add a proposal for `participant`.
    ///
    /// Fails with `AlreadyFull` when the participant already holds `limit`
    /// proposals, and with `Duplicate` when the title collides with any
    /// proposal in the registry (for any participant). Returns the title as
    /// stored.
    pub fn submit(
        &mut self,
        participant: &ParticipantId,
        title: &str,
        limit: usize,
    ) -> Result<String, DomainError> {
        let title = sanitize_title(title)?;

        if self
            .lists
            .get(participant)
            .is_some_and(|list| list.len() >= limit)
        {
            return Err(DomainError::AlreadyFull {
                participant: participant.clone(),
                limit,
            });
        }

        if self.is_proposed(&title) {
            return Err(DomainError::Duplicate { title });
        }

        self.lists
            .entry(participant.clone())
            .or_default()
            .push(title.clone());
        Ok(title)
    }

    /// Remove the first proposal of `participant` that matches `title` exactly.
    pub fn remove(
        &mut self,
        participant: &ParticipantId,
        title: &str,
    ) -> Result<String, DomainError> {
        let list = self
            .lists
            .get_mut(participant)
            .ok_or_else(|| DomainError::ParticipantNotFound(participant.clone()))?;

        list.remove_exact(title)
            .ok_or_else(|| DomainError::ProposalNotFound {
                participant: participant.clone(),
                title: title.to_string(),
            })
    }

    /// Participant currently holding `title` (exact match)
    pub fn owner_of(&self, title: &str) -> Option<&ParticipantId> {
        self.lists
            .iter()
            .find(|(_, list)| list.contains_exact(title))
            .map(|(participant, _)| participant)
    }

    /// Participants holding at least one proposal, in id order.
    pub fn eligible_participants(&self) -> Vec<ParticipantId> {
        self.lists
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(participant, _)| participant.clone())
            .collect()
    }

    /// Autocomplete source for removal: the participant's own titles whose
    /// lower-cased form contains the lower-cased `partial`.
    pub fn suggest(&self, participant: &ParticipantId, partial: &str) -> Vec<String> {
        let needle = partial.trim().to_lowercase();
        self.lists
            .get(participant)
            .map(|list| {
                list.iter()
                    .filter(|t| t.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FromIterator<(ParticipantId, ProposalList)> for ProposalRegistry {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, ProposalList)>>(iter: I) -> Self {
        Self {
            lists: iter.into_iter().collect(),
        }
    }
}
