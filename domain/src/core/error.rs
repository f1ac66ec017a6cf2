//! Domain error types

use super::identity::ParticipantId;
use thiserror::Error;

/// Domain-level errors
///
/// Every variant is recoverable: the workflow declines the request and stays
/// consistent. Use the `is_*` helpers to classify a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{participant} has already proposed {limit} movies and cannot add more")]
    AlreadyFull {
        participant: ParticipantId,
        limit: usize,
    },

    #[error("'{title}' is already in the list")]
    Duplicate { title: String },

    #[error("'{title}' has already been picked by a previous poll")]
    PreviouslySelected { title: String },

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("{0} has no proposals")]
    ParticipantNotFound(ParticipantId),

    #[error("'{title}' is not in {participant}'s list")]
    ProposalNotFound {
        participant: ParticipantId,
        title: String,
    },

    #[error("At least two participants with proposals are needed for a draw")]
    InsufficientParticipants,

    #[error("Cannot pick from an empty proposal list")]
    EmptyList,

    #[error("There's already an active poll, wait for it to finish")]
    PollAlreadyActive,

    #[error("No poll is active")]
    NoActivePoll,

    #[error("Malformed vote tally: {0}")]
    MalformedTally(String),
}

impl DomainError {
    /// Rejected input (duplicate, capacity, not found on removal, bad title)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::AlreadyFull { .. }
                | DomainError::Duplicate { .. }
                | DomainError::PreviouslySelected { .. }
                | DomainError::InvalidTitle(_)
                | DomainError::ParticipantNotFound(_)
                | DomainError::ProposalNotFound { .. }
        )
    }

    /// The request conflicts with the current workflow state
    pub fn is_state_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::InsufficientParticipants
                | DomainError::EmptyList
                | DomainError::PollAlreadyActive
                | DomainError::NoActivePoll
        )
    }

    /// The vote-closed payload could not be interpreted
    pub fn is_malformed_notification(&self) -> bool {
        matches!(self, DomainError::MalformedTally(_))
    }
}
