//! Type definitions for the Watchparty use case.

use crate::ports::poll_presenter::PresenterError;
use crate::ports::store::StoreError;
use thiserror::Error;
use watchparty_domain::{ChannelId, DomainError, ParticipantId};

/// Who issued a request, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub participant: ParticipantId,
    pub channel: ChannelId,
}

impl Invocation {
    pub fn new(participant: impl Into<ParticipantId>, channel: impl Into<ChannelId>) -> Self {
        Self {
            participant: participant.into(),
            channel: channel.into(),
        }
    }
}

/// Errors that can occur while running the workflow
#[derive(Error, Debug)]
pub enum WatchpartyError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No channel is set up yet, an administrator must run /setup first")]
    Unbound,

    #[error("This command can only be used in #{expected}")]
    WrongChannel {
        expected: ChannelId,
        actual: ChannelId,
    },

    #[error("Administrator permission required")]
    PermissionDenied,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Presentation error: {0}")]
    Presenter(#[from] PresenterError),
}

/// Broad classification of a [`WatchpartyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input: duplicate, capacity, not found, bad title
    Validation,
    /// Declined because of the workflow state: poll open, too few participants
    StateConflict,
    /// Wrong channel, unbound workflow or missing permission
    Access,
    /// A store could not be read or written
    Persistence,
    /// The vote-closed notification was malformed
    ExternalNotification,
    /// The chat surface failed to render
    Presentation,
}

impl WatchpartyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WatchpartyError::Domain(e) if e.is_malformed_notification() => {
                ErrorKind::ExternalNotification
            }
            WatchpartyError::Domain(e) if e.is_state_conflict() => ErrorKind::StateConflict,
            WatchpartyError::Domain(_) => ErrorKind::Validation,
            WatchpartyError::Unbound
            | WatchpartyError::WrongChannel { .. }
            | WatchpartyError::PermissionDenied => ErrorKind::Access,
            WatchpartyError::Store(_) => ErrorKind::Persistence,
            WatchpartyError::Presenter(_) => ErrorKind::Presentation,
        }
    }

    /// Whether the message should be shown to the invoking participant as is
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Validation | ErrorKind::StateConflict | ErrorKind::Access
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let duplicate = WatchpartyError::from(DomainError::Duplicate {
            title: "Dune".into(),
        });
        assert_eq!(duplicate.kind(), ErrorKind::Validation);
        assert!(duplicate.is_user_facing());

        let active = WatchpartyError::from(DomainError::PollAlreadyActive);
        assert_eq!(active.kind(), ErrorKind::StateConflict);

        let tally = WatchpartyError::from(DomainError::MalformedTally("bad".into()));
        assert_eq!(tally.kind(), ErrorKind::ExternalNotification);
        assert!(!tally.is_user_facing());

        assert_eq!(WatchpartyError::Unbound.kind(), ErrorKind::Access);
        assert!(WatchpartyError::PermissionDenied.is_user_facing());
    }

    #[test]
    fn test_persistence_is_not_user_facing() {
        let err = WatchpartyError::from(StoreError::Io {
            path: "usermovies.json".into(),
            message: "denied".into(),
        });
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert!(!err.is_user_facing());
        assert!(err.to_string().contains("usermovies.json"));
    }

    #[test]
    fn test_wrong_channel_message() {
        let err = WatchpartyError::WrongChannel {
            expected: ChannelId::from("movie-night"),
            actual: ChannelId::from("general"),
        };
        assert_eq!(err.to_string(), "This command can only be used in #movie-night");
    }
}
