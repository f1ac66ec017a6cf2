//! Poll candidates

use crate::core::identity::ParticipantId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One option of a poll: a proposal together with the participant who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub participant: ParticipantId,
    pub title: String,
}

impl Candidate {
    pub fn new(participant: impl Into<ParticipantId>, title: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.participant)
    }
}
