//! Opaque identifiers handed to us by the chat platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a participant (e.g. a chat member mention).
///
/// Participants have no lifecycle of their own: they exist as keys of the
/// proposal registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of the channel (or any other chat context) commands come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_serializes_as_plain_string() {
        let id = ParticipantId::new("<@1151652511502057512>");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"<@1151652511502057512>\"");

        let back: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_participants_order_by_id() {
        let mut ids = vec![ParticipantId::from("carol"), "alice".into(), "bob".into()];
        ids.sort();
        assert_eq!(ids[0].as_str(), "alice");
        assert_eq!(ids[2].as_str(), "carol");
    }
}
