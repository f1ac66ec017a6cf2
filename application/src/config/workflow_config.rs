//! Workflow parameters.
//!
//! [`WorkflowConfig`] groups the static knobs of the
//! [`Watchparty`](crate::use_cases::watchparty::Watchparty) use case. The
//! infrastructure layer builds it from the merged configuration file.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use watchparty_domain::{ChannelId, DEFAULT_PROPOSAL_LIMIT};

pub const DEFAULT_POLL_QUESTION: &str = "Here are the movies drawn for Sunday:";
pub const DEFAULT_POLL_DURATION: Duration = Duration::from_secs(24 * 3600);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Maximum pending proposals per participant.
    pub proposal_limit: usize,
    /// How long a poll stays open.
    pub poll_duration: Duration,
    /// Question shown above the two options.
    pub poll_question: String,
    /// Reject submissions of films already picked by a past poll.
    pub reject_excluded: bool,
    /// Channel the workflow starts bound to.
    pub channel: Option<ChannelId>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            proposal_limit: DEFAULT_PROPOSAL_LIMIT,
            poll_duration: DEFAULT_POLL_DURATION,
            poll_question: DEFAULT_POLL_QUESTION.to_string(),
            reject_excluded: false,
            channel: None,
        }
    }
}

impl WorkflowConfig {
    // ==================== Builder Methods ====================

    pub fn with_proposal_limit(mut self, limit: usize) -> Self {
        self.proposal_limit = limit;
        self
    }

    pub fn with_poll_duration(mut self, duration: Duration) -> Self {
        self.poll_duration = duration;
        self
    }

    pub fn with_poll_question(mut self, question: impl Into<String>) -> Self {
        self.poll_question = question.into();
        self
    }

    pub fn with_reject_excluded(mut self, reject: bool) -> Self {
        self.reject_excluded = reject;
        self
    }

    pub fn with_channel(mut self, channel: impl Into<ChannelId>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkflowConfig::default();
        assert_eq!(config.proposal_limit, 2);
        assert_eq!(config.poll_duration, Duration::from_secs(86_400));
        assert!(!config.reject_excluded);
        assert!(config.channel.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = WorkflowConfig::default()
            .with_proposal_limit(3)
            .with_poll_duration(Duration::from_secs(60))
            .with_poll_question("Pick one")
            .with_reject_excluded(true)
            .with_channel("movie-night");

        assert_eq!(config.proposal_limit, 3);
        assert_eq!(config.poll_duration, Duration::from_secs(60));
        assert_eq!(config.poll_question, "Pick one");
        assert!(config.reject_excluded);
        assert_eq!(config.channel, Some(ChannelId::from("movie-night")));
    }
}
