//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to the application's
//! [`WorkflowConfig`] once validated.

mod logging;
mod poll;
mod proposals;
mod storage;

pub use logging::FileLoggingConfig;
pub use poll::{FilePollConfig, MAX_POLL_HOURS};
pub use proposals::FileProposalsConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use watchparty_application::WorkflowConfig;
use watchparty_domain::{ChannelId, ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Channel the workflow starts bound to
    pub channel: Option<String>,
    /// Where the two JSON documents live
    pub storage: FileStorageConfig,
    /// Proposal rules
    pub proposals: FileProposalsConfig,
    /// Poll settings
    pub poll: FilePollConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.proposals.max_per_participant == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroProposalLimit,
                "proposals.max_per_participant must be at least 1",
            ));
        }

        if self.poll.duration_hours == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroPollDuration,
                "poll.duration_hours must be at least 1",
            ));
        } else if self.poll.duration_hours > MAX_POLL_HOURS {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::PollDurationTooLong {
                    hours: self.poll.duration_hours,
                },
                format!(
                    "poll.duration_hours = {} exceeds the {} hours most chat platforms accept",
                    self.poll.duration_hours, MAX_POLL_HOURS
                ),
            ));
        }

        for (field, path) in [
            ("storage.proposals_file", &self.storage.proposals_file),
            ("storage.exclusions_file", &self.storage.exclusions_file),
        ] {
            if path.as_os_str().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyStoragePath {
                        field: field.to_string(),
                    },
                    format!("{field} must not be empty"),
                ));
            }
        }

        if !self.storage.proposals_file.as_os_str().is_empty()
            && self.storage.proposals_file == self.storage.exclusions_file
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::SharedStoragePath,
                format!(
                    "storage.proposals_file and storage.exclusions_file both point to {}",
                    self.storage.proposals_file.display()
                ),
            ));
        }

        issues
    }

    /// Convert to the application's workflow parameters
    pub fn to_workflow_config(&self) -> WorkflowConfig {
        let config = WorkflowConfig::default()
            .with_proposal_limit(self.proposals.max_per_participant)
            .with_reject_excluded(self.proposals.reject_excluded)
            .with_poll_duration(self.poll.duration())
            .with_poll_question(self.poll.question.clone());

        match self.channel.as_deref().map(str::trim) {
            Some(channel) if !channel.is_empty() => config.with_channel(ChannelId::from(channel)),
            _ => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
channel = "movie-night"

[storage]
proposals_file = "data/usermovies.json"
exclusions_file = "data/blacklist.json"

[proposals]
max_per_participant = 3
reject_excluded = true

[poll]
duration_hours = 48
question = "Pick one"

[logging]
file = "watchparty.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.channel.as_deref(), Some("movie-night"));
        assert_eq!(
            config.storage.proposals_file,
            PathBuf::from("data/usermovies.json")
        );
        assert_eq!(config.proposals.max_per_participant, 3);
        assert!(config.proposals.reject_excluded);
        assert_eq!(config.poll.duration_hours, 48);
        assert_eq!(config.logging.file, Some(PathBuf::from("watchparty.log")));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[poll]
duration_hours = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.poll.duration_hours, 2);
        // Defaults should apply
        assert_eq!(config.poll.question, "Here are the movies drawn for Sunday:");
        assert_eq!(config.proposals.max_per_participant, 2);
        assert_eq!(
            config.storage.exclusions_file,
            PathBuf::from("blacklist.json")
        );
        assert!(config.channel.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_zero_values() {
        let mut config = FileConfig::default();
        config.proposals.max_per_participant = 0;
        config.poll.duration_hours = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(
            issues
                .iter()
                .any(|i| i.code == ConfigIssueCode::ZeroProposalLimit)
        );
    }

    #[test]
    fn test_validate_long_poll_is_warning() {
        let mut config = FileConfig::default();
        config.poll.duration_hours = MAX_POLL_HOURS + 1;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_validate_storage_paths() {
        let mut config = FileConfig::default();
        config.storage.exclusions_file = PathBuf::from("usermovies.json");
        let issues = config.validate();
        assert_eq!(issues[0].code, ConfigIssueCode::SharedStoragePath);

        config.storage.proposals_file = PathBuf::new();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyStoragePath {
                field: "storage.proposals_file".to_string()
            }
        );
    }

    #[test]
    fn test_to_workflow_config() {
        let mut config = FileConfig::default();
        config.channel = Some("  cinema ".to_string());
        config.poll.duration_hours = 3;

        let workflow = config.to_workflow_config();
        assert_eq!(workflow.channel, Some(ChannelId::from("cinema")));
        assert_eq!(workflow.poll_duration, Duration::from_secs(3 * 3600));
        assert_eq!(workflow.proposal_limit, 2);

        config.channel = Some(String::new());
        assert!(config.to_workflow_config().channel.is_none());
    }
}
