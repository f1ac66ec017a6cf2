//! Configuration issues.
//!
//! Configuration loaders validate their input and report problems as
//! structured issues with a severity, so the binary can abort on errors and
//! merely log warnings.
//!
//! # Examples
//!
//! ```
//! use watchparty_domain::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issue = ConfigIssue::error(
//!     ConfigIssueCode::ZeroProposalLimit,
//!     "proposals.max_per_participant must be at least 1",
//! );
//! assert!(issue.is_error());
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Participants could never propose anything.
    ZeroProposalLimit,
    /// A poll would close immediately.
    ZeroPollDuration,
    /// Longer than the chat platform accepts for a poll.
    PollDurationTooLong { hours: u64 },
    /// A storage file path is empty.
    EmptyStoragePath { field: String },
    /// Proposals and exclusions would overwrite each other.
    SharedStoragePath,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
