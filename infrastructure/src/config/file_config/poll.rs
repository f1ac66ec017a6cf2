//! Poll settings from TOML (`[poll]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use watchparty_application::config::{DEFAULT_POLL_DURATION, DEFAULT_POLL_QUESTION};

/// Longest poll the chat platform accepts (32 days)
pub const MAX_POLL_HOURS: u64 = 32 * 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollConfig {
    pub duration_hours: u64,
    pub question: String,
}

impl Default for FilePollConfig {
    fn default() -> Self {
        Self {
            duration_hours: DEFAULT_POLL_DURATION.as_secs() / 3600,
            question: DEFAULT_POLL_QUESTION.to_string(),
        }
    }
}

impl FilePollConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_hours.saturating_mul(3600))
    }
}
