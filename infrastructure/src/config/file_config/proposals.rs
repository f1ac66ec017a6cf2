//! Proposal rules from TOML (`[proposals]` section)

use serde::{Deserialize, Serialize};
use watchparty_domain::DEFAULT_PROPOSAL_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProposalsConfig {
    pub max_per_participant: usize,
    /// Reject films that already won a past poll
    pub reject_excluded: bool,
}

impl Default for FileProposalsConfig {
    fn default() -> Self {
        Self {
            max_per_participant: DEFAULT_PROPOSAL_LIMIT,
            reject_excluded: false,
        }
    }
}
