//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSON object: participant → pending proposals
    pub proposals_file: PathBuf,
    /// JSON array of films already picked
    pub exclusions_file: PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            proposals_file: PathBuf::from("usermovies.json"),
            exclusions_file: PathBuf::from("blacklist.json"),
        }
    }
}
