//! Infrastructure layer for watchparty
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FilePollConfig, FileProposalsConfig,
    FileStorageConfig,
};
pub use storage::{JsonExclusionStore, JsonProposalStore};
