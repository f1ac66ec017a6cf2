//! Store ports
//!
//! Durable state behind the workflow: the pending proposals of every
//! participant and the append-only list of films already picked. Each
//! operation loads the current document, mutates it in memory and saves it
//! back; there is no long-lived cache.

use async_trait::async_trait;
use thiserror::Error;
use watchparty_domain::{ExclusionList, ProposalRegistry};

/// Errors raised by store adapters
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Corrupt document {path}: {message}")]
    Corrupt { path: String, message: String },
}

/// Participant → pending proposals
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Load the current registry, creating empty backing state if absent
    async fn load(&self) -> Result<ProposalRegistry, StoreError>;

    /// Persist the whole registry (all-or-nothing)
    async fn save(&self, registry: &ProposalRegistry) -> Result<(), StoreError>;
}

/// Films already picked by a past poll
#[async_trait]
pub trait ExclusionStore: Send + Sync {
    /// Load the current list, creating empty backing state if absent
    async fn load(&self) -> Result<ExclusionList, StoreError>;

    /// Persist the whole list (all-or-nothing)
    async fn save(&self, exclusions: &ExclusionList) -> Result<(), StoreError>;
}
