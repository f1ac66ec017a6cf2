//! Application layer for watchparty
//!
//! This crate contains the workflow use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WorkflowConfig;
pub use ports::{
    poll_presenter::{PollPresenter, PresenterError},
    store::{ExclusionStore, ProposalStore, StoreError},
};
pub use use_cases::watchparty::{ErrorKind, Invocation, Watchparty, WatchpartyError};
