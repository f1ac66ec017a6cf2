//! Port definitions (interfaces for external systems)
//!
//! Adapters for these traits live in the infrastructure and presentation
//! crates.

pub mod poll_presenter;
pub mod store;

pub use poll_presenter::{PollPresenter, PresenterError};
pub use store::{ExclusionStore, ProposalStore, StoreError};
