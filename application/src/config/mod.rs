//! Application-level configuration.
//!
//! - [`WorkflowConfig`]: proposal limit, poll duration and question, channel binding

pub mod workflow_config;

pub use workflow_config::{DEFAULT_POLL_DURATION, DEFAULT_POLL_QUESTION, WorkflowConfig};
