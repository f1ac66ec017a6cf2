//! Core domain concepts shared across all subdomains.
//!
//! - [`identity::ParticipantId`]: who proposes and votes
//! - [`identity::ChannelId`]: the chat context the workflow is bound to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod identity;
