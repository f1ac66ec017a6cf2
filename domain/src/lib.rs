//! Domain layer for watchparty
//!
//! This crate contains the core rules of the weekly movie selection.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Proposals
//!
//! Each participant keeps a short list of pending film proposals
//! ([`ProposalRegistry`]). A film can only be proposed once across the group.
//!
//! ## Draw
//!
//! Two distinct participants are drawn at random and one proposal is drawn
//! from each ([`selection`]).
//!
//! ## Poll
//!
//! The two candidates go to a timed vote. Only one poll can be open at a time
//! ([`PollLifecycle`]); the winner goes to the [`ExclusionList`].
//!
//! ```text
//! submit ──▶ ProposalRegistry ──draw──▶ [Candidate; 2] ──▶ PollLifecycle
//!                 ▲                                            │
//!                 └──── remove winner ◀── WinnerDecision ◀─────┘
//!                                              │
//!                                              ▼
//!                                        ExclusionList
//! ```

pub mod config;
pub mod core;
pub mod exclusion;
pub mod poll;
pub mod proposal;
pub mod selection;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError,
    identity::{ChannelId, ParticipantId},
};
pub use exclusion::ExclusionList;
pub use poll::{AnswerCount, Candidate, Poll, PollLifecycle, PollState, VoteTally, WinnerDecision};
pub use proposal::{
    DEFAULT_PROPOSAL_LIMIT, ProposalList, ProposalRegistry, duplicate_key, removal_key,
};
