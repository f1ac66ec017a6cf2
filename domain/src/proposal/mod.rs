//! Proposal domain
//!
//! Participants propose films; each participant holds a short list of
//! pending proposals and no film may be proposed twice across the group.

pub mod list;
pub mod registry;
pub mod title;

pub use list::ProposalList;
pub use registry::{DEFAULT_PROPOSAL_LIMIT, ProposalRegistry};
pub use title::{duplicate_key, removal_key, sanitize_title};
