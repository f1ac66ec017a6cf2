//! File-backed stores for proposals and exclusions.

mod exclusions;
mod json_file;
mod proposals;

pub use exclusions::JsonExclusionStore;
pub use proposals::JsonProposalStore;
