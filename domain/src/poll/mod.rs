//! Poll domain
//!
//! A poll is the timed two-candidate vote that picks the film. At most one
//! poll exists at any time.

pub mod candidate;
pub mod lifecycle;
pub mod tally;

pub use candidate::Candidate;
pub use lifecycle::{Poll, PollLifecycle, PollState};
pub use tally::{AnswerCount, VoteTally, WinnerDecision};
