//! Simulated chat poll: ballot box, console presenter and close timer

pub mod ballot;
pub mod presenter;
pub mod timer;

pub use ballot::{BallotBox, BallotError};
pub use presenter::ConsolePollPresenter;
pub use timer::PollTimer;
