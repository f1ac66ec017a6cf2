//! Presentation layer for watchparty
//!
//! This crate contains the CLI definition, console formatting, the simulated
//! chat poll (ballots, presenter, close timer) and the interactive REPL.

pub mod cli;
pub mod output;
pub mod poll;
pub mod repl;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use poll::{BallotBox, BallotError, ConsolePollPresenter, PollTimer};
pub use repl::{Identity, ReplCommand, WatchpartyRepl};
