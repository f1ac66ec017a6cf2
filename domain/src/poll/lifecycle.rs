//! Poll lifecycle: the single active poll and its state machine
//!
//! ```text
//!            start(poll)                on_vote_closed(tally)
//!   Idle ───────────────────▶ Open ─────────────────────────▶ Idle
//!    ▲                          │
//!    └──── PollAlreadyActive ◀──┘  (start while Open is declined)
//! ```
//!
//! There is no intermediate counting state: closing and deciding the winner
//! happen in one step, and the manager is back to `Idle` afterwards whatever
//! the outcome.

use super::candidate::Candidate;
use super::tally::{VoteTally, WinnerDecision};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A two-option timed vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    question: String,
    candidates: [Candidate; 2],
    /// Milliseconds since epoch
    started_at: u64,
    duration: Duration,
}

impl Poll {
    /// Create a poll starting now
    pub fn new(
        question: impl Into<String>,
        first: Candidate,
        second: Candidate,
        duration: Duration,
    ) -> Self {
        Self {
            question: question.into(),
            candidates: [first, second],
            started_at: current_timestamp(),
            duration,
        }
    }

    /// Override the start time (milliseconds since epoch)
    pub fn with_started_at(mut self, started_at: u64) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Candidates in submission order
    pub fn candidates(&self) -> &[Candidate; 2] {
        &self.candidates
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the vote window ends (milliseconds since epoch)
    pub fn closes_at(&self) -> u64 {
        self.started_at
            .saturating_add(self.duration.as_millis().min(u64::MAX as u128) as u64)
    }
}

/// State of the poll manager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PollState {
    #[default]
    Idle,
    Open(Poll),
}

impl PollState {
    pub fn is_open(&self) -> bool {
        matches!(self, PollState::Open(_))
    }
}

impl std::fmt::Display for PollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollState::Idle => write!(f, "Idle"),
            PollState::Open(_) => write!(f, "Open"),
        }
    }
}

/// Owner of the single-active-poll invariant.
///
/// Only [`start`](Self::start) and [`on_vote_closed`](Self::on_vote_closed)
/// change the state. Callers are expected to serialize access (one lock
/// around the whole workflow).
#[derive(Debug, Default)]
pub struct PollLifecycle {
    state: PollState,
}

impl PollLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// The open poll, if any
    pub fn active(&self) -> Option<&Poll> {
        match &self.state {
            PollState::Open(poll) => Some(poll),
            PollState::Idle => None,
        }
    }

    /// Open `poll`. Fails with `PollAlreadyActive` while another poll is open.
    pub fn start(&mut self, poll: Poll) -> Result<(), DomainError> {
        if self.state.is_open() {
            return Err(DomainError::PollAlreadyActive);
        }
        self.state = PollState::Open(poll);
        Ok(())
    }

    /// Close the open poll and decide the winner.
    ///
    /// The manager is `Idle` when this returns, including on error, so a bad
    /// notification can never leave the poll stuck open.
    pub fn on_vote_closed(&mut self, tally: &VoteTally) -> Result<WinnerDecision, DomainError> {
        let poll = match std::mem::take(&mut self.state) {
            PollState::Open(poll) => poll,
            PollState::Idle => return Err(DomainError::NoActivePoll),
        };

        let counts = tally.counts_for(poll.candidates.len())?;
        Ok(WinnerDecision::decide(poll.candidates, &counts))
    }
}

fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
