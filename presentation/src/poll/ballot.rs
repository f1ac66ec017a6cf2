//! Ballot box for the simulated chat poll.
//!
//! One ballot per participant; voting again replaces the previous choice.
//! Closing the box turns the ballots into the [`VoteTally`] the workflow
//! expects.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use watchparty_domain::{ParticipantId, VoteTally};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BallotError {
    #[error("There is no poll to vote in")]
    NoOpenPoll,

    #[error("Answer {answer} does not exist, pick 1 to {options}")]
    InvalidAnswer { answer: u32, options: u32 },
}

#[derive(Debug, Default)]
struct Ballots {
    /// Number of options while a poll is open
    options: Option<u32>,
    votes: HashMap<ParticipantId, u32>,
}

#[derive(Debug, Default)]
pub struct BallotBox {
    inner: Mutex<Ballots>,
}

impl BallotBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start collecting votes for a poll with `options` answers
    pub fn open(&self, options: u32) {
        let mut ballots = self.lock();
        ballots.options = Some(options);
        ballots.votes.clear();
    }

    pub fn is_open(&self) -> bool {
        self.lock().options.is_some()
    }

    /// Record `participant`'s vote (1-based answer).
    ///
    /// Returns the answer it replaced, if any.
    pub fn cast(&self, participant: &ParticipantId, answer: u32) -> Result<Option<u32>, BallotError> {
        let mut ballots = self.lock();
        let options = ballots.options.ok_or(BallotError::NoOpenPoll)?;
        if answer == 0 || answer > options {
            return Err(BallotError::InvalidAnswer { answer, options });
        }
        Ok(ballots.votes.insert(participant.clone(), answer))
    }

    /// Stop collecting and count the votes per answer
    pub fn close(&self) -> VoteTally {
        let mut ballots = self.lock();
        let options = ballots.options.take().unwrap_or(0);
        let mut counts = vec![0u32; options as usize];
        for answer in ballots.votes.drain().map(|(_, answer)| answer) {
            if let Some(count) = counts.get_mut(answer as usize - 1) {
                *count += 1;
            }
        }
        VoteTally::from_counts(counts)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Ballots> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
