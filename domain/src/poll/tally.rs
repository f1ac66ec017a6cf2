//! Vote tallies and winner determination
//!
//! The chat platform reports results as `(answer_id, count)` pairs where
//! answer ids are 1-based positions in candidate order. Answers nobody voted
//! for may be missing from the report.

use super::candidate::Candidate;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Vote count for a single answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCount {
    pub answer_id: u32,
    pub count: u32,
}

/// Final tally delivered by the vote-closed notification
///
/// # Example
///
/// ```
/// use watchparty_domain::VoteTally;
///
/// let tally = VoteTally::from_counts([5, 2]);
/// assert_eq!(tally.counts_for(2).unwrap(), vec![5, 2]);
/// assert_eq!(tally.total_votes(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub answers: Vec<AnswerCount>,
}

impl VoteTally {
    pub fn new(answers: Vec<AnswerCount>) -> Self {
        Self { answers }
    }

    /// Build a tally from counts listed in candidate order
    pub fn from_counts(counts: impl IntoIterator<Item = u32>) -> Self {
        let answers = counts
            .into_iter()
            .zip(1u32..)
            .map(|(count, answer_id)| AnswerCount { answer_id, count })
            .collect();
        Self { answers }
    }

    pub fn total_votes(&self) -> u32 {
        self.answers.iter().map(|a| a.count).sum()
    }

    /// Per-candidate counts for a poll with `options` answers.
    ///
    /// Missing answers count as zero. Unknown or repeated answer ids make the
    /// tally malformed.
    pub fn counts_for(&self, options: usize) -> Result<Vec<u32>, DomainError> {
        let mut counts = vec![0u32; options];
        let mut seen = vec![false; options];

        for answer in &self.answers {
            let index = (answer.answer_id as usize)
                .checked_sub(1)
                .filter(|i| *i < options)
                .ok_or_else(|| {
                    DomainError::MalformedTally(format!(
                        "unknown answer id {} for a poll with {} options",
                        answer.answer_id, options
                    ))
                })?;

            if seen[index] {
                return Err(DomainError::MalformedTally(format!(
                    "answer id {} reported twice",
                    answer.answer_id
                )));
            }
            seen[index] = true;
            counts[index] = answer.count;
        }

        Ok(counts)
    }
}

/// Outcome of a closed poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerDecision {
    pub winner: Candidate,
    pub runner_up: Candidate,
    pub winner_votes: u32,
    pub runner_up_votes: u32,
    /// Counts were equal and the first candidate won by default
    pub tie_break: bool,
}

impl WinnerDecision {
    /// Pick the candidate with the strictly highest count.
    ///
    /// Scans in candidate order and only replaces the leader on a strictly
    /// greater count, so equal counts (including no votes at all) resolve to
    /// the first candidate.
    pub fn decide(candidates: [Candidate; 2], counts: &[u32]) -> Self {
        let mut leader = 0;
        for (index, count) in counts.iter().enumerate().take(candidates.len()) {
            if *count > counts[leader] {
                leader = index;
            }
        }

        let winner_votes = counts.get(leader).copied().unwrap_or(0);
        let runner_up_votes = counts.get(1 - leader).copied().unwrap_or(0);
        let [first, second] = candidates;
        let (winner, runner_up) = if leader == 0 {
            (first, second)
        } else {
            (second, first)
        };

        Self {
            winner,
            runner_up,
            winner_votes,
            runner_up_votes,
            tie_break: winner_votes == runner_up_votes,
        }
    }
}
