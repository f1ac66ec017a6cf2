//! Console adapter for [`PollPresenter`].
//!
//! Prints the poll and the resolution announcement to stdout and opens the
//! ballot box for `/vote`.

use super::ballot::BallotBox;
use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use watchparty_application::{PollPresenter, PresenterError};
use watchparty_domain::{ChannelId, Poll, WinnerDecision};

pub struct ConsolePollPresenter {
    ballots: Arc<BallotBox>,
}

impl ConsolePollPresenter {
    pub fn new(ballots: Arc<BallotBox>) -> Self {
        Self { ballots }
    }

    pub fn ballots(&self) -> &Arc<BallotBox> {
        &self.ballots
    }
}

#[async_trait]
impl PollPresenter for ConsolePollPresenter {
    async fn open_poll(&self, channel: &ChannelId, poll: &Poll) -> Result<(), PresenterError> {
        let options = poll.candidates().len() as u32;
        self.ballots.open(options);
        println!();
        println!("{}", ConsoleFormatter::poll(channel, poll));
        debug!(%channel, "Rendered poll");
        Ok(())
    }

    async fn announce_resolution(
        &self,
        channel: &ChannelId,
        decision: &WinnerDecision,
    ) -> Result<(), PresenterError> {
        println!();
        println!("{}", ConsoleFormatter::resolution(decision));
        debug!(%channel, "Announced resolution");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use watchparty_domain::{Candidate, ParticipantId};

    #[tokio::test]
    async fn test_open_poll_resets_ballots() {
        let ballots = Arc::new(BallotBox::new());
        ballots.open(2);
        ballots.cast(&ParticipantId::from("A"), 1).unwrap();

        let presenter = ConsolePollPresenter::new(ballots.clone());
        let poll = Poll::new(
            "Pick one",
            Candidate::new("A", "Dune"),
            Candidate::new("B", "Her"),
            Duration::from_secs(60),
        );
        presenter
            .open_poll(&ChannelId::from("movie-night"), &poll)
            .await
            .unwrap();

        assert!(presenter.ballots().is_open());
        assert_eq!(ballots.close().total_votes(), 0);
    }
}
