//! Poll timer: delivers the vote-closed notification.
//!
//! After a draw the REPL schedules a close for the poll's duration. The timer
//! task sleeps until then unless its [`CancellationToken`] fires first;
//! `/closepoll` cancels it and delivers immediately.

use super::ballot::BallotBox;
use crate::output::console::ConsoleFormatter;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use watchparty_application::{
    ExclusionStore, PollPresenter, ProposalStore, Watchparty, WatchpartyError,
};
use watchparty_domain::{ChannelId, WinnerDecision};

pub struct PollTimer<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    workflow: Arc<Watchparty<P, E, V>>,
    ballots: Arc<BallotBox>,
    pending: Mutex<Option<CancellationToken>>,
}

impl<P, E, V> PollTimer<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    pub fn new(workflow: Arc<Watchparty<P, E, V>>, ballots: Arc<BallotBox>) -> Self {
        Self {
            workflow,
            ballots,
            pending: Mutex::new(None),
        }
    }

    /// Deliver the tally for `channel` once `after` has elapsed.
    ///
    /// Replaces any previously scheduled close.
    pub fn schedule(self: &Arc<Self>, channel: ChannelId, after: Duration) {
        let token = CancellationToken::new();
        if let Some(previous) = self.replace_pending(Some(token.clone())) {
            previous.cancel();
        }

        let timer = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(%channel, "Scheduled poll close cancelled");
                }
                _ = tokio::time::sleep(after) => {
                    timer.replace_pending(None);
                    match timer.deliver(&channel).await {
                        Ok(decision) => debug!(winner = %decision.winner, "Poll closed on schedule"),
                        Err(e) => {
                            warn!("Scheduled poll close failed: {}", e);
                            println!("{}", ConsoleFormatter::error(&e));
                        }
                    }
                }
            }
        });
    }

    /// Cancel the scheduled close and deliver the tally now.
    ///
    /// A request from a channel the workflow does not accept is declined
    /// before the ballots or the schedule are touched.
    pub async fn close_now(&self, channel: &ChannelId) -> Result<WinnerDecision, WatchpartyError> {
        self.workflow.check_channel(channel).await?;
        if let Some(token) = self.replace_pending(None) {
            token.cancel();
        }
        self.deliver(channel).await
    }

    /// Whether a close is still scheduled
    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    async fn deliver(&self, channel: &ChannelId) -> Result<WinnerDecision, WatchpartyError> {
        let tally = self.ballots.close();
        self.workflow.close_poll(channel, &tally).await
    }

    fn replace_pending(&self, token: Option<CancellationToken>) -> Option<CancellationToken> {
        std::mem::replace(&mut *self.lock(), token)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CancellationToken>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
