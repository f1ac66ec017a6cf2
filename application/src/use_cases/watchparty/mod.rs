//! Watchparty use case
//!
//! Runs the weekly selection ritual against the two stores and the chat
//! surface:
//!
//! | Operation        | Needs bound channel | Mutates                     |
//! |------------------|---------------------|-----------------------------|
//! | `submit`         | yes                 | proposals                   |
//! | `remove`         | yes                 | proposals                   |
//! | `list`/`suggest` | yes                 | nothing                     |
//! | `draw`           | yes                 | poll state                  |
//! | `close_poll`     | yes (notification)  | poll state, both stores     |
//! | `bind_channel`   | no (admin only)     | channel binding             |
//!
//! Every operation runs under one lock around [`WorkflowState`], so
//! submissions, removals, draws and resolutions are linearized. Stores are
//! reloaded at the start of each operation.

mod context;
mod draw;
mod resolution;
mod submission;
mod types;

#[cfg(test)]
mod testing;

pub use types::{ErrorKind, Invocation, WatchpartyError};

use crate::config::WorkflowConfig;
use crate::ports::poll_presenter::PollPresenter;
use crate::ports::store::{ExclusionStore, ProposalStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use watchparty_domain::{ChannelId, Poll, PollLifecycle};

/// In-memory part of the workflow, guarded by a single lock
struct WorkflowState {
    poll: PollLifecycle,
    channel: Option<ChannelId>,
    rng: StdRng,
}

impl WorkflowState {
    /// Requests are only served from the bound channel.
    fn ensure_channel(&self, requested: &ChannelId) -> Result<(), WatchpartyError> {
        match &self.channel {
            None => Err(WatchpartyError::Unbound),
            Some(bound) if bound != requested => Err(WatchpartyError::WrongChannel {
                expected: bound.clone(),
                actual: requested.clone(),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Use case for the proposal / draw / poll / resolution workflow
pub struct Watchparty<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    proposals: Arc<P>,
    exclusions: Arc<E>,
    presenter: Arc<V>,
    config: WorkflowConfig,
    state: Mutex<WorkflowState>,
}

impl<P, E, V> Watchparty<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    pub fn new(
        proposals: Arc<P>,
        exclusions: Arc<E>,
        presenter: Arc<V>,
        config: WorkflowConfig,
    ) -> Self {
        let state = WorkflowState {
            poll: PollLifecycle::new(),
            channel: config.channel.clone(),
            rng: StdRng::from_entropy(),
        };

        Self {
            proposals,
            exclusions,
            presenter,
            config,
            state: Mutex::new(state),
        }
    }

    /// Seed the draw rng so draws are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.state.get_mut().rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub async fn is_poll_open(&self) -> bool {
        self.state.lock().await.poll.is_open()
    }

    /// Copy of the open poll, if any
    pub async fn active_poll(&self) -> Option<Poll> {
        self.state.lock().await.poll.active().cloned()
    }

    pub async fn bound_channel(&self) -> Option<ChannelId> {
        self.state.lock().await.channel.clone()
    }
}
