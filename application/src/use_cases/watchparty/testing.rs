//! Test doubles for the workflow: in-memory stores and a recording presenter.

use super::{Invocation, Watchparty};
use crate::config::WorkflowConfig;
use crate::ports::poll_presenter::{PollPresenter, PresenterError};
use crate::ports::store::{ExclusionStore, ProposalStore, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use watchparty_domain::{
    ChannelId, ExclusionList, ParticipantId, Poll, ProposalList, ProposalRegistry, WinnerDecision,
};

pub(super) const CHANNEL: &str = "movie-night";

#[derive(Default)]
pub(super) struct MemoryProposalStore {
    registry: Mutex<ProposalRegistry>,
    fail_load: AtomicBool,
    fail_save: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryProposalStore {
    pub fn new(registry: ProposalRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
            ..Default::default()
        }
    }

    pub fn current(&self) -> ProposalRegistry {
        self.registry.lock().unwrap().clone()
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProposalStore for MemoryProposalStore {
    async fn load(&self) -> Result<ProposalRegistry, StoreError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(StoreError::Corrupt {
                path: "memory://proposals".into(),
                message: "injected".into(),
            });
        }
        Ok(self.current())
    }

    async fn save(&self, registry: &ProposalRegistry) -> Result<(), StoreError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(StoreError::Io {
                path: "memory://proposals".into(),
                message: "injected".into(),
            });
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.registry.lock().unwrap() = registry.clone();
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct MemoryExclusionStore {
    list: Mutex<ExclusionList>,
    fail_save: AtomicBool,
}

impl MemoryExclusionStore {
    pub fn new(list: ExclusionList) -> Self {
        Self {
            list: Mutex::new(list),
            ..Default::default()
        }
    }

    pub fn current(&self) -> ExclusionList {
        self.list.lock().unwrap().clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ExclusionStore for MemoryExclusionStore {
    async fn load(&self) -> Result<ExclusionList, StoreError> {
        Ok(self.current())
    }

    async fn save(&self, exclusions: &ExclusionList) -> Result<(), StoreError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(StoreError::Io {
                path: "memory://exclusions".into(),
                message: "injected".into(),
            });
        }
        *self.list.lock().unwrap() = exclusions.clone();
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct RecordingPresenter {
    opened: Mutex<Vec<(ChannelId, Poll)>>,
    announced: Mutex<Vec<WinnerDecision>>,
    fail_render: AtomicBool,
    fail_announce: AtomicBool,
}

impl RecordingPresenter {
    pub fn opened(&self) -> Vec<(ChannelId, Poll)> {
        self.opened.lock().unwrap().clone()
    }

    pub fn announced(&self) -> Vec<WinnerDecision> {
        self.announced.lock().unwrap().clone()
    }

    pub fn fail_renders(&self, fail: bool) {
        self.fail_render.store(fail, Ordering::SeqCst);
    }

    pub fn fail_announcements(&self, fail: bool) {
        self.fail_announce.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PollPresenter for RecordingPresenter {
    async fn open_poll(&self, channel: &ChannelId, poll: &Poll) -> Result<(), PresenterError> {
        if self.fail_render.load(Ordering::SeqCst) {
            return Err(PresenterError::RenderFailed("injected".into()));
        }
        self.opened
            .lock()
            .unwrap()
            .push((channel.clone(), poll.clone()));
        Ok(())
    }

    async fn announce_resolution(
        &self,
        _channel: &ChannelId,
        decision: &WinnerDecision,
    ) -> Result<(), PresenterError> {
        if self.fail_announce.load(Ordering::SeqCst) {
            return Err(PresenterError::ChannelUnavailable("injected".into()));
        }
        self.announced.lock().unwrap().push(decision.clone());
        Ok(())
    }
}

pub(super) type TestWatchparty =
    Watchparty<MemoryProposalStore, MemoryExclusionStore, RecordingPresenter>;

pub(super) struct Harness {
    pub workflow: TestWatchparty,
    pub proposals: Arc<MemoryProposalStore>,
    pub exclusions: Arc<MemoryExclusionStore>,
    pub presenter: Arc<RecordingPresenter>,
}

impl Harness {
    /// Workflow bound to [`CHANNEL`] with a fixed seed
    pub fn new(registry: ProposalRegistry) -> Self {
        Self::with_config(
            registry,
            WorkflowConfig::default().with_channel(CHANNEL),
        )
    }

    pub fn with_config(registry: ProposalRegistry, config: WorkflowConfig) -> Self {
        let proposals = Arc::new(MemoryProposalStore::new(registry));
        let exclusions = Arc::new(MemoryExclusionStore::new(ExclusionList::new()));
        let presenter = Arc::new(RecordingPresenter::default());
        let workflow = Watchparty::new(
            proposals.clone(),
            exclusions.clone(),
            presenter.clone(),
            config,
        )
        .with_seed(7);

        Self {
            workflow,
            proposals,
            exclusions,
            presenter,
        }
    }
}

pub(super) fn registry(entries: &[(&str, &[&str])]) -> ProposalRegistry {
    entries
        .iter()
        .map(|(p, titles)| {
            (
                ParticipantId::from(*p),
                titles.iter().copied().collect::<ProposalList>(),
            )
        })
        .collect()
}

/// Request from `participant` in the bound channel
pub(super) fn invoke(participant: &str) -> Invocation {
    Invocation::new(participant, CHANNEL)
}

pub(super) fn channel() -> ChannelId {
    ChannelId::from(CHANNEL)
}
