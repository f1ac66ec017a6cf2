//! In-memory stores for presentation tests.

use async_trait::async_trait;
use std::sync::Mutex;
use watchparty_application::{ExclusionStore, ProposalStore, StoreError};
use watchparty_domain::{ExclusionList, ParticipantId, ProposalList, ProposalRegistry};

#[derive(Default)]
pub(crate) struct Proposals(Mutex<ProposalRegistry>);

impl Proposals {
    pub fn new(registry: ProposalRegistry) -> Self {
        Self(Mutex::new(registry))
    }

    pub fn current(&self) -> ProposalRegistry {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProposalStore for Proposals {
    async fn load(&self) -> Result<ProposalRegistry, StoreError> {
        Ok(self.current())
    }

    async fn save(&self, registry: &ProposalRegistry) -> Result<(), StoreError> {
        *self.0.lock().unwrap() = registry.clone();
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct Exclusions(Mutex<ExclusionList>);

impl Exclusions {
    pub fn current(&self) -> ExclusionList {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExclusionStore for Exclusions {
    async fn load(&self) -> Result<ExclusionList, StoreError> {
        Ok(self.current())
    }

    async fn save(&self, exclusions: &ExclusionList) -> Result<(), StoreError> {
        *self.0.lock().unwrap() = exclusions.clone();
        Ok(())
    }
}

/// One proposal per participant
pub(crate) fn registry(entries: &[(&str, &str)]) -> ProposalRegistry {
    entries
        .iter()
        .map(|(p, title)| {
            (
                ParticipantId::from(*p),
                ProposalList::from(vec![title.to_string()]),
            )
        })
        .collect()
}
