//! JSON file adapter for [`ProposalStore`].
//!
//! Layout: one object mapping participant id to the array of their pending
//! titles, e.g. `{"A": ["Dune"], "B": ["Arrival", "Her"]}`.

use super::json_file::JsonFile;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use watchparty_application::{ProposalStore, StoreError};
use watchparty_domain::ProposalRegistry;

pub struct JsonProposalStore {
    file: JsonFile,
}

impl JsonProposalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl ProposalStore for JsonProposalStore {
    async fn load(&self) -> Result<ProposalRegistry, StoreError> {
        self.file.load().await
    }

    async fn save(&self, registry: &ProposalRegistry) -> Result<(), StoreError> {
        self.file.save(registry).await
    }
}
