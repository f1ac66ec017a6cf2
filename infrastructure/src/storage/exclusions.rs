//! JSON file adapter for [`ExclusionStore`].
//!
//! Layout: one array of titles in the order they won.

use super::json_file::JsonFile;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use watchparty_application::{ExclusionStore, StoreError};
use watchparty_domain::ExclusionList;

pub struct JsonExclusionStore {
    file: JsonFile,
}

impl JsonExclusionStore {
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
impl ExclusionStore for JsonExclusionStore {
    async fn load(&self) -> Result<ExclusionList, StoreError> {
        self.file.load().await
    }

    async fn save(&self, exclusions: &ExclusionList) -> Result<(), StoreError> {
        self.file.save(exclusions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_persists_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path().join("blacklist.json"));

        let mut list = store.load().await.unwrap();
        assert!(list.is_empty());
        list.append("Dune");
        list.append("Her");
        store.save(&list).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.titles(), ["Dune", "Her"]);
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "[\n \"Dune\",\n \"Her\"\n]"
        );
    }

    #[tokio::test]
    async fn test_missing_file_created_as_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path().join("blacklist.json"));

        assert!(store.load().await.unwrap().is_empty());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }
}
