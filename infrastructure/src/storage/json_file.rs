//! Whole-document JSON persistence shared by the stores.
//!
//! Documents are human-readable: one-space indentation, UTF-8. Saves go to a
//! sibling temp file that is renamed over the target, so readers see either
//! the old or the new document.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use watchparty_application::StoreError;

#[derive(Debug, Clone)]
pub(crate) struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, creating an empty one if the file is absent.
    ///
    /// An empty or whitespace-only file loads as `T::default()`.
    pub(crate) async fn load<T>(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        match fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => Ok(T::default()),
            Ok(text) => serde_json::from_str(&text).map_err(|e| StoreError::Corrupt {
                path: self.display(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty = T::default();
                self.save(&empty).await?;
                debug!("Created {}", self.path.display());
                Ok(empty)
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Replace the document with `value`.
    pub(crate) async fn save<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let bytes = to_document(value).map_err(|e| StoreError::Corrupt {
            path: self.display(),
            message: e.to_string(),
        })?;

        let temp = self.temp_path();
        fs::write(&temp, &bytes).await.map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(self.io_error(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, e: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display(),
            message: e.to_string(),
        }
    }
}

fn to_document<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    type Doc = BTreeMap<String, Vec<String>>;

    #[tokio::test]
    async fn test_missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("nested").join("doc.json"));

        let doc: Doc = file.load().await.unwrap();
        assert!(doc.is_empty());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_blank_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "  \n").unwrap();

        let doc: Vec<String> = JsonFile::new(&path).load().await.unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFile::new(&path).load::<Doc>().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.to_string().contains("doc.json"));
    }

    #[tokio::test]
    async fn test_save_uses_one_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("doc.json"));
        let mut doc = Doc::new();
        doc.insert("A".into(), vec!["Dune".into()]);

        file.save(&doc).await.unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "{\n \"A\": [\n  \"Dune\"\n ]\n}");
        assert!(!file.temp_path().exists());
    }

    #[tokio::test]
    async fn test_non_ascii_titles_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("doc.json"));
        let titles = vec!["Amélie".to_string(), "千と千尋の神隠し".to_string()];

        file.save(&titles).await.unwrap();
        let loaded: Vec<String> = file.load().await.unwrap();
        assert_eq!(loaded, titles);
        assert!(
            std::fs::read_to_string(file.path())
                .unwrap()
                .contains("Amélie")
        );
    }
}
