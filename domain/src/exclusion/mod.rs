//! Exclusion list: films that already won a poll.

use crate::proposal::duplicate_key;
use serde::{Deserialize, Serialize};

/// Append-only record of films selected by past polls.
///
/// Serialized as a plain JSON array of strings, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionList(Vec<String>);

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a winning title
    pub fn append(&mut self, title: impl Into<String>) {
        self.0.push(title.into());
    }

    /// Whether a title with the same duplicate key was already selected
    pub fn contains(&self, title: &str) -> bool {
        let key = duplicate_key(title);
        self.0.iter().any(|t| duplicate_key(t) == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for ExclusionList {
    fn from(titles: Vec<String>) -> Self {
        Self(titles)
    }
}
