//! One participant's pending proposals.

use super::title::{duplicate_key, removal_key};
use serde::{Deserialize, Serialize};

/// Ordered list of film titles proposed by a single participant.
///
/// Serialized as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalList(Vec<String>);

impl ProposalList {
    pub fn new() -> Self {
        Self::default()
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

    /// Whether any entry has the same duplicate key as `title`
    pub fn contains_duplicate_of(&self, title: &str) -> bool {
        let key = duplicate_key(title);
        self.0.iter().any(|t| duplicate_key(t) == key)
    }

    /// Whether an entry matches `title` exactly
    pub fn contains_exact(&self, title: &str) -> bool {
        self.0.iter().any(|t| removal_key(t) == removal_key(title))
    }

    pub(crate) fn push(&mut self, title: String) {
        self.0.push(title);
    }

    /// Remove the first exact match, keeping the order of the rest.
    pub(crate) fn remove_exact(&mut self, title: &str) -> Option<String> {
        let index = self
            .0
            .iter()
            .position(|t| removal_key(t) == removal_key(title))?;
        Some(self.0.remove(index))
    }
}

impl From<Vec<String>> for ProposalList {
    fn from(titles: Vec<String>) -> Self {
        Self(titles)
    }
}

impl<'a> FromIterator<&'a str> for ProposalList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a ProposalList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
