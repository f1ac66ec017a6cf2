//! Title comparison keys.
//!
//! Submission and removal deliberately compare titles differently:
//!
//! - [`duplicate_key`] folds case and drops space characters, so "The Thing"
//!   and "thething" count as the same film when checking for duplicates.
//!   Other whitespace (tabs, newlines) is kept and still tells titles apart.
//! - [`removal_key`] is the title verbatim; removing a proposal needs the
//!   exact stored text (autocomplete provides it).
//!
//! Neither key is ever stored or displayed.

use crate::core::error::DomainError;

/// Key used to detect duplicate proposals across the whole registry.
pub fn duplicate_key(title: &str) -> String {
    title
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Key used to match a proposal for removal.
pub fn removal_key(title: &str) -> &str {
    title
}

/// Validate raw user input and return the title as it will be stored.
///
/// Surrounding whitespace is trimmed; everything else is kept verbatim.
pub fn sanitize_title(raw: &str) -> Result<String, DomainError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidTitle(
            "title must not be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}
