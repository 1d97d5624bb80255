//! Data model for generated listings

use serde::{Deserialize, Serialize};

/// A generated product listing.
///
/// Both fields may be empty when the model produced nothing usable;
/// that is a valid result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescription {
    /// One-line product title
    pub title: String,

    /// Longer free-form description
    pub description: String,
}

impl ProductDescription {
    /// True when neither field carries any content.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}
