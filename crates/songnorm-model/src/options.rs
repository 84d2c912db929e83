//! Configuration options for a normalization run.

use serde::{Deserialize, Serialize};

use crate::ids::DEFAULT_ID_OFFSET;

/// Cover URL written when the source has none.
pub const MISSING_COVER_URL: &str = "Not Found";

/// Character substituted for each run of non-ASCII characters in track names.
pub const NON_ASCII_PLACEHOLDER: char = '?';

/// Options controlling normalization behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Offset of the first identifier in every table.
    pub id_offset: u32,

    /// Replacement for non-ASCII runs in track names.
    pub non_ascii_placeholder: char,

    /// Cover URL used when the source column is absent or blank.
    pub missing_cover_url: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            id_offset: DEFAULT_ID_OFFSET,
            non_ascii_placeholder: NON_ASCII_PLACEHOLDER,
            missing_cover_url: MISSING_COVER_URL.to_string(),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id_offset(mut self, offset: u32) -> Self {
        self.id_offset = offset;
        self
    }

    #[must_use]
    pub fn with_missing_cover_url(mut self, value: impl Into<String>) -> Self {
        self.missing_cover_url = value.into();
        self
    }
}
