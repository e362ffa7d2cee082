//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [reading] Section Defaults
// ============================================================================

pub mod reading {
    use crate::reading::{DEFAULT_WORDS_PER_MINUTE, Tokenization};

    pub fn words_per_minute() -> u64 {
        DEFAULT_WORDS_PER_MINUTE
    }

    pub fn tokenization() -> Tokenization {
        Tokenization::default()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "src/content".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into(), "mdx".into()]
    }
}
