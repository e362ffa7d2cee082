//! Reading-time estimation.
//!
//! An estimate is the number of words in a text divided by an assumed reading
//! speed, rounded up to whole minutes. The same computation backs two entry
//! points:
//!
//! ```text
//! estimate_from_path(path) ──► tokio::fs::read_to_string ──┐
//!                                                          ▼
//!                              estimate_from_text(text) ──► tokens / wpm (ceil)
//! ```
//!
//! # Example
//!
//! ```
//! use nnago::reading::{ReadingTimeEstimator, Tokenization};
//!
//! let estimator = ReadingTimeEstimator::default();
//! assert_eq!(estimator.estimate_from_text("").minutes, 0);
//! assert_eq!(estimator.estimate_from_text("a few words").minutes, 1);
//!
//! let legacy = estimator.with_tokenization(Tokenization::Space);
//! assert_eq!(legacy.count_words("two  spaces"), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Assumed average reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u64 = 240;

/// Reading-time errors
#[derive(Debug, Error)]
pub enum ReadingTimeError {
    #[error("cannot read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("words per minute must be greater than zero")]
    InvalidSpeed,
}

/// How a text is split into countable words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tokenization {
    /// Split on the literal `' '` character.
    ///
    /// Repeated or leading spaces yield empty tokens that still count, and
    /// tabs or newlines do not separate words. Matches the estimates the blog
    /// published before the whitespace mode existed.
    Space,
    /// Split on runs of Unicode whitespace, ignoring empty tokens (default)
    #[default]
    Whitespace,
}

impl Tokenization {
    /// Count tokens in `text`. The empty string has no tokens in either mode.
    pub fn count(self, text: &str) -> u64 {
        if text.is_empty() {
            return 0;
        }
        let count = match self {
            Self::Space => text.split(' ').count(),
            Self::Whitespace => text.split_whitespace().count(),
        };
        count as u64
    }
}

impl fmt::Display for Tokenization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Space => "space",
            Self::Whitespace => "whitespace",
        })
    }
}

/// Result of an estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReadingTime {
    /// Whole minutes, rounded up
    pub minutes: u64,
    /// Tokens counted under the estimator's tokenization
    pub words: u64,
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Converts article text into whole minutes of reading.
///
/// Stateless and `Copy`: one estimator can serve any number of concurrent
/// callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimeEstimator {
    words_per_minute: u64,
    tokenization: Tokenization,
}

impl Default for ReadingTimeEstimator {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            tokenization: Tokenization::default(),
        }
    }
}

impl ReadingTimeEstimator {
    /// Create an estimator with a custom reading speed.
    pub fn new(
        words_per_minute: u64,
        tokenization: Tokenization,
    ) -> Result<Self, ReadingTimeError> {
        if words_per_minute == 0 {
            return Err(ReadingTimeError::InvalidSpeed);
        }
        Ok(Self {
            words_per_minute,
            tokenization,
        })
    }

    #[must_use]
    pub const fn with_tokenization(self, tokenization: Tokenization) -> Self {
        Self {
            tokenization,
            ..self
        }
    }

    pub const fn words_per_minute(&self) -> u64 {
        self.words_per_minute
    }

    pub const fn tokenization(&self) -> Tokenization {
        self.tokenization
    }

    #[inline]
    pub fn count_words(&self, text: &str) -> u64 {
        self.tokenization.count(text)
    }

    /// Estimate reading time for in-memory text. Total over all strings.
    pub fn estimate_from_text(&self, text: &str) -> ReadingTime {
        let words = self.count_words(text);
        ReadingTime {
            minutes: words.div_ceil(self.words_per_minute),
            words,
        }
    }

    /// Read a whole text resource and estimate its reading time.
    ///
    /// Missing, unreadable or non-UTF-8 resources fail with
    /// [`ReadingTimeError::Read`].
    pub async fn estimate_from_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ReadingTime, ReadingTimeError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ReadingTimeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.estimate_from_text(&text))
    }

    /// Blocking counterpart of [`Self::estimate_from_path`].
    pub fn estimate_from_path_blocking(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ReadingTime, ReadingTimeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ReadingTimeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.estimate_from_text(&text))
    }
}

/// Estimate with the default estimator (240 wpm, whitespace words).
pub fn estimate(text: &str) -> ReadingTime {
    ReadingTimeEstimator::default().estimate_from_text(text)
}

/// Estimate a file with the default estimator.
pub async fn estimate_file(path: impl AsRef<Path>) -> Result<ReadingTime, ReadingTimeError> {
    ReadingTimeEstimator::default().estimate_from_path(path).await
}

/// Blocking [`estimate_file`].
pub fn estimate_file_blocking(path: impl AsRef<Path>) -> Result<ReadingTime, ReadingTimeError> {
    ReadingTimeEstimator::default().estimate_from_path_blocking(path)
}
