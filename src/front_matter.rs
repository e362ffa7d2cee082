//! Article front matter.
//!
//! Articles open with a metadata block fenced by `---` (YAML) or `+++`
//! (TOML) lines:
//!
//! ```text
//! ---
//! title: Hello
//! ogTitle: Hello, world
//! publishedDate: 2024-03-01
//! tags: rust, blog
//! ---
//! Body text starts here.
//! ```
//!
//! Both metadata shapes the blog has used (with and without the social image
//! fields) deserialize into the single [`FrontMatter`] record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Front matter parsing errors
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML front matter")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("invalid TOML front matter")]
    Toml(#[from] toml::de::Error),
}

/// Syntax of a front matter block, chosen by its fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Fenced by `---`
    Yaml,
    /// Fenced by `+++`
    Toml,
}

impl Format {
    const fn fence(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }

    fn from_fence(line: &str) -> Option<Self> {
        [Self::Yaml, Self::Toml]
            .into_iter()
            .find(|format| line.trim_end() == format.fence())
    }
}

/// Raw metadata block borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterBlock<'a> {
    pub format: Format,
    /// Block content between the fences, fences excluded
    pub raw: &'a str,
}

/// Per-article metadata.
///
/// Every value is kept as the string the author wrote; nothing here is
/// validated beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontMatter {
    pub title: String,
    /// Title for social sharing cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    pub published_date: String,
    pub modified_date: String,
    /// Comma separated
    pub tags: String,
    pub description: String,
}

impl FrontMatter {
    /// Parse the leading block of `source`, returning the metadata and the body.
    ///
    /// A document without a complete block yields the default record and the
    /// whole source as body.
    pub fn parse(source: &str) -> Result<(Self, &str), FrontMatterError> {
        let (block, body) = split_document(source);
        let meta = match block {
            None => Self::default(),
            Some(block) => Self::from_block(block)?,
        };
        Ok((meta, body))
    }

    /// Deserialize an already split block.
    pub fn from_block(block: FrontMatterBlock<'_>) -> Result<Self, FrontMatterError> {
        if block.raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let meta = match block.format {
            Format::Yaml => serde_yaml_ng::from_str(block.raw)?,
            Format::Toml => toml::from_str(block.raw)?,
        };
        Ok(meta)
    }

    /// Tags split on commas, trimmed, empties dropped.
    pub fn tags(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    pub fn published(&self) -> Option<NaiveDate> {
        parse_date(&self.published_date)
    }

    pub fn modified(&self) -> Option<NaiveDate> {
        parse_date(&self.modified_date)
    }

    /// `og_title` when present and non-empty, otherwise `title`.
    pub fn social_title(&self) -> &str {
        self.og_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.title)
    }
}

/// Split `source` into its front matter block (if any) and body.
///
/// The opening fence must be the first line; a leading BOM is skipped.
pub fn split_document(source: &str) -> (Option<FrontMatterBlock<'_>>, &str) {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some((first, content)) = split_line(source) else {
        return (None, source);
    };
    let Some(format) = Format::from_fence(first) else {
        return (None, source);
    };

    let mut rest = content;
    while let Some((line, after)) = split_line(rest) {
        if line.trim_end() == format.fence() {
            let raw = &content[..content.len() - rest.len()];
            return (Some(FrontMatterBlock { format, raw }), after);
        }
        rest = after;
    }

    // Unterminated block: treat everything as body
    (None, source)
}

/// Split off the first line, without its `\n`.
fn split_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    Some(match s.find('\n') {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (s, ""),
    })
}

/// Parse `YYYY-MM-DD`, also accepting the date prefix of an RFC 3339 timestamp.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let date = s.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
