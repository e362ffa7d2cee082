//! `[content]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in nnago.toml - where articles live.
///
/// # Example
/// ```toml
/// [content]
/// dir = "src/content/blog"
/// extensions = ["md"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Article directory, relative to the project root (default: `src/content`)
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// File extensions treated as articles, without the dot (case-insensitive)
    #[serde(default = "defaults::content::extensions")]
    #[educe(Default = defaults::content::extensions())]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_content_config() {
        let config = r#"
            [content]
            dir = "posts"
            extensions = ["markdown"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.dir, PathBuf::from("posts"));
        assert_eq!(config.content.extensions, vec!["markdown".to_string()]);
    }

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("[content]").unwrap();

        assert_eq!(config.content.dir, PathBuf::from("src/content"));
        assert_eq!(
            config.content.extensions,
            vec!["md".to_string(), "mdx".to_string()]
        );
    }
}
