//! `[reading]` section configuration.
//!
//! Controls how reading time is estimated.

use super::defaults;
use crate::reading::Tokenization;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[reading]` section in nnago.toml.
///
/// # Example
/// ```toml
/// [reading]
/// words_per_minute = 240
/// tokenization = "space"   # match estimates published before whitespace splitting
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ReadingConfig {
    /// Assumed reading speed (default: 240). Must be greater than zero.
    #[serde(default = "defaults::reading::words_per_minute")]
    #[educe(Default = defaults::reading::words_per_minute())]
    pub words_per_minute: u64,

    /// Word splitting rule: `whitespace` (default) or `space`.
    #[serde(default = "defaults::reading::tokenization")]
    #[educe(Default = defaults::reading::tokenization())]
    pub tokenization: Tokenization,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use crate::reading::Tokenization;

    #[test]
    fn test_reading_config() {
        let config = r#"
            [reading]
            words_per_minute = 200
            tokenization = "space"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.reading.words_per_minute, 200);
        assert_eq!(config.reading.tokenization, Tokenization::Space);
    }

    #[test]
    fn test_reading_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.reading.words_per_minute, 240);
        assert_eq!(config.reading.tokenization, Tokenization::Whitespace);
    }

    #[test]
    fn test_unknown_tokenization_rejected() {
        let config = r#"
            [reading]
            tokenization = "tabs"
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [reading]
            speed = 10
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
