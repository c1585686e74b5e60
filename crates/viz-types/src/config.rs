use serde::{Deserialize, Serialize};

use crate::error::VizError;

fn default_description_max_width() -> String {
    "22em".to_string()
}

fn default_placeholder_width() -> String {
    "40%".to_string()
}

/// Display tokens for skeleton captions.
///
/// Components read this from context and fall back to [`SkeletonConfig::default`]
/// when the host application does not provide one. Every field has its own
/// default so a partial `[skeleton]` table stays valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkeletonConfig {
    /// Maximum display width of the description tooltip (CSS length).
    #[serde(default = "default_description_max_width")]
    pub description_max_width: String,
    /// Width of the placeholder bar shown in place of a missing title.
    #[serde(default = "default_placeholder_width")]
    pub placeholder_width: String,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            description_max_width: default_description_max_width(),
            placeholder_width: default_placeholder_width(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VizConfig {
    #[serde(default)]
    pub skeleton: SkeletonConfig,
}

impl VizConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, VizError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VizErrorKind;

    #[test]
    fn default_skeleton_config() {
        let config = SkeletonConfig::default();
        assert_eq!(config.description_max_width, "22em");
        assert_eq!(config.placeholder_width, "40%");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = VizConfig::from_toml_str("").unwrap();
        assert_eq!(config, VizConfig::default());
    }

    #[test]
    fn partial_toml_defaults_missing_fields() {
        let config = VizConfig::from_toml_str(
            r#"
            [skeleton]
            placeholder_width = "8rem"
            "#,
        )
        .unwrap();
        assert_eq!(config.skeleton.placeholder_width, "8rem");
        assert_eq!(config.skeleton.description_max_width, "22em");
    }

    #[test]
    fn full_toml() {
        let config = VizConfig::from_toml_str(
            r#"
            [skeleton]
            description_max_width = "30em"
            placeholder_width = "50%"
            "#,
        )
        .unwrap();
        assert_eq!(config.skeleton.description_max_width, "30em");
        assert_eq!(config.skeleton.placeholder_width, "50%");
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        let err = VizConfig::from_toml_str("[skeleton\nplaceholder_width = ").unwrap_err();
        assert_eq!(err.kind, VizErrorKind::InvalidConfig);
    }

    #[test]
    fn wrong_field_type_is_invalid_config() {
        let err = VizConfig::from_toml_str(
            r#"
            [skeleton]
            placeholder_width = 40
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, VizErrorKind::InvalidConfig);
    }
}
