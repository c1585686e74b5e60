use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VizError;

/// Title size of a skeleton caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonCaptionSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// All caption sizes in ascending order.
pub const ALL_SIZES: &[SkeletonCaptionSize] = &[
    SkeletonCaptionSize::Small,
    SkeletonCaptionSize::Medium,
    SkeletonCaptionSize::Large,
];

impl SkeletonCaptionSize {
    /// Lowercase key, also used as the `data-size` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkeletonCaptionSize::Small => "small",
            SkeletonCaptionSize::Medium => "medium",
            SkeletonCaptionSize::Large => "large",
        }
    }

    /// Parse a size key, defaulting to `Medium` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: VizError| {
            tracing::warn!(input = s, error = %err, "falling back to medium caption size");
            SkeletonCaptionSize::default()
        })
    }
}

impl fmt::Display for SkeletonCaptionSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkeletonCaptionSize {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(SkeletonCaptionSize::Small),
            "medium" => Ok(SkeletonCaptionSize::Medium),
            "large" => Ok(SkeletonCaptionSize::Large),
            other => Err(VizError::invalid_size(format!(
                "unknown caption size: {other:?}"
            ))),
        }
    }
}
