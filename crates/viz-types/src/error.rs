use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of visualization-layer errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VizErrorKind {
    InvalidSize,
    InvalidConfig,
}

impl fmt::Display for VizErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizErrorKind::InvalidSize => write!(f, "InvalidSize"),
            VizErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error for parsing visualization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VizError {
    pub kind: VizErrorKind,
    pub message: String,
}

impl VizError {
    pub fn invalid_size(message: impl Into<String>) -> Self {
        Self {
            kind: VizErrorKind::InvalidSize,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: VizErrorKind::InvalidConfig,
            message: message.into(),
        }
    }
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for VizError {}

impl From<toml::de::Error> for VizError {
    fn from(err: toml::de::Error) -> Self {
        VizError::invalid_config(err.message().to_string())
    }
}
