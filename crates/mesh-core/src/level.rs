//! How a caller reacts to a recoverable domain failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MeshError;

/// Reaction to a failure that the caller is allowed to tolerate, such as a
/// non-blocking audit.
///
/// Levels are ordered by severity: `Ignore < Warn < Raise`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorLevel {
    #[serde(alias = "IGNORE")]
    Ignore,
    #[serde(alias = "WARN")]
    Warn,
    #[default]
    #[serde(alias = "RAISE")]
    Raise,
}

impl ErrorLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Raise => "raise",
        }
    }

    /// Apply this level to `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` unchanged when the level is [`ErrorLevel::Raise`].
    pub fn apply(self, error: MeshError) -> Result<(), MeshError> {
        match self {
            Self::Ignore => {
                tracing::trace!(group = %error.group(), %error, "ignoring error");
                Ok(())
            }
            Self::Warn => {
                tracing::warn!(group = %error.group(), %error, "tolerating error");
                Ok(())
            }
            Self::Raise => Err(error),
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized error level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error level '{0}' (expected ignore, warn or raise)")]
pub struct ParseErrorLevelError(String);

impl FromStr for ErrorLevel {
    type Err = ParseErrorLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "raise" => Ok(Self::Raise),
            _ => Err(ParseErrorLevelError(s.to_string())),
        }
    }
}
