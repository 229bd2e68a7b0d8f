//! Audit failure handling configuration.

use mesh_core::{ErrorLevel, MeshError};
use serde::{Deserialize, Serialize};

/// Default reaction to failing non-blocking audits.
const fn default_level() -> ErrorLevel {
    ErrorLevel::Warn
}

/// Default reaction to failing blocking audits.
const fn default_blocking_level() -> ErrorLevel {
    ErrorLevel::Raise
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditsConfig {
    /// Applied when a non-blocking audit fails.
    #[serde(default = "default_level")]
    pub level: ErrorLevel,

    /// Applied when a blocking audit fails. Must be at least as severe as `level`.
    #[serde(default = "default_blocking_level")]
    pub blocking_level: ErrorLevel,
}

impl Default for AuditsConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            blocking_level: default_blocking_level(),
        }
    }
}

impl AuditsConfig {
    /// Level for an audit with the given blocking flag.
    #[must_use]
    pub const fn level_for(&self, blocking: bool) -> ErrorLevel {
        if blocking {
            self.blocking_level
        } else {
            self.level
        }
    }

    /// Route a failed audit through the configured level.
    ///
    /// # Errors
    ///
    /// Returns `error` when the level for `blocking` is [`ErrorLevel::Raise`].
    pub fn handle(&self, blocking: bool, error: MeshError) -> Result<(), MeshError> {
        self.level_for(blocking).apply(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use mesh_core::AuditFailure;

    fn failed_audit() -> MeshError {
        AuditFailure::new("not_null", 4, Arc::new("SELECT 1".to_string())).into()
    }

    #[test]
    fn defaults_are_correct() {
        let config = AuditsConfig::default();
        assert_eq!(config.level, ErrorLevel::Warn);
        assert_eq!(config.blocking_level, ErrorLevel::Raise);
    }

    #[test]
    fn blocking_audits_raise_by_default() {
        let config = AuditsConfig::default();
        assert!(config.handle(true, failed_audit()).is_err());
        assert!(config.handle(false, failed_audit()).is_ok());
    }
}
