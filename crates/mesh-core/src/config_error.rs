//! Configuration errors and the helper that raises them.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Which member of the configuration family an error belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    #[default]
    General,
    /// Invalid audit definition or audit settings.
    Audit,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::General => "config",
            Self::Audit => "audit config",
        })
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigError {
    kind: ConfigErrorKind,
    message: String,
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::General, message)
    }

    pub fn audit(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Audit, message)
    }

    /// Build an error whose message points at `location` when one is given.
    ///
    /// The message becomes `<message> at '<location>'` only when the location
    /// is present and non-empty.
    pub fn located<L>(
        kind: ConfigErrorKind,
        message: impl Into<String>,
        location: Option<L>,
    ) -> Self
    where
        L: AsRef<Path>,
    {
        let message = message.into();
        let location: Option<&Path> = location.as_ref().map(AsRef::as_ref);
        match location.filter(|path| !path.as_os_str().is_empty()) {
            Some(path) => Self::new(kind, format!("{message} at '{}'", path.display())),
            None => Self::new(kind, message),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ConfigErrorKind {
        self.kind
    }

    #[must_use]
    pub const fn is_audit(&self) -> bool {
        matches!(self.kind, ConfigErrorKind::Audit)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fail with a configuration error of the given kind.
///
/// Never returns `Ok`; callers write `return raise_config_error(...)`.
///
/// # Errors
///
/// Always returns a [`ConfigError`] built with [`ConfigError::located`].
pub fn raise_config_error<T, L>(
    message: impl Into<String>,
    location: Option<L>,
    kind: ConfigErrorKind,
) -> Result<T, ConfigError>
where
    L: AsRef<Path>,
{
    let err = ConfigError::located(kind, message, location);
    tracing::debug!(kind = %err.kind, message = %err.message, "raising configuration error");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn raise(location: Option<&str>) -> ConfigError {
        raise_config_error::<(), _>("Invalid cron expression", location, ConfigErrorKind::General)
            .unwrap_err()
    }

    #[test]
    fn absent_location_keeps_message() {
        assert_eq!(raise(None).to_string(), "Invalid cron expression");
    }

    #[test]
    fn empty_location_keeps_message() {
        assert_eq!(raise(Some("")).to_string(), "Invalid cron expression");
    }

    #[test]
    fn location_is_appended() {
        assert_eq!(
            raise(Some("models/orders.sql")).to_string(),
            "Invalid cron expression at 'models/orders.sql'"
        );
    }

    #[test]
    fn path_locations_are_accepted() {
        let path = PathBuf::from("/project/config.yaml");
        let err = raise_config_error::<(), _>("Bad gateway", Some(&path), ConfigErrorKind::General)
            .unwrap_err();
        assert_eq!(err.message(), "Bad gateway at '/project/config.yaml'");
    }

    #[test]
    fn requested_kind_is_kept() {
        let err = raise_config_error::<(), _>(
            "Audit 'unique' is missing a query",
            Some("audits/unique.sql"),
            ConfigErrorKind::Audit,
        )
        .unwrap_err();
        assert!(err.is_audit());
        assert_eq!(err.kind(), ConfigErrorKind::Audit);
        assert_eq!(
            err.to_string(),
            "Audit 'unique' is missing a query at 'audits/unique.sql'"
        );
    }

    #[test]
    fn default_kind_is_general() {
        assert_eq!(ConfigErrorKind::default(), ConfigErrorKind::General);
        assert!(!ConfigError::general("x").is_audit());
    }
}
