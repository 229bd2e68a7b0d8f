//! Domain error taxonomy for mesh.
//!
//! [`MeshError`] is the root of every domain failure. Variants are grouped by
//! the subsystem that raises them; [`MeshError::group`] exposes that grouping
//! so a handler can catch "any planning error" without listing leaves.
//!
//! [`MissingContextError`] is deliberately not a variant of [`MeshError`] and
//! has no conversion into it: it signals misuse of the API (operating on a
//! context before one exists), not a domain failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiError;
use crate::audit::AuditFailure;
use crate::config_error::ConfigError;

/// Shorthand for results carrying a [`MeshError`].
pub type Result<T, E = MeshError> = std::result::Result<T, E>;

/// Message carried by [`MeshError::CircuitBreaker`].
pub const CIRCUIT_BREAKER_MESSAGE: &str = "Circuit breaker triggered.";

/// Every failure raised by the mesh domain.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid project or audit configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The planner refused to produce or apply a plan.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// An audit query returned failing rows.
    #[error(transparent)]
    Audit(#[from] AuditFailure),

    /// A remote API answered with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The engine adapter failed to run an operation.
    #[error(transparent)]
    EngineAdapter(#[from] EngineAdapterError),

    /// The local environment lacks a dependency required for the operation.
    #[error("{0}")]
    MissingDependency(String),

    /// A macro failed to evaluate while rendering a model.
    #[error("{0}")]
    MacroEval(String),

    /// A snapshot was written by an incompatible version.
    #[error("{0}")]
    SnapshotVersion(String),

    /// Notebook magic command failure.
    #[error("{0}")]
    Magic(String),

    /// Unit test harness failure.
    #[error("{0}")]
    Test(String),

    /// A notification target could not deliver a message.
    #[error("{0}")]
    NotificationTarget(String),

    /// The CI/CD bot failed to act on a pull request.
    #[error("{0}")]
    CicdBot(String),

    /// An adapter method was called while models were still being parsed.
    #[error("{0}")]
    ParsetimeAdapterCall(String),

    /// A circuit breaker aborted a long running evaluation.
    #[error("Circuit breaker triggered.")]
    CircuitBreaker,

    /// A Python model raised while being evaluated.
    #[error("{0}")]
    PythonModelEval(String),

    /// A domain failure that fits no narrower kind.
    #[error("{0}")]
    Other(String),
}

impl MeshError {
    /// Build a [`MeshError::CircuitBreaker`]. Its message is always
    /// [`CIRCUIT_BREAKER_MESSAGE`].
    #[must_use]
    pub const fn circuit_breaker() -> Self {
        Self::CircuitBreaker
    }

    #[must_use]
    pub const fn group(&self) -> ErrorGroup {
        match self {
            Self::Config(_) => ErrorGroup::Config,
            Self::Plan(_) => ErrorGroup::Plan,
            Self::Audit(_) => ErrorGroup::Audit,
            Self::Api(_) => ErrorGroup::Api,
            Self::EngineAdapter(_) => ErrorGroup::EngineAdapter,
            Self::MissingDependency(_)
            | Self::MacroEval(_)
            | Self::SnapshotVersion(_)
            | Self::Magic(_)
            | Self::Test(_)
            | Self::NotificationTarget(_)
            | Self::CicdBot(_)
            | Self::ParsetimeAdapterCall(_)
            | Self::CircuitBreaker
            | Self::PythonModelEval(_)
            | Self::Other(_) => ErrorGroup::Misc,
        }
    }

    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    #[must_use]
    pub const fn is_plan(&self) -> bool {
        matches!(self, Self::Plan(_))
    }

    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_audit(&self) -> Option<&AuditFailure> {
        match self {
            Self::Audit(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status code for API failures, `None` for every other group.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.as_api().map(ApiError::code)
    }
}

/// Coarse grouping of [`MeshError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorGroup {
    Config,
    Plan,
    Audit,
    Api,
    EngineAdapter,
    Misc,
}

impl ErrorGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Plan => "plan",
            Self::Audit => "audit",
            Self::Api => "api",
            Self::EngineAdapter => "engine_adapter",
            Self::Misc => "misc",
        }
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planner failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The planner failed for a reason with no dedicated kind.
    #[error("{0}")]
    General(String),

    /// The plan contains no changes to apply.
    #[error("{0}")]
    NoChanges(String),

    /// Some changes were left without a category (breaking / non-breaking).
    #[error("{0}")]
    Uncategorized(String),

    /// The plan conflicts with the current state of the target environment.
    #[error("{0}")]
    Conflicting(String),
}

/// Engine adapter failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineAdapterError {
    /// An engine operation failed.
    #[error("{0}")]
    General(String),

    /// The engine does not support the requested catalog operation.
    #[error("{0}")]
    UnsupportedCatalogOperation(String),
}

/// Raised when an operation needs an active context and none exists.
///
/// Not a [`MeshError`]: domain error handlers never see it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MissingContextError(pub String);
