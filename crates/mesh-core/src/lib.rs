//! # mesh-core
//!
//! Error taxonomy for the mesh data pipeline.
//!
//! This crate provides the failure kinds shared by every mesh component:
//! - [`MeshError`], the root of all domain failures, grouped by [`ErrorGroup`]
//! - [`AuditFailure`] with dialect-aware query rendering
//! - [`ApiError`] and the HTTP status classifier [`raise_for_status`]
//! - [`ConfigError`] and the location-aware [`raise_config_error`]
//! - [`ErrorLevel`], the ignore / warn / raise policy for tolerable failures
//! - [`MissingContextError`], which is intentionally not a [`MeshError`]

pub mod api;
pub mod audit;
pub mod config_error;
pub mod errors;
pub mod level;

pub use api::{ApiError, HttpResponse, raise_for_status};
pub use audit::{AuditFailure, RenderSql};
pub use config_error::{ConfigError, ConfigErrorKind, raise_config_error};
pub use errors::{
    CIRCUIT_BREAKER_MESSAGE, EngineAdapterError, ErrorGroup, MeshError, MissingContextError,
    PlanError, Result,
};
pub use level::{ErrorLevel, ParseErrorLevelError};
