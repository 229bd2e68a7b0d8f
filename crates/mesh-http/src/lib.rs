//! # mesh-http
//!
//! Bridges `reqwest` responses into the mesh API error taxonomy.
//!
//! Callers send requests themselves and pass the response through
//! [`check_response`], which leaves successful responses untouched and turns
//! 4xx/5xx statuses into [`mesh_core::ApiError`] values.

mod http;

pub use http::check_response;
