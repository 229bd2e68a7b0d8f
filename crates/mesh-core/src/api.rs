//! API error kinds and the HTTP status classifier.
//!
//! Status codes are partitioned as follows:
//! - **404** → [`ApiError::NotFound`] (checked first, carved out of 4xx)
//! - **400..=499** → [`ApiError::Client`]
//! - **500..=599** → [`ApiError::Server`]
//! - anything else → no error

use std::ops::RangeInclusive;

use thiserror::Error;

/// Status code fixed on [`ApiError::NotFound`].
pub const NOT_FOUND: u16 = 404;

const CLIENT_ERRORS: RangeInclusive<u16> = 400..=499;
const SERVER_ERRORS: RangeInclusive<u16> = 500..=599;

/// A remote API answered with an error status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 4xx other than 404.
    #[error("{message}")]
    Client { message: String, code: u16 },

    /// 5xx.
    #[error("{message}")]
    Server { message: String, code: u16 },

    /// 404. A client error whose code cannot be chosen by the caller.
    #[error("{message}")]
    NotFound { message: String },
}

impl ApiError {
    pub fn client(message: impl Into<String>, code: u16) -> Self {
        Self::Client {
            message: message.into(),
            code,
        }
    }

    pub fn server(message: impl Into<String>, code: u16) -> Self {
        Self::Server {
            message: message.into(),
            code,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Replace the message, keeping the kind and status code.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::Client { code, .. } => Self::client(message, code),
            Self::Server { code, .. } => Self::server(message, code),
            Self::NotFound { .. } => Self::not_found(message),
        }
    }

    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Client { code, .. } | Self::Server { code, .. } => *code,
            Self::NotFound { .. } => NOT_FOUND,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Client { message, .. }
            | Self::Server { message, .. }
            | Self::NotFound { message } => message,
        }
    }

    /// True for every client error, including [`ApiError::NotFound`].
    #[must_use]
    pub const fn is_client(&self) -> bool {
        matches!(self, Self::Client { .. } | Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Classify a status code. Returns `None` for statuses outside 400..=599.
    ///
    /// The body is only materialized when the status is an error.
    pub fn from_status<F>(status: u16, body: F) -> Option<Self>
    where
        F: FnOnce() -> String,
    {
        if status == NOT_FOUND {
            return Some(Self::not_found(body()));
        }
        if CLIENT_ERRORS.contains(&status) {
            return Some(Self::client(body(), status));
        }
        if SERVER_ERRORS.contains(&status) {
            return Some(Self::server(body(), status));
        }
        None
    }
}

/// Minimal view of an HTTP response needed to classify it.
pub trait HttpResponse {
    /// Numeric status code.
    fn status_code(&self) -> u16;

    /// Response body as text.
    fn text(&self) -> String;
}

impl<B> HttpResponse for http::Response<B>
where
    B: AsRef<[u8]>,
{
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(self.body().as_ref()).into_owned()
    }
}

/// Return the [`ApiError`] matching the response status, or `Ok(())` when the
/// status is not an error.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for 404, [`ApiError::Client`] for other
/// 4xx statuses and [`ApiError::Server`] for 5xx statuses. The response body
/// becomes the error message.
pub fn raise_for_status<R>(response: &R) -> Result<(), ApiError>
where
    R: HttpResponse + ?Sized,
{
    match ApiError::from_status(response.status_code(), || response.text()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
