//! Classification of `reqwest` responses.

use mesh_core::{ApiError, MeshError};

/// Check a response against the API error taxonomy.
///
/// Returns the response unchanged when its status is not an error. Otherwise
/// consumes the body (empty if it cannot be read) and returns the matching
/// [`ApiError`]:
/// - **404** → [`ApiError::NotFound`]
/// - **other 4xx** → [`ApiError::Client`]
/// - **5xx** → [`ApiError::Server`]
///
/// # Errors
///
/// Returns [`MeshError::Api`] for 4xx and 5xx statuses.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, MeshError> {
    let status = resp.status().as_u16();
    let Some(err) = ApiError::from_status(status, String::new) else {
        return Ok(resp);
    };

    tracing::debug!(status, url = %resp.url(), "API request failed");
    let body = resp.text().await.unwrap_or_default();
    Err(MeshError::Api(err.with_message(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        let resp = check_response(resp).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn check_response_redirect_is_passed_through() {
        let resp = mock_response(304, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, "environment 'dev' not found");
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert!(matches!(
            err,
            MeshError::Api(ApiError::NotFound { ref message }) if message == "environment 'dev' not found"
        ));
    }

    #[tokio::test]
    async fn check_response_client_error() {
        let resp = mock_response(409, "plan already applied");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            MeshError::Api(ApiError::Client { code: 409, .. })
        ));
        assert_eq!(err.to_string(), "plan already applied");
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "internal error");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            MeshError::Api(ApiError::Server { code: 500, .. })
        ));
    }
}
