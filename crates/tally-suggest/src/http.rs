//! Status handling for Generative Language API responses.

use serde::Deserialize;

use crate::error::SuggestError;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pass successful responses through; map 429 to
/// [`SuggestError::RateLimited`] and any other failure to
/// [`SuggestError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SuggestError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(SuggestError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(SuggestError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// The API's own error message when the body is the standard envelope,
/// otherwise the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.trim().to_string(), |envelope| envelope.error.message)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(status: u16, retry_after: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[test]
    fn retry_after_header_is_used() {
        assert_eq!(parse_retry_after(&response(429, Some("120"), "")), 120);
        assert_eq!(parse_retry_after(&response(429, Some("soon"), "")), 60);
    }

    #[tokio::test]
    async fn rate_limit_without_header_uses_default() {
        let err = check_response(response(429, None, "")).await.unwrap_err();
        assert!(matches!(
            err,
            SuggestError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn api_error_envelope_is_unwrapped() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = check_response(response(400, None, body)).await.unwrap_err();
        match err {
            SuggestError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn plain_error_body_is_kept() {
        let err = check_response(response(503, None, "overloaded\n"))
            .await
            .unwrap_err();
        assert!(matches!(err, SuggestError::Api { status: 503, ref message } if message == "overloaded"));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(response(200, None, "{}")).await.is_ok());
    }
}
