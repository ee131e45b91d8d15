//! Shared HTTP plumbing for the backend adapters.

use interview_application::GatewayError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("pressure-interview/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, GatewayError> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| GatewayError::Configuration(format!("Failed to create HTTP client: {}", e)))
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Connection(format!("Request timed out: {}", e))
    } else {
        GatewayError::Connection(e.to_string())
    }
}

/// POST `body` as JSON and decode a JSON reply.
///
/// Non-2xx replies become [`GatewayError::Transport`] with the response body
/// as message.
pub(crate) async fn post_json<B, R>(
    request: reqwest::RequestBuilder,
    body: &B,
) -> Result<R, GatewayError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request.json(body).send().await.map_err(map_send_error)?;

    let status = response.status();
    let text = response.text().await.map_err(map_send_error)?;
    debug!("Backend replied {} ({} bytes)", status.as_u16(), text.len());

    if !status.is_success() {
        return Err(GatewayError::Transport {
            status: status.as_u16(),
            message: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Join a base URL and an absolute path without doubling the slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
