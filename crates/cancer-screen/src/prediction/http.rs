//! Shared response handling for prediction service calls.
//!
//! Every reqwest outcome funnels through here so the client never leaks
//! anything but an [`ApiError`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::{ApiError, GENERIC_SERVER_MESSAGE};

/// Pass 2xx responses through; turn anything else into
/// [`ApiError::Server`] with a message pulled from the body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = server_message(&body);
    warn!(status = status.as_u16(), %message, "prediction service reported failure");
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
        body,
    })
}

/// `error` field, else `message` field, else the generic text.
pub(crate) fn server_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return GENERIC_SERVER_MESSAGE.to_string();
    };
    ["error", "message"]
        .iter()
        .find_map(|key| match value.get(key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string())
}

/// Requests that never left are client failures; everything else means the
/// backend did not answer.
pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        return ApiError::client(err.to_string());
    }
    warn!(error = %err, "prediction service unreachable");
    ApiError::Unreachable
}

pub(crate) async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes)
        .map_err(|err| ApiError::client(format!("invalid response payload: {err}")))
}

/// File name from a `Content-Disposition: attachment; filename=...` header.
pub(crate) fn attachment_filename(resp: &reqwest::Response) -> Option<String> {
    let disposition = resp
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)?
        .to_str()
        .ok()?;
    disposition
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .find(|name| !name.is_empty())
}
