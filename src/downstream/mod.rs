use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

pub mod catalog;
pub mod identity;

pub use catalog::CatalogClient;
pub use identity::IdentityClient;

/// Shared reqwest client with the bounded request timeout applied. A timeout
/// surfaces like any other transport failure, as `UpstreamUnreachable`.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::ConfigError(e.to_string()))
}

pub(crate) fn unreachable(err: reqwest::Error) -> Error {
    Error::UpstreamUnreachable(err.to_string())
}

/// Normalize a downstream response.
///
/// Non-2xx becomes `Upstream` carrying the status verbatim and the body's
/// `error` field, falling back to the canonical status reason. An empty body
/// is an empty object, not an error.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await.map_err(unreachable)?;

    let body: Value = if text.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(&text)
            .map_err(|e| Error::Internal(format!("malformed upstream body: {}", e)))?
    };

    if !status.is_success() {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("upstream error")
                    .to_string()
            });
        return Err(Error::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}

/// Pull a named envelope field (`{"user": ...}`, `{"assignment": ...}`) out
/// of a normalized body and decode it.
pub(crate) fn decode_envelope<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T> {
    let inner = body
        .get_mut(field)
        .map(Value::take)
        .unwrap_or(Value::Null);

    serde_json::from_value(inner)
        .map_err(|e| Error::Internal(format!("malformed upstream {} payload: {}", field, e)))
}

pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
