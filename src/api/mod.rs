//! HTTP clients for the job scrape backend.
//!
//! Each service is a trait with one method per backend operation so that
//! controllers can be driven by a scripted backend in tests. [`HttpClient`]
//! implements all of them on top of `reqwest`, which uses `fetch` on wasm32.

pub mod auth;
pub mod extraction;
pub mod jobs;

pub use auth::AuthService;
pub use extraction::ExtractionService;
pub use jobs::JobsService;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::job_data::JobRecord;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Everything the controllers need from the backend
pub trait Backend: AuthService + ExtractionService + JobsService {}

impl<T: AuthService + ExtractionService + JobsService + ?Sized> Backend for T {}

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Self {
        HttpClient {
            http: reqwest::Client::new(),
            base: config.api_base_url.clone(),
        }
    }

    /// `<base>/<segments...>/` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("cannot build endpoint from {}", self.base)))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    fn endpoint_for_user(&self, segments: &[&str], email: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    /// Send a request; non-2xx responses become [`ApiError::Server`] with the
    /// first message found under `error_fields`
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        error_fields: &[&str],
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ApiError::transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let message = first_message(&body, error_fields);
        log::warn!("Backend returned {}: {:?}", status, message);
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse response body: {}", e);
        ApiError::transport(e)
    })
}

/// Decode one job record. Only JSON objects qualify; serde would otherwise
/// map an array onto the fields by position.
fn job_from_body(body: Value) -> Result<JobRecord, ApiError> {
    if !body.is_object() {
        log::error!("Expected a job object, got: {}", body);
        return Err(ApiError::transport("job record is not a JSON object"));
    }
    serde_json::from_value(body).map_err(ApiError::transport)
}

/// First non-empty message among `fields`, in order.
///
/// Field errors arrive either as a string or as a list of strings; lists are
/// joined with commas.
pub fn first_message(body: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| body.get(*field))
        .find_map(message_text)
}

fn message_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        _ => return None,
    };

    if text.is_empty() { None } else { Some(text) }
}
