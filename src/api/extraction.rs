/// Job extraction endpoint: `/fetch/`
use super::{first_message, job_from_body, HttpClient};
use crate::error::ApiError;
use crate::job_data::{ExtractionRequest, JobRecord};
use async_trait::async_trait;
use serde_json::Value;

const EXTRACTION_ERROR_FIELDS: [&str; 1] = ["error"];

#[async_trait(?Send)]
pub trait ExtractionService {
    /// Ask the backend to scrape `url` and return the structured fields
    async fn extract(&self, url: &str) -> Result<JobRecord, ApiError>;
}

#[async_trait(?Send)]
impl ExtractionService for HttpClient {
    async fn extract(&self, url: &str) -> Result<JobRecord, ApiError> {
        let endpoint = self.endpoint(&["fetch"])?;
        log::debug!("POST {} for {}", endpoint, url);
        let response = self
            .execute(
                self.http.post(endpoint).json(&ExtractionRequest { url }),
                &EXTRACTION_ERROR_FIELDS,
            )
            .await?;

        let status = response.status().as_u16();
        let body: Value = response.json().await.map_err(|e| {
            log::error!("Failed to parse extraction body: {}", e);
            ApiError::transport(e)
        })?;

        parse_extraction(status, body)
    }
}

/// The backend reports model-parsing failures with a 2xx status and an
/// `error` field; those are treated the same as a rejected request.
fn parse_extraction(status: u16, body: Value) -> Result<JobRecord, ApiError> {
    let error = first_message(&body, &EXTRACTION_ERROR_FIELDS);
    let job = job_from_body(body)?;

    match error {
        Some(message) if job.is_blank() => Err(ApiError::Server {
            status,
            message: Some(message),
        }),
        _ => Ok(job),
    }
}
