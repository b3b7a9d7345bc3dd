/// URL validation and job extraction
use crate::api::{Backend, ExtractionService};
use crate::error::ActionError;
use crate::job_data::JobRecord;
use crate::state::{FetchView, SaveStatus, Slot};
use url::Url;

pub const URL_REQUIRED: &str = "Please enter a job URL";
pub const URL_INVALID: &str = "Please enter a valid URL";
pub const EXTRACTION_FAILED: &str = "Failed to extract job information";
pub const EXTRACTION_NETWORK_ERROR: &str = "Network error. Could not reach the job extraction service.";

pub struct JobFetchController<'a> {
    pub(super) api: &'a dyn Backend,
    pub(super) view: &'a dyn Slot<FetchView>,
    pub(super) current_job: &'a dyn Slot<Option<JobRecord>>,
    pub(super) save_status: &'a dyn Slot<SaveStatus>,
}

/// Trimmed input if it parses as an absolute URL
pub fn validate_job_url(raw: &str) -> Result<&str, ActionError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ActionError::validation(URL_REQUIRED));
    }
    Url::parse(url).map_err(|_| ActionError::validation(URL_INVALID))?;
    Ok(url)
}

impl JobFetchController<'_> {
    pub async fn fetch_job_info(&self, raw_url: &str) -> Result<JobRecord, ActionError> {
        let url = match validate_job_url(raw_url) {
            Ok(url) => url,
            Err(err) => {
                self.view.set(FetchView::Error(err.to_string()));
                return Err(err);
            }
        };

        log::info!("Extracting job info from {}", url);
        self.view.set(FetchView::Loading);

        let outcome = self
            .api
            .extract(url)
            .await
            .map_err(|e| ActionError::from_api(e, EXTRACTION_FAILED, EXTRACTION_NETWORK_ERROR));

        // Every outcome replaces Loading
        match &outcome {
            Ok(job) => {
                self.current_job.set(Some(job.clone()));
                // A failed save belongs to the record being replaced
                if matches!(self.save_status.get(), SaveStatus::Failed(_)) {
                    self.save_status.set(SaveStatus::Ready);
                }
                self.view.set(FetchView::Result(job.clone()));
            }
            Err(err) => {
                log::warn!("Extraction failed: {}", err);
                self.view.set(FetchView::Error(err.to_string()));
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_job_url_trims() {
        assert_eq!(
            validate_job_url("  https://example.com/job/123 \n"),
            Ok("https://example.com/job/123")
        );
    }

    #[test]
    fn test_validate_job_url_empty() {
        for raw in ["", "   ", "\t\n"] {
            assert_eq!(validate_job_url(raw), Err(ActionError::Validation(URL_REQUIRED.to_string())));
        }
    }

    #[test]
    fn test_validate_job_url_invalid() {
        for raw in ["not a url", "example.com/job", "/jobs/1", "http://"] {
            assert_eq!(validate_job_url(raw), Err(ActionError::Validation(URL_INVALID.to_string())));
        }
    }
}
