/// Saved-job collection: `/jobs/` and `/jobs/{id}/`, scoped by owner email
use super::{decode, job_from_body, HttpClient};
use crate::error::ApiError;
use crate::job_data::{JobRecord, RecordId, SaveJobRequest};
use async_trait::async_trait;
use serde_json::Value;

const SAVE_ERROR_FIELDS: [&str; 1] = ["error"];

#[async_trait(?Send)]
pub trait JobsService {
    /// Store `job` for `email`. Returns the new record's id when the backend echoes one.
    async fn save_job(&self, job: &JobRecord, email: &str) -> Result<Option<RecordId>, ApiError>;
    async fn list_jobs(&self, email: &str) -> Result<Vec<JobRecord>, ApiError>;
    async fn delete_job(&self, id: &RecordId, email: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl JobsService for HttpClient {
    async fn save_job(&self, job: &JobRecord, email: &str) -> Result<Option<RecordId>, ApiError> {
        let url = self.endpoint(&["jobs"])?;
        log::debug!("POST {}", url);
        let response = self
            .execute(
                self.http.post(url).json(&SaveJobRequest::new(job, email)),
                &SAVE_ERROR_FIELDS,
            )
            .await?;

        // The job is stored once the status is 2xx; the body is informational
        match response.json::<Value>().await {
            Ok(body) => Ok(saved_record_id(&body)),
            Err(e) => {
                log::warn!("Saved job but could not read the response body: {}", e);
                Ok(None)
            }
        }
    }

    async fn list_jobs(&self, email: &str) -> Result<Vec<JobRecord>, ApiError> {
        let url = self.endpoint_for_user(&["jobs"], email)?;
        log::debug!("GET {}", url);
        let response = self.execute(self.http.get(url), &[]).await?;
        parse_job_list(decode(response).await?)
    }

    async fn delete_job(&self, id: &RecordId, email: &str) -> Result<(), ApiError> {
        let url = self.endpoint_for_user(&["jobs", id.as_str()], email)?;
        log::debug!("DELETE {}", url);
        self.execute(self.http.delete(url), &[]).await?;
        Ok(())
    }
}

fn saved_record_id(body: &Value) -> Option<RecordId> {
    body.get("id")
        .and_then(|id| serde_json::from_value(id.clone()).ok())
}

fn parse_job_list(items: Vec<Value>) -> Result<Vec<JobRecord>, ApiError> {
    items.into_iter().map(job_from_body).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_saved_record_id() {
        assert_eq!(saved_record_id(&json!({"id": 14, "title": "Engineer"})), Some(RecordId::new("14")));
        assert_eq!(saved_record_id(&json!({"title": "Engineer"})), None);
        assert_eq!(saved_record_id(&json!({"id": {"nested": true}})), None);
        assert_eq!(saved_record_id(&json!("created")), None);
    }

    #[test]
    fn test_parse_job_list() {
        let jobs = parse_job_list(vec![
            json!({"id": 1, "title": "Engineer", "company": "Acme"}),
            json!({"id": 2, "title": "Designer", "pay": 85000}),
        ])
        .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, Some(RecordId::new("1")));
        assert_eq!(jobs[1].pay.as_deref(), Some("85000"));
    }

    #[test]
    fn test_parse_job_list_rejects_non_object_items() {
        let result = parse_job_list(vec![json!({"id": 1, "title": "Engineer"}), json!([2, "Designer"])]);

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
