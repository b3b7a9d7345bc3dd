/// Save, list and delete jobs under the signed-in account
use super::gate::with_auth_gate;
use crate::api::{Backend, JobsService};
use crate::error::ActionError;
use crate::job_data::{JobRecord, RecordId};
use crate::session::SessionStore;
use crate::state::{AuthDialog, SaveStatus, SavedJobsPanel, Slot};
use crate::timer::Delay;
use std::time::Duration;

pub const NO_JOB_TO_SAVE: &str = "No job data to save";
pub const SAVE_FAILED: &str = "Failed to save job";
pub const SAVE_NETWORK_ERROR: &str = "Network error. Could not save job.";
pub const LIST_FAILED: &str = "Failed to load saved jobs";
pub const LIST_NETWORK_ERROR: &str = "Network error. Could not load saved jobs.";
pub const DELETE_FAILED: &str = "Failed to delete job";
pub const DELETE_NETWORK_ERROR: &str = "Network error. Could not delete job.";

/// How long the "Saved" feedback stays up
pub const SAVED_FEEDBACK: Duration = Duration::from_secs(2);

pub struct SavedJobsController<'a> {
    pub(super) api: &'a dyn Backend,
    pub(super) session: &'a SessionStore,
    pub(super) delay: &'a dyn Delay,
    pub(super) auth_dialog: &'a dyn Slot<AuthDialog>,
    pub(super) current_job: &'a dyn Slot<Option<JobRecord>>,
    pub(super) save_status: &'a dyn Slot<SaveStatus>,
    pub(super) saved_jobs: &'a dyn Slot<SavedJobsPanel>,
    pub(super) list_busy: &'a dyn Slot<bool>,
}

impl SavedJobsController<'_> {
    /// Save the current record under the session email
    pub async fn save(&self) -> Result<(), ActionError> {
        with_auth_gate(self.session, self.auth_dialog, |email| self.save_as(email)).await
    }

    /// Load and show every job saved by the session user; returns the count
    pub async fn list(&self) -> Result<usize, ActionError> {
        with_auth_gate(self.session, self.auth_dialog, |email| async move {
            self.list_as(&email).await
        })
        .await
    }

    /// Delete one saved job, then reload the list
    pub async fn delete(&self, id: RecordId) -> Result<(), ActionError> {
        with_auth_gate(self.session, self.auth_dialog, |email| self.delete_as(email, id)).await
    }

    async fn save_as(&self, email: String) -> Result<(), ActionError> {
        let Some(job) = self.current_job.get() else {
            let err = ActionError::validation(NO_JOB_TO_SAVE);
            self.save_status.set(SaveStatus::Failed(err.to_string()));
            return Err(err);
        };

        self.save_status.set(SaveStatus::Saving);

        match self.api.save_job(&job, &email).await {
            Ok(saved_id) => {
                log::info!("Saved job {:?}", saved_id.as_ref().map(RecordId::as_str));
                self.save_status.set(SaveStatus::Saved);
                self.delay.wait(SAVED_FEEDBACK).await;
                self.save_status.set(SaveStatus::Ready);
                Ok(())
            }
            Err(e) => {
                let err = ActionError::from_api(e, SAVE_FAILED, SAVE_NETWORK_ERROR);
                log::warn!("Save failed: {}", err);
                self.save_status.set(SaveStatus::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    async fn list_as(&self, email: &str) -> Result<usize, ActionError> {
        self.list_busy.set(true);
        let outcome = self.api.list_jobs(email).await;
        self.list_busy.set(false);

        match outcome {
            Ok(jobs) => {
                let count = jobs.len();
                log::info!("Loaded {} saved jobs", count);
                self.saved_jobs.set(SavedJobsPanel::loaded(jobs));
                Ok(count)
            }
            Err(e) => {
                let err = ActionError::from_api(e, LIST_FAILED, LIST_NETWORK_ERROR);
                self.show_error(&err);
                Err(err)
            }
        }
    }

    async fn delete_as(&self, email: String, id: RecordId) -> Result<(), ActionError> {
        match self.api.delete_job(&id, &email).await {
            Ok(()) => {
                log::info!("Deleted job {}", id);
                self.list_as(&email).await.map(|_| ())
            }
            Err(e) => {
                let err = ActionError::from_api(e, DELETE_FAILED, DELETE_NETWORK_ERROR);
                self.show_error(&err);
                Err(err)
            }
        }
    }

    /// Keep whatever list is on screen and add the error above it
    fn show_error(&self, err: &ActionError) {
        log::warn!("Saved jobs: {}", err);
        self.saved_jobs.set(self.saved_jobs.get().with_error(err.to_string()));
    }
}
