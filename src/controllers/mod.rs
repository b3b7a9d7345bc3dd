//! Controllers and command dispatch.
//!
//! Every UI action is a [`Command`]. [`AppContext::dispatch`] runs the one
//! async operation that belongs to it against the backend, the session store
//! and the view slots held by the context.

pub mod auth_dialog;
pub mod gate;
pub mod job_fetch;
pub mod saved_jobs;

pub use auth_dialog::AuthDialogController;
pub use gate::with_auth_gate;
pub use job_fetch::JobFetchController;
pub use saved_jobs::SavedJobsController;

use crate::api::Backend;
use crate::error::ActionError;
use crate::job_data::RecordId;
use crate::session::SessionStore;
use crate::state::{AuthField, AuthMode, ViewSlots};
use crate::timer::Delay;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenAuth(AuthMode),
    CloseAuth,
    ToggleAuthMode,
    EditAuth(AuthField, String),
    SubmitAuth,
    Logout,
    FetchJob(String),
    SaveJob,
    ListJobs,
    DeleteJob(RecordId),
}

impl Command {
    /// Name for logs; payloads may hold credentials
    pub fn name(&self) -> &'static str {
        match self {
            Command::OpenAuth(_) => "open-auth",
            Command::CloseAuth => "close-auth",
            Command::ToggleAuthMode => "toggle-auth-mode",
            Command::EditAuth(..) => "edit-auth",
            Command::SubmitAuth => "submit-auth",
            Command::Logout => "logout",
            Command::FetchJob(_) => "fetch-job",
            Command::SaveJob => "save-job",
            Command::ListJobs => "list-jobs",
            Command::DeleteJob(_) => "delete-job",
        }
    }
}

/// Explicit application state: backend, persisted session and view slots
#[derive(Clone)]
pub struct AppContext {
    pub api: Rc<dyn Backend>,
    pub session: SessionStore,
    pub delay: Rc<dyn Delay>,
    pub views: ViewSlots,
}

impl AppContext {
    pub fn auth_dialog(&self) -> AuthDialogController<'_> {
        AuthDialogController {
            api: self.api.as_ref(),
            session: &self.session,
            dialog: self.views.auth_dialog.as_ref(),
            signed_in_as: self.views.signed_in_as.as_ref(),
        }
    }

    pub fn job_fetch(&self) -> JobFetchController<'_> {
        JobFetchController {
            api: self.api.as_ref(),
            view: self.views.fetch.as_ref(),
            current_job: self.views.current_job.as_ref(),
            save_status: self.views.save_status.as_ref(),
        }
    }

    pub fn saved_jobs(&self) -> SavedJobsController<'_> {
        SavedJobsController {
            api: self.api.as_ref(),
            session: &self.session,
            delay: self.delay.as_ref(),
            auth_dialog: self.views.auth_dialog.as_ref(),
            current_job: self.views.current_job.as_ref(),
            save_status: self.views.save_status.as_ref(),
            saved_jobs: self.views.saved_jobs.as_ref(),
            list_busy: self.views.list_busy.as_ref(),
        }
    }

    pub async fn dispatch(&self, command: Command) -> Result<(), ActionError> {
        log::debug!("Dispatching {}", command.name());
        match command {
            Command::OpenAuth(mode) => {
                self.auth_dialog().open(mode);
                Ok(())
            }
            Command::CloseAuth => {
                self.auth_dialog().close();
                Ok(())
            }
            Command::ToggleAuthMode => {
                self.auth_dialog().toggle_mode();
                Ok(())
            }
            Command::EditAuth(field, value) => {
                self.auth_dialog().edit(field, value);
                Ok(())
            }
            Command::SubmitAuth => self.auth_dialog().submit().await,
            Command::Logout => {
                self.auth_dialog().logout();
                Ok(())
            }
            Command::FetchJob(raw_url) => self.job_fetch().fetch_job_info(&raw_url).await.map(|_| ()),
            Command::SaveJob => self.saved_jobs().save().await,
            Command::ListJobs => self.saved_jobs().list().await.map(|_| ()),
            Command::DeleteJob(id) => self.saved_jobs().delete(id).await,
        }
    }
}
