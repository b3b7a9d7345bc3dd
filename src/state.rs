/// View state owned by each panel, and the slot abstraction controllers write through
use crate::job_data::JobRecord;
use std::rc::Rc;
use yew::functional::UseStateHandle;

/// A single piece of UI state a controller can read and replace
pub trait Slot<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
}

impl<T: Clone + 'static> Slot<T> for UseStateHandle<T> {
    fn get(&self) -> T {
        (**self).clone()
    }

    fn set(&self, value: T) {
        UseStateHandle::set(self, value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    Confirmation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

impl AuthForm {
    pub fn with(mut self, field: AuthField, value: String) -> AuthForm {
        match field {
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::Confirmation => self.confirmation = value,
        }
        self
    }
}

/// Login/register dialog: hidden, or open in one mode with its form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthDialog {
    #[default]
    Hidden,
    Open {
        mode: AuthMode,
        form: AuthForm,
        error: Option<String>,
    },
}

impl AuthDialog {
    /// Freshly opened dialog: empty fields, no error
    pub fn open(mode: AuthMode) -> AuthDialog {
        AuthDialog::Open {
            mode,
            form: AuthForm::default(),
            error: None,
        }
    }

    pub fn mode(&self) -> Option<AuthMode> {
        match self {
            AuthDialog::Hidden => None,
            AuthDialog::Open { mode, .. } => Some(*mode),
        }
    }

    pub fn shows_confirmation(&self) -> bool {
        self.mode() == Some(AuthMode::Register)
    }
}

/// Extraction panel
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchView {
    #[default]
    Idle,
    Loading,
    Result(JobRecord),
    Error(String),
}

impl FetchView {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchView::Loading)
    }
}

/// Save control for the current record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Ready,
    Saving,
    /// Success feedback; the control stays disabled until it reverts
    Saved,
    Failed(String),
}

impl SaveStatus {
    pub fn is_disabled(&self) -> bool {
        matches!(self, SaveStatus::Saving | SaveStatus::Saved)
    }
}

/// Saved-jobs panel. `jobs` is `None` until the first successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedJobsPanel {
    pub jobs: Option<Vec<JobRecord>>,
    pub error: Option<String>,
}

impl SavedJobsPanel {
    pub fn loaded(jobs: Vec<JobRecord>) -> SavedJobsPanel {
        SavedJobsPanel {
            jobs: Some(jobs),
            error: None,
        }
    }

    pub fn with_error(mut self, error: String) -> SavedJobsPanel {
        self.error = Some(error);
        self
    }
}

/// Every slot the controllers write to
#[derive(Clone)]
pub struct ViewSlots {
    pub auth_dialog: Rc<dyn Slot<AuthDialog>>,
    pub signed_in_as: Rc<dyn Slot<Option<String>>>,
    pub fetch: Rc<dyn Slot<FetchView>>,
    pub current_job: Rc<dyn Slot<Option<JobRecord>>>,
    pub save_status: Rc<dyn Slot<SaveStatus>>,
    pub saved_jobs: Rc<dyn Slot<SavedJobsPanel>>,
    pub list_busy: Rc<dyn Slot<bool>>,
}
