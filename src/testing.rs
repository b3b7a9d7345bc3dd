//! Test doubles: recording slots, a scripted backend and an instant delay.

use crate::api::{AuthService, ExtractionService, JobsService};
use crate::controllers::AppContext;
use crate::error::ApiError;
use crate::job_data::{AuthGrant, JobRecord, LoginRequest, RecordId, RegisterRequest};
use crate::session::{MemoryStore, SessionStore};
use crate::state::{AuthDialog, FetchView, SaveStatus, SavedJobsPanel, Slot, ViewSlots};
use crate::timer::Delay;
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Slot that remembers every value written to it
pub struct RecordingSlot<T> {
    current: RefCell<T>,
    history: RefCell<Vec<T>>,
}

impl<T: Clone> RecordingSlot<T> {
    pub fn new(initial: T) -> Self {
        RecordingSlot {
            current: RefCell::new(initial),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<T> {
        self.history.borrow().clone()
    }
}

impl<T: Clone> Slot<T> for RecordingSlot<T> {
    fn get(&self) -> T {
        self.current.borrow().clone()
    }

    fn set(&self, value: T) {
        self.history.borrow_mut().push(value.clone());
        *self.current.borrow_mut() = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(LoginRequest),
    Register(RegisterRequest),
    Extract(String),
    Save { title: Option<String>, email: String },
    List(String),
    Delete { id: RecordId, email: String },
}

/// Backend with one scripted reply per operation and a call log
pub struct FakeBackend {
    pub auth: RefCell<Result<AuthGrant, ApiError>>,
    pub extract: RefCell<Result<JobRecord, ApiError>>,
    pub save: RefCell<Result<Option<RecordId>, ApiError>>,
    pub list: RefCell<Result<Vec<JobRecord>, ApiError>>,
    pub delete: RefCell<Result<(), ApiError>>,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        FakeBackend {
            auth: RefCell::new(Ok(AuthGrant {
                email: "me@example.com".to_string(),
                id: RecordId::new("7"),
            })),
            extract: RefCell::new(Ok(JobRecord::default())),
            save: RefCell::new(Ok(Some(RecordId::new("1")))),
            list: RefCell::new(Ok(Vec::new())),
            delete: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl AuthService for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ApiError> {
        self.record(Call::Login(request.clone()));
        self.auth.borrow().clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        self.record(Call::Register(request.clone()));
        self.auth.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ExtractionService for FakeBackend {
    async fn extract(&self, url: &str) -> Result<JobRecord, ApiError> {
        self.record(Call::Extract(url.to_string()));
        self.extract.borrow().clone()
    }
}

#[async_trait(?Send)]
impl JobsService for FakeBackend {
    async fn save_job(&self, job: &JobRecord, email: &str) -> Result<Option<RecordId>, ApiError> {
        self.record(Call::Save {
            title: job.title.clone(),
            email: email.to_string(),
        });
        self.save.borrow().clone()
    }

    async fn list_jobs(&self, email: &str) -> Result<Vec<JobRecord>, ApiError> {
        self.record(Call::List(email.to_string()));
        self.list.borrow().clone()
    }

    async fn delete_job(&self, id: &RecordId, email: &str) -> Result<(), ApiError> {
        self.record(Call::Delete {
            id: id.clone(),
            email: email.to_string(),
        });
        self.delete.borrow().clone()
    }
}

/// Resolves at once and records what was asked for
#[derive(Default)]
pub struct InstantDelay {
    pub waits: RefCell<Vec<Duration>>,
}

#[async_trait(?Send)]
impl Delay for InstantDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

/// Context wired to test doubles, with handles to inspect each one
pub struct Harness {
    pub ctx: AppContext,
    pub backend: Rc<FakeBackend>,
    pub store: MemoryStore,
    pub delay: Rc<InstantDelay>,
    pub auth_dialog: Rc<RecordingSlot<AuthDialog>>,
    pub signed_in_as: Rc<RecordingSlot<Option<String>>>,
    pub fetch: Rc<RecordingSlot<FetchView>>,
    pub current_job: Rc<RecordingSlot<Option<JobRecord>>>,
    pub save_status: Rc<RecordingSlot<SaveStatus>>,
    pub saved_jobs: Rc<RecordingSlot<SavedJobsPanel>>,
    pub list_busy: Rc<RecordingSlot<bool>>,
}

impl Harness {
    pub fn new() -> Harness {
        let backend = Rc::new(FakeBackend::default());
        let store = MemoryStore::default();
        let delay = Rc::new(InstantDelay::default());
        let auth_dialog = Rc::new(RecordingSlot::new(AuthDialog::Hidden));
        let signed_in_as = Rc::new(RecordingSlot::new(None));
        let fetch = Rc::new(RecordingSlot::new(FetchView::Idle));
        let current_job = Rc::new(RecordingSlot::new(None));
        let save_status = Rc::new(RecordingSlot::new(SaveStatus::Ready));
        let saved_jobs = Rc::new(RecordingSlot::new(SavedJobsPanel::default()));
        let list_busy = Rc::new(RecordingSlot::new(false));

        let ctx = AppContext {
            api: backend.clone(),
            session: SessionStore::new(Rc::new(store.clone())),
            delay: delay.clone(),
            views: ViewSlots {
                auth_dialog: auth_dialog.clone(),
                signed_in_as: signed_in_as.clone(),
                fetch: fetch.clone(),
                current_job: current_job.clone(),
                save_status: save_status.clone(),
                saved_jobs: saved_jobs.clone(),
                list_busy: list_busy.clone(),
            },
        };

        Harness {
            ctx,
            backend,
            store,
            delay,
            auth_dialog,
            signed_in_as,
            fetch,
            current_job,
            save_status,
            saved_jobs,
            list_busy,
        }
    }

    /// Same harness with a session already stored
    pub fn signed_in() -> Harness {
        let harness = Harness::new();
        harness.ctx.session.set_session("me@example.com", "7");
        harness
    }
}

pub fn job(title: &str) -> JobRecord {
    JobRecord {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

pub fn saved_job(id: &str, title: &str) -> JobRecord {
    JobRecord {
        id: Some(RecordId::new(id)),
        ..job(title)
    }
}
