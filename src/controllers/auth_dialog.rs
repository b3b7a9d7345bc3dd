/// Login/register dialog controller
use crate::api::{AuthService, Backend};
use crate::error::ActionError;
use crate::job_data::{AuthGrant, LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use crate::state::{AuthDialog, AuthField, AuthForm, AuthMode, Slot};

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const AUTH_NETWORK_ERROR: &str = "Network error.";

pub struct AuthDialogController<'a> {
    pub(super) api: &'a dyn Backend,
    pub(super) session: &'a SessionStore,
    pub(super) dialog: &'a dyn Slot<AuthDialog>,
    pub(super) signed_in_as: &'a dyn Slot<Option<String>>,
}

impl AuthDialogController<'_> {
    pub fn open(&self, mode: AuthMode) {
        self.dialog.set(AuthDialog::open(mode));
    }

    pub fn close(&self) {
        self.dialog.set(AuthDialog::Hidden);
    }

    /// Switch between login and register; the form starts over
    pub fn toggle_mode(&self) {
        if let Some(mode) = self.dialog.get().mode() {
            self.open(mode.toggled());
        }
    }

    pub fn edit(&self, field: AuthField, value: String) {
        if let AuthDialog::Open { mode, form, error } = self.dialog.get() {
            self.dialog.set(AuthDialog::Open {
                mode,
                form: form.with(field, value),
                error,
            });
        }
    }

    pub fn logout(&self) {
        log::info!("Signing out");
        self.session.clear_session();
        self.signed_in_as.set(None);
    }

    /// Submit the open form. On success the session is stored and the
    /// dialog hides; on failure it stays open with the error shown inline.
    pub async fn submit(&self) -> Result<(), ActionError> {
        let AuthDialog::Open { mode, form, .. } = self.dialog.get() else {
            return Ok(());
        };

        // Hide any previous error before validating
        self.dialog.set(AuthDialog::Open {
            mode,
            form: form.clone(),
            error: None,
        });

        // Missing credentials: nothing to submit
        let email = form.email.trim().to_string();
        if email.is_empty() || form.password.is_empty() {
            log::debug!("Auth submit ignored: missing credentials");
            return Ok(());
        }

        if mode == AuthMode::Register && form.password != form.confirmation {
            return Err(self.fail(mode, form, ActionError::validation(PASSWORDS_DO_NOT_MATCH)));
        }

        match self.request(mode, &email, &form).await {
            Ok(grant) => {
                log::info!("Signed in as {}", grant.email);
                self.session.set_session(&grant.email, grant.id.as_str());
                self.signed_in_as.set(Some(grant.email));
                self.close();
                Ok(())
            }
            Err(err) => Err(self.fail(mode, form, err)),
        }
    }

    async fn request(&self, mode: AuthMode, email: &str, form: &AuthForm) -> Result<AuthGrant, ActionError> {
        match mode {
            AuthMode::Login => {
                let request = LoginRequest {
                    email: email.to_string(),
                    password: form.password.clone(),
                };
                self.api
                    .login(&request)
                    .await
                    .map_err(|e| ActionError::from_api(e, LOGIN_FAILED, AUTH_NETWORK_ERROR))
            }
            AuthMode::Register => {
                let request = RegisterRequest {
                    email: email.to_string(),
                    password: form.password.clone(),
                    password2: form.confirmation.clone(),
                };
                self.api
                    .register(&request)
                    .await
                    .map_err(|e| ActionError::from_api(e, REGISTRATION_FAILED, AUTH_NETWORK_ERROR))
            }
        }
    }

    fn fail(&self, mode: AuthMode, form: AuthForm, err: ActionError) -> ActionError {
        log::warn!("Authentication failed: {}", err);
        self.dialog.set(AuthDialog::Open {
            mode,
            form,
            error: Some(err.to_string()),
        });
        err
    }
}
