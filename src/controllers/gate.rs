/// Session gate for actions that need a signed-in user
use crate::error::ActionError;
use crate::session::SessionStore;
use crate::state::{AuthDialog, AuthMode, Slot};
use std::future::Future;

/// Run `action` with the session email, or open the login dialog and bail
/// out before anything else happens.
pub async fn with_auth_gate<T, F, Fut>(
    session: &SessionStore,
    dialog: &dyn Slot<AuthDialog>,
    action: F,
) -> Result<T, ActionError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ActionError>>,
{
    match session.email() {
        Some(email) => action(email).await,
        None => {
            log::info!("Login required, opening auth dialog");
            dialog.set(AuthDialog::open(AuthMode::Login));
            Err(ActionError::LoginRequired)
        }
    }
}
