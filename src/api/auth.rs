/// Account endpoints: `/login/` and `/register/`
use super::{decode, HttpClient};
use crate::error::ApiError;
use crate::job_data::{AuthGrant, LoginRequest, RegisterRequest};
use async_trait::async_trait;

/// Error body fields checked on a failed registration, first match wins
pub const REGISTER_ERROR_FIELDS: [&str; 4] = ["email", "password", "password2", "message"];
/// Error body fields checked on a failed login, first match wins
pub const LOGIN_ERROR_FIELDS: [&str; 2] = ["detail", "message"];

#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError>;
}

#[async_trait(?Send)]
impl AuthService for HttpClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ApiError> {
        let url = self.endpoint(&["login"])?;
        log::debug!("POST {}", url);
        let response = self
            .execute(self.http.post(url).json(request), &LOGIN_ERROR_FIELDS)
            .await?;
        decode(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        let url = self.endpoint(&["register"])?;
        log::debug!("POST {}", url);
        let response = self
            .execute(self.http.post(url).json(request), &REGISTER_ERROR_FIELDS)
            .await?;
        decode(response).await
    }
}
