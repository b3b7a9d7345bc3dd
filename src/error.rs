/// Error types for the job scrape client
use thiserror::Error;

/// Failure of a single backend call, as classified by the HTTP layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; `message` is whatever the body offered for this operation
    #[error("server rejected request with status {status}")]
    Server { status: u16, message: Option<String> },
    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Terminal outcome of a user action. The display text is what the UI shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Network(String),
    #[error("Please log in to continue")]
    LoginRequired,
}

impl ActionError {
    /// Classify a backend failure using the operation's own fallback texts
    pub fn from_api(err: ApiError, fallback: &str, network: &str) -> Self {
        match err {
            ApiError::Server { message, .. } => {
                ActionError::Server(message.unwrap_or_else(|| fallback.to_string()))
            }
            ApiError::Transport(_) => ActionError::Network(network.to_string()),
        }
    }

    pub fn validation(message: &str) -> Self {
        ActionError::Validation(message.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid API base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL '{0}' must be an http(s) URL with a path")]
    UnsupportedBaseUrl(String),
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_uses_body_message() {
        let err = ApiError::Server {
            status: 400,
            message: Some("You have already saved this job.".to_string()),
        };

        let action = ActionError::from_api(err, "Failed to save job", "Network error.");

        assert_eq!(action.to_string(), "You have already saved this job.");
    }

    #[test]
    fn test_server_error_falls_back() {
        let err = ApiError::Server { status: 500, message: None };

        let action = ActionError::from_api(err, "Failed to save job", "Network error.");

        assert_eq!(action, ActionError::Server("Failed to save job".to_string()));
    }

    #[test]
    fn test_transport_error_uses_network_text() {
        let err = ApiError::transport("dns lookup failed");

        let action = ActionError::from_api(err, "Failed to save job", "Network error. Could not save job.");

        assert_eq!(action, ActionError::Network("Network error. Could not save job.".to_string()));
    }
}
