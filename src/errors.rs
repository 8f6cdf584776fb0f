use reqwest::StatusCode;
use thiserror::Error;

/// Why a search could not produce a profile and its repositories.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("profile lookup for {login} failed with {status}")]
    ProfileNotFound { login: String, status: StatusCode },

    #[error("repository list for {login} failed with {status}")]
    RepositoriesNotFound { login: String, status: StatusCode },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The single line shown on the dashboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::ProfileNotFound { .. } => "User not found",
            FetchError::RepositoriesNotFound { .. } => "Repositories not found",
            FetchError::Http(_) => "Unable to reach GitHub",
            FetchError::Deserialize { .. } => "Unexpected response from GitHub",
        }
    }
}
