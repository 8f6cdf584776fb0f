use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /users/{login}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub star_count: u32,
    #[serde(rename = "forks_count")]
    pub fork_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
}
