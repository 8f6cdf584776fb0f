use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ExplorerConfig;
use crate::errors::FetchError;
use crate::models::profile::Profile;
use crate::models::repository::Repository;

/// Read-only client for the two GitHub endpoints the dashboard needs.
pub struct GitHubService {
    pub client: Client,
    pub api_base: String,
    pub per_page: u32,
}

impl GitHubService {
    pub fn new(config: &ExplorerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(GitHubService {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        })
    }

    fn profile_url(&self, login: &str) -> String {
        format!("{}/users/{}", self.api_base, urlencoding::encode(login))
    }

    pub async fn get_profile(&self, login: &str) -> Result<Profile, FetchError> {
        let url = self.profile_url(login);
        log::info!("Making request to {}...", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("Profile request for {} returned {}", login, response.status());
            return Err(FetchError::ProfileNotFound {
                login: login.to_string(),
                status: response.status(),
            });
        }

        let contents = response.text().await?;
        parse(&contents, &url)
    }

    /// Fetches the whole repository list behind `repos_url` in one call.
    pub async fn get_repositories(&self, profile: &Profile) -> Result<Vec<Repository>, FetchError> {
        log::info!("Making request to {}...", profile.repos_url);

        let response = self
            .client
            .get(&profile.repos_url)
            .query(&[("per_page", self.per_page)])
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!(
                "Repository request for {} returned {}",
                profile.login,
                response.status()
            );
            return Err(FetchError::RepositoriesNotFound {
                login: profile.login.clone(),
                status: response.status(),
            });
        }

        let contents = response.text().await?;
        parse(&contents, &profile.repos_url)
    }

    /// Profile first, then its repositories. Either stage failing fails the
    /// whole lookup.
    pub async fn get_profile_with_repositories(
        &self,
        login: &str,
    ) -> Result<(Profile, Vec<Repository>), FetchError> {
        let profile = self.get_profile(login).await?;
        let repositories = self.get_repositories(&profile).await?;
        log::info!(
            "Fetched {} with {} repositories",
            profile.login,
            repositories.len()
        );
        Ok((profile, repositories))
    }
}

fn parse<T: DeserializeOwned>(contents: &str, context: &str) -> Result<T, FetchError> {
    serde_json::from_str(contents).map_err(|source| FetchError::Deserialize {
        context: context.to_string(),
        source,
    })
}
