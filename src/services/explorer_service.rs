use tokio::sync::Mutex;

use crate::config::ExplorerConfig;
use crate::errors::FetchError;
use crate::models::view_state::{Action, ViewState};
use crate::services::github_service::GitHubService;
use crate::validators;

/// Owns the dashboard's [`ViewState`] and drives it from searches and page
/// changes.
pub struct ProfileExplorer {
    pub github_service: GitHubService,
    state: Mutex<ViewState>,
}

impl ProfileExplorer {
    pub fn new(github_service: GitHubService, page_size: usize) -> Self {
        ProfileExplorer {
            github_service,
            state: Mutex::new(ViewState::new(page_size)),
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self, FetchError> {
        Ok(ProfileExplorer::new(
            GitHubService::new(config)?,
            config.page_size,
        ))
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    async fn dispatch(&self, action: Action) -> ViewState {
        let mut state = self.state.lock().await;
        *state = state.clone().reduce(action);
        state.clone()
    }

    /// Looks up `identifier` and replaces the dashboard with the result.
    ///
    /// A blank identifier does nothing. The lock is released while the
    /// requests are in flight; if another search starts meanwhile, this
    /// one's result is discarded.
    #[tracing::instrument(skip(self))]
    pub async fn trigger_search(&self, identifier: &str) -> ViewState {
        let Some(identifier) = validators::normalize_identifier(identifier) else {
            log::debug!("Ignoring blank search");
            return self.snapshot().await;
        };

        let generation = self
            .dispatch(Action::SearchStarted {
                identifier: identifier.to_string(),
            })
            .await
            .generation;

        let action = match self
            .github_service
            .get_profile_with_repositories(identifier)
            .await
        {
            Ok((profile, repositories)) => Action::SearchSucceeded {
                generation,
                profile,
                repositories,
            },
            Err(e) => {
                log::warn!("Search for {} failed: {}", identifier, e);
                Action::SearchFailed {
                    generation,
                    message: e.user_message().to_string(),
                }
            }
        };

        self.dispatch(action).await
    }

    pub async fn change_page(&self, page: usize) -> ViewState {
        self.dispatch(Action::PageChanged(page)).await
    }

    /// Like [`ProfileExplorer::change_page`], but rejects a page outside
    /// `1..=page_count` with the page count instead of ignoring it. The
    /// check and the change happen under one lock.
    pub async fn try_change_page(&self, page: usize) -> Result<ViewState, usize> {
        let mut state = self.state.lock().await;
        if !state.is_valid_page(page) {
            return Err(state.page_count());
        }
        *state = state.clone().reduce(Action::PageChanged(page));
        Ok(state.clone())
    }
}
