use serde::Serialize;

use crate::mappers::{language_mapper, repository_mapper, summary_mapper};
use crate::models::language_tally::LanguageTally;
use crate::models::profile::Profile;
use crate::models::repository::Repository;

/// Everything the dashboard renders at one instant.
///
/// Never mutated in place: every change goes through [`ViewState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub identifier: String,
    pub profile: Option<Profile>,
    pub repositories: Vec<Repository>,
    pub languages: Vec<LanguageTally>,
    pub current_page: usize,
    pub page_size: usize,
    pub summary: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    /// Bumped by every search; results from an older search are dropped.
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub enum Action {
    SearchStarted {
        identifier: String,
    },
    SearchSucceeded {
        generation: u64,
        profile: Profile,
        repositories: Vec<Repository>,
    },
    SearchFailed {
        generation: u64,
        message: String,
    },
    PageChanged(usize),
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        ViewState {
            identifier: String::new(),
            profile: None,
            repositories: Vec::new(),
            languages: Vec::new(),
            current_page: 1,
            page_size,
            summary: None,
            error: None,
            loading: false,
            generation: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        repository_mapper::page_count(self.repositories.len(), self.page_size)
    }

    /// Repositories on the current page.
    pub fn page(&self) -> &[Repository] {
        repository_mapper::paginate(&self.repositories, self.page_size, self.current_page)
    }

    pub fn is_valid_page(&self, page: usize) -> bool {
        crate::validators::is_page_in_range(page, self.page_count())
    }

    pub fn reduce(self, action: Action) -> ViewState {
        match action {
            Action::SearchStarted { identifier } => ViewState {
                identifier,
                loading: true,
                generation: self.generation + 1,
                ..ViewState::new(self.page_size)
            },
            Action::SearchSucceeded {
                generation,
                profile,
                repositories,
            } => {
                if generation != self.generation {
                    log::debug!(
                        "Dropping stale search result (generation {}, current {})",
                        generation,
                        self.generation
                    );
                    return self;
                }
                let repositories = repository_mapper::sort_by_updated_desc(&repositories);
                let languages = language_mapper::tally_languages(&repositories);
                let summary = summary_mapper::to_summary(&profile, &repositories);
                ViewState {
                    profile: Some(profile),
                    repositories,
                    languages,
                    summary: Some(summary),
                    current_page: 1,
                    error: None,
                    loading: false,
                    ..self
                }
            }
            Action::SearchFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    log::debug!(
                        "Dropping stale search failure (generation {}, current {})",
                        generation,
                        self.generation
                    );
                    return self;
                }
                ViewState {
                    identifier: self.identifier,
                    error: Some(message),
                    generation: self.generation,
                    ..ViewState::new(self.page_size)
                }
            }
            Action::PageChanged(page) => {
                if !self.is_valid_page(page) {
                    log::debug!(
                        "Ignoring page {} outside 1..={}",
                        page,
                        self.page_count()
                    );
                    return self;
                }
                ViewState {
                    current_page: page,
                    ..self
                }
            }
        }
    }
}
