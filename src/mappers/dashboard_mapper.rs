use serde::Serialize;

use crate::mappers::language_mapper::{self, LanguageSlice};
use crate::models::profile::Profile;
use crate::models::repository::Repository;
use crate::models::view_state::ViewState;
use crate::validators;

#[derive(Debug, Serialize)]
pub struct ProfileCardViewModel {
    pub login: String,
    pub display_name: String,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub joined: String,
}

#[derive(Debug, Serialize)]
pub struct RepositoryRowViewModel {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub homepage: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub updated: String,
}

#[derive(Debug, Serialize)]
pub struct PageLinkViewModel {
    pub number: usize,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub identifier: String,
    pub loading: bool,
    pub error: Option<String>,
    pub profile: Option<ProfileCardViewModel>,
    pub summary: Option<String>,
    pub languages: Vec<LanguageSlice>,
    pub chart_background: Option<String>,
    pub repositories: Vec<RepositoryRowViewModel>,
    pub repository_count: usize,
    pub pages: Vec<PageLinkViewModel>,
    pub current_page: usize,
    pub page_count: usize,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
}

pub fn to_profile_card(profile: &Profile) -> ProfileCardViewModel {
    ProfileCardViewModel {
        login: profile.login.clone(),
        display_name: profile.display_name().to_string(),
        avatar_url: profile.avatar_url.clone(),
        html_url: profile.html_url.clone(),
        bio: profile.bio.clone(),
        location: profile.location.clone(),
        public_repos: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
        joined: profile.created_at.format("%B %-d, %Y").to_string(),
    }
}

pub fn to_repository_row(repository: &Repository) -> RepositoryRowViewModel {
    RepositoryRowViewModel {
        name: repository.name.clone(),
        html_url: repository.html_url.clone(),
        description: repository.description.clone(),
        language: repository.language.clone(),
        // GitHub sends "" for repositories without a homepage.
        homepage: repository
            .homepage
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty() && validators::is_http_url(h))
            .map(str::to_string),
        stars: repository.star_count,
        forks: repository.fork_count,
        updated: repository.updated_at.format("%Y-%m-%d").to_string(),
    }
}

pub fn to_view_model(state: &ViewState) -> DashboardViewModel {
    let page_count = state.page_count();
    let languages = language_mapper::to_chart_slices(&state.languages);
    let chart_background = language_mapper::to_conic_gradient(&languages);

    DashboardViewModel {
        identifier: state.identifier.clone(),
        loading: state.loading,
        error: state.error.clone(),
        profile: state.profile.as_ref().map(to_profile_card),
        summary: state.summary.clone(),
        languages,
        chart_background,
        repositories: state.page().iter().map(to_repository_row).collect(),
        repository_count: state.repositories.len(),
        pages: (1..=page_count)
            .map(|number| PageLinkViewModel {
                number,
                current: number == state.current_page,
            })
            .collect(),
        current_page: state.current_page,
        page_count,
        previous_page: (state.current_page > 1 && page_count > 0).then(|| state.current_page - 1),
        next_page: (state.current_page < page_count).then(|| state.current_page + 1),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::view_state::Action;

    fn repository(id: u64, homepage: Option<&str>) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            html_url: format!("https://github.com/ada/repo-{id}"),
            description: None,
            star_count: id as u32,
            fork_count: 0,
            language: Some("Rust".into()),
            homepage: homepage.map(Into::into),
            updated_at: Utc.with_ymd_and_hms(2024, 3, id as u32, 0, 0, 0).unwrap(),
        }
    }

    fn loaded_state() -> ViewState {
        let state = ViewState::new(2).reduce(Action::SearchStarted {
            identifier: "ada".into(),
        });
        state.reduce(Action::SearchSucceeded {
            generation: 1,
            profile: Profile {
                login: "ada".into(),
                name: Some("Ada".into()),
                avatar_url: String::new(),
                html_url: "https://github.com/ada".into(),
                public_repos: 5,
                followers: 0,
                following: 0,
                bio: None,
                location: Some("London".into()),
                created_at: Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap(),
                repos_url: String::new(),
            },
            repositories: (1..=5).map(|id| repository(id, None)).collect(),
        })
    }

    #[test]
    fn empty_state_has_no_pages() {
        let vm = to_view_model(&ViewState::new(10));

        assert!(vm.profile.is_none());
        assert!(vm.repositories.is_empty());
        assert!(vm.pages.is_empty());
        assert_eq!(vm.page_count, 0);
        assert_eq!(vm.previous_page, None);
        assert_eq!(vm.next_page, None);
        assert_eq!(vm.chart_background, None);
    }

    #[test]
    fn first_page_links_forward_only() {
        let vm = to_view_model(&loaded_state());

        let card = vm.profile.as_ref().expect("profile card");
        assert_eq!(card.display_name, "Ada");
        assert_eq!(card.joined, "June 1, 2015");
        assert_eq!(vm.repository_count, 5);
        assert_eq!(vm.page_count, 3);
        assert_eq!(vm.repositories.len(), 2);
        assert_eq!(vm.repositories[0].name, "repo-5");
        assert_eq!(vm.repositories[0].updated, "2024-03-05");
        assert!(vm.pages[0].current);
        assert_eq!(vm.previous_page, None);
        assert_eq!(vm.next_page, Some(2));
    }

    #[test]
    fn last_page_links_backward_only() {
        let vm = to_view_model(&loaded_state().reduce(Action::PageChanged(3)));

        assert_eq!(vm.repositories.len(), 1);
        assert_eq!(vm.repositories[0].name, "repo-1");
        assert!(vm.pages[2].current);
        assert_eq!(vm.previous_page, Some(2));
        assert_eq!(vm.next_page, None);
    }

    #[test]
    fn blank_homepage_is_dropped() {
        assert_eq!(to_repository_row(&repository(1, Some(""))).homepage, None);
        assert_eq!(
            to_repository_row(&repository(1, Some("https://ada.dev"))).homepage.as_deref(),
            Some("https://ada.dev")
        );
    }

    #[test]
    fn non_http_homepage_is_dropped() {
        for homepage in ["javascript:alert(1)", " JavaScript:alert(1)", "data:text/html,hi", "ftp://ada.dev"] {
            assert_eq!(
                to_repository_row(&repository(1, Some(homepage))).homepage,
                None,
                "{homepage}"
            );
        }
        assert_eq!(
            to_repository_row(&repository(1, Some(" HTTP://ada.dev "))).homepage.as_deref(),
            Some("HTTP://ada.dev")
        );
    }
}
