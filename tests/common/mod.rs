#![allow(dead_code)]

use profile_explorer::config::ExplorerConfig;
use profile_explorer::services::explorer_service::ProfileExplorer;
use profile_explorer::services::github_service::GitHubService;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn config(server: &MockServer) -> ExplorerConfig {
    ExplorerConfig {
        api_base: server.uri(),
        timeout_secs: 5,
        ..ExplorerConfig::default()
    }
}

pub fn github_service(server: &MockServer) -> GitHubService {
    GitHubService::new(&config(server)).expect("client construction should not fail")
}

pub fn explorer(server: &MockServer) -> ProfileExplorer {
    ProfileExplorer::from_config(&config(server)).expect("client construction should not fail")
}

pub fn profile_json(server: &MockServer, login: &str) -> Value {
    json!({
        "login": login,
        "id": 1,
        "name": null,
        "avatar_url": format!("https://avatars.example.com/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "repos_url": format!("{}/users/{login}/repos", server.uri()),
        "bio": null,
        "location": "London",
        "public_repos": 2,
        "followers": 10,
        "following": 1,
        "created_at": "2015-06-01T00:00:00Z"
    })
}

pub fn repositories_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "A",
            "html_url": "https://github.com/ada/A",
            "description": null,
            "stargazers_count": 5,
            "forks_count": 0,
            "language": "Rust",
            "homepage": null,
            "updated_at": "2023-01-01T00:00:00Z"
        },
        {
            "id": 2,
            "name": "B",
            "html_url": "https://github.com/ada/B",
            "description": "The newer one",
            "stargazers_count": 20,
            "forks_count": 2,
            "language": "Python",
            "homepage": "",
            "updated_at": "2024-01-01T00:00:00Z"
        }
    ])
}

/// Mounts the profile and repository endpoints for `login`.
pub async fn mount_user(server: &MockServer, login: &str, repositories: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{login}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(server, login)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{login}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repositories))
        .mount(server)
        .await;
}
