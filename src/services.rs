pub mod explorer_service;
pub mod github_service;
