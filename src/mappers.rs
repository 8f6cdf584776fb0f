pub mod dashboard_mapper;
pub mod language_mapper;
pub mod repository_mapper;
pub mod summary_mapper;
