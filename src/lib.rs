use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use handlebars::Handlebars;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controllers;
pub mod errors;
pub mod mappers;
pub mod models;
pub mod services;
pub mod validators;

use controllers::{api, index, search};
use services::explorer_service::ProfileExplorer;


pub struct AppState {
    pub registry: Handlebars<'static>,
    pub explorer: ProfileExplorer,
}

pub fn register_templates() -> Result<Handlebars<'static>, handlebars::TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("index", include_str!("templates/index.hbs"))?;
    handlebars.register_template_string("errors/500", include_str!("templates/errors/500.hbs"))?;
    Ok(handlebars)
}

/// Routes for the dashboard, its JSON API, and static assets under `static_dir`.
pub fn build_app(app_state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/search", get(search::get_search))
        .route("/page", get(search::get_page))
        .route("/api/state", get(api::get_state))
        .route("/api/search", post(api::post_search))
        .route("/api/page", post(api::post_page))
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
