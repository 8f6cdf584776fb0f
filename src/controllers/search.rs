use std::sync::Arc;
use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::AppState;


#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    user: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    number: usize,
}

#[axum_macros::debug_handler]
pub async fn get_search(query: Query<SearchQuery>, State(state): State<Arc<AppState>>) -> Redirect {
    state.explorer.trigger_search(&query.0.user).await;
    Redirect::to("/")
}

#[axum_macros::debug_handler]
pub async fn get_page(query: Query<PageQuery>, State(state): State<Arc<AppState>>) -> Redirect {
    state.explorer.change_page(query.0.number).await;
    Redirect::to("/")
}
