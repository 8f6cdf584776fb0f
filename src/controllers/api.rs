use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::AppState;
use crate::models::view_state::ViewState;


#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    identifier: String,
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    page: usize,
}

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<ViewState> {
    Json(state.explorer.snapshot().await)
}

#[axum_macros::debug_handler]
pub async fn post_search(State(state): State<Arc<AppState>>, Json(request): Json<SearchRequest>) -> Json<ViewState> {
    Json(state.explorer.trigger_search(&request.identifier).await)
}

#[axum_macros::debug_handler]
pub async fn post_page(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PageRequest>,
) -> Result<Json<ViewState>, (StatusCode, String)> {
    match state.explorer.try_change_page(request.page).await {
        Ok(view_state) => Ok(Json(view_state)),
        Err(page_count) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("page {} is outside 1..={}", request.page, page_count),
        )),
    }
}
