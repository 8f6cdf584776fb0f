use std::sync::Arc;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::mappers::dashboard_mapper;


#[axum_macros::debug_handler]
pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    let view_state = state.explorer.snapshot().await;
    let data = dashboard_mapper::to_view_model(&view_state);

    match super::render_page(&state.registry, "Profile Explorer", "index", &data) {
        Ok(page) => page.into_response(),
        Err(e) => {
            log::error!("Failed to render dashboard: {}", e);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).await.into_response()
        }
    }
}
