use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::models::AppState;
use crate::services::{aggregate_products, describe_virtual_desktops_raw};

use super::helpers::api_error_response;

/// GET /api/products — desktops, web desktops, and fleets in one document.
pub async fn products_get(State(state): State<AppState>) -> impl IntoResponse {
    match aggregate_products(state.provider.as_ref()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => api_error_response(&e),
    }
}

/// GET /api/workspace — the raw WorkSpaces describe result under `data`.
pub async fn workspace_get(State(state): State<AppState>) -> impl IntoResponse {
    match describe_virtual_desktops_raw(state.provider.as_ref()).await {
        Ok(raw) => Json(json!({ "data": raw })).into_response(),
        Err(e) => api_error_response(&e),
    }
}
