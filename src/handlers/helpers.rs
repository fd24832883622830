use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::api::ApiError;
use crate::models::AppState;

/// Fields every page template carries.
#[derive(Default)]
pub struct TemplateGlobals {
    pub portal_title: String,
    pub logo_url: Option<String>,
    pub region: String,
}

pub fn build_template_globals(state: &AppState) -> TemplateGlobals {
    TemplateGlobals {
        portal_title: state.layout.title.clone(),
        logo_url: state.layout.logo_url.clone(),
        region: state.region.clone(),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn api_error_status(e: &ApiError) -> StatusCode {
    match e {
        ApiError::MissingCredentials(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApiError::Network { .. } | ApiError::Upstream { .. } | ApiError::Malformed { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// JSON error body for a failed provider call. The shape is informational only.
pub fn api_error_response(e: &ApiError) -> Response {
    tracing::error!(%e, service = e.service().unwrap_or("-"), "Provider call failed");
    (api_error_status(e), Json(json!({ "error": e.to_string() }))).into_response()
}
