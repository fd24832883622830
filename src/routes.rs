use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_app(state: AppState) -> Router {
    // Provider state is never cached, by us or by anything in between.
    let api_routes = Router::new()
        .route("/api/products", get(handlers::api::products_get))
        .route("/api/workspace", get(handlers::api::workspace_get))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::pages::dashboard_get))
        .route("/manage", get(handlers::pages::manage_get))
        .route("/static/styles.css", get(move || {
            let css = stylesheet_content.clone();
            async move { ([(CONTENT_TYPE, "text/css")], css) }
        }))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
