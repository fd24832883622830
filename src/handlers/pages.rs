use axum::{extract::State, response::IntoResponse};

use crate::models::AppState;
use crate::services::{request_catalog, Dashboard, ProviderProductsSource};
use crate::templates::{DashboardTemplate, ManageTemplate};

use super::helpers::{build_template_globals, render_template, TemplateGlobals};

/// GET / — the dashboard. A failed fetch renders the empty dashboard.
pub async fn dashboard_get(State(state): State<AppState>) -> impl IntoResponse {
    let mut dashboard = Dashboard::new(state.layout.clone(), state.launch_urls.clone());
    let source = ProviderProductsSource::new(state.provider.clone());
    dashboard.refresh(&source).await;
    let sections = dashboard.sections();

    let TemplateGlobals {
        portal_title,
        logo_url,
        region,
    } = build_template_globals(&state);
    render_template(DashboardTemplate {
        portal_title,
        logo_url,
        region,
        sections: &sections,
    })
}

/// GET /manage — the static request catalog.
pub async fn manage_get(State(state): State<AppState>) -> impl IntoResponse {
    let options = request_catalog();
    let TemplateGlobals {
        portal_title,
        logo_url,
        region,
    } = build_template_globals(&state);
    render_template(ManageTemplate {
        portal_title,
        logo_url,
        region,
        options: &options,
    })
}
