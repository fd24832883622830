mod common;

use common::{app_state, scenario_desktops, scenario_fleets, spawn_server, MockProvider, ScriptedSource};
use serde_json::json;

use vportal::config::LaunchUrls;
use vportal::models::{AggregatedProductsView, DashboardLayout, SectionKind};
use vportal::services::{Dashboard, FetchError, HttpProductsSource, ProductsSource};

fn view(desktops: usize, web: usize, fleets: usize) -> AggregatedProductsView {
    AggregatedProductsView {
        workspaces: (0..desktops)
            .map(|i| json!({"WorkspaceId": format!("ws-{}", i), "UserName": format!("user{}", i), "State": "AVAILABLE"}))
            .collect(),
        workspaces_web: (0..web)
            .map(|i| json!({"WorkspaceId": format!("ws-web-{}", i), "UserName": format!("web{}", i), "State": "AVAILABLE"}))
            .collect(),
        appstream: (0..fleets)
            .map(|i| json!({"Name": format!("fleet-{}", i), "State": "RUNNING"}))
            .collect(),
    }
}

fn card_counts(dashboard: &Dashboard) -> Vec<(SectionKind, usize)> {
    dashboard
        .sections()
        .iter()
        .map(|s| (s.kind, s.card_count()))
        .collect()
}

#[tokio::test]
async fn test_new_dashboard_is_empty_and_not_loaded() {
    let dashboard = Dashboard::new(DashboardLayout::default(), LaunchUrls::default());
    assert!(!dashboard.is_loaded());
    assert_eq!(
        card_counts(&dashboard),
        vec![(SectionKind::Workspaces, 0), (SectionKind::WorkspacesWeb, 0), (SectionKind::AppStream, 0)]
    );
}

#[tokio::test]
async fn test_card_counts_follow_last_successful_fetch() {
    let source = ScriptedSource::new(vec![Some(view(3, 1, 2)), Some(view(1, 0, 4))]);
    let mut dashboard = Dashboard::new(DashboardLayout::default(), LaunchUrls::default());

    assert!(dashboard.refresh(&source).await);
    assert_eq!(
        card_counts(&dashboard),
        vec![(SectionKind::Workspaces, 3), (SectionKind::WorkspacesWeb, 1), (SectionKind::AppStream, 2)]
    );

    assert!(dashboard.refresh(&source).await);
    assert_eq!(
        card_counts(&dashboard),
        vec![(SectionKind::Workspaces, 1), (SectionKind::WorkspacesWeb, 0), (SectionKind::AppStream, 4)]
    );
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_state() {
    let source = ScriptedSource::new(vec![Some(view(2, 2, 2)), None]);
    let mut dashboard = Dashboard::new(DashboardLayout::default(), LaunchUrls::default());

    assert!(dashboard.refresh(&source).await);
    let before = dashboard.products().clone();

    assert!(!dashboard.refresh(&source).await);
    assert!(dashboard.is_loaded());
    assert_eq!(dashboard.products(), &before);
}

#[tokio::test]
async fn test_failed_first_refresh_stays_empty() {
    let source = ScriptedSource::new(vec![None]);
    let mut dashboard = Dashboard::new(DashboardLayout::default(), LaunchUrls::default());

    assert!(!dashboard.refresh(&source).await);
    assert!(!dashboard.is_loaded());
    assert!(dashboard.products().is_empty());
}

#[tokio::test]
async fn test_layout_limits_sections() {
    let layout = DashboardLayout {
        sections: vec![SectionKind::AppStream, SectionKind::Workspaces],
        ..DashboardLayout::default()
    };
    let source = ScriptedSource::new(vec![Some(view(1, 5, 2))]);
    let mut dashboard = Dashboard::new(layout, LaunchUrls::default());
    dashboard.refresh(&source).await;

    assert_eq!(
        card_counts(&dashboard),
        vec![(SectionKind::AppStream, 2), (SectionKind::Workspaces, 1)]
    );
}

#[tokio::test]
async fn test_custom_launch_urls() {
    let launch = LaunchUrls {
        workspaces: "https://desktops.example.com/launch".into(),
        ..LaunchUrls::default()
    };
    let source = ScriptedSource::new(vec![Some(view(1, 0, 0))]);
    let mut dashboard = Dashboard::new(DashboardLayout::default(), launch);
    dashboard.refresh(&source).await;

    let sections = dashboard.sections();
    assert_eq!(
        sections[0].cards[0].launch_url.as_deref(),
        Some("https://desktops.example.com/launch/ws-0")
    );
}

#[tokio::test]
async fn test_http_source_renders_scenario() {
    let base = spawn_server(vportal::build_app(app_state(MockProvider::scenario()))).await;
    let source = HttpProductsSource::new(&base).unwrap();
    let mut dashboard = Dashboard::new(DashboardLayout::default(), LaunchUrls::default());

    assert!(dashboard.refresh(&source).await);

    let sections = dashboard.sections();
    assert_eq!(sections[0].card_count(), 1);
    assert_eq!(sections[0].cards[0].title, "alice");
    assert_eq!(sections[0].cards[0].status, "AVAILABLE");
    assert_eq!(sections[1].card_count(), 0);
    assert_eq!(sections[2].card_count(), 1);
    assert_eq!(sections[2].cards[0].title, "fleet-a");
    assert_eq!(sections[2].cards[0].status, "RUNNING");
}

#[tokio::test]
async fn test_http_source_failure_keeps_prior_state() {
    let good = spawn_server(vportal::build_app(app_state(MockProvider::scenario()))).await;
    let failing_provider = MockProvider::new(Some(scenario_desktops()), Some(json!({"Workspaces": []})), None);
    let bad = spawn_server(vportal::build_app(app_state(failing_provider))).await;

    let mut dashboard = Dashboard::new(DashboardLayout::default(), LaunchUrls::default());
    assert!(dashboard.refresh(&HttpProductsSource::new(&good).unwrap()).await);
    let before = dashboard.products().clone();

    let bad_source = HttpProductsSource::new(&bad).unwrap();
    let err = bad_source.fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 502, .. }));

    assert!(!dashboard.refresh(&bad_source).await);
    assert_eq!(dashboard.products(), &before);
    assert_eq!(dashboard.products().appstream, scenario_fleets()["Fleets"].as_array().unwrap().clone());
}

#[tokio::test]
async fn test_http_source_unreachable_portal() {
    let source = HttpProductsSource::new("http://127.0.0.1:9/").unwrap();
    assert_eq!(source.url(), "http://127.0.0.1:9/api/products");
    let err = source.fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }));
}
