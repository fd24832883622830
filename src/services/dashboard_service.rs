use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::api::{ApiError, ResourceProvider};
use crate::config::LaunchUrls;
use crate::models::{
    AggregatedProductsView, DashboardLayout, DashboardSection, ProductEntry, ResourceCard, SectionKind,
};
use crate::utils::{first_field, launch_url};
use super::aggregator_service::aggregate_products;

/// Why the dashboard could not load the aggregated view.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode products response: {0}")]
    Decode(String),

    #[error(transparent)]
    Upstream(#[from] ApiError),
}

/// Where the dashboard gets its data from.
#[async_trait]
pub trait ProductsSource: Send + Sync {
    async fn fetch_products(&self) -> Result<AggregatedProductsView, FetchError>;
}

/// `GET {base_url}/api/products` on a running portal.
pub struct HttpProductsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductsSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let url = format!("{}/api/products", base_url.trim().trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .user_agent(format!("vportal/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductsSource for HttpProductsSource {
    async fn fetch_products(&self) -> Result<AggregatedProductsView, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| FetchError::Network {
            url: self.url.clone(),
            message: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        response
            .json::<AggregatedProductsView>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Runs the aggregator in-process instead of going over HTTP.
pub struct ProviderProductsSource {
    provider: Arc<dyn ResourceProvider>,
}

impl ProviderProductsSource {
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ProductsSource for ProviderProductsSource {
    async fn fetch_products(&self) -> Result<AggregatedProductsView, FetchError> {
        Ok(aggregate_products(self.provider.as_ref()).await?)
    }
}

/// View state for one dashboard: the last successfully fetched products.
///
/// Starts empty and only ever moves to "loaded"; a failed refresh leaves
/// whatever was there before.
pub struct Dashboard {
    layout: DashboardLayout,
    launch_urls: LaunchUrls,
    products: AggregatedProductsView,
    loaded: bool,
}

impl Dashboard {
    pub fn new(layout: DashboardLayout, launch_urls: LaunchUrls) -> Self {
        Self {
            layout,
            launch_urls,
            products: AggregatedProductsView::default(),
            loaded: false,
        }
    }

    /// Fetch once. Returns whether the state was replaced.
    pub async fn refresh(&mut self, source: &dyn ProductsSource) -> bool {
        match source.fetch_products().await {
            Ok(products) => {
                self.products = products;
                self.loaded = true;
                true
            }
            Err(e) => {
                tracing::error!(%e, "Error fetching products");
                false
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn products(&self) -> &AggregatedProductsView {
        &self.products
    }

    pub fn sections(&self) -> Vec<DashboardSection> {
        self.layout
            .sections
            .iter()
            .map(|&kind| DashboardSection {
                kind,
                title: kind.title().to_string(),
                cards: self
                    .products
                    .items(kind)
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| build_card(kind, idx, item, &self.launch_urls))
                    .collect(),
            })
            .collect()
    }
}

/// Turn one provider record into a card. Missing fields render as blanks.
pub fn build_card(kind: SectionKind, idx: usize, item: &Value, launch_urls: &LaunchUrls) -> ResourceCard {
    let identifier = first_field(item, identity_keys(kind));
    let key = identifier
        .clone()
        .unwrap_or_else(|| format!("{}-{}", kind.field_name(), idx));
    let title = first_field(item, title_keys(kind))
        .or_else(|| identifier.clone())
        .unwrap_or_else(|| "(unnamed)".into());
    let status = first_field(item, &["State"]).unwrap_or_default();
    let launch = identifier
        .as_deref()
        .and_then(|id| launch_url(launch_urls.base_for(kind), id));

    ResourceCard {
        key,
        title,
        status,
        details: card_details(kind, item),
        launch_url: launch,
    }
}

fn identity_keys(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Workspaces | SectionKind::WorkspacesWeb => &["WorkspaceId"],
        SectionKind::AppStream => &["Name", "Arn"],
    }
}

fn title_keys(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Workspaces | SectionKind::WorkspacesWeb => &["UserName"],
        SectionKind::AppStream => &["Name"],
    }
}

fn detail_fields(kind: SectionKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        SectionKind::Workspaces | SectionKind::WorkspacesWeb => &[
            ("IP", "IpAddress"),
            ("OS", "WorkspaceProperties.OperatingSystemName"),
            ("Compute", "WorkspaceProperties.ComputeTypeName"),
            ("Running mode", "WorkspaceProperties.RunningMode"),
            ("Root volume (GiB)", "WorkspaceProperties.RootVolumeSizeGib"),
            ("User volume (GiB)", "WorkspaceProperties.UserVolumeSizeGib"),
        ],
        SectionKind::AppStream => &[
            ("Instance type", "InstanceType"),
            ("Fleet type", "FleetType"),
            ("Desired", "ComputeCapacityStatus.Desired"),
            ("Running", "ComputeCapacityStatus.Running"),
            ("In use", "ComputeCapacityStatus.InUse"),
            ("Available", "ComputeCapacityStatus.Available"),
        ],
    }
}

fn card_details(kind: SectionKind, item: &Value) -> Vec<ProductEntry> {
    detail_fields(kind)
        .iter()
        .filter_map(|(term, key)| first_field(item, &[*key]).map(|value| ProductEntry::new(*term, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_card_workspace() {
        let item = json!({
            "WorkspaceId": "ws-1",
            "UserName": "alice",
            "State": "AVAILABLE",
            "IpAddress": "10.0.0.5",
            "WorkspaceProperties": {"RunningMode": "AUTO_STOP", "RootVolumeSizeGib": 80}
        });
        let card = build_card(SectionKind::Workspaces, 0, &item, &LaunchUrls::default());
        assert_eq!(card.key, "ws-1");
        assert_eq!(card.title, "alice");
        assert_eq!(card.status, "AVAILABLE");
        assert_eq!(card.launch_url.as_deref(), Some("https://client.workspaces.aws/web/ws-1"));
        assert_eq!(
            card.details,
            vec![
                ProductEntry::new("IP", "10.0.0.5"),
                ProductEntry::new("Running mode", "AUTO_STOP"),
                ProductEntry::new("Root volume (GiB)", "80"),
            ]
        );
    }

    #[test]
    fn test_build_card_fleet_uses_name() {
        let item = json!({"Name": "fleet-a", "State": "RUNNING", "InstanceType": "stream.standard.medium"});
        let card = build_card(SectionKind::AppStream, 0, &item, &LaunchUrls::default());
        assert_eq!(card.key, "fleet-a");
        assert_eq!(card.title, "fleet-a");
        assert_eq!(card.launch_url.as_deref(), Some("https://appstream2.aws.amazon.com/fleets/fleet-a"));
    }

    #[test]
    fn test_build_card_web_desktop_launches_by_workspace_id() {
        let item = json!({"WorkspaceId": "ws-9", "UserName": "bob", "State": "STOPPED", "DirectoryId": "d-web"});
        let card = build_card(SectionKind::WorkspacesWeb, 0, &item, &LaunchUrls::default());
        assert_eq!(card.key, "ws-9");
        assert_eq!(card.title, "bob");
        assert_eq!(card.status, "STOPPED");
        assert_eq!(card.launch_url.as_deref(), Some("https://client.workspaces.aws/web/ws-9"));
    }

    #[test]
    fn test_build_card_web_record_without_workspace_id_has_no_launch() {
        let item = json!({
            "portalArn": "arn:aws:workspaces-web:us-east-1:123456789012:portal/abc",
            "portalEndpoint": "abc.workspaces-web.com",
            "displayName": "Sales",
            "portalStatus": "Active"
        });
        let card = build_card(SectionKind::WorkspacesWeb, 2, &item, &LaunchUrls::default());
        assert_eq!(card.key, "workspacesWeb-2");
        assert!(card.launch_url.is_none());
    }

    #[test]
    fn test_build_card_without_identity() {
        let card = build_card(SectionKind::Workspaces, 3, &json!({"State": "ERROR"}), &LaunchUrls::default());
        assert_eq!(card.key, "workspaces-3");
        assert_eq!(card.title, "(unnamed)");
        assert!(card.launch_url.is_none());
    }
}
