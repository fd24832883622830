use std::sync::Arc;

use crate::api::ResourceProvider;
use crate::config::LaunchUrls;
use crate::models::dashboard_layout::DashboardLayout;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ResourceProvider>,
    pub layout: DashboardLayout,
    pub launch_urls: LaunchUrls,
    pub region: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            provider,
            layout: DashboardLayout::default(),
            launch_urls: LaunchUrls::default(),
            region: crate::config::DEFAULT_REGION.to_string(),
            custom_css: None,
        }
    }
}
