use crate::config;
use crate::models::section_kind::SectionKind;

/// Which sections (and branding) a dashboard page shows.
#[derive(Clone, Debug)]
pub struct DashboardLayout {
    pub title: String,
    pub logo_url: Option<String>,
    pub sections: Vec<SectionKind>,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            title: config::DEFAULT_PORTAL_TITLE.to_string(),
            logo_url: None,
            sections: SectionKind::ALL.to_vec(),
        }
    }
}

impl DashboardLayout {
    pub fn from_env() -> Self {
        Self {
            title: config::get_portal_title(),
            logo_url: config::get_portal_logo_url(),
            sections: config::get_dashboard_sections(),
        }
    }
}
