use std::env;
use std::path::Path;

use crate::models::SectionKind;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_PORTAL_TITLE: &str = "Virtual Request Portal";
pub const DEFAULT_WORKSPACES_LAUNCH_URL: &str = "https://client.workspaces.aws/web";
pub const DEFAULT_WORKSPACES_WEB_LAUNCH_URL: &str = "https://client.workspaces.aws/web";
pub const DEFAULT_APPSTREAM_LAUNCH_URL: &str = "https://appstream2.aws.amazon.com/fleets";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Per-service endpoint overrides for local emulators. `None` keeps the
/// SDK's own resolution, which also honours `AWS_ENDPOINT_URL`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceEndpoints {
    pub workspaces: Option<String>,
    pub appstream: Option<String>,
}

impl ServiceEndpoints {
    /// Both services behind one base URL.
    pub fn single(base_url: &str) -> Self {
        let base = sanitize_base_url(base_url);
        Self {
            workspaces: Some(base.clone()),
            appstream: Some(base),
        }
    }
}

pub fn get_service_endpoints() -> ServiceEndpoints {
    ServiceEndpoints {
        workspaces: non_empty_var("WORKSPACES_ENDPOINT").map(|u| sanitize_base_url(&u)),
        appstream: non_empty_var("APPSTREAM_ENDPOINT").map(|u| sanitize_base_url(&u)),
    }
}

/// Directory filters for the two WorkSpaces describe calls. The web section
/// usually points at the directory that has web access enabled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkspaceDirectories {
    pub desktops: Option<String>,
    pub web: Option<String>,
}

pub fn get_workspace_directories() -> WorkspaceDirectories {
    WorkspaceDirectories {
        desktops: non_empty_var("WORKSPACES_DIRECTORY_ID"),
        web: non_empty_var("WORKSPACES_WEB_DIRECTORY_ID"),
    }
}

/// Base URLs the launch action appends a resource identifier to.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchUrls {
    pub workspaces: String,
    pub workspaces_web: String,
    pub appstream: String,
}

impl Default for LaunchUrls {
    fn default() -> Self {
        Self {
            workspaces: DEFAULT_WORKSPACES_LAUNCH_URL.to_string(),
            workspaces_web: DEFAULT_WORKSPACES_WEB_LAUNCH_URL.to_string(),
            appstream: DEFAULT_APPSTREAM_LAUNCH_URL.to_string(),
        }
    }
}

impl LaunchUrls {
    pub fn base_for(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Workspaces => &self.workspaces,
            SectionKind::WorkspacesWeb => &self.workspaces_web,
            SectionKind::AppStream => &self.appstream,
        }
    }
}

pub fn get_launch_urls() -> LaunchUrls {
    let defaults = LaunchUrls::default();
    LaunchUrls {
        workspaces: non_empty_var("WORKSPACES_LAUNCH_URL")
            .map(|u| sanitize_base_url(&u))
            .unwrap_or(defaults.workspaces),
        workspaces_web: non_empty_var("WORKSPACES_WEB_LAUNCH_URL")
            .map(|u| sanitize_base_url(&u))
            .unwrap_or(defaults.workspaces_web),
        appstream: non_empty_var("APPSTREAM_LAUNCH_URL")
            .map(|u| sanitize_base_url(&u))
            .unwrap_or(defaults.appstream),
    }
}

/// Sections shown on the dashboard, in order. Unknown names are skipped;
/// an empty or fully unknown list falls back to all three sections.
pub fn get_dashboard_sections() -> Vec<SectionKind> {
    parse_sections(&env::var("DASHBOARD_SECTIONS").unwrap_or_default())
}

pub fn parse_sections(raw: &str) -> Vec<SectionKind> {
    let mut out = Vec::new();
    for name in raw.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match SectionKind::from_name(name) {
            Some(kind) if !out.contains(&kind) => out.push(kind),
            Some(_) => {}
            None => tracing::warn!(section = name, "Ignoring unknown dashboard section"),
        }
    }
    if out.is_empty() {
        return SectionKind::ALL.to_vec();
    }
    out
}

pub fn get_portal_title() -> String {
    non_empty_var("PORTAL_TITLE").unwrap_or_else(|| DEFAULT_PORTAL_TITLE.to_string())
}

pub fn get_portal_logo_url() -> Option<String> {
    non_empty_var("PORTAL_LOGO_URL")
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        format!("http://localhost:{}", DEFAULT_PORT)
    } else {
        trimmed.to_string()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
