use serde::Serialize;

/// The three resource kinds the portal lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Workspaces,
    WorkspacesWeb,
    AppStream,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Workspaces,
        SectionKind::WorkspacesWeb,
        SectionKind::AppStream,
    ];

    /// Accepts the JSON field name (`workspacesWeb`) as well as kebab/snake spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "workspaces" => Some(SectionKind::Workspaces),
            "workspacesweb" => Some(SectionKind::WorkspacesWeb),
            "appstream" => Some(SectionKind::AppStream),
            _ => None,
        }
    }

    /// Field name in the aggregated JSON document.
    pub fn field_name(&self) -> &'static str {
        match self {
            SectionKind::Workspaces => "workspaces",
            SectionKind::WorkspacesWeb => "workspacesWeb",
            SectionKind::AppStream => "appstream",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Workspaces => "WorkSpaces",
            SectionKind::WorkspacesWeb => "WorkSpaces Web",
            SectionKind::AppStream => "AppStream",
        }
    }
}
