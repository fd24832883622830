use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::section_kind::SectionKind;

/// Request-scoped grouping of everything the provider returned.
///
/// Elements are the provider's records as-is; nothing is renamed or dropped.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AggregatedProductsView {
    #[serde(default)]
    pub workspaces: Vec<Value>,
    #[serde(default, rename = "workspacesWeb")]
    pub workspaces_web: Vec<Value>,
    #[serde(default)]
    pub appstream: Vec<Value>,
}

impl AggregatedProductsView {
    pub fn items(&self, kind: SectionKind) -> &[Value] {
        match kind {
            SectionKind::Workspaces => &self.workspaces,
            SectionKind::WorkspacesWeb => &self.workspaces_web,
            SectionKind::AppStream => &self.appstream,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty() && self.workspaces_web.is_empty() && self.appstream.is_empty()
    }
}
