use serde::Serialize;

use crate::models::product_entry::ProductEntry;
use crate::models::section_kind::SectionKind;

#[derive(Serialize, Clone, Debug)]
pub struct ResourceCard {
    /// Identity of the resource; unique within its section.
    pub key: String,
    pub title: String,
    pub status: String,
    pub details: Vec<ProductEntry>,
    pub launch_url: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct DashboardSection {
    pub kind: SectionKind,
    pub title: String,
    pub cards: Vec<ResourceCard>,
}

impl DashboardSection {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
