pub mod app_state;
pub mod dashboard_layout;
pub mod product_entry;
pub mod products_view;
pub mod request_option;
pub mod resource_card;
pub mod section_kind;

pub use app_state::AppState;
pub use dashboard_layout::DashboardLayout;
pub use product_entry::ProductEntry;
pub use products_view::AggregatedProductsView;
pub use request_option::RequestOption;
pub use resource_card::{DashboardSection, ResourceCard};
pub use section_kind::SectionKind;
