// Page templates
pub mod dashboard_template;
pub mod manage_template;

pub use dashboard_template::DashboardTemplate;
pub use manage_template::ManageTemplate;
