pub mod aggregator_service;
pub mod catalog_service;
pub mod dashboard_service;

// Re-export commonly used functions
pub use aggregator_service::{aggregate_products, count_virtual_desktops, describe_virtual_desktops_raw};
pub use catalog_service::request_catalog;
pub use dashboard_service::{
    build_card, Dashboard, FetchError, HttpProductsSource, ProductsSource, ProviderProductsSource,
};
