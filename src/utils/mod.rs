// URL handling utilities
pub mod url_builder;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use url_builder::launch_url;
pub use json_converter::first_field;
