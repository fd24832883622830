// Provider API modules
pub mod error;
pub mod provider;
pub mod records;
pub mod workspaces;
pub mod appstream;

// Re-export commonly used items
pub use error::ApiError;
pub use provider::{AwsProvider, ResourceProvider};
