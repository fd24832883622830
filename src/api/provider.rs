use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_workspaces::config::Region;
use serde_json::Value;

use crate::config::{self, ServiceEndpoints, WorkspaceDirectories, DEFAULT_REGION};
use super::error::ApiError;
use super::{appstream, workspaces};

/// The cloud account the portal reads from.
///
/// Each call returns the provider's describe result document.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    async fn describe_virtual_desktops(&self) -> Result<Value, ApiError>;
    async fn describe_web_virtual_desktops(&self) -> Result<Value, ApiError>;
    async fn describe_streaming_fleets(&self) -> Result<Value, ApiError>;
}

/// Talks to the real WorkSpaces and AppStream APIs through the AWS SDK.
#[derive(Clone, Debug)]
pub struct AwsProvider {
    sdk_config: SdkConfig,
    workspaces: aws_sdk_workspaces::Client,
    appstream: aws_sdk_appstream::Client,
    directories: WorkspaceDirectories,
}

impl AwsProvider {
    pub fn new(sdk_config: &SdkConfig, endpoints: &ServiceEndpoints, directories: WorkspaceDirectories) -> Self {
        let mut workspaces_conf = aws_sdk_workspaces::config::Builder::from(sdk_config);
        if let Some(url) = &endpoints.workspaces {
            workspaces_conf = workspaces_conf.endpoint_url(url);
        }
        let mut appstream_conf = aws_sdk_appstream::config::Builder::from(sdk_config);
        if let Some(url) = &endpoints.appstream {
            appstream_conf = appstream_conf.endpoint_url(url);
        }
        Self {
            sdk_config: sdk_config.clone(),
            workspaces: aws_sdk_workspaces::Client::from_conf(workspaces_conf.build()),
            appstream: aws_sdk_appstream::Client::from_conf(appstream_conf.build()),
            directories,
        }
    }

    /// Credentials and region from the SDK's default chains (environment,
    /// profile, SSO, container and instance roles); endpoints and directory
    /// filters from the environment.
    pub async fn from_env() -> Self {
        let region = RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;
        Self::new(
            &sdk_config,
            &config::get_service_endpoints(),
            config::get_workspace_directories(),
        )
    }

    pub fn region(&self) -> String {
        self.sdk_config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// Resolve credentials once, without calling any service.
    pub async fn check_credentials(&self) -> Result<(), ApiError> {
        let provider = self
            .sdk_config
            .credentials_provider()
            .ok_or_else(|| ApiError::MissingCredentials("no credentials provider configured".into()))?;
        provider
            .provide_credentials()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::MissingCredentials(e.to_string()))
    }
}

#[async_trait]
impl ResourceProvider for AwsProvider {
    async fn describe_virtual_desktops(&self) -> Result<Value, ApiError> {
        workspaces::describe_workspaces(&self.workspaces, self.directories.desktops.as_deref()).await
    }

    async fn describe_web_virtual_desktops(&self) -> Result<Value, ApiError> {
        workspaces::describe_workspaces(&self.workspaces, self.directories.web.as_deref()).await
    }

    async fn describe_streaming_fleets(&self) -> Result<Value, ApiError> {
        appstream::describe_fleets(&self.appstream).await
    }
}
