//! Serializable copies of the SDK describe results.
//!
//! Field names follow the provider's JSON wire names so `/api/products`
//! reads the same as the raw API. Getters for members the API marks as
//! required return bare references, optional ones return `Option`; the
//! `text`/`label`/`count` helpers accept either.

use aws_sdk_appstream::types::{ComputeCapacityStatus, Fleet, VpcConfig};
use aws_sdk_workspaces::types::{Workspace, WorkspaceProperties};
use serde::Serialize;

fn text<'a>(member: impl Into<Option<&'a str>>) -> Option<String> {
    member.into().map(str::to_string)
}

fn label<'a, E>(member: impl Into<Option<&'a E>>) -> Option<String>
where
    E: AsRef<str> + 'a,
{
    member.into().map(|e| e.as_ref().to_string())
}

fn count(member: impl Into<Option<i32>>) -> Option<i32> {
    member.into()
}

fn strings<'a>(member: impl Into<Option<&'a [String]>>) -> Vec<String> {
    member.into().map(<[String]>::to_vec).unwrap_or_default()
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkspaceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_properties: Option<WorkspacePropertiesRecord>,
}

impl From<&Workspace> for WorkspaceRecord {
    fn from(value: &Workspace) -> Self {
        Self {
            workspace_id: text(value.workspace_id()),
            directory_id: text(value.directory_id()),
            user_name: text(value.user_name()),
            ip_address: text(value.ip_address()),
            state: label(value.state()),
            bundle_id: text(value.bundle_id()),
            subnet_id: text(value.subnet_id()),
            computer_name: text(value.computer_name()),
            workspace_properties: Option::<&WorkspaceProperties>::from(value.workspace_properties())
                .map(WorkspacePropertiesRecord::from),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkspacePropertiesRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_mode_auto_stop_timeout_in_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_volume_size_gib: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_volume_size_gib: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_name: Option<String>,
}

impl From<&WorkspaceProperties> for WorkspacePropertiesRecord {
    fn from(value: &WorkspaceProperties) -> Self {
        Self {
            running_mode: label(value.running_mode()),
            running_mode_auto_stop_timeout_in_minutes: count(value.running_mode_auto_stop_timeout_in_minutes()),
            root_volume_size_gib: count(value.root_volume_size_gib()),
            user_volume_size_gib: count(value.user_volume_size_gib()),
            compute_type_name: label(value.compute_type_name()),
            operating_system_name: label(value.operating_system_name()),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FleetRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_capacity_status: Option<CapacityRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcRecord>,
}

impl From<&Fleet> for FleetRecord {
    fn from(value: &Fleet) -> Self {
        Self {
            arn: text(value.arn()),
            name: text(value.name()),
            display_name: text(value.display_name()),
            description: text(value.description()),
            instance_type: text(value.instance_type()),
            fleet_type: label(value.fleet_type()),
            state: label(value.state()),
            compute_capacity_status: Option::<&ComputeCapacityStatus>::from(value.compute_capacity_status())
                .map(CapacityRecord::from),
            vpc_config: Option::<&VpcConfig>::from(value.vpc_config()).map(VpcRecord::from),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_use: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i32>,
}

impl From<&ComputeCapacityStatus> for CapacityRecord {
    fn from(value: &ComputeCapacityStatus) -> Self {
        Self {
            desired: count(value.desired()),
            running: count(value.running()),
            in_use: count(value.in_use()),
            available: count(value.available()),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VpcRecord {
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
}

impl From<&VpcConfig> for VpcRecord {
    fn from(value: &VpcConfig) -> Self {
        Self {
            subnet_ids: strings(value.subnet_ids()),
            security_group_ids: strings(value.security_group_ids()),
        }
    }
}
