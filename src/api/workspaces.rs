use aws_sdk_workspaces::types::Workspace;
use aws_sdk_workspaces::Client;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::records::WorkspaceRecord;

pub const SERVICE: &str = "WorkSpaces";

/// Key holding the desktop list in a `DescribeWorkspaces` result.
pub const LIST_KEY: &str = "Workspaces";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeWorkspacesDocument {
    workspaces: Vec<WorkspaceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

/// `DescribeWorkspaces`, first page only, optionally limited to one directory.
pub async fn describe_workspaces(client: &Client, directory_id: Option<&str>) -> Result<Value, ApiError> {
    tracing::debug!(?directory_id, "Calling DescribeWorkspaces");
    let output = client
        .describe_workspaces()
        .set_directory_id(directory_id.map(String::from))
        .send()
        .await
        .map_err(|e| ApiError::from_sdk(SERVICE, e))?;

    let workspaces: &[Workspace] = Option::<&[Workspace]>::from(output.workspaces()).unwrap_or_default();
    let document = DescribeWorkspacesDocument {
        workspaces: workspaces.iter().map(WorkspaceRecord::from).collect(),
        next_token: output.next_token().map(String::from),
    };
    serde_json::to_value(document).map_err(|e| ApiError::Malformed {
        service: SERVICE,
        message: e.to_string(),
    })
}
