use aws_sdk_appstream::types::Fleet;
use aws_sdk_appstream::Client;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::records::FleetRecord;

pub const SERVICE: &str = "AppStream";

/// Key holding the fleet list in a `DescribeFleets` result.
pub const LIST_KEY: &str = "Fleets";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeFleetsDocument {
    fleets: Vec<FleetRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

/// `DescribeFleets`, first page only.
pub async fn describe_fleets(client: &Client) -> Result<Value, ApiError> {
    tracing::debug!("Calling DescribeFleets");
    let output = client
        .describe_fleets()
        .send()
        .await
        .map_err(|e| ApiError::from_sdk(SERVICE, e))?;

    let fleets: &[Fleet] = Option::<&[Fleet]>::from(output.fleets()).unwrap_or_default();
    let document = DescribeFleetsDocument {
        fleets: fleets.iter().map(FleetRecord::from).collect(),
        next_token: output.next_token().map(String::from),
    };
    serde_json::to_value(document).map_err(|e| ApiError::Malformed {
        service: SERVICE,
        message: e.to_string(),
    })
}
