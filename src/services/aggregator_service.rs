use serde_json::Value;

use crate::api::{appstream, workspaces, ApiError, ResourceProvider};
use crate::models::AggregatedProductsView;

// The web section is a second WorkSpaces describe; errors name the section.
const WEB_SERVICE: &str = "WorkSpaces Web";

/// Describe desktops, web desktops, and fleets concurrently and merge them.
///
/// All three calls must succeed; the first failure fails the whole view.
pub async fn aggregate_products(provider: &dyn ResourceProvider) -> Result<AggregatedProductsView, ApiError> {
    let (desktops, web_desktops, fleets) = tokio::try_join!(
        provider.describe_virtual_desktops(),
        provider.describe_web_virtual_desktops(),
        provider.describe_streaming_fleets(),
    )
    .map_err(|e| {
        tracing::error!(%e, "Aggregating products failed");
        e
    })?;

    let view = AggregatedProductsView {
        workspaces: take_list(desktops, workspaces::SERVICE, workspaces::LIST_KEY)?,
        workspaces_web: take_list(web_desktops, WEB_SERVICE, workspaces::LIST_KEY)?,
        appstream: take_list(fleets, appstream::SERVICE, appstream::LIST_KEY)?,
    };
    tracing::info!(
        workspaces = view.workspaces.len(),
        workspaces_web = view.workspaces_web.len(),
        appstream = view.appstream.len(),
        "Aggregated products"
    );
    Ok(view)
}

/// The raw WorkSpaces describe result, for the legacy single-source endpoint.
pub async fn describe_virtual_desktops_raw(provider: &dyn ResourceProvider) -> Result<Value, ApiError> {
    provider.describe_virtual_desktops().await
}

/// How many desktops the account reports, for a configuration check.
pub async fn count_virtual_desktops(provider: &dyn ResourceProvider) -> Result<usize, ApiError> {
    let doc = provider.describe_virtual_desktops().await?;
    Ok(take_list(doc, workspaces::SERVICE, workspaces::LIST_KEY)?.len())
}

/// Move the list out of a describe result. An absent or null list is empty.
fn take_list(doc: Value, service: &'static str, key: &str) -> Result<Vec<Value>, ApiError> {
    let Value::Object(mut map) = doc else {
        return Err(ApiError::Malformed {
            service,
            message: "expected a JSON object".into(),
        });
    };
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ApiError::Malformed {
            service,
            message: format!("'{}' is not an array", key),
        }),
    }
}
