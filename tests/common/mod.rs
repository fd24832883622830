#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use vportal::api::{ApiError, ResourceProvider};
use vportal::models::{AggregatedProductsView, AppState};
use vportal::services::{FetchError, ProductsSource};

/// Provider whose three describe results are fixed up front.
/// `None` makes that call fail with an upstream error.
pub struct MockProvider {
    pub desktops: Option<Value>,
    pub web_desktops: Option<Value>,
    pub fleets: Option<Value>,
    pub missing_credentials: bool,
    pub calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(desktops: Option<Value>, web_desktops: Option<Value>, fleets: Option<Value>) -> Self {
        Self {
            desktops,
            web_desktops,
            fleets,
            missing_credentials: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails the way an unresolvable credential chain does.
    pub fn without_credentials() -> Self {
        Self {
            missing_credentials: true,
            ..Self::scenario()
        }
    }

    /// alice's desktop, no web desktops, one running fleet.
    pub fn scenario() -> Self {
        Self::new(Some(scenario_desktops()), Some(json!({"Workspaces": []})), Some(scenario_fleets()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, doc: &Option<Value>, service: &'static str) -> Result<Value, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.missing_credentials {
            return Err(ApiError::MissingCredentials("no credentials in the default chain".into()));
        }
        doc.clone().ok_or_else(|| ApiError::Upstream {
            service,
            status: 500,
            code: "InternalFailure".into(),
            message: "boom".into(),
        })
    }
}

#[async_trait]
impl ResourceProvider for MockProvider {
    async fn describe_virtual_desktops(&self) -> Result<Value, ApiError> {
        self.answer(&self.desktops, "WorkSpaces")
    }

    async fn describe_web_virtual_desktops(&self) -> Result<Value, ApiError> {
        self.answer(&self.web_desktops, "WorkSpaces Web")
    }

    async fn describe_streaming_fleets(&self) -> Result<Value, ApiError> {
        self.answer(&self.fleets, "AppStream")
    }
}

pub fn scenario_desktops() -> Value {
    json!({
        "Workspaces": [{
            "WorkspaceId": "ws-1",
            "DirectoryId": "d-123",
            "UserName": "alice",
            "IpAddress": "10.0.0.12",
            "State": "AVAILABLE",
            "BundleId": "wsb-1",
            "WorkspaceProperties": {
                "RunningMode": "AUTO_STOP",
                "RootVolumeSizeGib": 80,
                "UserVolumeSizeGib": 50,
                "ComputeTypeName": "STANDARD",
                "OperatingSystemName": "WINDOWS_SERVER_2022"
            }
        }]
    })
}

pub fn scenario_fleets() -> Value {
    json!({
        "Fleets": [{
            "Arn": "arn:aws:appstream:us-east-1:123456789012:fleet/fleet-a",
            "Name": "fleet-a",
            "InstanceType": "stream.standard.medium",
            "FleetType": "ON_DEMAND",
            "State": "RUNNING",
            "ComputeCapacityStatus": {"Desired": 2, "Running": 2, "InUse": 1, "Available": 1},
            "VpcConfig": {"SubnetIds": ["subnet-1"]}
        }]
    })
}

pub fn app_state(provider: MockProvider) -> AppState {
    AppState::new(Arc::new(provider))
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_server(router: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Source that replays a scripted sequence of fetch outcomes.
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<Option<AggregatedProductsView>>>,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<Option<AggregatedProductsView>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

#[async_trait]
impl ProductsSource for ScriptedSource {
    async fn fetch_products(&self) -> Result<AggregatedProductsView, FetchError> {
        let next = self.outcomes.lock().unwrap().pop_front().flatten();
        next.ok_or_else(|| FetchError::Status {
            url: "http://scripted/api/products".into(),
            status: 502,
        })
    }
}
