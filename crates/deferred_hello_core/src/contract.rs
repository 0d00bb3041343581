use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the deferred handler waits before its background task runs.
pub const DEFERRED_TASK_DELAY: Duration = Duration::from_millis(3_000);

pub const IMMEDIATE_RESPONSE_BODY: &str = "Hello from the handler without promise.";

pub const BEFORE_SCHEDULING_MESSAGE: &str = "Before requesting a scheduled job.";
pub const AFTER_SCHEDULING_MESSAGE: &str = "After requesting a scheduled job.";
pub const DEFERRED_FAILURE_MESSAGE: &str = "Error after 3 seconds";
pub const IMMEDIATE_MESSAGE: &str = "No promise in here.";

/// API Gateway proxy response returned by both handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}

/// Log line emitted by the delayed task when it completes normally.
pub fn deferred_completion_message(requested: &str) -> String {
    format!("This is requested from [{requested}]")
}

/// Body of the deferred handler's response.
pub fn deferred_response_body(prefix: &str, requested: &str) -> String {
    format!("{prefix} requested at [{requested}]")
}
