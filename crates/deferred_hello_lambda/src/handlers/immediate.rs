use serde_json::Value;
use tracing::info;

use crate::runtime::clock::Clock;
use crate::runtime::contract::{ApiGatewayResponse, IMMEDIATE_MESSAGE, IMMEDIATE_RESPONSE_BODY};
use crate::runtime::prefix::timestamp_prefix;

/// Baseline handler: one log line, fixed 200 response, nothing scheduled.
pub fn handle_without_deferred_task(_event: Value, clock: &dyn Clock) -> ApiGatewayResponse {
    info!("{} {IMMEDIATE_MESSAGE}", timestamp_prefix(clock));
    ApiGatewayResponse::ok(IMMEDIATE_RESPONSE_BODY)
}
