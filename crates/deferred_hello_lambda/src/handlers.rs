pub mod deferred;
pub mod immediate;

use serde_json::Value;

use crate::config::HandlerKind;
use crate::context::HandlerContext;
use crate::runtime::contract::ApiGatewayResponse;

/// Routes one event to the handler selected at start-up.
pub fn handle_event(
    kind: HandlerKind,
    event: Value,
    context: &HandlerContext,
) -> ApiGatewayResponse {
    match kind {
        HandlerKind::WithPromise => deferred::handle_with_deferred_task(event, context),
        HandlerKind::WithoutPromise => {
            immediate::handle_without_deferred_task(event, context.clock.as_ref())
        }
    }
}
