use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::adapters::scheduler::DelayError;
use crate::context::HandlerContext;
use crate::runtime::clock::Clock;
use crate::runtime::contract::{
    deferred_completion_message, deferred_response_body, ApiGatewayResponse,
    AFTER_SCHEDULING_MESSAGE, BEFORE_SCHEDULING_MESSAGE, DEFERRED_FAILURE_MESSAGE,
};
use crate::runtime::prefix::{invocation_prefix, iso_timestamp};

/// Schedules a delayed log line and responds without waiting for it.
///
/// The body runs synchronously from entry to return; the only asynchronous
/// work is handed to the context's scheduler and never awaited. Failures of
/// that work, including panics while writing the completion line, are logged
/// at error level and never reach the response.
pub fn handle_with_deferred_task(_event: Value, context: &HandlerContext) -> ApiGatewayResponse {
    let captured_index = context.counter.next_index();
    let clock = context.clock.as_ref();

    info!(
        "{} {BEFORE_SCHEDULING_MESSAGE}",
        invocation_prefix(captured_index, clock)
    );
    let requested = iso_timestamp(clock.now());

    let task_clock = Arc::clone(&context.clock);
    let task_requested = requested.clone();
    context.scheduler.schedule(
        context.delay,
        Box::new(move |outcome: Result<(), DelayError>| {
            report_deferred_outcome(captured_index, task_clock.as_ref(), &task_requested, outcome);
        }),
    );

    info!(
        "{} {AFTER_SCHEDULING_MESSAGE}",
        invocation_prefix(captured_index, clock)
    );

    ApiGatewayResponse::ok(deferred_response_body(
        &invocation_prefix(captured_index, clock),
        &requested,
    ))
}

fn report_deferred_outcome(
    captured_index: u64,
    clock: &dyn Clock,
    requested: &str,
    outcome: Result<(), DelayError>,
) {
    let failure = match outcome {
        Ok(()) => {
            let completed = panic::catch_unwind(AssertUnwindSafe(|| {
                info!(
                    "{} {}",
                    invocation_prefix(captured_index, clock),
                    deferred_completion_message(requested)
                );
            }));
            match completed {
                Ok(()) => return,
                Err(payload) => panic_detail(payload.as_ref()),
            }
        }
        Err(failure) => failure.to_string(),
    };

    // The clock may be what failed; keep the index so the line still correlates.
    let prefix =
        panic::catch_unwind(AssertUnwindSafe(|| invocation_prefix(captured_index, clock)))
            .unwrap_or_else(|_| format!("[{captured_index}]"));
    error!("{prefix} {DEFERRED_FAILURE_MESSAGE} {failure}");
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "delayed task panicked".to_string()
    }
}
