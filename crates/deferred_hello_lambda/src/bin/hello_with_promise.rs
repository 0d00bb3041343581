use deferred_hello_lambda::context::HandlerContext;
use deferred_hello_lambda::handlers::deferred::handle_with_deferred_task;
use deferred_hello_lambda::runtime::contract::ApiGatewayResponse;
use deferred_hello_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    context: HandlerContext,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_with_deferred_task(event.payload, &context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let context = HandlerContext::production();
    lambda_runtime::run(service_fn(move |event| {
        handle_request(event, context.clone())
    }))
    .await
}
