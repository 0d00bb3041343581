use deferred_hello_lambda::config::HandlerKind;
use deferred_hello_lambda::context::HandlerContext;
use deferred_hello_lambda::handlers::handle_event;
use deferred_hello_lambda::runtime::contract::ApiGatewayResponse;
use deferred_hello_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

async fn handle_request(
    event: LambdaEvent<Value>,
    kind: HandlerKind,
    context: HandlerContext,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_event(kind, event.payload, &context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let kind = HandlerKind::from_env()?;
    info!("serving {}", kind.function_name());

    let context = HandlerContext::production();
    lambda_runtime::run(service_fn(move |event| {
        handle_request(event, kind, context.clone())
    }))
    .await
}
