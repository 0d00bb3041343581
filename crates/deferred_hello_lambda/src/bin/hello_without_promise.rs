use deferred_hello_lambda::handlers::immediate::handle_without_deferred_task;
use deferred_hello_lambda::runtime::clock::SystemClock;
use deferred_hello_lambda::runtime::contract::ApiGatewayResponse;
use deferred_hello_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_without_deferred_task(event.payload, &SystemClock))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    lambda_runtime::run(service_fn(handle_request)).await
}
