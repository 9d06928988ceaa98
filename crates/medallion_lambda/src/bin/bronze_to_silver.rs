use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use medallion_core::contract::InvocationResponse;
use medallion_core::storage_keys::Stage;
use medallion_lambda::adapters::s3_store::S3ObjectStore;
use medallion_lambda::handlers::stage::handle_stage_event;

async fn handle_request(event: LambdaEvent<Value>) -> Result<InvocationResponse, Error> {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config));

    Ok(handle_stage_event(
        event.payload,
        Stage::BronzeToSilver,
        &store,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
