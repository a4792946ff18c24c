use claims_api::{handlers::health, telemetry, ApiConfig, ProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    let config = ApiConfig::from_env();
    let config = &config;

    let func = service_fn(move |event| async move { func(config, event).await });
    lambda_runtime::run(func).await?;
    Ok(())
}

async fn func(config: &ApiConfig, event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let (_event, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "health check");

    Ok(health::respond(config))
}
