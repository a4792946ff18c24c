use claims_api::{handlers::user_info, telemetry, ApiConfig, ProxyRequest, ProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    let config = ApiConfig::from_env();
    let config = &config;

    let func = service_fn(move |event| async move { func(config, event).await });
    lambda_runtime::run(func).await?;
    Ok(())
}

async fn func(config: &ApiConfig, event: LambdaEvent<ProxyRequest>) -> Result<ProxyResponse, Error> {
    let (request, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "user info");

    Ok(user_info::respond(config, &request))
}
