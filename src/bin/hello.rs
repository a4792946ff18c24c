use claims_api::{handlers::hello, telemetry, ApiConfig, ProxyRequest, ProxyResponse};
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
    tracing::info!(
        request_id = %context.request_id,
        method = request.http_method.as_deref().unwrap_or_default(),
        "hello"
    );

    Ok(hello::respond(config, &request, &context.request_id))
}
