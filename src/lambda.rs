#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use shipping_quote::http::gateway::{handle_gateway, GatewayRequest, GatewayResponse};
#[cfg(feature = "lambda")]
use shipping_quote::utils::logger;
#[cfg(feature = "lambda")]
use shipping_quote::{QuoteEngine, ShippingEstimator};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: Arc<QuoteEngine<ShippingEstimator>>,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        method = event.payload.method(),
        "Shipping quote invocation"
    );

    // 任何錯誤都回傳預設運費，不會回傳錯誤狀態
    Ok(handle_gateway(&event.payload, &engine))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let engine = Arc::new(QuoteEngine::new(ShippingEstimator::new()));

    run(service_fn(move |event: LambdaEvent<GatewayRequest>| {
        let engine = Arc::clone(&engine);
        async move { function_handler(engine, event).await }
    }))
    .await
}
