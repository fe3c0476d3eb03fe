use authbench_core::ProxyResponse;
use lambda_runtime::LambdaEvent;
use serde_json::Value;

pub const DEFAULT_ROUTE_BODY: &str = "Hello, from hello http api route.";

/// Route handler sitting behind the authorizers. Accepts any proxy event.
pub async fn default_route(event: LambdaEvent<Value>) -> Result<ProxyResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "default route handler hit");
    tracing::debug!(event = %payload, "route event");

    Ok(ProxyResponse {
        status_code: 200,
        body: DEFAULT_ROUTE_BODY.to_string(),
        is_base64_encoded: false,
        ..Default::default()
    })
}
