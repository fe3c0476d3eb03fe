use std::time::Duration;

use authbench_core::{
    AuthorizationDecision, AuthorizerConfig, GeneralAuthorizer, HttpAuthorizerRequest,
    SimpleAuthorizerResponse, TokenPlacement,
};
use serde_json::{json, Map, Value};

pub const SIMPLE_PRINCIPAL: &str = "some_user";

/// HTTP API authorizer answering in the simple response format.
#[derive(Debug, Clone)]
pub struct SimpleAuthorizer {
    delay: Duration,
    identity: TokenPlacement,
}

impl SimpleAuthorizer {
    pub fn new(config: &AuthorizerConfig) -> Self {
        Self {
            delay: config.delay(),
            identity: TokenPlacement::Header("Authorization".to_string()),
        }
    }

    pub fn claims() -> Map<String, Value> {
        let mut claims = Map::new();
        claims.insert("username".to_string(), json!(SIMPLE_PRINCIPAL));
        claims.insert("permissions".to_string(), json!(["Admin", "Write"]));
        claims
    }
}

impl GeneralAuthorizer for SimpleAuthorizer {
    type Request = HttpAuthorizerRequest;
    type Response = SimpleAuthorizerResponse;

    async fn authorize(&self, request: HttpAuthorizerRequest) -> SimpleAuthorizerResponse {
        tracing::debug!(event = ?request, "http authorizer event");
        let token = self
            .identity
            .extract(request.headers.as_ref(), request.raw_query_string.as_deref())
            .or_else(|| request.identity_source.first().cloned());
        tracing::debug!(token_present = token.is_some(), "identity source");

        let decision =
            AuthorizationDecision::allow(SIMPLE_PRINCIPAL, request.route_arn, Self::claims());

        // stands in for jwks lookups or entitlement resolution
        tracing::info!("Sleeping for {}ms..", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        tracing::info!("Slept.");

        decision.into_simple_response()
    }
}
