use std::time::Duration;

use authbench_core::{
    AuthorizationDecision, AuthorizerConfig, GeneralAuthorizer, PolicyAuthorizerRequest,
    PolicyAuthorizerResponse,
};
use serde_json::{json, Map, Value};

pub const POLICY_PRINCIPAL: &str = "user";

/// REST / WebSocket API authorizer answering with an IAM policy that allows
/// invoking the requested method.
#[derive(Debug, Clone)]
pub struct PolicyAuthorizer {
    delay: Duration,
}

impl PolicyAuthorizer {
    pub fn new(config: &AuthorizerConfig) -> Self {
        Self {
            delay: config.delay(),
        }
    }

    /// Context values must be strings, numbers or booleans for this
    /// authorizer type.
    pub fn claims() -> Map<String, Value> {
        let mut claims = Map::new();
        claims.insert("stringKey".to_string(), json!("stringval"));
        claims.insert("numberKey".to_string(), json!(123));
        claims.insert("booleanKey".to_string(), json!(true));
        claims
    }
}

impl GeneralAuthorizer for PolicyAuthorizer {
    type Request = PolicyAuthorizerRequest;
    type Response = PolicyAuthorizerResponse;

    async fn authorize(&self, request: PolicyAuthorizerRequest) -> PolicyAuthorizerResponse {
        tracing::debug!(event = ?request, "policy authorizer event");

        let decision =
            AuthorizationDecision::allow(POLICY_PRINCIPAL, request.method_arn, Self::claims());

        tokio::time::sleep(self.delay).await;

        let response = decision.into_policy_response();
        tracing::debug!(policy = ?response, "policy");
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authbench_core::Effect;

    #[tokio::test]
    async fn grants_invoke_on_method_arn() {
        let authorizer = PolicyAuthorizer::new(&AuthorizerConfig::default());
        let arn = "arn:aws:execute-api:us-east-1:123456789012:abc/v1/$connect";
        let response = authorizer
            .authorize(PolicyAuthorizerRequest {
                kind: Some("TOKEN".to_string()),
                authorization_token: Some("1234".to_string()),
                method_arn: Some(arn.to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(response.principal_id, "user");
        let document = response.policy_document.unwrap();
        assert_eq!(document.version, "2012-10-17");
        assert_eq!(document.statement.len(), 1);
        assert_eq!(document.statement[0].effect, Effect::Allow);
        assert_eq!(document.statement[0].action, ["execute-api:Invoke"]);
        assert_eq!(document.statement[0].resource, [arn]);
        assert_eq!(response.context["numberKey"], 123);
        assert_eq!(response.context["booleanKey"], true);
    }

    #[tokio::test]
    async fn missing_method_arn_drops_policy_document() {
        let authorizer = PolicyAuthorizer::new(&AuthorizerConfig::default());
        let response = authorizer.authorize(PolicyAuthorizerRequest::default()).await;
        assert_eq!(response.principal_id, "user");
        assert!(response.policy_document.is_none());
        assert_eq!(response.context["stringKey"], "stringval");
    }
}
