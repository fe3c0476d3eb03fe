use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    PolicyAuthorizerResponse, PolicyDocument, PolicyStatement, SimpleAuthorizerResponse,
};

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Decision produced by an authorizer for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationDecision {
    pub principal_id: String,
    pub effect: Effect,
    pub resource: Option<String>,
    pub claims: Map<String, Value>,
}

impl AuthorizationDecision {
    pub fn allow<P: Into<String>>(
        principal_id: P,
        resource: Option<String>,
        claims: Map<String, Value>,
    ) -> Self {
        Self {
            principal_id: principal_id.into(),
            effect: Effect::Allow,
            resource,
            claims,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.effect == Effect::Allow
    }

    pub fn into_simple_response(self) -> SimpleAuthorizerResponse {
        SimpleAuthorizerResponse {
            is_authorized: self.is_authorized(),
            context: self.claims,
        }
    }

    /// Renders the IAM policy form. Without a resource there is nothing to
    /// grant, so the policy document is left out.
    pub fn into_policy_response(self) -> PolicyAuthorizerResponse {
        let policy_document = self
            .resource
            .filter(|resource| !resource.is_empty())
            .map(|resource| PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatement {
                    action: vec![INVOKE_ACTION.to_string()],
                    effect: self.effect,
                    resource: vec![resource],
                }],
            });
        PolicyAuthorizerResponse {
            principal_id: self.principal_id,
            policy_document,
            context: self.claims,
        }
    }
}
