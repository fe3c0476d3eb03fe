mod authorizer_policy;
mod authorizer_simple;
pub mod bootstrap;
mod default_route;

pub use authorizer_policy::*;
pub use authorizer_simple::*;
pub use default_route::*;

use authbench_core::GeneralAuthorizer;
use lambda_runtime::LambdaEvent;

/// Lambda entry shared by the authorizer binaries.
pub async fn handle<A>(
    authorizer: &A,
    event: LambdaEvent<A::Request>,
) -> Result<A::Response, lambda_runtime::Error>
where
    A: GeneralAuthorizer,
{
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "auth handler hit");
    Ok(authorizer.authorize(payload).await)
}
