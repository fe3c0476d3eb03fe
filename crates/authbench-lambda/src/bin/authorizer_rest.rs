use authbench_core::PolicyAuthorizerRequest;
use authbench_lambda::{bootstrap::LambdaArgs, handle, PolicyAuthorizer};
use clap::Parser;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    let args = LambdaArgs::parse();
    authbench_lambda::bootstrap::init_tracing(&args.log_filter);

    let config = args.authorizer_config();
    tracing::info!(
        delay_ms = config.delay_ms,
        delay_parse = ?config.delay_parse,
        "Starting auth handler."
    );

    let authorizer = PolicyAuthorizer::new(&config);
    let authorizer = &authorizer;
    run(service_fn(
        move |event: LambdaEvent<PolicyAuthorizerRequest>| async move {
            handle(authorizer, event).await
        },
    ))
    .await
}
