use authbench_core::HttpAuthorizerRequest;
use authbench_lambda::{bootstrap::LambdaArgs, handle, SimpleAuthorizer};
use clap::Parser;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    let args = LambdaArgs::parse();
    authbench_lambda::bootstrap::init_tracing(&args.log_filter);

    let config = args.authorizer_config();
    tracing::info!(delay_ms = config.delay_ms, "Starting http auth handler.");

    let authorizer = SimpleAuthorizer::new(&config);
    let authorizer = &authorizer;
    run(service_fn(
        move |event: LambdaEvent<HttpAuthorizerRequest>| async move {
            handle(authorizer, event).await
        },
    ))
    .await
}
