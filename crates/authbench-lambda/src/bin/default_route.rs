use authbench_lambda::{bootstrap::LambdaArgs, default_route};
use clap::Parser;
use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    let args = LambdaArgs::parse();
    authbench_lambda::bootstrap::init_tracing(&args.log_filter);

    run(service_fn(default_route)).await
}
