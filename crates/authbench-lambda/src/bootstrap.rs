use authbench_core::{AuthorizerConfig, DelayParse};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Process settings shared by the Lambda binaries. Every flag falls back to
/// an environment variable, which is how the functions are configured when
/// deployed.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct LambdaArgs {
    /// Kept as a raw string: an unparsable value must not stop the function.
    #[arg(long = "delay-milliseconds", env = "DELAY_MILLISECONDS")]
    pub delay_milliseconds: Option<String>,

    #[arg(
        long = "delay-parse",
        env = "DELAY_PARSE",
        value_enum,
        default_value_t = DelayParse::Standard
    )]
    pub delay_parse: DelayParse,

    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value_t = String::from("info")
    )]
    pub log_filter: String,
}

impl LambdaArgs {
    pub fn authorizer_config(&self) -> AuthorizerConfig {
        AuthorizerConfig::from_raw(self.delay_milliseconds.as_deref(), self.delay_parse)
    }
}

/// CloudWatch stamps every line already, so no timestamps or colors here.
pub fn init_tracing(filter: &str) {
    let env_filter = filter
        .parse::<EnvFilter>()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
