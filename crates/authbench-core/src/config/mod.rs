pub mod application;
pub mod authorizer;
pub mod benchmark;
pub mod target;

pub use application::ApplicationConfig;
pub use authorizer::{AuthorizerConfig, DelayParse};
pub use benchmark::{BenchmarkConfig, ErrorPolicy, OutputConfig};
pub use target::{HttpTarget, TargetConfig, WebSocketTarget};
