use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, OneOrMany};

use super::{ApplicationConfig, HttpTarget, TargetConfig, WebSocketTarget};

#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub application: ApplicationConfig,
    /// Steady-state calls per target, not counting the initial call.
    #[serde(default = "default::calls")]
    pub calls: usize,
    #[serde(default)]
    pub on_error: ErrorPolicy,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default::targets")]
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    pub targets: Vec<TargetConfig>,
}

/// What a failed steady-state call does to the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the run on the first transport error, emitting nothing.
    #[default]
    Abort,
    /// Keep going and list the failed calls in the results.
    Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default::dir")]
    pub dir: PathBuf,
    #[serde(default = "default::label")]
    pub label: String,
    #[serde(default = "default::column")]
    pub column: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            calls: default::calls(),
            on_error: ErrorPolicy::default(),
            output: OutputConfig::default(),
            targets: default::targets(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default::dir(),
            label: default::label(),
            column: default::column(),
        }
    }
}

pub(crate) mod default {
    use std::path::PathBuf;

    use super::{HttpTarget, TargetConfig, WebSocketTarget};

    pub(crate) fn calls() -> usize {
        1000
    }
    pub(crate) fn targets() -> Vec<TargetConfig> {
        vec![
            TargetConfig::WebSocket(WebSocketTarget::default()),
            TargetConfig::Http(HttpTarget::default()),
        ]
    }
    pub(crate) fn dir() -> PathBuf {
        PathBuf::from(".")
    }
    pub(crate) fn label() -> String {
        "100ms".to_string()
    }
    pub(crate) fn column() -> String {
        "call_time".to_string()
    }
}
