use std::time::Instant;

use authbench_core::{
    BenchmarkConfig, BenchmarkResults, Error, ErrorPolicy, FailedCall, GeneralTransport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub calls: usize,
    pub on_error: ErrorPolicy,
}

impl From<&BenchmarkConfig> for RunnerConfig {
    fn from(config: &BenchmarkConfig) -> Self {
        Self {
            calls: config.calls,
            on_error: config.on_error,
        }
    }
}

/// Sequential round-trip timer: handshake, one initial call, then
/// `calls` steady-state calls on the same transport.
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub async fn run<T: GeneralTransport>(&self, transport: &mut T) -> Result<BenchmarkResults, Error> {
        let mut results = BenchmarkResults {
            subsequent_calls: Vec::with_capacity(self.config.calls),
            ..Default::default()
        };

        let started = Instant::now();
        transport.connect().await?;
        if transport.has_handshake() {
            results.connect_and_auth = elapsed_ms(started) as f64;
        }

        let started = Instant::now();
        transport.round_trip().await?;
        results.initial_call = elapsed_ms(started) as f64;
        tracing::debug!(
            transport = transport.name(),
            connect_and_auth = results.connect_and_auth,
            initial_call = results.initial_call,
            "warm-up done"
        );

        for index in 0..self.config.calls {
            let started = Instant::now();
            let outcome = transport.round_trip().await;
            let elapsed = elapsed_ms(started);
            if let Err(err) = outcome {
                match self.config.on_error {
                    ErrorPolicy::Abort => return Err(err),
                    ErrorPolicy::Record => {
                        tracing::warn!(transport = transport.name(), index, error = %err, "call failed");
                        results.failed_calls.push(FailedCall {
                            index,
                            error: err.to_string(),
                        });
                    }
                }
            }
            results.subsequent_calls.push(elapsed);
            if (index + 1) % 100 == 0 {
                tracing::debug!(transport = transport.name(), completed = index + 1, "progress");
            }
        }

        Ok(results)
    }
}

// truncated to whole milliseconds
fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
