use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{BenchmarkMetrics, Error};

/// Raw measurements of one benchmark run. All latencies are whole
/// milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkResults {
    pub connect_and_auth: f64,
    pub initial_call: f64,
    pub subsequent_calls: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_calls: Vec<FailedCall>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailedCall {
    pub index: usize,
    pub error: String,
}

impl BenchmarkResults {
    /// Latencies of the steady-state calls that got a response.
    pub fn successful_calls(&self) -> Vec<u64> {
        let failed: HashSet<usize> = self.failed_calls.iter().map(|f| f.index).collect();
        self.subsequent_calls
            .iter()
            .enumerate()
            .filter(|(index, _)| !failed.contains(index))
            .map(|(_, latency)| *latency)
            .collect()
    }

    pub fn metrics(&self) -> Result<BenchmarkMetrics, Error> {
        let samples: Vec<f64> = self
            .successful_calls()
            .into_iter()
            .map(|latency| latency as f64)
            .collect();
        BenchmarkMetrics::from_samples(&samples)
    }
}
