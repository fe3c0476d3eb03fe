use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkMetrics {
    pub mean_call_duration: f64,
    pub median_call_duration: f64,
    pub min_call_duration: f64,
    pub max_call_duration: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl BenchmarkMetrics {
    pub fn from_samples(samples: &[f64]) -> Result<Self, Error> {
        if samples.is_empty() {
            return Err(Error::EmptySample);
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = mean(samples);
        let variance = sample_variance(samples, mean);
        Ok(Self {
            mean_call_duration: mean,
            median_call_duration: median(&sorted),
            min_call_duration: sorted[0],
            max_call_duration: sorted[sorted.len() - 1],
            variance,
            standard_deviation: variance.sqrt(),
        })
    }
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Middle of an ascending, non-empty slice; even lengths average the two
/// middle values.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

// n - 1 divisor; a single sample has no spread
fn sample_variance(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let squared: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    squared / (samples.len() - 1) as f64
}
