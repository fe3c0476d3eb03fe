use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use authbench_core::{BenchmarkResults, Error, OutputConfig};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Writes each run as `<name>_performance_<label>.json` plus a one-column
/// `<name>_performance_call_times_<label>_auth_delay.csv`.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    dir: PathBuf,
    label: String,
    column: String,
}

impl ResultWriter {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            dir: output.dir.clone(),
            label: output.label.clone(),
            column: output.column.clone(),
        }
    }

    pub fn json_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}_performance_{}.json", name, self.label))
    }

    pub fn csv_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!(
            "{}_performance_call_times_{}_auth_delay.csv",
            name, self.label
        ))
    }

    pub fn write_json(results: &BenchmarkResults, path: &Path) -> Result<(), Error> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        results.serialize(&mut ser)?;
        fs::write(path, buf)?;
        Ok(())
    }

    /// Only the steady-state latencies, one per line under a header.
    pub fn write_csv(results: &BenchmarkResults, path: &Path, column: &str) -> Result<(), Error> {
        let mut csv = String::with_capacity(column.len() + 1 + results.subsequent_calls.len() * 4);
        csv.push_str(column);
        csv.push('\n');
        for timing in &results.subsequent_calls {
            let _ = writeln!(csv, "{}", timing);
        }
        fs::write(path, csv)?;
        Ok(())
    }

    /// Writes both files. Failures are logged and otherwise ignored so a
    /// finished run is never thrown away over a file error.
    pub fn write_all(&self, name: &str, results: &BenchmarkResults) {
        let json_path = self.json_path(name);
        match Self::write_json(results, &json_path) {
            Ok(()) => tracing::info!(path = %json_path.display(), "results written"),
            Err(err) => tracing::warn!(path = %json_path.display(), error = %err, "failed to write results"),
        }
        let csv_path = self.csv_path(name);
        match Self::write_csv(results, &csv_path, &self.column) {
            Ok(()) => tracing::info!(path = %csv_path.display(), "call times written"),
            Err(err) => tracing::warn!(path = %csv_path.display(), error = %err, "failed to write call times"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(dir: &Path) -> OutputConfig {
        OutputConfig {
            dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn file_names_follow_label() {
        let writer = ResultWriter::new(&output(Path::new("/tmp/out")));
        assert_eq!(
            writer.json_path("websocket"),
            PathBuf::from("/tmp/out/websocket_performance_100ms.json")
        );
        assert_eq!(
            writer.csv_path("httpapi"),
            PathBuf::from("/tmp/out/httpapi_performance_call_times_100ms_auth_delay.csv")
        );
    }

    #[test]
    fn csv_has_header_plus_one_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calls.csv");
        let results = BenchmarkResults {
            subsequent_calls: vec![101, 99, 250],
            ..Default::default()
        };
        ResultWriter::write_csv(&results, &path, "call_time").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "call_time\n101\n99\n250\n");
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn json_uses_single_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = BenchmarkResults {
            connect_and_auth: 1.0,
            initial_call: 2.0,
            subsequent_calls: vec![3],
            ..Default::default()
        };
        ResultWriter::write_json(&results, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n \"ConnectAndAuth\": 1.0,"));
        let decoded: BenchmarkResults = serde_json::from_str(&content).unwrap();
        assert_eq!(decoded, results);
    }

    #[test]
    fn write_all_swallows_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ResultWriter::new(&output(&dir.path().join("missing")));
        writer.write_all("websocket", &BenchmarkResults::default());
        assert!(!writer.json_path("websocket").exists());
    }
}
