use anyhow::{Context, Result};
use authbench_core::{BenchmarkConfig, BenchmarkResults};
use authbench_runner::{ResultWriter, Runner, RunnerConfig, Transport};
use figment::{
    providers::{Format, Json as FigmentJson, Serialized},
    Figment,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::utils::prune_unset;

use super::command::{SubcommandMetrics, SubcommandRun};

pub async fn run(cli: &SubcommandRun) -> Result<()> {
    let config = load_config(cli)?;

    let env_filter = config
        .application
        .log_filter
        .as_deref()
        .unwrap_or("info")
        .parse::<EnvFilter>()
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(env_filter)
        .init();
    tracing::info!("{}", serde_json::to_string_pretty(&config)?);

    let client = reqwest::ClientBuilder::new()
        .build()
        .context("Failed to build http client")?;
    let runner = Runner::new(RunnerConfig::from(&config));
    let writer = ResultWriter::new(&config.output);

    for target in &config.targets {
        tracing::info!(
            "Running {} tests, {} iterations.",
            target.name(),
            config.calls + 1
        );
        let mut transport = Transport::from_target(target, &client)
            .with_context(|| format!("Invalid target {}", target.name()))?;
        let results = runner
            .run(&mut transport)
            .await
            .with_context(|| format!("Benchmark of {} failed", target.name()))?;

        print_metrics(target.name(), &results);
        writer.write_all(target.name(), &results);
    }

    Ok(())
}

pub fn metrics(cli: &SubcommandMetrics) -> Result<()> {
    let content = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let results: BenchmarkResults =
        serde_json::from_str(&content).context("Failed to parse benchmark results")?;
    let metrics = results
        .metrics()
        .context("Failed to compute metrics")?;
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}

fn print_metrics(name: &str, results: &BenchmarkResults) {
    match results.metrics() {
        Ok(metrics) => match serde_json::to_string_pretty(&metrics) {
            Ok(rendered) => println!("{}\n{}", name, rendered),
            Err(err) => tracing::warn!(error = %err, "failed to render metrics"),
        },
        Err(err) => tracing::warn!(target_name = name, error = %err, "no metrics"),
    }
    if !results.failed_calls.is_empty() {
        tracing::warn!(
            target_name = name,
            failed = results.failed_calls.len(),
            "some calls failed"
        );
    }
}

pub(crate) fn load_config(cli: &SubcommandRun) -> Result<BenchmarkConfig> {
    let configfile = cli.configfile.clone().map(FigmentJson::file);
    let mut figment = Figment::new()
        .merge(Serialized::defaults(BenchmarkConfig::default()))
        .merge(configfile.unwrap_or(FigmentJson::string("{}")));
    if let Some(overrides) = cli_overrides(cli) {
        figment = figment.merge(Serialized::defaults(overrides));
    }
    let mut config: BenchmarkConfig = figment
        .extract()
        .context("Failed to load configuration")?;

    if let Some(only) = &cli.only {
        config.targets.retain(|target| only.iter().any(|name| name == target.name()));
        anyhow::ensure!(
            !config.targets.is_empty(),
            "No configured target matches {:?}",
            only
        );
    }
    Ok(config)
}

fn cli_overrides(cli: &SubcommandRun) -> Option<serde_json::Value> {
    prune_unset(json!({
        "application": {
            "log_filter": cli.log_filter,
        },
        "calls": cli.calls,
        "on_error": cli.on_error,
        "output": {
            "dir": cli.output_dir,
            "label": cli.label,
        },
    }))
}
