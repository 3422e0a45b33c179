//! Headless report: prints the per-joint maximum and the full deviation
//! report as JSON.
//!
//! Usage: `joint_report [LOG_PATH]`. Without an argument the configured log
//! path is used.

use anyhow::Context;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use jointlog::analysis::analyze_file;
use jointlog::settings::AnalysisSettings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => AnalysisSettings::load().log_path(),
    };

    let report = analyze_file(&path)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    println!("{}", report.summary_line());
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );

    Ok(())
}
