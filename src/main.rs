use amanoba_email::{audit, config::EmailConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Render every email flow for every locale and report text written in the
/// wrong script.
#[derive(Parser, Debug)]
#[command(name = "language-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory for the timestamped JSON report
    #[arg(long, env = "LANGUAGE_AUDIT_OUT_DIR", default_value = "reports/language-integrity")]
    out_dir: PathBuf,

    /// Directory for the timestamped Markdown task list
    #[arg(long, env = "LANGUAGE_AUDIT_TASKLIST_DIR", default_value = "docs/tasks")]
    tasklist_dir: PathBuf,
}

fn main() -> Result<()> {
    // Load .env file (ignored when missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging. stdout is reserved for the summary JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("amanoba_email=info".parse()?)
                .add_directive("language_audit=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting language integrity audit");

    let config = EmailConfig::from_env();
    let report = audit::run_audit(&config).context("Language integrity audit failed")?;

    let json_path = report
        .write_json(&cli.out_dir)
        .context("Failed to write audit report")?;
    let tasklist_path = report
        .write_tasklist(&cli.tasklist_dir)
        .context("Failed to write audit task list")?;

    let summary = serde_json::json!({
        "passed": report.passed(),
        "total_findings": report.summary.total_findings,
        "checked_texts": report.summary.checked_texts,
        "by_locale": report.summary.by_locale,
        "by_flow": report.summary.by_flow,
        "metrics": report.summary.metrics,
        "report": json_path.display().to_string(),
        "tasklist": tasklist_path.display().to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // Findings are advisory; exit code only reflects I/O problems
    Ok(())
}
