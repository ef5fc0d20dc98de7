use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use seia_core::ScreeningInput;
use seia_engine::ScreeningOutcome;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod display;

#[derive(Parser)]
#[command(name = "seia", version, about = "Art. 11 screening for mining proposals under the Chilean SEIA")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Screen a proposal: triggers, alerts, and pathway recommendation.
    Screen {
        /// Screening input JSON (spatial report + project attributes).
        input: PathBuf,
        /// Emit the outcome as JSON instead of the card view.
        #[arg(long)]
        json: bool,
        /// Write classification.json and alerts.json into this directory.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Screen { input, json, out } => screen(&input, json, out.as_deref()),
    }
}

fn screen(input: &Path, json: bool, out: Option<&Path>) -> anyhow::Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("reading screening input {}", input.display()))?;
    let parsed = ScreeningInput::from_json(&raw)
        .with_context(|| format!("parsing screening input {}", input.display()))?;

    info!(
        features = parsed.report.feature_count(),
        "screening proposal"
    );
    let outcome = seia_engine::screen(&parsed.report, &parsed.attributes);
    info!(
        pathway = outcome.classification.pathway.as_str(),
        confidence = outcome.classification.confidence,
        alerts = outcome.alerts.len(),
        "screening complete"
    );

    if let Some(dir) = out {
        write_artifacts(dir, &outcome)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display::print_screening(&outcome);
    }

    Ok(())
}

/// The classification and the alert list are independent artifacts, so
/// they land in separate files.
fn write_artifacts(dir: &Path, outcome: &ScreeningOutcome) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let classification = dir.join("classification.json");
    fs::write(
        &classification,
        serde_json::to_string_pretty(&outcome.classification)?,
    )
    .with_context(|| format!("writing {}", classification.display()))?;

    let alerts = dir.join("alerts.json");
    fs::write(&alerts, serde_json::to_string_pretty(&outcome.alerts)?)
        .with_context(|| format!("writing {}", alerts.display()))?;

    info!(dir = %dir.display(), "wrote classification.json and alerts.json");
    Ok(())
}
