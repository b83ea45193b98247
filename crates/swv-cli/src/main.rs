//! SWV toolkit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use swv_analysis::{BaselineEstimator, find_peak};
use swv_core::{BaselineModel, PeakReport, SweepResult};
use swv_sim::{SwvParameters, simulate_sweep};

mod report;
mod series_csv;

#[derive(Parser)]
#[command(name = "swv")]
#[command(about = "Square-wave voltammetry simulation and peak analysis")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a square-wave sweep and persist it as CSV
    Simulate {
        /// Output CSV path (Vstep/Idif columns plus a units row; currents in uA)
        #[arg(short, long)]
        output: PathBuf,

        /// JSON parameter file; omitted fields fall back to the reference defaults
        #[arg(long)]
        params: Option<PathBuf>,
    },

    /// Baseline-correct a persisted sweep and report its peak
    Analyze {
        /// Input CSV written by `swv simulate`
        #[arg(short, long)]
        input: PathBuf,

        /// Sliding-window size for the baseline search (samples)
        #[arg(long, default_value = "10")]
        window: usize,

        /// Fraction of the series searched for the baseline, in (0, 1]
        #[arg(long, default_value = "0.4")]
        search_fraction: f64,

        /// Output file for the analysis artifact (pretty JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate and analyze in one run without touching disk
    Run {
        /// JSON parameter file; omitted fields fall back to the reference defaults
        #[arg(long)]
        params: Option<PathBuf>,

        /// Sliding-window size for the baseline search (samples)
        #[arg(long, default_value = "10")]
        window: usize,

        /// Fraction of the series searched for the baseline, in (0, 1]
        #[arg(long, default_value = "0.4")]
        search_fraction: f64,

        /// Output file for the analysis artifact (pretty JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Analysis artifact written with `--output`.
#[derive(Debug, Clone, Serialize)]
struct AnalysisArtifact {
    baseline: BaselineModel,
    peak: PeakReport,
}

fn load_params(path: Option<&Path>) -> Result<SwvParameters> {
    let params = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read parameter file {}", p.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse parameter file {}", p.display()))?
        }
        None => SwvParameters::default(),
    };
    Ok(params)
}

/// Run baseline + peak extraction on a microamp series and print the report.
fn analyze_series(
    series: &SweepResult,
    window: usize,
    search_fraction: f64,
    output: Option<&Path>,
) -> Result<()> {
    let baseline = BaselineEstimator::new(window, search_fraction).fit(series)?;
    tracing::debug!(
        slope = baseline.slope,
        intercept = baseline.intercept,
        r_squared = baseline.r_squared,
        "baseline fitted"
    );
    let peak = find_peak(series, &baseline)?;

    print!("{}", report::render(&baseline, &peak));

    if let Some(path) = output {
        let artifact = AnalysisArtifact { baseline, peak };
        let json = serde_json::to_string_pretty(&artifact)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "analysis artifact written");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Simulate { output, params } => {
            let params = load_params(params.as_deref())?;
            let sweep = simulate_sweep(&params)?;
            tracing::info!(samples = sweep.len(), "sweep complete");
            series_csv::write_series(&output, &sweep.to_microamps())?;
            tracing::info!(path = %output.display(), "sweep written");
        }
        Commands::Analyze { input, window, search_fraction, output } => {
            let series = series_csv::read_series(&input)?;
            tracing::info!(samples = series.len(), path = %input.display(), "series loaded");
            analyze_series(&series, window, search_fraction, output.as_deref())?;
        }
        Commands::Run { params, window, search_fraction, output } => {
            let params = load_params(params.as_deref())?;
            let sweep = simulate_sweep(&params)?;
            tracing::info!(samples = sweep.len(), "sweep complete");
            analyze_series(&sweep.to_microamps(), window, search_fraction, output.as_deref())?;
        }
    }
    Ok(())
}
