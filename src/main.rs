//! true-offset CLI
//!
//! Offsets the first polygon of a GeoJSON feature set and writes the result
//! next to it.
//!
//! Usage:
//!     true-offset --store data --input Plot --output Plot_offset --distance -5
//!     true-offset --store data --config offset.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use true_offset::error::ConfigError;
use true_offset::operations::offset::{CornerPolicy, WindingPolicy};
use true_offset::store::GeoJsonStore;
use true_offset::{OffsetConfig, OffsetPipeline, Result};

/// True mathematical (miter) offset of a polygon
#[derive(Parser)]
#[command(name = "true-offset")]
#[command(version)]
#[command(about = "Offsets polygon edges by a fixed distance, rebuilding sharp corners", long_about = None)]
struct Cli {
    /// Directory holding the `<name>.geojson` feature sets
    #[arg(short, long, default_value = ".")]
    store: PathBuf,

    /// JSON configuration file; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input feature set name
    #[arg(short, long)]
    input: Option<String>,

    /// Output feature set name (overwritten if present)
    #[arg(short, long)]
    output: Option<String>,

    /// Offset distance; positive moves edges to their left unless --winding says otherwise
    #[arg(short, long, allow_hyphen_values = true)]
    distance: Option<f64>,

    /// Interpretation of the distance sign
    #[arg(long, value_enum)]
    winding: Option<WindingArg>,

    /// What to do where adjacent offset edges are parallel
    #[arg(long, value_enum)]
    corner_policy: Option<CornerPolicyArg>,

    /// Solve corners in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum WindingArg {
    /// Positive moves every edge to its left
    AsGiven,
    /// Positive always grows the polygon
    OutwardPositive,
}

impl From<WindingArg> for WindingPolicy {
    fn from(arg: WindingArg) -> Self {
        match arg {
            WindingArg::AsGiven => Self::AsGiven,
            WindingArg::OutwardPositive => Self::OutwardPositive,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CornerPolicyArg {
    /// Drop the vertex
    Skip,
    /// Emit the midpoint of the two offset edge ends
    Midpoint,
}

impl From<CornerPolicyArg> for CornerPolicy {
    fn from(arg: CornerPolicyArg) -> Self {
        match arg {
            CornerPolicyArg::Skip => Self::Skip,
            CornerPolicyArg::Midpoint => Self::Midpoint,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<OffsetConfig> {
        let mut config = match &self.config {
            Some(path) => OffsetConfig::from_json_file(path)?,
            None => OffsetConfig::new(
                self.input.clone().ok_or(ConfigError::Missing("--input"))?,
                self.output.clone().ok_or(ConfigError::Missing("--output"))?,
                self.distance.unwrap_or(true_offset::config::DEFAULT_OFFSET_DISTANCE),
            ),
        };

        if let Some(input) = &self.input {
            config.input_location.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output_location.clone_from(output);
        }
        if let Some(distance) = self.distance {
            config.offset_distance = distance;
        }
        if let Some(winding) = self.winding {
            config.winding = winding.into();
        }
        if let Some(policy) = self.corner_policy {
            config.corner_policy = policy.into();
        }
        if self.parallel {
            config.parallel = true;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let mut store = GeoJsonStore::new(&cli.store);
    let pipeline = OffsetPipeline::new(config);

    let report = pipeline.execute_in(&mut store)?;
    let output_path = store.path_for(&pipeline.config().output_location);

    println!(
        "Offset polygon created: {} vertices in, {} corners out ({} skipped, {} substituted)",
        report.input_vertices, report.corners, report.skipped, report.fallbacks
    );
    println!("Output saved at: {}", output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
