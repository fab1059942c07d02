use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use elo_maluco_rs::image_pipeline::{
    ClassifierConfig, TokenPipeline, WidthPolicy,
    classify::{DEFAULT_CUT_WIDTH, DEFAULT_TARGET_HEIGHT},
};
use elo_maluco_rs::logger;

use tracing::{error, info};

const DEFAULT_INPUTS: [&str; 4] = [
    "data/Ex_input03_01.png",
    "data/Ex_input03_02.png",
    "data/Ex_input03_03.png",
    "data/Ex_input03_04.png",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliWidthPolicy {
    /// Keep the cropped token's proportions.
    Crop,
    /// Derive width from the whole photo, as older reports did.
    Source,
}

impl From<CliWidthPolicy> for WidthPolicy {
    fn from(policy: CliWidthPolicy) -> Self {
        match policy {
            CliWidthPolicy::Crop => WidthPolicy::FromCrop,
            CliWidthPolicy::Source => WidthPolicy::FromSource,
        }
    }
}

#[derive(Parser)]
#[command(name = "elo_maluco")]
#[command(about = "Classify photographed token faces into color/position codes")]
#[command(version)]
struct Cli {
    /// Images to classify, in report order.
    images: Vec<PathBuf>,

    /// Report destination; a numeric suffix is added if it already exists.
    #[arg(long, default_value = "output/output.xml")]
    output: PathBuf,

    /// Height every token is rescaled to.
    #[arg(long, default_value_t = DEFAULT_TARGET_HEIGHT)]
    height: u32,

    /// Width of the central strip used for texture analysis.
    #[arg(long, default_value_t = DEFAULT_CUT_WIDTH)]
    cut_width: u32,

    /// Aspect ratio used for the canonical width.
    #[arg(long, value_enum, default_value = "crop")]
    width_policy: CliWidthPolicy,

    /// Stop at the first image that cannot be classified.
    #[arg(long)]
    fail_fast: bool,

    /// Log filter used when RUST_LOG is unset, e.g. `debug` for stage timings.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_level);

    let images = if cli.images.is_empty() {
        DEFAULT_INPUTS.into_iter().map(PathBuf::from).collect()
    } else {
        cli.images
    };

    let config = ClassifierConfig::builder()
        .target_height(cli.height)
        .cut_width(cli.cut_width)
        .width_policy(cli.width_policy.into())
        .fail_fast(cli.fail_fast)
        .build();
    let pipeline = TokenPipeline::new(config).context("invalid classifier settings")?;

    info!("Token pipeline initialized");
    info!(
        "Canonical height: {}, cut width: {}, width policy: {:?}",
        pipeline.config().target_height,
        pipeline.config().cut_width,
        pipeline.config().width_policy
    );

    let report = pipeline
        .classify_batch(&images)
        .context("batch classification aborted")?;

    println!("\nResult matrix:");
    for row in &report.matrix {
        println!("{row}");
    }
    for failure in &report.failures {
        error!(
            "Image #{} ({}) failed: {}",
            failure.index,
            failure.path.display(),
            failure.error
        );
    }

    let written = pipeline
        .save_report(&report.matrix, &cli.output)
        .with_context(|| format!("could not save report to {}", cli.output.display()))?;
    println!("Results saved to {}", written.display());

    Ok(())
}
