//! hocr2csv - Rebuild tables from hOCR files
//!
//! A command line tool that clusters the `ocr_line` boxes of hOCR documents
//! into rows and columns and writes one CSV (or JSON) grid per document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use hocr_grid_core::api::{
    BatchConfig, BatchReport, FileOutcome, HOCR_EXTENSION, create_output_dir, discover_inputs,
    run_batch,
};
use hocr_grid_core::export::{CsvOptions, OutputFormat};
use hocr_grid_core::table::{DEFAULT_EPS_X, DEFAULT_EPS_Y, GridParams};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Output type for the reconstructed grid.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Comma-separated values (default)
    #[default]
    Csv,
    /// JSON with row ids, column ids and cells
    Json,
}

impl From<OutputType> for OutputFormat {
    fn from(value: OutputType) -> Self {
        match value {
            OutputType::Csv => OutputFormat::Csv,
            OutputType::Json => OutputFormat::Json,
        }
    }
}

/// Rebuild tables from hOCR files by clustering line positions into rows and
/// columns.
#[derive(Parser, Debug)]
#[command(name = "hocr2csv")]
#[command(version, about, long_about = None)]
struct Args {
    /// hOCR files, or directories scanned for *.hocr files
    #[arg(default_value = "data/hOCR")]
    paths: Vec<PathBuf>,

    /// Directory where output files are written
    #[arg(short = 'o', long = "output-dir", default_value = "data/outputs")]
    output_dir: PathBuf,

    /// Vertical tolerance for grouping lines into rows
    #[arg(long = "eps-y", default_value_t = DEFAULT_EPS_Y)]
    eps_y: f64,

    /// Horizontal tolerance for grouping left edges into columns
    #[arg(long = "eps-x", default_value_t = DEFAULT_EPS_X)]
    eps_x: f64,

    /// Type of output to generate
    #[arg(short = 't', long = "format", value_enum, default_value = "csv")]
    output_type: OutputType,

    /// Omit the column-id header record from CSV output
    #[arg(long = "no-header", action = ArgAction::SetTrue)]
    no_header: bool,

    /// Do not start CSV output with a UTF-8 byte order mark
    #[arg(long = "no-bom", action = ArgAction::SetTrue)]
    no_bom: bool,

    /// Number of worker threads (1 = sequential)
    #[arg(short = 'j', long, default_value_t = 1)]
    threads: usize,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Directories are scanned. A missing path is scanned too unless it names a
/// .hocr file, so a missing input directory fails the run.
fn is_scan_target(path: &Path) -> bool {
    if path.exists() {
        return path.is_dir();
    }
    path.extension().is_none_or(|ext| ext != HOCR_EXTENSION)
}

/// Expand directories into the .hocr files they contain; keep files as given.
fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if is_scan_target(path) {
            let found = discover_inputs(path)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            if found.is_empty() {
                error!("no .hocr files found in {}", path.display());
            }
            inputs.extend(found);
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}

fn build_config(args: &Args) -> Result<BatchConfig> {
    let params = GridParams::new(args.eps_y, args.eps_x)?;
    Ok(BatchConfig {
        output_dir: args.output_dir.clone(),
        params,
        format: args.output_type.into(),
        csv: CsvOptions {
            header: !args.no_header,
            bom: !args.no_bom,
        },
        threads: args.threads.max(1),
    })
}

/// Prepare the output directory, gather inputs and run the batch.
///
/// Returns `None` when there was nothing to process.
fn run(args: &Args) -> Result<Option<BatchReport>> {
    let config = build_config(args)?;
    create_output_dir(&config.output_dir)?;

    let inputs = collect_inputs(&args.paths)?;
    if inputs.is_empty() {
        return Ok(None);
    }

    info!("starting hOCR processing");
    let report = run_batch(&inputs, &config)
        .with_context(|| format!("Batch into {} failed", config.output_dir.display()))?;
    Ok(Some(report))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let Some(report) = run(&args)? else {
        return Ok(());
    };

    for file in &report.files {
        if let Ok(FileOutcome::Written { skipped, .. }) = &file.result
            && *skipped > 0
        {
            info!(
                "{}: {} line(s) skipped while parsing",
                file.input.display(),
                skipped
            );
        }
    }

    info!(
        "done: {} written, {} empty, {} failed",
        report.written(),
        report.empty(),
        report.failed()
    );
    Ok(())
}
