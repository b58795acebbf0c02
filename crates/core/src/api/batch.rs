//! Batch processing of hOCR files.
//!
//! Every file goes through read, parse, cluster, assemble and write on its own.
//! A failure in one file is recorded in its [`FileReport`] and the batch moves
//! on; only resource-level problems (the output directory, the thread pool)
//! abort a run.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::api::high_level::{Extraction, extract_grid_from_path};
use crate::error::{GridError, Result};
use crate::export::{CsvOptions, OutputFormat, write_grid_file};
use crate::table::GridParams;

/// Extension of the files picked up by [`discover_inputs`].
pub const HOCR_EXTENSION: &str = "hocr";

/// Options for a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Directory receiving one output file per input.
    pub output_dir: PathBuf,

    /// Clustering tolerances.
    pub params: GridParams,

    pub format: OutputFormat,

    pub csv: CsvOptions,

    /// Worker threads used for parsing and clustering. 1 runs sequentially.
    /// Outputs are always written in input order.
    pub threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/outputs"),
            params: GridParams::default(),
            format: OutputFormat::default(),
            csv: CsvOptions::default(),
            threads: 1,
        }
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A grid was written to `output`.
    Written {
        output: PathBuf,
        rows: usize,
        columns: usize,
        lines: usize,
        skipped: usize,
    },
    /// No valid line was found; nothing was written.
    Empty { skipped: usize },
}

#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub result: Result<FileOutcome>,
}

/// Per-file results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, Ok(FileOutcome::Written { .. })))
            .count()
    }

    pub fn empty(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, Ok(FileOutcome::Empty { .. })))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_err()).count()
    }
}

/// List the `.hocr` files directly inside `dir`, sorted by path.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source: std::io::Error| GridError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == HOCR_EXTENSION) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Output base name: the input's file stem cut at the first underscore.
///
/// `1C_5.hocr` becomes `1C`. Different inputs can share a base name and then
/// write to the same output. A stem that starts with `_` is kept whole
/// instead of truncating to an empty name that would produce a bare `.csv`.
pub fn output_stem(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.split('_').next() {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => stem,
    }
}

/// Output file for `input` inside `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("{}.{}", output_stem(input), format.extension()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn extract(input: &Path, params: &GridParams) -> Result<Extraction> {
    info!("processing {}", display_name(input));
    extract_grid_from_path(input, params)
}

fn write_extraction(
    input: &Path,
    extraction: Extraction,
    config: &BatchConfig,
) -> Result<FileOutcome> {
    let skipped = extraction.skipped.len();
    let Some(grid) = extraction.grid else {
        warn!("no lines found in {}; nothing written", display_name(input));
        return Ok(FileOutcome::Empty { skipped });
    };

    let output = output_path(input, &config.output_dir, config.format);
    write_grid_file(&grid, &output, config.format, &config.csv)?;
    info!(
        rows = grid.row_count(),
        columns = grid.column_count(),
        "table saved to {}",
        output.display()
    );
    Ok(FileOutcome::Written {
        output,
        rows: grid.row_count(),
        columns: grid.column_count(),
        lines: extraction.line_count,
        skipped,
    })
}

/// Run the whole pipeline for one file and write its output.
pub fn process_file(input: &Path, config: &BatchConfig) -> Result<FileOutcome> {
    let extraction = extract(input, &config.params)?;
    write_extraction(input, extraction, config)
}

fn report(input: &Path, result: Result<FileOutcome>) -> FileReport {
    if let Err(err) = &result {
        error!("error processing {}: {}", display_name(input), err);
    }
    FileReport {
        input: input.to_path_buf(),
        result,
    }
}

fn warn_on_collisions(inputs: &[PathBuf], config: &BatchConfig) {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    for input in inputs {
        let output = output_path(input, &config.output_dir, config.format);
        if let Some(previous) = seen.insert(output.clone(), input) {
            warn!(
                "{} and {} both map to {}; the later file overwrites the earlier one",
                display_name(previous),
                display_name(input),
                output.display()
            );
        }
    }
}

/// Create `dir` and any missing parents.
pub fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| GridError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Process every input and write its grid to `config.output_dir`.
///
/// Returns an error only when the output directory cannot be created or the
/// worker pool cannot be started. Per-file failures land in the report.
pub fn run_batch(inputs: &[PathBuf], config: &BatchConfig) -> Result<BatchReport> {
    create_output_dir(&config.output_dir)?;

    info!("found {} files to process", inputs.len());
    warn_on_collisions(inputs, config);

    let files: Vec<FileReport> = if config.threads > 1 {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .map_err(|e| GridError::ThreadPool(e.to_string()))?;
        let extractions: Vec<Result<Extraction>> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| extract(input, &config.params))
                .collect()
        });
        inputs
            .iter()
            .zip(extractions)
            .map(|(input, extraction)| {
                let result = extraction.and_then(|e| write_extraction(input, e, config));
                report(input, result)
            })
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| report(input, process_file(input, config)))
            .collect()
    };

    let batch = BatchReport { files };
    info!(
        written = batch.written(),
        empty = batch.empty(),
        failed = batch.failed(),
        "processing complete"
    );
    Ok(batch)
}
