//! High-level API module for hOCR table reconstruction.
//!
//! # Example
//!
//! ```ignore
//! use hocr_grid_core::api::{extract_grid, BatchConfig, run_batch, discover_inputs};
//!
//! let markup = std::fs::read_to_string("scan_1.hocr")?;
//! let extraction = extract_grid(&markup, &Default::default())?;
//!
//! let inputs = discover_inputs("data/hOCR".as_ref())?;
//! let report = run_batch(&inputs, &BatchConfig::default())?;
//! ```

pub mod batch;
pub mod high_level;

// Re-export for convenience
pub use batch::{
    BatchConfig, BatchReport, FileOutcome, FileReport, HOCR_EXTENSION, create_output_dir,
    discover_inputs, output_path, output_stem, process_file, run_batch,
};
pub use high_level::{Extraction, extract_grid, extract_grid_from_path};
