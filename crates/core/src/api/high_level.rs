//! One-call grid extraction from hOCR markup.

use std::path::Path;

use crate::error::{GridError, Result};
use crate::hocr::{ParsedLines, SkippedLine, parse_hocr};
use crate::table::{Grid, GridParams, build_grid};

/// Grid extracted from one hOCR document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// `None` when the document has no valid line.
    pub grid: Option<Grid>,
    /// Number of lines that went into the grid.
    pub line_count: usize,
    pub skipped: Vec<SkippedLine>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.grid.is_none()
    }
}

/// Parse hOCR markup and reconstruct its table.
///
/// # Arguments
/// * `markup` - hOCR document contents
/// * `params` - clustering tolerances
///
/// # Returns
/// The grid (absent for documents without any valid line) together with the
/// lines that were dropped while parsing.
pub fn extract_grid(markup: &str, params: &GridParams) -> Result<Extraction> {
    let ParsedLines { records, skipped } = parse_hocr(markup)?;
    let grid = build_grid(&records, params);
    Ok(Extraction {
        grid,
        line_count: records.len(),
        skipped,
    })
}

/// Read an hOCR file (UTF-8) and reconstruct its table.
pub fn extract_grid_from_path(path: &Path, params: &GridParams) -> Result<Extraction> {
    let markup = std::fs::read_to_string(path).map_err(|source| GridError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    extract_grid(&markup, params)
}
