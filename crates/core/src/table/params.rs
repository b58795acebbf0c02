//! Clustering tolerances.

use crate::error::{GridError, Result};

/// Default vertical tolerance used to merge lines into rows.
pub const DEFAULT_EPS_Y: f64 = 10.0;

/// Default horizontal tolerance used to merge left edges into columns.
pub const DEFAULT_EPS_X: f64 = 30.0;

/// Parameters for grid reconstruction.
///
/// Both tolerances are in OCR coordinate units and bound the gap between
/// neighbouring sorted positions that still belong to the same cluster.
/// Values are only built through [`GridParams::new`] or `Default`, so both
/// tolerances are always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// If the vertical centers of two lines differ by at most this much (directly
    /// or through a chain of lines), they are placed in the same row.
    eps_y: f64,

    /// If the left edges of two lines differ by at most this much (directly or
    /// through a chain of lines), they are placed in the same column.
    eps_x: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            eps_y: DEFAULT_EPS_Y,
            eps_x: DEFAULT_EPS_X,
        }
    }
}

impl GridParams {
    /// Creates grid parameters, rejecting negative or non-finite tolerances.
    pub fn new(eps_y: f64, eps_x: f64) -> Result<Self> {
        check_tolerance("row", eps_y)?;
        check_tolerance("column", eps_x)?;
        Ok(Self { eps_y, eps_x })
    }

    pub fn eps_y(&self) -> f64 {
        self.eps_y
    }

    pub fn eps_x(&self) -> f64 {
        self.eps_x
    }
}

fn check_tolerance(axis: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidTolerance { axis, value })
    }
}
