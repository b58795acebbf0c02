//! Table reconstruction from line bounding boxes.
//!
//! Lines are clustered independently on two axes (vertical center for rows,
//! left edge for columns) and the resulting `(row, column)` pairs are pivoted
//! into a dense grid of merged cell text.

mod clustering;
mod grid;
mod grouping;
mod params;
mod types;

// Re-export public types
pub use grid::Grid;
pub use grouping::AxisAssignment;
pub use params::{DEFAULT_EPS_X, DEFAULT_EPS_Y, GridParams};
pub use types::{Axis, BBox, LineRecord};

// Re-export public API functions
pub use clustering::{cluster_ids, cluster_list};
pub use grid::{assemble, build_grid};
pub use grouping::{assign_axis, assign_columns, assign_rows};
