//! Geometry and line record types.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in OCR pixel space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// True when the box is not inverted on either axis.
    pub fn is_well_formed(&self) -> bool {
        self.x1 >= self.x0 && self.y1 >= self.y0
    }

    pub fn x_center(&self) -> f64 {
        (f64::from(self.x0) + f64::from(self.x1)) / 2.0
    }

    pub fn y_center(&self) -> f64 {
        (f64::from(self.y0) + f64::from(self.y1)) / 2.0
    }
}

/// One recognized line of text with its bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub text: String,
    pub bbox: BBox,
}

impl LineRecord {
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }

    pub fn x_center(&self) -> f64 {
        self.bbox.x_center()
    }

    pub fn y_center(&self) -> f64 {
        self.bbox.y_center()
    }
}

/// Clustering axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Rows, keyed on the vertical center of each line.
    Row,
    /// Columns, keyed on the left edge of each line.
    Column,
}

impl Axis {
    /// Scalar position of a record along this axis.
    pub fn position(self, record: &LineRecord) -> f64 {
        match self {
            Axis::Row => record.y_center(),
            Axis::Column => f64::from(record.bbox.x0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}
