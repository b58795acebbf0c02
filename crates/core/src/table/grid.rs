//! Cell merging and dense grid construction.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use super::grouping::{AxisAssignment, assign_columns, assign_rows};
use super::params::GridParams;
use super::types::LineRecord;

/// Reconstructed table.
///
/// Rows and columns are ordered by ascending cluster id, which is top to
/// bottom and left to right. Every coordinate holds a string; coordinates with
/// no line are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    row_ids: Vec<usize>,
    column_ids: Vec<usize>,
    cells: Vec<Vec<String>>,
}

impl Grid {
    pub fn row_ids(&self) -> &[usize] {
        &self.row_ids
    }

    pub fn column_ids(&self) -> &[usize] {
        &self.column_ids
    }

    pub fn row_count(&self) -> usize {
        self.row_ids.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_ids.len()
    }

    /// Text at `(row_id, column_id)`, or `""` when nothing is there.
    pub fn cell(&self, row_id: usize, column_id: usize) -> &str {
        let (Ok(r), Ok(c)) = (
            self.row_ids.binary_search(&row_id),
            self.column_ids.binary_search(&column_id),
        ) else {
            return "";
        };
        &self.cells[r][c]
    }

    /// Dense rows in output order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Positional header labels: the column ids rendered as decimals.
    pub fn header(&self) -> Vec<String> {
        self.column_ids.iter().map(usize::to_string).collect()
    }
}

/// Pivot clustered records into a grid.
///
/// `rows` and `columns` must be assignments over `records` (same length and
/// order). Lines sharing a cell are read top to bottom, then left to right,
/// and joined with single spaces.
pub fn assemble(records: &[LineRecord], rows: &AxisAssignment, columns: &AxisAssignment) -> Grid {
    debug_assert_eq!(records.len(), rows.len());
    debug_assert_eq!(records.len(), columns.len());

    let mut groups: BTreeMap<(usize, usize), Vec<&LineRecord>> = BTreeMap::new();
    for ((record, &row), &col) in records.iter().zip(rows.ids()).zip(columns.ids()) {
        groups.entry((row, col)).or_default().push(record);
    }

    let mut row_set = BTreeSet::new();
    let mut col_set = BTreeSet::new();
    let mut merged: BTreeMap<(usize, usize), String> = BTreeMap::new();
    for ((row, col), mut members) in groups {
        members.sort_by_key(|r| (r.bbox.y0, r.bbox.x0));
        row_set.insert(row);
        col_set.insert(col);
        merged.insert((row, col), members.iter().map(|r| r.text.as_str()).join(" "));
    }

    let row_ids: Vec<usize> = row_set.into_iter().collect();
    let column_ids: Vec<usize> = col_set.into_iter().collect();
    let cells = row_ids
        .iter()
        .map(|&row| {
            column_ids
                .iter()
                .map(|&col| merged.remove(&(row, col)).unwrap_or_default())
                .collect()
        })
        .collect();

    debug!(
        rows = row_ids.len(),
        columns = column_ids.len(),
        "assembled grid"
    );
    Grid {
        row_ids,
        column_ids,
        cells,
    }
}

/// Cluster `records` on both axes and assemble the grid.
///
/// Returns `None` when there are no records; no clustering is attempted.
pub fn build_grid(records: &[LineRecord], params: &GridParams) -> Option<Grid> {
    if records.is_empty() {
        return None;
    }
    let rows = assign_rows(records, params.eps_y());
    let columns = assign_columns(records, params.eps_x());
    Some(assemble(records, &rows, &columns))
}
