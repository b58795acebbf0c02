//! Row and column grouping of line records.

use tracing::debug;

use super::clustering::cluster_ids;
use super::types::{Axis, LineRecord};

/// Cluster id per record along one axis.
///
/// `ids()[i]` belongs to the `i`-th record passed to [`assign_axis`]. Ids run
/// from `0` to `cluster_count() - 1` and increase with position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisAssignment {
    axis: Axis,
    ids: Vec<usize>,
    cluster_count: usize,
}

impl AxisAssignment {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn id(&self, record_idx: usize) -> Option<usize> {
        self.ids.get(record_idx).copied()
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Cluster records along `axis` with the given tolerance.
pub fn assign_axis(records: &[LineRecord], axis: Axis, tolerance: f64) -> AxisAssignment {
    let positions: Vec<f64> = records.iter().map(|r| axis.position(r)).collect();
    let ids = cluster_ids(&positions, tolerance);
    let cluster_count = ids.iter().max().map_or(0, |max| max + 1);
    debug!(
        axis = axis.name(),
        records = records.len(),
        clusters = cluster_count,
        tolerance,
        "clustered axis"
    );
    AxisAssignment {
        axis,
        ids,
        cluster_count,
    }
}

/// Group records into rows by vertical center.
pub fn assign_rows(records: &[LineRecord], eps_y: f64) -> AxisAssignment {
    assign_axis(records, Axis::Row, eps_y)
}

/// Group records into columns by left edge.
pub fn assign_columns(records: &[LineRecord], eps_x: f64) -> AxisAssignment {
    assign_axis(records, Axis::Column, eps_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::BBox;

    fn at_y_center(y: i32) -> LineRecord {
        LineRecord::new("row", BBox::new(0, y - 2, 10, y + 2))
    }

    fn at_x0(x: i32) -> LineRecord {
        LineRecord::new("col", BBox::new(x, 0, x + 15, 10))
    }

    #[test]
    fn rows_split_on_large_vertical_gap() {
        let records: Vec<LineRecord> = [10, 15, 50, 55].into_iter().map(at_y_center).collect();
        let rows = assign_rows(&records, 10.0);
        assert_eq!(rows.ids(), &[0, 0, 1, 1]);
        assert_eq!(rows.cluster_count(), 2);
        assert_eq!(rows.axis(), Axis::Row);
    }

    #[test]
    fn columns_split_on_large_left_edge_gap() {
        let records: Vec<LineRecord> = [0, 25, 60].into_iter().map(at_x0).collect();
        let columns = assign_columns(&records, 30.0);
        assert_eq!(columns.ids(), &[0, 0, 1]);
        assert_eq!(columns.id(2), Some(1));
        assert_eq!(columns.id(3), None);
    }

    #[test]
    fn columns_ignore_right_edges() {
        // Same left edge, very different widths.
        let records = vec![
            LineRecord::new("short", BBox::new(100, 0, 110, 10)),
            LineRecord::new("long", BBox::new(100, 20, 900, 30)),
        ];
        assert_eq!(assign_columns(&records, 0.0).ids(), &[0, 0]);
    }

    #[test]
    fn empty_records_have_no_clusters() {
        let rows = assign_rows(&[], 10.0);
        assert!(rows.is_empty());
        assert_eq!(rows.cluster_count(), 0);
    }
}
