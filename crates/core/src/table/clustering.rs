//! One-dimensional tolerance clustering.
//!
//! Positions are sorted and split wherever the gap between neighbours exceeds
//! the tolerance. In one dimension this is exactly density clustering with a
//! minimum neighbourhood of one point: chaining through sorted neighbours
//! reaches the same points as chaining through epsilon balls.

use ordered_float::OrderedFloat;

/// Indices of `xs` in ascending position order. Equal positions keep their
/// input order.
fn sorted_order(xs: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(xs[i]));
    order
}

/// Assign a cluster id to every value.
///
/// The returned vector is parallel to `xs`. Ids are handed out in the order
/// clusters are opened while walking the sorted values, so a smaller id
/// always means smaller positions. Values that are equal always share a
/// cluster, even with a zero tolerance.
pub fn cluster_ids(xs: &[f64], tolerance: f64) -> Vec<usize> {
    debug_assert!(tolerance >= 0.0, "tolerance must be non-negative");

    let mut ids = vec![0usize; xs.len()];
    let order = sorted_order(xs);
    let Some((&first, rest)) = order.split_first() else {
        return ids;
    };

    let mut current = 0usize;
    let mut last = xs[first];
    for &idx in rest {
        let x = xs[idx];
        if x - last > tolerance {
            current += 1;
        }
        ids[idx] = current;
        last = x;
    }
    ids
}

/// Cluster a list of values based on tolerance.
///
/// Returns the clusters in ascending order, each holding its sorted values.
pub fn cluster_list(mut xs: Vec<f64>, tolerance: f64) -> Vec<Vec<f64>> {
    xs.sort_by_key(|&x| OrderedFloat(x));
    let mut groups: Vec<Vec<f64>> = Vec::new();
    let mut current: Vec<f64> = Vec::new();
    for x in xs {
        if let Some(&last) = current.last()
            && x - last > tolerance
        {
            groups.push(std::mem::take(&mut current));
        }
        current.push(x);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
