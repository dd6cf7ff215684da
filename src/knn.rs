//! k-nearest-neighbour traversal.
use crate::axis::Axis;
use crate::distance::squared_dist_to_point;
use crate::shape::Shape;

/// Runs a kNN search, returning `k` point indices and their distances
/// (not squared), sorted ascending by distance.
#[allow(clippy::too_many_arguments)]
pub(crate) fn knn<A: Axis>(
    points: &[A],
    n: usize,
    idx: &[usize],
    split_dim: &[usize],
    split_value: &[A],
    shape: &Shape,
    leaf_extent: &[(usize, usize)],
    query: &[A],
    k: usize,
) -> (Vec<usize>, Vec<A>) {
    let mut best_idx = vec![usize::MAX; k];
    let mut best_sq = vec![A::infinity(); k];

    visit(
        1, points, n, idx, split_dim, split_value, shape, leaf_extent, query, &mut best_idx,
        &mut best_sq,
    );

    let distances = best_sq.into_iter().map(|v| v.sqrt()).collect();
    (best_idx, distances)
}

#[allow(clippy::too_many_arguments)]
fn visit<A: Axis>(
    node: usize,
    points: &[A],
    n: usize,
    idx: &[usize],
    split_dim: &[usize],
    split_value: &[A],
    shape: &Shape,
    leaf_extent: &[(usize, usize)],
    query: &[A],
    best_idx: &mut [usize],
    best_sq: &mut [A],
) {
    if shape.is_leaf(node) {
        let (start, len) = leaf_extent[node];
        for &p in &idx[start..start + len] {
            let dist = squared_dist_to_point(query, points, n, p);
            if dist < best_sq[best_sq.len() - 1] {
                insert(best_idx, best_sq, p, dist);
            }
        }
        return;
    }

    let dim = split_dim[node];
    let value = split_value[node];
    let delta = query[dim] - value;

    let (near, far) = if delta < A::zero() {
        (2 * node, 2 * node + 1)
    } else {
        (2 * node + 1, 2 * node)
    };

    visit(
        near, points, n, idx, split_dim, split_value, shape, leaf_extent, query, best_idx,
        best_sq,
    );

    if delta * delta < best_sq[best_sq.len() - 1] {
        visit(
            far, points, n, idx, split_dim, split_value, shape, leaf_extent, query, best_idx,
            best_sq,
        );
    }
}

/// Inserts `(p, dist)` into the fixed-size, ascending-sorted result arrays,
/// assuming `dist` is already known to improve on the current worst entry.
/// Ties are broken stably: `p` is inserted *after* any existing entries with
/// the same distance.
fn insert<A: Axis>(best_idx: &mut [usize], best_sq: &mut [A], p: usize, dist: A) {
    let k = best_idx.len();
    let mut pos = 0;
    while pos < k && best_sq[pos] <= dist {
        pos += 1;
    }
    for i in (pos + 1..k).rev() {
        best_sq[i] = best_sq[i - 1];
        best_idx[i] = best_idx[i - 1];
    }
    best_sq[pos] = dist;
    best_idx[pos] = p;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_array_sorted_and_drops_the_worst() {
        let mut best_idx = vec![0usize, 1, 2];
        let mut best_sq = vec![1.0f64, 4.0, 9.0];
        insert(&mut best_idx, &mut best_sq, 9, 2.0);
        assert_eq!(best_sq, vec![1.0, 2.0, 4.0]);
        assert_eq!(best_idx, vec![0, 9, 1]);
    }

    #[test]
    fn insert_places_ties_after_existing_equal_entries() {
        let mut best_idx = vec![0usize, 1, 2];
        let mut best_sq = vec![1.0f64, 1.0, 9.0];
        insert(&mut best_idx, &mut best_sq, 9, 1.0);
        assert_eq!(best_sq, vec![1.0, 1.0, 1.0]);
        // the new element (9) lands after the two pre-existing 1.0 entries
        assert_eq!(best_idx, vec![0, 1, 9]);
    }
}
