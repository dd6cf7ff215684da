//! Recursive balanced-tree construction.
use crate::axis::Axis;
use crate::partition::quickselect;
use crate::rect::HyperRectangle;
use crate::shape::Shape;

/// The output of a construction pass: the arrays that, together with the
/// original point matrix, make up a queryable [`crate::tree::Tree`].
pub(crate) struct BuiltArrays<A> {
    pub(crate) idx: Vec<usize>,
    pub(crate) split_dim: Vec<usize>,
    pub(crate) split_value: Vec<A>,
    pub(crate) rects: Vec<HyperRectangle<A>>,
    /// `(start, len)` into `idx` for every leaf node, indexed by heap index.
    /// Recorded directly during construction: the recursive split assigns
    /// leaves to the left or right child depending on local leaf-count
    /// balance, so a leaf's heap index does not correspond to its
    /// left-to-right spatial rank in general (only when every split is an
    /// exact power of two), and the slice bounds can't be recovered from the
    /// node index alone.
    pub(crate) leaf_extent: Vec<(usize, usize)>,
}

/// Builds a balanced tree over the `d x n` column-major point matrix
/// `points`, recording a split dimension/value per internal node and a
/// bounding [`HyperRectangle`] per node (internal or leaf).
pub(crate) fn build<A: Axis>(points: &[A], d: usize, n: usize, leaf_size: usize) -> BuiltArrays<A> {
    let shape = Shape::new(n, leaf_size);
    let array_len = shape.array_len();

    let mut idx: Vec<usize> = (0..n).collect();
    let mut split_dim = vec![0usize; array_len];
    let mut split_value = vec![A::zero(); array_len];
    // Every node, leaf or internal, gets a rectangle; node 0 is unused.
    let root_rect = HyperRectangle::bounding(points, d, n);
    let mut rects: Vec<Option<HyperRectangle<A>>> = vec![None; array_len];
    let mut leaf_extent = vec![(0usize, 0usize); array_len];

    build_recursive(
        points,
        d,
        n,
        leaf_size,
        &mut idx,
        1,
        0,
        n - 1,
        root_rect,
        &mut split_dim,
        &mut split_value,
        &mut rects,
        &mut leaf_extent,
    );

    // Index 0 is an unused slot in the 1-based node numbering.
    let rects = rects
        .into_iter()
        .map(|r| {
            r.unwrap_or_else(|| HyperRectangle {
                mins: vec![A::zero(); d],
                maxes: vec![A::zero(); d],
            })
        })
        .collect();

    BuiltArrays {
        idx,
        split_dim,
        split_value,
        rects,
        leaf_extent,
    }
}

#[allow(clippy::too_many_arguments)]
fn build_recursive<A: Axis>(
    points: &[A],
    d: usize,
    n: usize,
    leaf_size: usize,
    idx: &mut [usize],
    node: usize,
    lo: usize,
    hi: usize,
    rect: HyperRectangle<A>,
    split_dim: &mut [usize],
    split_value: &mut [A],
    rects: &mut [Option<HyperRectangle<A>>],
    leaf_extent: &mut [(usize, usize)],
) {
    let m = hi - lo + 1;

    if m <= leaf_size {
        rects[node] = Some(rect);
        leaf_extent[node] = (lo, m);
        return;
    }

    let dim = max_spread_dim(points, d, n, &idx[lo..=hi]);
    let mid_offset = Shape::mid_rank_offset(m, leaf_size);
    let mid = lo + mid_offset;

    quickselect(&mut idx[lo..=hi], mid_offset, |point_id| {
        points[dim * n + point_id]
    });

    let value = points[dim * n + idx[mid]];
    split_dim[node] = dim;
    split_value[node] = value;

    let (left_rect, right_rect) = rect.split(dim, value);
    rects[node] = Some(rect);

    build_recursive(
        points,
        d,
        n,
        leaf_size,
        idx,
        2 * node,
        lo,
        mid,
        left_rect,
        split_dim,
        split_value,
        rects,
        leaf_extent,
    );
    build_recursive(
        points,
        d,
        n,
        leaf_size,
        idx,
        2 * node + 1,
        mid + 1,
        hi,
        right_rect,
        split_dim,
        split_value,
        rects,
        leaf_extent,
    );
}

/// The dimension with the largest coordinate spread across `slice` (a range
/// of the index permutation). Ties favour the lower dimension index.
fn max_spread_dim<A: Axis>(points: &[A], d: usize, n: usize, slice: &[usize]) -> usize {
    let mut best_dim = 0;
    let mut best_spread = A::neg_infinity();
    for dim in 0..d {
        let mut min = A::infinity();
        let mut max = A::neg_infinity();
        for &point_id in slice {
            let v = points[dim * n + point_id];
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        let spread = max - min;
        if spread > best_spread {
            best_spread = spread;
            best_dim = dim;
        }
    }
    best_dim
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_at(points: &[f64], d: usize, n: usize, p: usize) -> Vec<f64> {
        (0..d).map(|dim| points[dim * n + p]).collect()
    }

    #[test]
    fn split_partitions_points_correctly_below_and_above() {
        // 1-D points, 7 of them, leaf_size 2: matches the non-power-of-two scenario.
        let points: Vec<f64> = vec![5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0];
        let n = points.len();
        let built = build(&points, 1, n, 2);
        assert_eq!(built.idx.len(), n);
        let mut seen: Vec<usize> = built.idx.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..n).collect::<Vec<_>>());

        // Check the split invariant at every internal node.
        let shape = Shape::new(n, 2);
        check_split_invariant(&points, 1, n, &built, 1, 0, n - 1, &shape);
    }

    #[allow(clippy::too_many_arguments)]
    fn check_split_invariant(
        points: &[f64],
        d: usize,
        n: usize,
        built: &BuiltArrays<f64>,
        node: usize,
        lo: usize,
        hi: usize,
        shape: &Shape,
    ) {
        if shape.is_leaf(node) {
            return;
        }
        let m = hi - lo + 1;
        if m <= 2 {
            return;
        }
        let dim = built.split_dim[node];
        let value = built.split_value[node];
        let mid_offset = Shape::mid_rank_offset(m, 2);
        let mid = lo + mid_offset;
        for &p in &built.idx[lo..=mid] {
            let coords = point_at(points, d, n, p);
            assert!(coords[dim] <= value);
        }
        for &p in &built.idx[mid + 1..=hi] {
            let coords = point_at(points, d, n, p);
            assert!(coords[dim] >= value);
        }
        check_split_invariant(points, d, n, built, 2 * node, lo, mid, shape);
        check_split_invariant(points, d, n, built, 2 * node + 1, mid + 1, hi, shape);
    }

    #[test]
    fn single_point_builds_a_single_leaf() {
        let points = vec![0.0, 0.0]; // d=2, n=1
        let built = build(&points, 2, 1, 4);
        assert_eq!(built.idx, vec![0]);
    }

    #[test]
    fn root_rectangle_bounds_every_point() {
        let points: Vec<f64> = vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
        let n = 9;
        let built = build(&points, 2, n, 1);
        let root = &built.rects[1];
        assert_eq!(root.mins, vec![0.0, 0.0]);
        assert_eq!(root.maxes, vec![2.0, 2.0]);
    }

    /// Collects the heap indices of every leaf reachable from `node`, walking
    /// the same structure `build_recursive` produced.
    fn leaf_nodes(shape: &Shape, node: usize, out: &mut Vec<usize>) {
        if shape.is_leaf(node) {
            out.push(node);
            return;
        }
        leaf_nodes(shape, 2 * node, out);
        leaf_nodes(shape, 2 * node + 1, out);
    }

    fn assert_leaf_extents_partition_range(built: &BuiltArrays<f64>, shape: &Shape, n: usize) {
        let mut leaves = Vec::new();
        leaf_nodes(shape, 1, &mut leaves);
        assert_eq!(leaves.len(), shape.num_leaves);

        let mut covered = vec![false; n];
        for node in leaves {
            let (start, len) = built.leaf_extent[node];
            for i in start..start + len {
                assert!(!covered[i], "index {i} covered by more than one leaf");
                covered[i] = true;
            }
        }
        assert!(covered.iter().all(|&c| c), "leaf extents don't cover every point");
    }

    #[test]
    fn leaf_extents_partition_the_index_range_for_a_non_power_of_two_leaf_count() {
        // n=3, leaf_size=1: L=3, level=1, rest=1 - the counterexample where a
        // heap-index-derived leaf_start/leaf_len formula disagrees with the
        // spatial slice the recursive split actually assigns.
        let points: Vec<f64> = vec![10.0, 20.0, 30.0];
        let n = points.len();
        let built = build(&points, 1, n, 1);
        let shape = Shape::new(n, 1);
        assert_leaf_extents_partition_range(&built, &shape, n);

        // Every point must be found in exactly one leaf, at the position the
        // index permutation actually recorded.
        let mut leaves = Vec::new();
        leaf_nodes(&shape, 1, &mut leaves);
        for node in leaves {
            let (start, len) = built.leaf_extent[node];
            assert_eq!(len, 1);
            let p = built.idx[start];
            assert!(p < n);
        }
    }

    #[test]
    fn leaf_extents_partition_the_index_range_for_seven_points_leaf_size_two() {
        let points: Vec<f64> = vec![5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0];
        let n = points.len();
        let built = build(&points, 1, n, 2);
        let shape = Shape::new(n, 2);
        assert_leaf_extents_partition_range(&built, &shape, n);
    }

    #[test]
    fn leaf_extents_partition_the_index_range_for_nine_points_leaf_size_one() {
        let points: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let n = points.len();
        let built = build(&points, 1, n, 1);
        let shape = Shape::new(n, 1);
        assert_leaf_extents_partition_range(&built, &shape, n);
    }
}
