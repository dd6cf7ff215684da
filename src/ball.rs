//! Radius (ball) query traversal.
use crate::axis::Axis;
use crate::distance::squared_dist_to_point;
use crate::rect::HyperRectangle;
use crate::shape::Shape;

/// Returns the sorted indices of every point within `radius_sq` (squared
/// radius) of `query`, inclusion being the strict `dist < radius_sq` test.
pub(crate) fn ball<A: Axis>(
    points: &[A],
    n: usize,
    idx: &[usize],
    shape: &Shape,
    leaf_extent: &[(usize, usize)],
    rects: &[HyperRectangle<A>],
    query: &[A],
    radius_sq: A,
) -> Vec<usize> {
    let mut hits = Vec::new();
    visit(
        1, points, n, idx, shape, leaf_extent, rects, query, radius_sq, &mut hits,
    );
    hits.sort_unstable();
    hits
}

#[allow(clippy::too_many_arguments)]
fn visit<A: Axis>(
    node: usize,
    points: &[A],
    n: usize,
    idx: &[usize],
    shape: &Shape,
    leaf_extent: &[(usize, usize)],
    rects: &[HyperRectangle<A>],
    query: &[A],
    radius_sq: A,
    hits: &mut Vec<usize>,
) {
    let (lo, hi) = rects[node].min_max_sq_dist(query);
    if lo > radius_sq {
        return;
    }
    if hi < radius_sq {
        dump(node, idx, shape, leaf_extent, hits);
        return;
    }
    if shape.is_leaf(node) {
        let (start, len) = leaf_extent[node];
        for &p in &idx[start..start + len] {
            if squared_dist_to_point(query, points, n, p) < radius_sq {
                hits.push(p);
            }
        }
        return;
    }
    visit(
        2 * node,
        points,
        n,
        idx,
        shape,
        leaf_extent,
        rects,
        query,
        radius_sq,
        hits,
    );
    visit(
        2 * node + 1,
        points,
        n,
        idx,
        shape,
        leaf_extent,
        rects,
        query,
        radius_sq,
        hits,
    );
}

/// Emits every point index under `node` unconditionally, used once a
/// subtree's bounding rectangle is known to lie entirely within the ball.
fn dump(
    node: usize,
    idx: &[usize],
    shape: &Shape,
    leaf_extent: &[(usize, usize)],
    hits: &mut Vec<usize>,
) {
    if shape.is_leaf(node) {
        let (start, len) = leaf_extent[node];
        hits.extend_from_slice(&idx[start..start + len]);
        return;
    }
    dump(2 * node, idx, shape, leaf_extent, hits);
    dump(2 * node + 1, idx, shape, leaf_extent, hits);
}
