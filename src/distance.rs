//! Squared Euclidean distance, the sole metric used internally.
//!
//! Comparisons and pruning bounds throughout the tree are monotone in the
//! squared distance, so `sqrt` is only ever taken once, at the public kNN
//! boundary, on the handful of results actually returned to the caller.
use crate::axis::Axis;

/// Squared Euclidean distance between two points of the same dimensionality.
///
/// Callers are expected to have already validated that `a` and `b` have equal
/// length; this function does not check.
pub(crate) fn squared_euclidean<A: Axis>(a: &[A], b: &[A]) -> A {
    a.iter()
        .zip(b.iter())
        .fold(A::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y))
}

/// Squared Euclidean distance from `query` to point `p` in a `d x n`
/// column-major matrix, without materialising `p`'s coordinates into a
/// temporary buffer first.
pub(crate) fn squared_dist_to_point<A: Axis>(query: &[A], points: &[A], n: usize, p: usize) -> A {
    let mut acc = A::zero();
    for (dim, &q) in query.iter().enumerate() {
        let v = points[dim * n + p];
        acc = acc + (q - v) * (q - v);
    }
    acc
}
