//! Axis-aligned bounding boxes used to bound the points reachable from each
//! tree node, and to prune radius queries.
use crate::axis::Axis;

/// An axis-aligned hyper-rectangle: `mins[i] <= maxes[i]` for every dimension
/// `i`, by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct HyperRectangle<A> {
    pub(crate) mins: Vec<A>,
    pub(crate) maxes: Vec<A>,
}

impl<A: Axis> HyperRectangle<A> {
    /// The smallest rectangle enclosing every point in `points`, a `d x n`
    /// column-major matrix as described by [`crate::tree::Tree::build`].
    pub(crate) fn bounding(points: &[A], d: usize, n: usize) -> Self {
        let mut mins = vec![A::infinity(); d];
        let mut maxes = vec![A::neg_infinity(); d];
        for dim in 0..d {
            let row = &points[dim * n..(dim + 1) * n];
            for &v in row {
                if v < mins[dim] {
                    mins[dim] = v;
                }
                if v > maxes[dim] {
                    maxes[dim] = v;
                }
            }
        }
        HyperRectangle { mins, maxes }
    }

    /// Splits this rectangle at `(dim, value)`: the left half keeps every
    /// bound except `maxes[dim]`, which becomes `value`; the right half keeps
    /// every bound except `mins[dim]`, which becomes `value`.
    pub(crate) fn split(&self, dim: usize, value: A) -> (Self, Self) {
        let mut left = self.clone();
        left.maxes[dim] = value;
        let mut right = self.clone();
        right.mins[dim] = value;
        (left, right)
    }

    /// Lower and upper bounds on the squared distance from `point` to any
    /// point that could lie inside this rectangle.
    ///
    /// Used by the ball query: a lower bound exceeding `r^2` proves the
    /// subtree cannot contain a hit, and an upper bound below `r^2` proves
    /// every point in the subtree is a hit.
    pub(crate) fn min_max_sq_dist(&self, point: &[A]) -> (A, A) {
        let mut lo = A::zero();
        let mut hi = A::zero();
        for i in 0..point.len() {
            let p = point[i];
            let a = (self.maxes[i] - p) * (self.maxes[i] - p);
            let b = (self.mins[i] - p) * (self.mins[i] - p);
            let (near, far) = if a < b { (a, b) } else { (b, a) };
            if p < self.mins[i] || p > self.maxes[i] {
                lo = lo + near;
            }
            hi = hi + far;
        }
        (lo, hi)
    }

    /// Whether `point` lies within this rectangle on every axis.
    #[cfg(test)]
    pub(crate) fn contains(&self, point: &[A]) -> bool {
        (0..point.len()).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxes[i])
    }
}
