//! The public, immutable balanced k-d tree.
use tracing::{debug, trace, warn};

use crate::axis::Axis;
use crate::ball;
use crate::build::{self, BuiltArrays};
use crate::error::KdTreeError;
use crate::knn;
use crate::rect::HyperRectangle;
use crate::shape::Shape;

/// A dimension above which this crate's low-dimensional pruning strategy
/// stops paying for itself; building a tree with more dimensions than this
/// still works, but is logged as advisory.
const HIGH_DIMENSION_WARNING_THRESHOLD: usize = 20;

/// A static, balanced k-d tree over a fixed set of points in `d`-dimensional
/// Euclidean space.
///
/// Built once via [`Tree::build`]; afterwards it is read-only and safe to
/// share across threads (`Tree<A>` is `Send + Sync` whenever `A` is).
#[derive(Clone, Debug)]
pub struct Tree<A> {
    points: Vec<A>,
    d: usize,
    n: usize,
    leaf_size: usize,
    idx: Vec<usize>,
    split_dim: Vec<usize>,
    split_value: Vec<A>,
    rects: Vec<HyperRectangle<A>>,
    leaf_extent: Vec<(usize, usize)>,
    shape: Shape,
}

impl<A: Axis> Tree<A> {
    /// Builds a balanced k-d tree over `points`, a `d * n`-length,
    /// column-major `d x n` matrix (dimension-major, point-minor: the
    /// coordinates of point `p` along dimension `j` live at
    /// `points[j * n + p]`).
    ///
    /// `leaf_size` bounds how many points each leaf holds before
    /// construction stops splitting; it must be greater than zero.
    pub fn build(points: &[A], d: usize, leaf_size: usize) -> Result<Self, KdTreeError> {
        if d == 0 {
            return Err(KdTreeError::DimensionZero);
        }
        if leaf_size == 0 {
            return Err(KdTreeError::InvalidLeafSize { leaf_size });
        }
        if points.is_empty() {
            return Err(KdTreeError::EmptyInput);
        }
        if points.len() % d != 0 {
            return Err(KdTreeError::DimensionMismatch {
                expected: d,
                found: points.len(),
            });
        }
        let n = points.len() / d;

        if d > HIGH_DIMENSION_WARNING_THRESHOLD {
            warn!(
                d,
                threshold = HIGH_DIMENSION_WARNING_THRESHOLD,
                "building a low-dimensional-optimised tree with a high dimension count"
            );
        }

        let shape = Shape::new(n, leaf_size);
        debug!(
            n,
            d,
            leaf_size,
            num_leaves = shape.num_leaves,
            level = shape.level,
            "tree shape computed"
        );

        let BuiltArrays {
            idx,
            split_dim,
            split_value,
            rects,
            leaf_extent,
        } = build::build(points, d, n, leaf_size);

        Ok(Tree {
            points: points.to_vec(),
            d,
            n,
            leaf_size,
            idx,
            split_dim,
            split_value,
            rects,
            leaf_extent,
            shape,
        })
    }

    /// The dimensionality of the space this tree was built over.
    pub fn dimension(&self) -> usize {
        self.d
    }

    /// The number of points in this tree.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether this tree holds zero points. Construction rejects empty
    /// input, so this is always `false` for a successfully built tree; kept
    /// for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Finds the `k` nearest neighbours of `query`, returning their indices
    /// into the original point matrix and their (non-squared) distances,
    /// both sorted ascending by distance.
    ///
    /// Ties in distance are broken stably: among equally-distant points, the
    /// one encountered first during the insertion-sorted scan keeps the
    /// earlier slot.
    pub fn knn(&self, query: &[A], k: usize) -> Result<(Vec<usize>, Vec<A>), KdTreeError> {
        self.validate_query(query)?;
        if k == 0 || k > self.n {
            return Err(KdTreeError::InvalidK { k, n: self.n });
        }

        trace!(k, "running knn query");
        Ok(knn::knn(
            &self.points,
            self.n,
            &self.idx,
            &self.split_dim,
            &self.split_value,
            &self.shape,
            &self.leaf_extent,
            query,
            k,
        ))
    }

    /// Finds every point within `radius` of `query`, returning their indices
    /// sorted ascending. Inclusion is strict: a point exactly `radius` away
    /// is not returned.
    pub fn ball(&self, query: &[A], radius: A) -> Result<Vec<usize>, KdTreeError> {
        self.validate_query(query)?;
        if radius < A::zero() {
            return Err(KdTreeError::InvalidRadius {
                radius: format!("{radius:?}"),
            });
        }

        trace!("running ball query");
        let radius_sq = radius * radius;
        Ok(ball::ball(
            &self.points,
            self.n,
            &self.idx,
            &self.shape,
            &self.leaf_extent,
            &self.rects,
            query,
            radius_sq,
        ))
    }

    fn validate_query(&self, query: &[A]) -> Result<(), KdTreeError> {
        if query.len() != self.d {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.d,
                found: query.len(),
            });
        }
        Ok(())
    }
}
