//! Error type returned by the fallible entry points of this crate.
use std::fmt;

/// Errors that can occur when building a [`Tree`](crate::tree::Tree) or
/// querying one.
///
/// Every public entry point (`Tree::build`, `Tree::knn`, `Tree::ball`)
/// validates its inputs up front and returns one of these variants rather
/// than panicking; internal routines assume validated inputs once past that
/// boundary and use `debug_assert!` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A query vector's length did not match the tree's dimensionality.
    DimensionMismatch {
        /// the tree's dimensionality
        expected: usize,
        /// the supplied query vector's length
        found: usize,
    },
    /// `k` was zero, or greater than the number of points in the tree.
    InvalidK {
        /// the requested `k`
        k: usize,
        /// the number of points in the tree
        n: usize,
    },
    /// A negative radius was supplied to a ball query.
    InvalidRadius {
        /// the offending radius, rendered via the element type's `Debug` impl
        radius: String,
    },
    /// `leaf_size` was zero.
    InvalidLeafSize {
        /// the offending leaf size
        leaf_size: usize,
    },
    /// The point set supplied to `Tree::build` had zero points.
    EmptyInput,
    /// The point set supplied to `Tree::build` had zero dimensions.
    DimensionZero,
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdTreeError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: tree has {expected} dimensions, query has {found}"
            ),
            KdTreeError::InvalidK { k, n } => {
                write!(f, "invalid k={k}: must satisfy 1 <= k <= {n}")
            }
            KdTreeError::InvalidRadius { radius } => {
                write!(f, "invalid radius {radius}: must be non-negative")
            }
            KdTreeError::InvalidLeafSize { leaf_size } => {
                write!(f, "invalid leaf_size={leaf_size}: must be greater than zero")
            }
            KdTreeError::EmptyInput => write!(f, "point set is empty"),
            KdTreeError::DimensionZero => write!(f, "point set has zero dimensions"),
        }
    }
}

impl std::error::Error for KdTreeError {}
