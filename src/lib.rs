#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # balanced-kdtree
//!
//! A static, balanced [k-d tree](https://en.wikipedia.org/wiki/K-d_tree) for
//! low-dimensional Euclidean point sets.
//!
//! Points are supplied once, as a dense `d x n` column-major matrix, and
//! built into an immutable [`Tree`] that supports two query kinds:
//!
//! - [`Tree::knn`]: the `k` nearest neighbours of a query point.
//! - [`Tree::ball`]: every point within a radius of a query point.
//!
//! The tree is laid out as an implicit, heap-indexed array (as in a binary
//! heap: node `i`'s children are `2i` and `2i+1`) rather than as a graph of
//! allocated nodes, so construction and queries touch no pointers beyond the
//! point matrix and a permutation of point indices.
//!
//! ## Usage
//!
//! ```rust
//! use balanced_kdtree::Tree;
//!
//! // Four 2-D points, column-major: (0,0) (1,0) (0,1) (1,1)
//! let points = vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0];
//! let tree = Tree::build(&points, 2, 1).unwrap();
//!
//! let (indices, distances) = tree.knn(&[0.1, 0.1], 1).unwrap();
//! assert_eq!(indices[0], 0);
//!
//! let within = tree.ball(&[0.5, 0.5], 1.0).unwrap();
//! assert_eq!(within.len(), 4);
//! ```
//!
//! ## Non-goals
//!
//! This crate does not provide a CLI, serialization/persistence of a built
//! tree, dynamic insertion or deletion after construction, approximate
//! search, non-Euclidean metrics, or tuning for high-dimensional (`d` in the
//! hundreds or more) point sets.

mod axis;
mod ball;
mod build;
mod distance;
mod error;
mod knn;
mod partition;
mod rect;
mod shape;
mod tree;

pub use axis::Axis;
pub use error::KdTreeError;
pub use tree::Tree;
