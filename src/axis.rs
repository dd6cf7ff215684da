//! The element type used for point coordinates.
use num_traits::Float;
use std::fmt::Debug;

/// Trait bound satisfied by the floating-point types a [`Tree`](crate::tree::Tree)
/// can be built over. `f32` and `f64` both implement it with no extra work.
pub trait Axis: Float + Default + Debug + Copy + Send + Sync {}
impl<T: Float + Default + Debug + Copy + Send + Sync> Axis for T {}
