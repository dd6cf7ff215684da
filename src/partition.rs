//! Hand-rolled Hoare-style quickselect over a slice of point indices.
//!
//! This exists because selecting the `k`-th order statistic of a slice along
//! an arbitrary key, in place, with no allocation, isn't something the
//! standard library exposes in a form this crate can reuse directly: the
//! tree builder needs to partition a *permutation* of point indices by a
//! coordinate looked up through that permutation, not the coordinates
//! themselves.
use crate::axis::Axis;

/// Rearranges `idx` in place so that, treating `coord(idx[i])` as the key,
/// `idx[k]` ends up holding the index whose key is the `k`-th smallest in the
/// slice, with every key to its left `<=` it and every key to its right `>=`
/// it.
///
/// `coord` maps a point index (an element of `idx`, not a position within it)
/// to its coordinate along the dimension being split on.
pub(crate) fn quickselect<A: Axis>(idx: &mut [usize], k: usize, coord: impl Fn(usize) -> A) {
    debug_assert!(k < idx.len());
    let mut lo = 0usize;
    let mut hi = idx.len() - 1;
    while lo < hi {
        let p = hoare_partition(idx, lo, hi, &coord);
        if k <= p {
            hi = p;
        } else {
            lo = p + 1;
        }
    }
}

/// Single Hoare partition pass over `idx[lo..=hi]` using the mid-range
/// element as pivot. Returns a split index `p` such that every key in
/// `idx[lo..=p]` is `<=` every key in `idx[p+1..=hi]`.
fn hoare_partition<A: Axis>(
    idx: &mut [usize],
    lo: usize,
    hi: usize,
    coord: &impl Fn(usize) -> A,
) -> usize {
    let pivot = coord(idx[lo + (hi - lo) / 2]);
    let mut i = lo;
    let mut j = hi;
    loop {
        while coord(idx[i]) < pivot {
            i += 1;
        }
        while coord(idx[j]) > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        idx.swap(i, j);
        i += 1;
        j -= 1;
    }
}
