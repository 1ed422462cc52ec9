//! Slice planning
//!
//! Splits `[0, len)` into contiguous half-open ranges whose sizes differ by at
//! most one element. The first `len % n` slices take the extra element.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open index range `[start, end)` owned by exactly one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliceRange {
    /// Stable position of this slice in the partial sum table
    pub index: usize,
    /// First index covered by the slice
    pub start: usize,
    /// One past the last index covered by the slice
    pub end: usize,
}

impl SliceRange {
    /// Number of elements in the slice
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the slice covers no elements
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice as a `Range` usable for indexing
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Number of slices actually used for `len` elements.
///
/// Never more slices than elements; zero when either input is zero.
pub fn effective_slice_count(len: usize, n_slices: usize) -> usize {
    n_slices.min(len)
}

/// Plan the slices for a dataset of `len` elements.
///
/// Returns an empty plan when `len == 0` or `n_slices == 0`.
pub fn plan_slices(len: usize, n_slices: usize) -> Vec<SliceRange> {
    let n = effective_slice_count(len, n_slices);
    if n == 0 {
        return Vec::new();
    }

    let base = len / n;
    let remainder = len % n;

    let mut slices = Vec::with_capacity(n);
    let mut start = 0usize;
    for index in 0..n {
        let end = start + base + usize::from(index < remainder);
        slices.push(SliceRange { index, start, end });
        start = end;
    }

    debug_assert_eq!(start, len);
    slices
}
