//! # Path cost recurrence
//!
//! The SGM dynamic-programming step: extend the path cost of a predecessor pixel by one step
//! along a scan direction.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use ndarray::{ArrayView1, ArrayViewMut1};

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Compute the path cost at the current pixel from the predecessor's path cost.
///
/// For each disparity `i` the smallest of these candidates is kept:
/// - staying at `i`,
/// - stepping from `i - 1` or `i + 1` at a cost of `p1`,
/// - jumping from the cheapest predecessor disparity at a cost of `p2`.
///
/// The predecessor minimum is then subtracted and the raw cost `raw[i]` is added. The
/// subtraction keeps path costs bounded by `p2 + 255` along arbitrarily long scanlines.
///
/// `raw`, `prev` and `out` must all have one entry per disparity level, and there must be at
/// least one level.
pub fn path_cost(
    raw: ArrayView1<'_, u8>,
    prev: ArrayView1<'_, u32>,
    mut out: ArrayViewMut1<'_, u32>,
    p1: u32,
    p2: u32
) {
    let levels = prev.len();
    debug_assert!(levels > 0);
    debug_assert_eq!(raw.len(), levels);
    debug_assert_eq!(out.len(), levels);

    let min_prev = prev.iter().copied().fold(u32::MAX, u32::min);
    let jump = min_prev + p2;

    for i in 0..levels {
        let mut best = prev[i].min(jump);

        if i > 0 {
            best = best.min(prev[i - 1] + p1);
        }
        if i + 1 < levels {
            best = best.min(prev[i + 1] + p1);
        }

        out[i] = best - min_prev + raw[i] as u32;
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
