//! # Cost combination and winner-take-all
//!
//! Sums the directional path costs for each pixel and picks the cheapest disparity.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use ndarray::{Array2, Zip};

use crate::disparity::DisparityMap;
use super::cost::CostVolume;
use super::direction::DirectionalCost;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// True if `(x, y)` has a neighbour on every side.
fn is_interior(x: usize, y: usize, width: usize, height: usize) -> bool {
    x > 0 && y > 0 && x + 1 < width && y + 1 < height
}

/// Sum of all directional path costs at `(x, y, d)`.
///
/// Each path cost already contains the raw matching cost once, so interior pixels have
/// `paths.len() * cost(x, y, d)` subtracted. Border pixels keep the full sum. The result may be
/// negative.
pub fn aggregated_cost(
    paths: &[DirectionalCost],
    volume: &CostVolume,
    x: usize,
    y: usize,
    d: usize
) -> i64 {
    let sum: i64 = paths.iter().map(|p| p.get(x, y, d) as i64).sum();

    if is_interior(x, y, volume.width(), volume.height()) {
        sum - paths.len() as i64 * volume.get(x, y, d) as i64
    }
    else {
        sum
    }
}

/// Disparity with the lowest aggregated cost at `(x, y)`. Ties go to the lowest disparity.
pub fn best_disparity(paths: &[DirectionalCost], volume: &CostVolume, x: usize, y: usize) -> usize {
    let mut best = 0;
    let mut min = i64::MAX;

    for d in 0..volume.levels() {
        let cost = aggregated_cost(paths, volume, x, y, d);
        if cost < min {
            best = d;
            min = cost;
        }
    }

    best
}

/// Run the winner-take-all decision over every pixel.
///
/// The volume's level count is bounded by `CostVolume::build`, so every disparity fits a `u8`.
pub fn decide(paths: &[DirectionalCost], volume: &CostVolume) -> DisparityMap {
    let mut data = Array2::<u8>::zeros((volume.height(), volume.width()));

    Zip::indexed(&mut data).par_for_each(|(y, x), disp| {
        *disp = best_disparity(paths, volume, x, y) as u8;
    });

    DisparityMap::from_array(data, volume.levels())
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
