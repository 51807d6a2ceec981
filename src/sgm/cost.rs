//! # Matching cost volume
//!
//! Absolute intensity difference between the left pixel and its candidate match in the right
//! image, for every pixel and disparity level.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::GrayImage;
use ndarray::{Array3, ArrayView1, Zip, s};

use crate::error::*;
use crate::frame::StereoFrame;
use super::MAX_LEVELS;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// Raw matching costs indexed `[y][x][d]`.
#[derive(Debug, Clone)]
pub struct CostVolume {
    costs: Array3<u8>
}

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Matching cost of left pixel `(x, y)` against right pixel `(x - d, y)`.
///
/// Reference samples that fall off the left edge of the right image read as black.
pub fn matching_cost(left: &GrayImage, right: &GrayImage, x: u32, y: u32, d: u32) -> u8 {
    let left_px = left.get_pixel(x, y)[0];
    let right_px = if x >= d {
        right.get_pixel(x - d, y)[0]
    }
    else {
        0
    };

    if left_px > right_px {
        left_px - right_px
    }
    else {
        right_px - left_px
    }
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl CostVolume {
    /// Evaluate `matching_cost` once for every `(x, y, d)` of the frame.
    ///
    /// `levels` must be in `[2, MAX_LEVELS]` so that every disparity fits the 8-bit map.
    pub fn build(frame: &StereoFrame, levels: usize) -> Result<Self> {
        if levels < 2 || levels > MAX_LEVELS {
            return Err(Error::ParameterInvalid(format!(
                "levels must be in [2, {}], got {}",
                MAX_LEVELS,
                levels
            )));
        }

        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let mut costs = Array3::<u8>::zeros((height, width, levels));

        Zip::indexed(&mut costs).par_for_each(|(y, x, d), cost| {
            *cost = matching_cost(&frame.left, &frame.right, x as u32, y as u32, d as u32);
        });

        Ok(Self { costs })
    }

    pub fn width(&self) -> usize {
        self.costs.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.costs.shape()[0]
    }

    pub fn levels(&self) -> usize {
        self.costs.shape()[2]
    }

    pub fn get(&self, x: usize, y: usize, d: usize) -> u8 {
        self.costs[(y, x, d)]
    }

    /// Cost vector over all disparity levels at `(x, y)`.
    pub fn at(&self, x: usize, y: usize) -> ArrayView1<'_, u8> {
        self.costs.slice(s![y, x, ..])
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
