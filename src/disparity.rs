//! # General disparity objects
//!
//! This module provides generic disparity traits and structures for use by different algorithms.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use image::GrayImage;
use ndarray::Array2;

use crate::error::*;
use crate::frame::StereoFrame;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// A dense integer disparity map.
///
/// Each cell holds a disparity index in `[0, levels)`, stored as `[y][x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisparityMap {
    data: Array2<u8>,
    levels: usize
}

// -----------------------------------------------------------------------------------------------
// TRAITS
// -----------------------------------------------------------------------------------------------

pub trait DisparityAlgorithm {
    /// Compute the disparity map of the given stereo frame.
    fn compute(&mut self, frame: &StereoFrame) -> Result<DisparityMap>;
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl DisparityMap {
    pub(crate) fn from_array(data: Array2<u8>, levels: usize) -> Self {
        DisparityMap {
            data,
            levels
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Number of disparity levels the map was searched over.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Disparity index at the given pixel.
    pub fn get(&self, x: usize, y: usize) -> usize {
        self.data[(y, x)] as usize
    }

    /// Underlying `[y][x]` array of disparity indices.
    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }

    /// Largest disparity present in the map.
    pub fn max_disp(&self) -> usize {
        self.data.iter().copied().max().unwrap_or(0) as usize
    }

    /// Count of pixels for each disparity index, `histogram()[d]` being the count for `d`.
    pub fn histogram(&self) -> Vec<usize> {
        let mut hist = vec![0; self.levels];
        for &d in self.data.iter() {
            hist[d as usize] += 1;
        }
        hist
    }

    /// Most common disparity and its pixel count. Ties go to the lower disparity.
    pub fn mode(&self) -> Option<(usize, usize)> {
        self.histogram()
            .into_iter()
            .enumerate()
            .fold(None, |best, (d, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((d, count))
            })
    }

    /// Converts the map into a Luma8 image, scaling each index by `256 / levels`.
    pub fn to_luma(&self) -> GrayImage {
        let scale = (256 / self.levels) as u32;

        GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let val = self.data[(y as usize, x as usize)] as u32 * scale;
            image::Luma([val.min(255) as u8])
        })
    }

    /// Converts the map to a normalised GrayImage.
    ///
    /// Stretches by the maximum disparity present in the map so the full intensity range is
    /// used. A map that is zero everywhere stays black.
    pub fn to_luma_normalised(&self) -> GrayImage {
        let max = self.max_disp();

        let mult = match max {
            0 => 0.0,
            d => 255.0 / d as f32
        };

        GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let val = self.data[(y as usize, x as usize)] as f32 * mult;
            image::Luma([val.round().min(255.0) as u8])
        })
    }

    /// Write the `to_luma` rendering of the map to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_luma().save(path)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
