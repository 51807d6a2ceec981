//! # Stereo frames
//!
//! A rectified pair of 8-bit grayscale images, validated so that both views share the same
//! dimensions.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use image::GrayImage;
use crate::error::*;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// A rectified stereo pair.
#[derive(Debug, Clone)]
pub struct StereoFrame {
    pub(crate) left: GrayImage,
    pub(crate) right: GrayImage
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl StereoFrame {
    /// Build a frame from two grayscale images.
    ///
    /// Fails with `Error::InvalidInput` if either image is empty or if their dimensions differ.
    pub fn new(left: GrayImage, right: GrayImage) -> Result<Self> {
        if left.width() == 0 || left.height() == 0 {
            return Err(Error::InvalidInput(format!(
                "left image is empty ({}x{})",
                left.width(),
                left.height()
            )));
        }

        if right.width() == 0 || right.height() == 0 {
            return Err(Error::InvalidInput(format!(
                "right image is empty ({}x{})",
                right.width(),
                right.height()
            )));
        }

        if left.dimensions() != right.dimensions() {
            return Err(Error::InvalidInput(format!(
                "image dimensions differ: left is {}x{}, right is {}x{}",
                left.width(),
                left.height(),
                right.width(),
                right.height()
            )));
        }

        Ok(Self { left, right })
    }

    /// Load a frame from two image files, converting both to 8-bit luma.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(left: P, right: Q) -> Result<Self> {
        let left = image::open(left)?.to_luma8();
        let right = image::open(right)?.to_luma8();

        Self::new(left, right)
    }

    pub fn left(&self) -> &GrayImage {
        &self.left
    }

    pub fn right(&self) -> &GrayImage {
        &self.right
    }

    pub fn width(&self) -> u32 {
        self.left.width()
    }

    pub fn height(&self) -> u32 {
        self.left.height()
    }

    /// Apply `f` to both views, keeping the pair aligned.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&GrayImage) -> GrayImage
    {
        Self {
            left: f(&self.left),
            right: f(&self.right)
        }
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let res = StereoFrame::new(GrayImage::new(4, 4), GrayImage::new(5, 4));
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn empty_images_are_rejected() {
        let res = StereoFrame::new(GrayImage::new(0, 4), GrayImage::new(0, 4));
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn valid_pair_is_accepted() {
        let frame = StereoFrame::new(GrayImage::new(6, 3), GrayImage::new(6, 3)).unwrap();
        assert_eq!(frame.width(), 6);
        assert_eq!(frame.height(), 3);
    }
}
