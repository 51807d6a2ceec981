//! # Pre-filtering
//!
//! Smoothing applied to a stereo frame before matching. Pixel-wise absolute differences are
//! sensitive to sensor noise, so a light Gaussian blur of both views usually gives a cleaner
//! disparity map. Matching never applies this itself.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use imageproc::filter::gaussian_blur_f32;

use crate::error::*;
use crate::frame::StereoFrame;

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// Blur strength that roughly matches a 5x5 Gaussian kernel with sigma 0.68.
pub const DEFAULT_SIGMA: f32 = 0.68;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Blur both views of the frame with a Gaussian of standard deviation `sigma`.
pub fn gaussian(frame: &StereoFrame, sigma: f32) -> Result<StereoFrame> {
    if sigma.is_nan() || sigma <= 0.0 {
        return Err(Error::ParameterInvalid(format!(
            "blur sigma must be positive, got {}",
            sigma
        )));
    }

    Ok(frame.map(|img| gaussian_blur_f32(img, sigma)))
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
