//! # Disparity Computation
//!
//! This crate provides dense disparity map computation for rectified stereo pairs using
//! Semi-Global Matching.
//!
//! ```no_run
//! use sgm_disparity::prelude::*;
//!
//! # fn main() -> sgm_disparity::Result<()> {
//! let frame = StereoFrame::open("left.png", "right.png")?;
//! let mut sgm = Sgm::new(Params::default())?;
//! sgm.compute(&frame)?.save("disparity.png")?;
//! # Ok(())
//! # }
//! ```

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

mod disparity;
mod error;
mod frame;
pub mod prefilter;
pub mod sgm;
#[cfg(feature = "statistics")]
pub mod statistics;

// -----------------------------------------------------------------------------------------------
// EXPORTS
// -----------------------------------------------------------------------------------------------

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::disparity::{DisparityAlgorithm, DisparityMap};
    pub use crate::frame::StereoFrame;
    pub use crate::sgm::{Params, Sgm};
}
