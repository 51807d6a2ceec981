//! # Error standards
//! 
//! This module provides a standardised error enum and result type for this crate.

// -----------------------------------------------------------------------------------------------
// TYPES
// -----------------------------------------------------------------------------------------------

/// Standard result type used in the disparity crate.
pub type Result<T> = std::result::Result<T, Error>;

// -----------------------------------------------------------------------------------------------
// ENUMERATIONS
// -----------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The stereo pair cannot be matched, e.g. empty or mismatched images.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The algorithm parameters are outside of their supported range.
    #[error("Invalid parameter: {0}")]
    ParameterInvalid(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse parameters: {0}")]
    Config(#[from] serde_json::Error),

    #[cfg(feature = "statistics")]
    #[error("Plotting error: {0}")]
    Plot(String)
}
