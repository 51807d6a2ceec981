//! # Semi-Global Matching
//!
//! This module provides an implementation of Hirschmüller's Semi-Global Matching, following the
//! pipeline from ("Stereo Processing by Semiglobal Matching and Mutual Information")[https://core.ac.uk/download/pdf/11134866.pdf]:
//!
//! 1. build a per-pixel absolute-difference cost volume,
//! 2. aggregate path costs along eight scan directions,
//! 3. sum the directions and take the cheapest disparity at every pixel.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod combine;
pub mod cost;
pub mod direction;
pub mod path;

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::disparity::{DisparityAlgorithm, DisparityMap};
use crate::error::*;
use crate::frame::StereoFrame;

use cost::CostVolume;
use direction::{DirectionalCost, DIRECTIONS};

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// Largest accepted smoothness penalty.
///
/// Path costs never exceed `p2 + 255`, so this keeps every table value and the sum over eight
/// directions well inside `u32`.
pub const MAX_PENALTY: u32 = u16::MAX as u32;

/// Largest number of disparity levels that still fits an 8-bit disparity image.
pub const MAX_LEVELS: usize = 256;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

pub struct Sgm {
    params: Params
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Params {
    /// Number of disparity levels searched, `[0, levels)`.
    pub levels: usize,
    /// Penalty for a disparity change of exactly one between neighbouring pixels.
    pub p1: u32,
    /// Penalty for any larger disparity change.
    pub p2: u32
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            levels: 16,
            p1: 5,
            p2: 10
        }
    }
}

impl Params {
    /// Check that the parameters can be used for matching.
    pub fn validate(&self) -> Result<()> {
        if self.levels < 2 || self.levels > MAX_LEVELS {
            return Err(Error::ParameterInvalid(format!(
                "levels must be in [2, {}], got {}",
                MAX_LEVELS,
                self.levels
            )));
        }

        if self.p1 > MAX_PENALTY || self.p2 > MAX_PENALTY {
            return Err(Error::ParameterInvalid(format!(
                "penalties must not exceed {}, got p1 = {}, p2 = {}",
                MAX_PENALTY,
                self.p1,
                self.p2
            )));
        }

        if self.p2 < self.p1 {
            warn!("p2 ({}) is smaller than p1 ({}), large jumps will be preferred", self.p2, self.p1);
        }

        Ok(())
    }

    /// Parse parameters from a JSON string. Missing fields take their default value.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }
}

impl Sgm {
    /// Create a new instance of the algorithm with the given parameters.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Build the matching cost volume for the frame.
    pub fn cost_volume(&self, frame: &StereoFrame) -> Result<CostVolume> {
        CostVolume::build(frame, self.params.levels)
    }

    /// Aggregate the volume along all eight directions.
    ///
    /// Directions are independent of each other and run in parallel. The returned tables keep
    /// the order of `DIRECTIONS`.
    pub fn aggregate(&self, volume: &CostVolume) -> Vec<DirectionalCost> {
        let Params { p1, p2, .. } = self.params;

        DIRECTIONS[..]
            .par_iter()
            .map(|dir| {
                let costs = dir.aggregate(volume, p1, p2);
                debug!("Aggregated {} ({:?} sweep)", dir.name, dir.sweep);
                costs
            })
            .collect()
    }
}

impl DisparityAlgorithm for Sgm {
    /// Compute the disparity map for the given frame.
    fn compute(&mut self, frame: &StereoFrame) -> Result<DisparityMap> {
        info!(
            "Computing SGM disparity for {}x{} frame: {:?}",
            frame.width(),
            frame.height(),
            self.params
        );

        // ---- COST VOLUME ----
        let volume = self.cost_volume(frame)?;
        debug!("Cost volume built");

        // ---- AGGREGATION ----
        let paths = self.aggregate(&volume);

        // ---- DECISION ----
        let map = combine::decide(&paths, &volume);
        debug!("Disparity decided, max disparity {}", map.max_disp());

        Ok(map)
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
