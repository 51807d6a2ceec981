//! # Scan directions
//!
//! The eight SGM scan directions and the generic routine that fills a directional cost table by
//! applying the path cost recurrence along one of them.
//!
//! Directions are split into two sweeps. The forward sweep visits rows top to bottom and pixels
//! left to right, so predecessors to the west and in the row above are always finished first.
//! The backward sweep visits pixels in the exact reverse order for the mirrored directions.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use ndarray::{Array3, ArrayView1, s};

use super::cost::CostVolume;
use super::path::path_cost;

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// All scan directions, forward sweep first.
pub static DIRECTIONS: [Direction; 8] = [
    Direction { name: "west", dx: -1, dy: 0, sweep: Sweep::Forward },
    Direction { name: "northwest", dx: -1, dy: -1, sweep: Sweep::Forward },
    Direction { name: "north", dx: 0, dy: -1, sweep: Sweep::Forward },
    Direction { name: "northeast", dx: 1, dy: -1, sweep: Sweep::Forward },
    Direction { name: "east", dx: 1, dy: 0, sweep: Sweep::Backward },
    Direction { name: "southeast", dx: 1, dy: 1, sweep: Sweep::Backward },
    Direction { name: "south", dx: 0, dy: 1, sweep: Sweep::Backward },
    Direction { name: "southwest", dx: -1, dy: 1, sweep: Sweep::Backward }
];

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// Raster order in which a direction's table is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Ascending `y`, then ascending `x`.
    Forward,
    /// Descending `y`, then descending `x`.
    Backward
}

/// A scan direction, described by the offset from a pixel to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub name: &'static str,
    pub dx: isize,
    pub dy: isize,
    pub sweep: Sweep
}

/// Accumulated path costs for one direction, indexed `[y][x][d]`.
#[derive(Debug, Clone)]
pub struct DirectionalCost {
    pub direction: Direction,
    table: Array3<u32>
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl Sweep {
    /// Pixel visiting order for an image of the given size.
    pub fn order(self, width: usize, height: usize) -> Box<dyn Iterator<Item = (usize, usize)>> {
        match self {
            Sweep::Forward => Box::new(
                (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
            ),
            Sweep::Backward => Box::new(
                (0..height).rev().flat_map(move |y| (0..width).rev().map(move |x| (x, y)))
            )
        }
    }
}

impl Direction {
    /// Predecessor of `(x, y)` along this direction.
    ///
    /// Returns `None` on the image border where the predecessor would fall outside the image,
    /// in which case the direction makes no contribution at that pixel.
    pub fn predecessor(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize
    ) -> Option<(usize, usize)> {
        let px = x as isize + self.dx;
        let py = y as isize + self.dy;

        if px < 0 || py < 0 || px >= width as isize || py >= height as isize {
            None
        }
        else {
            Some((px as usize, py as usize))
        }
    }

    /// Fill this direction's cost table from the matching cost volume.
    ///
    /// Cells whose predecessor lies outside the image are left at zero.
    pub fn aggregate(&self, volume: &CostVolume, p1: u32, p2: u32) -> DirectionalCost {
        let width = volume.width();
        let height = volume.height();
        let mut table = Array3::<u32>::zeros((height, width, volume.levels()));

        for (x, y) in self.sweep.order(width, height) {
            let (px, py) = match self.predecessor(x, y, width, height) {
                Some(p) => p,
                None => continue
            };

            let (prev, out) = table.multi_slice_mut((s![py, px, ..], s![y, x, ..]));
            path_cost(volume.at(x, y), prev.view(), out, p1, p2);
        }

        DirectionalCost {
            direction: *self,
            table
        }
    }
}

impl DirectionalCost {
    pub fn get(&self, x: usize, y: usize, d: usize) -> u32 {
        self.table[(y, x, d)]
    }

    /// Path cost vector over all disparity levels at `(x, y)`.
    pub fn at(&self, x: usize, y: usize) -> ArrayView1<'_, u32> {
        self.table.slice(s![y, x, ..])
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
