//! # Disparity statistics
//!
//! Plots describing a computed disparity map, only available with the `statistics` feature.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use plotters::prelude::*;

use crate::disparity::DisparityMap;
use crate::error::*;

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Plot the pixel count of every disparity level to a PNG at `path`.
pub fn plot_histogram<P: AsRef<Path>>(map: &DisparityMap, path: P) -> Result<()> {
    let hist = map.histogram();
    let max_count = hist.iter().copied().max().unwrap_or(0) + 1;

    let area = BitMapBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    area.fill(&WHITE).map_err(|e| Error::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&area)
        .caption("Disparity histogram", ("sans-serif", 20).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..map.levels(), 0..max_count)
        .map_err(|e| Error::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .draw()
        .map_err(|e| Error::Plot(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            hist.iter().enumerate().map(|(d, &count)| (d, count)),
            &RED
        ))
        .map_err(|e| Error::Plot(e.to_string()))?;

    area.present().map_err(|e| Error::Plot(e.to_string()))?;

    Ok(())
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
