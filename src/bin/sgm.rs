//! Compute a disparity image from a rectified stereo pair.
//!
//! Usage: `sgm <left> <right> [output] [params.json]`

use std::time::Instant;

use log::info;
use sgm_disparity::{prefilter, prelude::*, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        return Err(Box::new(Error::InvalidInput(format!(
            "usage: {} <left> <right> [output] [params.json]",
            args.first().map(String::as_str).unwrap_or("sgm")
        ))));
    }

    let output = args.get(3).map(String::as_str).unwrap_or("disparity.png");
    let params = match args.get(4) {
        Some(path) => Params::from_json_file(path)?,
        None => Params::default()
    };

    let start = Instant::now();

    let frame = StereoFrame::open(&args[1], &args[2])?;
    let frame = prefilter::gaussian(&frame, prefilter::DEFAULT_SIGMA)?;

    let mut sgm = Sgm::new(params)?;
    let disp_map = sgm.compute(&frame)?;
    disp_map.save(output)?;

    info!(
        "Wrote {} ({}x{}) in {:.1} ms",
        output,
        disp_map.width(),
        disp_map.height(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
