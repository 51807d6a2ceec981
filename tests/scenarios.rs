//! # Matching scenarios
//!
//! End-to-end runs of the SGM pipeline on small synthetic stereo pairs.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use image::{GrayImage, Luma};
use sgm_disparity::{prelude::*, sgm::{cost::CostVolume, direction::Sweep}, Error};

// -----------------------------------------------------------------------------------------------
// HELPERS
// -----------------------------------------------------------------------------------------------

/// Pseudo-random texture with strong contrast between neighbouring pixels.
fn texture(x: i64, y: i64) -> u8 {
    let seed = (x * 73 + y * 151 + 1_000) as u32;
    (seed.wrapping_mul(2_654_435_761) >> 24) as u8
}

/// Pair where every left pixel matches the right pixel `shift` columns to its left.
fn shifted_texture(width: u32, height: u32, shift: i64) -> StereoFrame {
    let left = GrayImage::from_fn(width, height, |x, y| Luma([texture(x as i64 - shift, y as i64)]));
    let right = GrayImage::from_fn(width, height, |x, y| Luma([texture(x as i64, y as i64)]));
    StereoFrame::new(left, right).unwrap()
}

/// Shifted texture whose right view carries deterministic noise of up to 80 grey levels.
fn noisy_shifted_texture(width: u32, height: u32, shift: i64) -> StereoFrame {
    let noise = |x: u32, y: u32| ((x * 31 + y * 17 + 7).wrapping_mul(2_246_822_519) >> 27) as i32;

    let left = GrayImage::from_fn(width, height, |x, y| Luma([texture(x as i64 - shift, y as i64)]));
    let right = GrayImage::from_fn(width, height, |x, y| {
        let val = texture(x as i64, y as i64) as i32 + (noise(x, y) - 16) * 5;
        Luma([val.max(0).min(255) as u8])
    });
    StereoFrame::new(left, right).unwrap()
}

fn sgm(levels: usize, p1: u32, p2: u32) -> Sgm {
    Sgm::new(Params { levels, p1, p2 }).unwrap()
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------

#[test]
fn constant_pair_has_zero_disparity() -> Result<(), Box<dyn std::error::Error>> {
    let frame = StereoFrame::new(
        GrayImage::from_pixel(4, 4, Luma([100])),
        GrayImage::from_pixel(4, 4, Luma([100]))
    )?;

    let disp_map = sgm(4, 5, 10).compute(&frame)?;

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(disp_map.get(x, y), 0, "pixel ({}, {})", x, y);
        }
    }
    assert!(disp_map.to_luma().pixels().all(|p| p[0] == 0));

    Ok(())
}

#[test]
fn bright_column_is_found_at_its_shift() -> Result<(), Box<dyn std::error::Error>> {
    const SHIFT: u32 = 3;
    const COLUMN: u32 = 6;

    let background = Luma([50]);
    let left = GrayImage::from_fn(16, 9, |x, _| {
        if x == COLUMN + SHIFT { Luma([200]) } else { background }
    });
    let right = GrayImage::from_fn(16, 9, |x, _| {
        if x == COLUMN { Luma([200]) } else { background }
    });

    let disp_map = sgm(8, 5, 10).compute(&StereoFrame::new(left, right)?)?;

    for y in 0..9 {
        assert_eq!(disp_map.get((COLUMN + SHIFT) as usize, y), SHIFT as usize, "row {}", y);
    }

    Ok(())
}

#[test]
fn shifted_texture_recovers_shift() -> Result<(), Box<dyn std::error::Error>> {
    let levels = 8;
    let disp_map = sgm(levels, 5, 10).compute(&shifted_texture(40, 20, 4))?;

    let mut total = 0;
    let mut correct = 0;
    for y in 0..disp_map.height() {
        for x in levels..disp_map.width() {
            total += 1;
            if disp_map.get(x, y) == 4 {
                correct += 1;
            }
        }
    }

    assert!(correct * 10 >= total * 9, "{} of {} pixels at disparity 4", correct, total);
    assert_eq!(disp_map.mode().map(|(d, _)| d), Some(4));

    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let frame = shifted_texture(32, 24, 2);
    let mut matcher = sgm(16, 5, 10);

    let first = matcher.compute(&frame)?;
    let second = matcher.compute(&frame)?;

    assert_eq!(first, second);
    assert_eq!(first.to_luma(), second.to_luma());

    Ok(())
}

#[test]
fn larger_p2_does_not_shrink_dominant_disparity() -> Result<(), Box<dyn std::error::Error>> {
    let frame = noisy_shifted_texture(36, 18, 5);

    let mut last = 0;
    for &p2 in [10u32, 40, 160].iter() {
        let (_, count) = sgm(8, 5, p2).compute(&frame)?.mode().unwrap_or((0, 0));
        assert!(count >= last, "p2 = {} dropped mode count from {} to {}", p2, last, count);
        last = count;
    }

    Ok(())
}

#[test]
fn forward_tables_are_empty_on_top_and_left_borders() -> Result<(), Box<dyn std::error::Error>> {
    let frame = shifted_texture(9, 7, 1);
    let matcher = sgm(4, 5, 10);
    let paths = matcher.aggregate(&matcher.cost_volume(&frame)?);

    for path in paths.iter().filter(|p| p.direction.sweep == Sweep::Forward) {
        let dir = path.direction;
        for y in 0..7 {
            for x in 0..9 {
                let outside = (x == 0 && dir.dx < 0) || (y == 0 && dir.dy < 0) || (x == 8 && dir.dx > 0);
                if outside {
                    assert!(
                        path.at(x, y).iter().all(|&c| c == 0),
                        "{} has cost at ({}, {})", dir.name, x, y
                    );
                }
            }
        }
        assert!(path.at(0, 0).iter().all(|&c| c == 0));
    }

    Ok(())
}

#[test]
fn cost_volume_is_absolute_difference() -> Result<(), Box<dyn std::error::Error>> {
    let frame = shifted_texture(12, 5, 2);
    let matcher = sgm(6, 5, 10);
    let volume = matcher.cost_volume(&frame)?;

    for y in 0..5u32 {
        for x in 0..12u32 {
            for d in 0..6u32 {
                let l = frame.left().get_pixel(x, y)[0] as i32;
                let r = if x >= d { frame.right().get_pixel(x - d, y)[0] as i32 } else { 0 };
                assert_eq!(volume.get(x as usize, y as usize, d as usize) as i32, (l - r).abs());
            }
        }
    }

    Ok(())
}

#[test]
fn stage_api_rejects_levels_that_overflow_the_map() {
    let frame = shifted_texture(320, 1, 300);

    for &levels in [0usize, 1, 257, 301].iter() {
        let res = CostVolume::build(&frame, levels);
        assert!(matches!(res, Err(Error::ParameterInvalid(_))), "levels = {}", levels);
    }
}

#[test]
fn mismatched_frame_is_rejected() {
    let res = StereoFrame::new(GrayImage::new(8, 8), GrayImage::new(8, 7));
    assert!(matches!(res, Err(Error::InvalidInput(_))));
}
