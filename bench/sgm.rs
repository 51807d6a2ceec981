use criterion::{black_box, criterion_group, criterion_main, Criterion};

use image::{GrayImage, Luma};
use sgm_disparity::prelude::*;

fn sgm_bench(c: &mut Criterion) {

    // Build a textured frame with a constant shift of 6 pixels
    let texture = |x: i64, y: i64| {
        (((x * 73 + y * 151 + 1_000) as u32).wrapping_mul(2_654_435_761) >> 24) as u8
    };
    let left = GrayImage::from_fn(160, 120, |x, y| Luma([texture(x as i64 - 6, y as i64)]));
    let right = GrayImage::from_fn(160, 120, |x, y| Luma([texture(x as i64, y as i64)]));
    let frame = StereoFrame::new(left, right).unwrap();

    // Build disparity alg
    let mut disp = Sgm::new(Params::default()).unwrap();

    // Benchmark compute function
    c.bench_function("sgm textured 160x120", |b| b.iter(|| disp.compute(black_box(&frame))));
}

criterion_group!(benches, sgm_bench);
criterion_main!(benches);
