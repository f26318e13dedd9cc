//! Sequential versus parallel batch operations.
//!
//! Run with `cargo run --release --example batch`.

use std::time::Instant;

use fixvec::{centroid, Vec3f, VectorBatch};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let points: Vec<Vec3f> = (0..2_000_000)
        .map(|i| {
            let t = i as f32 * 0.001;
            Vec3f::new([t.cos(), t.sin(), t * 0.01])
        })
        .collect();

    let start = Instant::now();
    let normalized = points.normalize_all();
    log::info!("normalize_all: {:?}", start.elapsed());

    let start = Instant::now();
    let par_normalized = points.par_normalize_all();
    log::info!("par_normalize_all: {:?}", start.elapsed());

    assert_eq!(normalized, par_normalized);

    let start = Instant::now();
    let dots = points.par_dots(&normalized).unwrap();
    log::info!("par_dots: {:?} ({} results)", start.elapsed(), dots.len());

    if let Some(center) = centroid(&points) {
        log::info!("centroid: {:.4}", center);
    }
}
