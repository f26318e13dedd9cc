//! Tour of the vector operations.
//!
//! Run with `cargo run --example basics`. The logger is installed at `Debug`
//! so the rejected runtime swizzle at the end is reported.

use fixvec::{swizzle, FixedVector, Vec2f, Vec3, Vec3f};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let v = Vec3f::new([3.0, 0.0, 4.0]);
    println!("v            = {}", v);
    println!("|v|          = {}", v.magnitude());
    println!("normalize(v) = {:.3}", v.normalize());
    println!("v.zyx        = {}", swizzle!(v, "zyx"));
    println!("v.xz         = {}", swizzle!(v, "xz"));

    let a = Vec3::new([1, 0, 0]);
    let b = Vec3::new([0, 1, 0]);
    println!("{} x {} = {}", a, b, a.cross(b));

    let right = Vec2f::new([1.0, 0.0]);
    let up = Vec2f::new([0.0, 1.0]);
    println!("angle(right, up) = {:.4} rad", right.angle(up));

    let incoming = Vec2f::new([1.0, -1.0]);
    println!("reflect({}, {}) = {}", incoming, up, incoming.reflect(up));

    let signed = FixedVector::new([8i8, 8]);
    println!("|{}| as i8 = {}", signed, signed.magnitude());

    match v.try_swizzle::<2>("xq") {
        Ok(s) => println!("runtime swizzle: {}", s),
        Err(err) => println!("runtime swizzle failed: {}", err),
    }
}
