//! Concrete usage scenarios for 2D and 3D vectors of float and integer types.

use fixvec::{swizzle, FixedVector, Vec2f, Vec2i, Vec3, Vec3f};

const EPSILON: f32 = 1e-3;

#[test]
fn test_2d_float_components_and_sum() {
    let v = Vec2f::new([1.0, 2.0]);
    assert_eq!(v.sum(), 3.0);
    assert_eq!(v.x(), 1.0);
    assert_eq!(v.y(), 2.0);
}

#[test]
fn test_2d_int_sum_magnitude_and_normalize() {
    let v = Vec2i::new([1, 2]);
    assert_eq!(v.sum(), 3);

    let unit = Vec2i::new([1, 0]);
    assert_eq!(unit.magnitude(), 1);
    assert_eq!(unit.normalize().magnitude(), 1);
}

#[test]
fn test_2d_orthogonal_unit_vectors() {
    let a = Vec2f::new([1.0, 0.0]);
    let b = Vec2f::new([0.0, 1.0]);

    assert_eq!(a.dot(b), 0.0);
    assert!(
        (a.angle(b) - std::f32::consts::FRAC_PI_2).abs() < EPSILON,
        "angle between orthogonal axes should be ~π/2, got {}",
        a.angle(b)
    );
}

#[test]
fn test_reflect_vector_orthogonal_to_normal() {
    let a = Vec2f::new([1.0, 0.0]);
    let b = Vec2f::new([0.0, 1.0]);
    assert_eq!(a.reflect(b), a);
}

#[test]
fn test_3d_swizzle() {
    let v = Vec3::new([1, 2, 3]);
    assert_eq!(swizzle!(v, "yzx"), Vec3::new([2, 3, 1]));
}

#[test]
fn test_cross_product_of_axes() {
    let a = Vec3::new([1, 0, 0]);
    let b = Vec3::new([0, 1, 0]);
    assert_eq!(a.cross(b), Vec3::new([0, 0, 1]));
}

#[test]
fn test_bounce_off_floor() {
    // A ball moving down and to the right bounces off a floor facing up.
    let velocity = Vec3f::new([2.0, -3.0, 0.5]);
    let floor = Vec3f::new([0.0, 1.0, 0.0]);

    let bounced = velocity.reflect(floor);
    assert_eq!(bounced, Vec3f::new([2.0, 3.0, 0.5]));
    assert!((bounced.magnitude() - velocity.magnitude()).abs() < EPSILON);
}

#[test]
fn test_distance_between_points() {
    let a = FixedVector::new([1.0f64, 2.0, 3.0, 4.0]);
    let b = FixedVector::new([2.0f64, 3.0, 4.0, 5.0]);
    assert_eq!(a.distance(b), 2.0);

    let p = FixedVector::new([10u32, 10]);
    let q = FixedVector::new([7u32, 6]);
    // Unsigned subtraction would underflow the other way round.
    assert_eq!(p.distance(q), 5);
}

#[test]
fn test_signed_magnitude_reinterprets_wrapped_sum() {
    // 100² + 100² = 20000 fits in i16; 200² wraps.
    assert_eq!(FixedVector::new([100i16, 100]).magnitude(), 141);
    // 200² = 40000 wraps to -25536 in i16; as u16 it reads 40000 again.
    assert_eq!(FixedVector::new([200i16]).magnitude(), 200);
}

#[test]
fn test_display_is_deterministic() {
    let v = FixedVector::new([1, -2, 3]);
    assert_eq!(v.to_string(), "(1, -2, 3)");
    assert_eq!(v.to_string(), format!("{}", v));
    assert_eq!(format!("{:.1}", Vec2f::new([0.3, 2.0])), "(0.3, 2.0)");
}
