//! Tests for the vector helpers.

use super::*;
use approx::assert_relative_eq;

fn sample_vectors() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(3.0, -4.0, 12.0),
        Vec3::new(-0.25, 0.5, 0.125),
        Vec3::new(1e-3, 2e-3, -5e-4),
        Vec3::new(100.0, 250.0, -75.0),
    ]
}

#[test]
fn test_normalized_has_unit_magnitude() {
    for v in sample_vectors() {
        let n = v.normalized().expect("non-zero vector");
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_normalizing_zero_fails() {
    assert_eq!(Vec3::ZERO.normalized(), Err(GeometryError::DivideByZero));
    assert_eq!(Vec2::ZERO.normalized(), Err(GeometryError::DivideByZero));
}

#[test]
fn test_normalizing_non_finite_fails() {
    for v in [
        Vec3::new(f64::NAN, 0.0, 0.0),
        Vec3::new(0.0, f64::INFINITY, 1.0),
    ] {
        assert!(matches!(v.normalized(), Err(GeometryError::DivideByZero)));
    }
    let v2 = Vec2::new(f64::NAN, 1.0);
    assert!(matches!(v2.normalized(), Err(GeometryError::DivideByZero)));
}

#[test]
fn test_dot_with_self_is_squared_magnitude() {
    for v in sample_vectors() {
        assert_relative_eq!(v.dot(v), v.magnitude() * v.magnitude(), max_relative = 1e-12);
    }
}

#[test]
fn test_cross_product_is_anti_commutative() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            let lhs = a.cross(*b);
            let rhs = -b.cross(*a);
            assert!(lhs.abs_diff_eq(rhs, 1e-9), "{lhs} != {rhs}");
        }
    }
}

#[test]
fn test_cross_product_matches_determinant() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    // (ay*bz - az*by, az*bx - ax*bz, ax*by - ay*bx)
    assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
    assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
}

#[test]
fn test_negate_flips_every_component() {
    let v = Vec3::new(1.0, -2.0, 3.0);
    assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
}

#[test]
fn test_projecting_onto_self_is_identity() {
    for v in sample_vectors() {
        let p = v.projected_on(v).expect("non-zero vector");
        assert!(p.abs_diff_eq(v, 1e-9), "{p} != {v}");
    }
}

#[test]
fn test_projection_drops_orthogonal_component() {
    let v = Vec3::new(2.0, 5.0, 0.0);
    let p = v.projected_on(Vec3::new(4.0, 0.0, 0.0)).unwrap();
    assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));

    let v2 = Vec2::new(3.0, 4.0);
    let p2 = v2.projected_on(Vec2::Y).unwrap();
    assert_eq!(p2, Vec2::new(0.0, 4.0));
}

#[test]
fn test_projecting_onto_zero_fails() {
    assert!(Vec3::X.projected_on(Vec3::ZERO).is_err());
}

#[test]
fn test_from_polar_lies_on_circle() {
    for i in 0..8 {
        let angle = i as f64 * std::f64::consts::FRAC_PI_4;
        let p = from_polar(2.5, angle);
        assert_relative_eq!(p.length(), 2.5, epsilon = 1e-12);
    }
}
