use glam::{Mat4, Quat, Vec3};
use super::*;

fn unit_bounds() -> Bounds {
    Bounds {
        origin: Vec3::ZERO,
        extents: Vec3::ONE,
        sphere_radius: 1.0,
    }
}

// ============================================================================
// AABB
// ============================================================================

#[test]
fn test_aabb_center() {
    let aabb = AABB {
        min: Vec3::new(-2.0, 0.0, 4.0),
        max: Vec3::new(2.0, 6.0, 8.0),
    };
    assert_eq!(aabb.center(), Vec3::new(0.0, 3.0, 6.0));
}

#[test]
fn test_aabb_union() {
    let a = AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) };
    let b = AABB { min: Vec3::new(0.0, -5.0, 0.0), max: Vec3::new(3.0, 0.0, 0.5) };

    let u = a.union(&b);
    assert_eq!(u.min, Vec3::new(-1.0, -5.0, -1.0));
    assert_eq!(u.max, Vec3::new(3.0, 1.0, 1.0));
}

#[test]
fn test_aabb_union_with_empty_seed() {
    let b = AABB { min: Vec3::splat(-2.0), max: Vec3::splat(3.0) };

    // The first merge into the seed must reproduce the operand exactly
    let u = AABB::EMPTY.union(&b);
    assert_eq!(u.min, b.min);
    assert_eq!(u.max, b.max);
}

#[test]
fn test_aabb_contains() {
    let big = AABB { min: Vec3::splat(-10.0), max: Vec3::splat(10.0) };
    let small = AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) };
    let straddling = AABB { min: Vec3::new(5.0, 5.0, 5.0), max: Vec3::new(15.0, 15.0, 15.0) };

    assert!(big.contains(&small));
    assert!(big.contains(&big));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
}

// ============================================================================
// WORLD BOUND APPROXIMATION
// ============================================================================

#[test]
fn test_world_center_applies_translation() {
    let obj = RenderObject::new(
        Mat4::from_translation(Vec3::new(5.0, -2.0, 1.0)),
        unit_bounds(),
    );
    assert!((obj.world_center() - Vec3::new(5.0, -2.0, 1.0)).length() < 1e-6);
}

#[test]
fn test_world_center_applies_origin_offset() {
    let bounds = Bounds {
        origin: Vec3::new(1.0, 0.0, 0.0),
        extents: Vec3::ONE,
        sphere_radius: 1.0,
    };
    let obj = RenderObject::new(Mat4::from_scale(Vec3::splat(2.0)), bounds);

    // Origin offset is scaled by the transform
    assert!((obj.world_center() - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_max_scale_identity() {
    let obj = RenderObject::new(Mat4::IDENTITY, unit_bounds());
    assert!((obj.max_scale() - 1.0).abs() < 1e-6);
}

#[test]
fn test_max_scale_takes_largest_axis() {
    let obj = RenderObject::new(
        Mat4::from_scale(Vec3::new(2.0, 7.0, 0.5)),
        unit_bounds(),
    );
    assert!((obj.max_scale() - 7.0).abs() < 1e-5);
}

#[test]
fn test_max_scale_is_rotation_invariant() {
    let rotated = Mat4::from_rotation_translation(
        Quat::from_rotation_y(0.7),
        Vec3::ZERO,
    );
    let obj = RenderObject::new(rotated, unit_bounds());
    assert!((obj.max_scale() - 1.0).abs() < 1e-5);
}

#[test]
fn test_world_aabb_uniform_scale() {
    let obj = RenderObject::new(
        Mat4::from_scale_rotation_translation(
            Vec3::splat(3.0),
            Quat::IDENTITY,
            Vec3::new(10.0, 0.0, 0.0),
        ),
        unit_bounds(),
    );

    let aabb = obj.world_aabb();
    assert!((aabb.min - Vec3::new(7.0, -3.0, -3.0)).length() < 1e-4);
    assert!((aabb.max - Vec3::new(13.0, 3.0, 3.0)).length() < 1e-4);
}

#[test]
fn test_world_aabb_is_conservative_under_nonuniform_scale() {
    // With scale (1, 1, 4) the approximation inflates ALL axes by 4 —
    // looser than the true bounds, but never tighter
    let obj = RenderObject::new(
        Mat4::from_scale(Vec3::new(1.0, 1.0, 4.0)),
        unit_bounds(),
    );

    let approx = obj.world_aabb();
    let true_aabb = AABB {
        min: Vec3::new(-1.0, -1.0, -4.0),
        max: Vec3::new(1.0, 1.0, 4.0),
    };
    assert!(approx.contains(&true_aabb));
}

#[test]
fn test_world_sphere_scales_radius() {
    let bounds = Bounds {
        origin: Vec3::ZERO,
        extents: Vec3::ONE,
        sphere_radius: 2.0,
    };
    let obj = RenderObject::new(Mat4::from_scale(Vec3::splat(5.0)), bounds);

    let (center, radius) = obj.world_sphere();
    assert!(center.length() < 1e-6);
    assert!((radius - 10.0).abs() < 1e-4);
}
