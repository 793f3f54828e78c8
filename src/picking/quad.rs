//! # Quad Intersection
//!
//! Ray intersection with a bounded four-cornered surface, split into two triangles.

use super::{Ray, RayHit};
use crate::config::PLANE_EPSILON;
use macroquad::math::Vec3;

/// A planar quad given by four corners in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
}

impl Quad {
    /// Creates a quad from corners in winding order.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self {
            corners: [a, b, c, d],
        }
    }

    /// A horizontal square centered on `center` with the given half extent.
    pub fn ground(center: Vec3, half_extent: f32) -> Self {
        let h = half_extent;
        Self::new(
            center + Vec3::new(-h, 0.0, -h),
            center + Vec3::new(-h, 0.0, h),
            center + Vec3::new(h, 0.0, h),
            center + Vec3::new(h, 0.0, -h),
        )
    }

    /// Intersects a ray with the quad, as triangles (a, b, c) and (a, c, d).
    ///
    /// The nearest hit in front of the ray origin wins.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let [a, b, c, d] = self.corners;
        let first = intersect_triangle(ray, a, b, c);
        let second = intersect_triangle(ray, a, c, d);

        match (first, second) {
            (Some(x), Some(y)) => Some(if y.distance < x.distance { y } else { x }),
            (hit, None) | (None, hit) => hit,
        }
    }
}

/// Möller–Trumbore ray/triangle intersection.
fn intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<RayHit> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() <= PLANE_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if !t.is_finite() || t < 0.0 {
        return None;
    }

    Some(RayHit {
        position: ray.at(t),
        normal: edge1.cross(edge2).normalize_or_zero(),
        distance: t,
    })
}
