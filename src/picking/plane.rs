//! # Plane Intersection
//!
//! Ray intersection with an infinite plane in point-normal form.

use super::{Ray, RayHit};
use crate::config::PLANE_EPSILON;
use macroquad::math::Vec3;

/// A plane `dot(normal, p) + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Creates a plane from its normal and signed offset.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Creates the plane through `point` with the given normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// The horizontal ground plane `y = 0`.
    pub fn ground() -> Self {
        Self::new(Vec3::Y, 0.0)
    }

    /// Intersects a ray with the plane.
    ///
    /// Returns `None` when the ray runs parallel to the plane or when the plane lies
    /// behind the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() <= PLANE_EPSILON {
            return None;
        }

        let t = -(ray.origin.dot(self.normal) + self.distance) / denom;
        if !t.is_finite() || t < 0.0 {
            return None;
        }

        Some(RayHit {
            position: ray.at(t),
            normal: self.normal.normalize_or_zero(),
            distance: t,
        })
    }
}
