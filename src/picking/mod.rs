//! # Picking Module
//!
//! Target acquisition: turns a pointer ray from the camera collaborator into a
//! world position on a ground plane or a bounded ground quad.

pub mod plane;
pub mod quad;

pub use plane::*;
pub use quad::*;

use crate::utils::heading;
use macroquad::math::{Mat4, Vec2, Vec3};

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray. The direction does not need to be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Builds a pick ray from normalized device coordinates.
    ///
    /// `inverse_view_projection` is the inverse of the camera's combined
    /// projection × view matrix (OpenGL clip conventions, depth in `[-1, 1]`).
    /// The ray starts on the near plane and points toward the far plane.
    pub fn from_viewport(inverse_view_projection: Mat4, ndc: Vec2) -> Option<Ray> {
        let near = inverse_view_projection.project_point3(Vec3::new(ndc.x, ndc.y, -1.0));
        let far = inverse_view_projection.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        heading(near, far).map(|(direction, _)| Ray::new(near, direction))
    }

    /// Builds a pick ray from a pointer position in pixels (origin top-left).
    pub fn from_screen(
        inverse_view_projection: Mat4,
        pointer: Vec2,
        screen_size: Vec2,
    ) -> Option<Ray> {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(
            2.0 * pointer.x / screen_size.x - 1.0,
            1.0 - 2.0 * pointer.y / screen_size.y,
        );
        Self::from_viewport(inverse_view_projection, ndc)
    }
}

/// Where a ray struck a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World position of the hit
    pub position: Vec3,
    /// Unit normal of the surface that was hit
    pub normal: Vec3,
    /// Ray parameter of the hit
    pub distance: f32,
}

/// A surface the pointer can pick targets on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetSurface {
    /// An infinite plane
    Plane(Plane),
    /// A bounded quad
    Quad(Quad),
}

impl TargetSurface {
    /// The horizontal plane `y = 0`.
    pub fn ground() -> Self {
        TargetSurface::Plane(Plane::ground())
    }

    /// Intersects the ray with this surface.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        match self {
            TargetSurface::Plane(plane) => plane.intersect(ray),
            TargetSurface::Quad(quad) => quad.intersect(ray),
        }
    }
}

/// Returns the world position picked by `ray` on `surface`, if any.
///
/// # Examples
///
/// ```
/// use gridwalk::{acquire_target, Ray, TargetSurface, Vec3};
///
/// let ray = Ray::new(Vec3::new(1.0, 5.0, 2.0), Vec3::new(0.0, -1.0, 0.0));
/// assert_eq!(acquire_target(&ray, &TargetSurface::ground()), Some(Vec3::new(1.0, 0.0, 2.0)));
///
/// let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
/// assert_eq!(acquire_target(&parallel, &TargetSurface::ground()), None);
/// ```
pub fn acquire_target(ray: &Ray, surface: &TargetSurface) -> Option<Vec3> {
    surface.intersect(ray).map(|hit| hit.position)
}
