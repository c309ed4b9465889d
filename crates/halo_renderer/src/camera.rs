//! Camera for primary ray generation.

use std::f32::consts::PI;

use halo_math::{Ray, Vec3};

/// Pinhole camera that projects one ray per pixel.
///
/// All derived quantities are computed once at construction; the camera is
/// immutable and shared read-only across render workers.
#[derive(Debug, Clone)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    /// Field of view in degrees
    pub fov: f32,

    // Cached values
    inv_width: f32,
    inv_height: f32,
    aspect_ratio: f32,
    angle: f32,
}

impl Camera {
    /// Create a camera for the given resolution and field of view.
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        Self {
            width,
            height,
            fov,
            inv_width: 1.0 / width as f32,
            inv_height: 1.0 / height as f32,
            aspect_ratio: width as f32 / height as f32,
            angle: (PI * 0.5 * fov / 180.0).tan(),
        }
    }

    /// Primary ray through pixel (x, y).
    ///
    /// The origin sits at the world origin looking down -Z; the direction
    /// is unit length.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let xx =
            (2.0 * ((x as f32 + 0.5) * self.inv_width) - 1.0) * self.angle * self.aspect_ratio;
        let yy = (1.0 - 2.0 * ((y as f32 + 0.5) * self.inv_height)) * self.angle;
        let direction = Vec3::new(xx, yy, -1.0).normalize();
        Ray::new(Vec3::ZERO, direction)
    }
}

impl Default for Camera {
    /// The fixed full-HD configuration: 1920x1080 at a 30 degree field of
    /// view.
    fn default() -> Self {
        Self::new(1920, 1080, 30.0)
    }
}
