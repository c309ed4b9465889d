//! Frame rendering and render configuration.

use halo_core::Scene;
use halo_math::Vec3;
use log::debug;

use crate::trace::trace;
use crate::Camera;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflection and refraction
    pub max_depth: u32,
    /// Color returned when a ray escapes the scene. The default sits above
    /// the displayable range and clamps to pure white in the final image.
    pub background: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            background: Vec3::new(2.0, 2.0, 2.0),
        }
    }
}

/// A rendered frame: a pixel buffer plus the index it was rendered for.
///
/// Produced by exactly one render worker and consumed by exactly one sink
/// worker; buffer and index always travel together.
#[derive(Debug, Clone)]
pub struct Frame {
    pub frame_index: u32,
    pub width: u32,
    pub height: u32,
    /// Row-major pixel colors, unclamped
    pub pixels: Vec<Vec3>,
}

impl Frame {
    /// Convert to 8-bit RGBA samples.
    ///
    /// Channels are clamped from above at 1.0 and scaled to 255; alpha is
    /// opaque. There is no explicit lower clamp — the integer cast floors
    /// negative values at zero.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.push((color.x.min(1.0) * 255.0) as u8);
            bytes.push((color.y.min(1.0) * 255.0) as u8);
            bytes.push((color.z.min(1.0) * 255.0) as u8);
            bytes.push(255);
        }
        bytes
    }
}

/// Render one full frame, shading every pixel with `trace` at depth 0.
pub fn render_frame(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    frame_index: u32,
) -> Frame {
    let mut pixels = Vec::with_capacity((camera.width * camera.height) as usize);
    for y in 0..camera.height {
        for x in 0..camera.width {
            let ray = camera.primary_ray(x, y);
            pixels.push(trace(ray, scene, 0, config));
        }
    }
    debug!(
        "rendered frame {} ({}x{})",
        frame_index, camera.width, camera.height
    );
    Frame {
        frame_index,
        width: camera.width,
        height: camera.height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::Sphere;

    #[test]
    fn test_to_rgba_clamps_only_from_above() {
        let frame = Frame {
            frame_index: 0,
            width: 2,
            height: 1,
            pixels: vec![Vec3::new(2.0, 2.0, 2.0), Vec3::new(0.5, -1.0, 1.5)],
        };

        let rgba = frame.to_rgba();
        assert_eq!(&rgba[..4], &[255, 255, 255, 255]);
        assert_eq!(&rgba[4..], &[127, 0, 255, 255]);
    }

    #[test]
    fn test_empty_scene_renders_background_everywhere() {
        let camera = Camera::new(4, 3, 30.0);
        let scene = Scene::new();
        let config = RenderConfig::default();

        let frame = render_frame(&camera, &scene, &config, 7);

        assert_eq!(frame.frame_index, 7);
        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 3);
        assert_eq!(frame.pixels.len(), 12);
        assert!(frame
            .pixels
            .iter()
            .all(|&p| p == Vec3::new(2.0, 2.0, 2.0)));
    }

    #[test]
    fn test_rendered_sphere_differs_from_background() {
        let camera = Camera::new(16, 9, 30.0);
        let scene = Scene::with_spheres(vec![Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Vec3::new(0.5, 0.5, 0.5),
            0.0,
            0.0,
        )]);
        let config = RenderConfig::default();

        let frame = render_frame(&camera, &scene, &config, 0);

        // Center pixels hit the sphere (diffuse, lightless: black); the
        // corners keep the background.
        let center = frame.pixels[4 * 16 + 8];
        assert_eq!(center, Vec3::ZERO);
        assert_eq!(frame.pixels[0], Vec3::new(2.0, 2.0, 2.0));
    }
}
