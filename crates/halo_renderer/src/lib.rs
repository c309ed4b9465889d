//! CPU Whitted ray tracer.
//!
//! Shades one ray per pixel through a pinhole camera, recursing for
//! reflection and refraction up to a fixed depth bound. Scenes are small
//! ordered sphere lists scanned linearly; there is no acceleration
//! structure.

mod camera;
mod renderer;
mod trace;

pub use camera::Camera;
pub use renderer::{render_frame, Frame, RenderConfig};
pub use trace::{nearest_hit, trace};

/// Re-export the math types the public API speaks in
pub use halo_math::{Ray, Vec3};
