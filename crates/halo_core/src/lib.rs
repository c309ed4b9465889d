//! Scene model for the halo renderer.
//!
//! This crate provides:
//!
//! - **`Sphere`**: the single geometric primitive, carrying both geometry
//!   and material attributes, with its ray intersection test
//! - **`Scene`**: an ordered list of spheres
//! - **`premade`**: ready-made scenes for the animation driver

pub mod premade;
mod scene;
mod sphere;

pub use scene::Scene;
pub use sphere::Sphere;
