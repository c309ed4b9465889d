//! Scene model: an ordered list of spheres.

use crate::Sphere;

/// An ordered sequence of spheres.
///
/// Order is significant: a distance tie among hits resolves to the earlier
/// entry, and the shadow test excludes the light sphere by its position in
/// this list, never by value equality.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from an ordered sphere list.
    pub fn with_spheres(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// Append a sphere, after all existing entries.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Iterate the spheres acting as light sources, with their positions
    /// in the scene list.
    pub fn lights(&self) -> impl Iterator<Item = (usize, &Sphere)> {
        self.spheres
            .iter()
            .enumerate()
            .filter(|(_, sphere)| sphere.is_light())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_math::Vec3;

    #[test]
    fn test_lights_filter_by_first_emission_channel() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Vec3::ONE, 0.0, 0.0));
        scene.add_sphere(Sphere::emissive(
            Vec3::X,
            1.0,
            Vec3::ONE,
            Vec3::new(0.0, 0.2, 0.0),
            0.0,
            0.0,
        ));
        scene.add_sphere(Sphere::emissive(
            Vec3::Y,
            1.0,
            Vec3::ONE,
            Vec3::new(0.7, 0.7, 0.7),
            0.0,
            0.0,
        ));

        let lights: Vec<usize> = scene.lights().map(|(i, _)| i).collect();
        assert_eq!(lights, vec![2]);
    }

    #[test]
    fn test_scene_is_cloneable_per_job() {
        let scene = Scene::with_spheres(vec![Sphere::new(
            Vec3::ZERO,
            1.0,
            Vec3::ONE,
            0.0,
            0.0,
        )]);
        let snapshot = scene.clone();
        assert_eq!(snapshot.sphere_count(), scene.sphere_count());
    }
}
