//! Sphere primitive and its ray intersection test.

use halo_math::Vec3;

/// A sphere with geometric and material attributes.
///
/// Spheres are immutable once constructed. `radius_sq` is computed at
/// construction and always equals `radius * radius`.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub radius_sq: f32,
    /// Diffuse color, each channel nominally in [0, 1] (not enforced)
    pub surface_color: Vec3,
    /// Emitted light; a sphere acts as a light source iff the first
    /// channel is positive
    pub emission_color: Vec3,
    pub reflectivity: f32,
    pub transparency: f32,
}

impl Sphere {
    /// Create an opaque, non-emissive sphere.
    pub fn new(
        center: Vec3,
        radius: f32,
        surface_color: Vec3,
        reflectivity: f32,
        transparency: f32,
    ) -> Self {
        Self::emissive(
            center,
            radius,
            surface_color,
            Vec3::ZERO,
            reflectivity,
            transparency,
        )
    }

    /// Create a sphere that also emits light.
    pub fn emissive(
        center: Vec3,
        radius: f32,
        surface_color: Vec3,
        emission_color: Vec3,
        reflectivity: f32,
        transparency: f32,
    ) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
            surface_color,
            emission_color,
            reflectivity,
            transparency,
        }
    }

    /// Whether this sphere acts as a light source.
    pub fn is_light(&self) -> bool {
        self.emission_color.x > 0.0
    }

    /// Ray intersection test, returning the near and far hit parameters.
    ///
    /// `to_center` is the vector from the ray origin to this sphere's
    /// center (`center - origin`), supplied by the caller rather than
    /// recomputed here — the shadow test shares one such vector across a
    /// whole scan.
    ///
    /// A ray whose direction projects the center behind its origin is
    /// rejected outright, even when the origin lies inside the sphere.
    pub fn intersect(&self, direction: Vec3, to_center: Vec3) -> Option<(f32, f32)> {
        let tca = to_center.dot(direction);
        if tca < 0.0 {
            return None;
        }
        let d2 = to_center.dot(to_center) - tca * tca;
        if d2 > self.radius_sq {
            return None;
        }
        let thc = (self.radius_sq - d2).sqrt();
        Some((tca - thc, tca + thc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Vec3::new(0.5, 0.5, 0.5), 0.0, 0.0)
    }

    #[test]
    fn test_radius_sq_is_cached_product() {
        let sphere = Sphere::new(Vec3::ZERO, 3.0, Vec3::ONE, 0.0, 0.0);
        assert_eq!(sphere.radius_sq, 9.0);
    }

    #[test]
    fn test_head_on_hit_parameters() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let direction = Vec3::new(0.0, 0.0, -1.0);
        let to_center = sphere.center - Vec3::ZERO;

        let (t0, t1) = sphere.intersect(direction, to_center).unwrap();
        assert!((t0 - 4.0).abs() < 1e-5);
        assert!((t1 - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss_off_axis() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 5.0, -5.0));
        let direction = Vec3::new(0.0, 0.0, -1.0);
        let to_center = sphere.center - Vec3::ZERO;

        assert!(sphere.intersect(direction, to_center).is_none());
    }

    #[test]
    fn test_center_behind_origin_is_rejected() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, 5.0));
        let direction = Vec3::new(0.0, 0.0, -1.0);
        let to_center = sphere.center - Vec3::ZERO;

        assert!(sphere.intersect(direction, to_center).is_none());
    }

    #[test]
    fn test_rejection_applies_even_from_inside_the_sphere() {
        // Origin inside the sphere, center projecting behind the origin:
        // still reported as a miss.
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Vec3::ONE, 0.0, 0.0);
        let origin = Vec3::new(0.0, 0.0, 1.0);
        let direction = Vec3::new(0.0, 0.0, 1.0);
        let to_center = sphere.center - origin;

        assert!(sphere.intersect(direction, to_center).is_none());
    }

    #[test]
    fn test_light_requires_positive_first_channel() {
        let lit = Sphere::emissive(
            Vec3::ZERO,
            1.0,
            Vec3::ONE,
            Vec3::new(0.5, 0.0, 0.0),
            0.0,
            0.0,
        );
        let unlit = Sphere::emissive(
            Vec3::ZERO,
            1.0,
            Vec3::ONE,
            Vec3::new(0.0, 0.2, 0.0),
            0.0,
            0.0,
        );
        assert!(lit.is_light());
        assert!(!unlit.is_light());
    }
}
