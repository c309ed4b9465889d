//! Ready-made scenes for the animation driver.

use halo_math::Vec3;

use crate::{Scene, Sphere};

/// The animated demo scene: a huge green ground sphere and three glossy
/// spheres in front of the camera.
///
/// The first small sphere's red channel sweeps linearly with the frame
/// index (`frame_index / frame_count`); all other scene content is
/// identical across frames.
pub fn sweep_scene(frame_index: u32, frame_count: u32) -> Scene {
    let sweep = frame_index as f32 / frame_count as f32;

    let mut scene = Scene::new();
    scene.add_sphere(Sphere::emissive(
        Vec3::new(0.0, -10004.0, -10.0),
        10000.0,
        Vec3::new(0.0, 0.20, 0.0),
        Vec3::new(0.0, 0.20, 0.0),
        1.0,
        0.0,
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, -1.0, -10.0),
        1.0,
        Vec3::new(sweep, 0.32, 0.36),
        1.0,
        0.5,
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(5.0, -1.0, -5.0),
        2.0,
        Vec3::new(0.9, 0.76, 0.46),
        1.0,
        0.0,
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(5.0, 0.0, -15.0),
        3.0,
        Vec3::new(0.65, 0.77, 0.97),
        1.0,
        0.0,
    ));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_drives_red_channel_of_second_sphere() {
        let scene = sweep_scene(250, 1000);
        assert!((scene.spheres[1].surface_color.x - 0.25).abs() < 1e-6);

        let first = sweep_scene(0, 1000);
        assert_eq!(first.spheres[1].surface_color.x, 0.0);
    }

    #[test]
    fn test_everything_else_is_constant_across_frames() {
        let a = sweep_scene(0, 100);
        let b = sweep_scene(99, 100);

        assert_eq!(a.sphere_count(), 4);
        assert_eq!(b.sphere_count(), 4);
        for i in [0, 2, 3] {
            assert_eq!(a.spheres[i].center, b.spheres[i].center);
            assert_eq!(a.spheres[i].surface_color, b.spheres[i].surface_color);
        }
        // Only the red channel of sphere 1 moves.
        assert_eq!(a.spheres[1].surface_color.y, b.spheres[1].surface_color.y);
        assert_eq!(a.spheres[1].surface_color.z, b.spheres[1].surface_color.z);
    }

    #[test]
    fn test_ground_emission_does_not_count_as_light() {
        // The ground sphere emits (0, 0.2, 0); with a zero first channel it
        // never participates in the shadow pass.
        let scene = sweep_scene(0, 1);
        assert_eq!(scene.lights().count(), 0);
    }
}
