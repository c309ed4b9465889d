//! Recursive Whitted shading: nearest-hit query, reflection, refraction,
//! and shadowed diffuse lighting.

use halo_core::{Scene, Sphere};
use halo_math::{Ray, Vec3};

use crate::RenderConfig;

/// Offset along the surface normal applied to every secondary ray origin,
/// keeping it clear of the surface it spawned from.
const BIAS: f32 = 1e-4;

/// Index of refraction for transparent surfaces.
const IOR: f32 = 1.1;

fn mix(a: f32, b: f32, m: f32) -> f32 {
    b * m + a * (1.0 - m)
}

/// Closest positive intersection along the ray, scanning the scene
/// linearly.
///
/// A hit whose near parameter is negative substitutes the far one (the
/// origin is inside that sphere). The comparison is strict, so the earlier
/// list entry wins a distance tie.
pub fn nearest_hit(scene: &Scene, origin: Vec3, direction: Vec3) -> Option<(&Sphere, f32)> {
    let mut nearest: Option<(&Sphere, f32)> = None;
    for sphere in &scene.spheres {
        let to_center = sphere.center - origin;
        if let Some((t0, t1)) = sphere.intersect(direction, to_center) {
            let t = if t0 < 0.0 { t1 } else { t0 };
            if nearest.map_or(true, |(_, t_near)| t < t_near) {
                nearest = Some((sphere, t));
            }
        }
    }
    nearest
}

/// Color seen along `ray`, recursing for reflection and refraction up to
/// `config.max_depth`.
///
/// The result is not clamped; a ray that escapes the scene yields
/// `config.background`, and the hit sphere's own emission is always added
/// on top of the shaded color.
pub fn trace(ray: Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Vec3 {
    let Some((sphere, t_near)) = nearest_hit(scene, ray.origin, ray.direction) else {
        return config.background;
    };

    let phit = ray.at(t_near);
    let mut nhit = (phit - sphere.center).normalize();
    let mut inside = false;
    if ray.direction.dot(nhit) > 0.0 {
        nhit = -nhit;
        inside = true;
    }

    let surface =
        if (sphere.transparency > 0.0 || sphere.reflectivity > 0.0) && depth < config.max_depth {
            reflect_refract(ray.direction, phit, nhit, inside, sphere, scene, depth, config)
        } else {
            diffuse(ray.origin, phit, nhit, sphere, scene)
        };

    surface + sphere.emission_color
}

/// Reflective/transparent branch: fresnel-weighted blend of the reflected
/// and refracted recursions, tinted by the surface color.
fn reflect_refract(
    direction: Vec3,
    phit: Vec3,
    nhit: Vec3,
    inside: bool,
    sphere: &Sphere,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Vec3 {
    let facing_ratio = -direction.dot(nhit);
    let fresnel = mix((1.0 - facing_ratio).powi(3), 1.0, 0.1);

    // Reflecting a unit direction keeps it unit length.
    let reflect_dir = direction - nhit * (2.0 * direction.dot(nhit));
    let reflection = trace(
        Ray::new(phit + nhit * BIAS, reflect_dir),
        scene,
        depth + 1,
        config,
    );

    let refraction = if sphere.transparency > 0.0 {
        let eta = if inside { IOR } else { 1.0 / IOR };
        let cosi = -nhit.dot(direction);
        // Total internal reflection leaves k negative; the sqrt then goes
        // NaN and rides the arithmetic through.
        let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
        let refract_dir = (direction * eta + nhit * (eta * cosi - k.sqrt())).normalize();
        trace(
            Ray::new(phit - nhit * BIAS, refract_dir),
            scene,
            depth + 1,
            config,
        )
    } else {
        Vec3::ZERO
    };

    (reflection * fresnel + refraction * (1.0 - fresnel) * sphere.transparency)
        * sphere.surface_color
}

/// Diffuse branch: Lambertian contribution from every light sphere, with a
/// binary shadow test against all other spheres.
fn diffuse(ray_origin: Vec3, phit: Vec3, nhit: Vec3, sphere: &Sphere, scene: &Scene) -> Vec3 {
    let mut color = Vec3::ZERO;
    for (light_index, light) in scene.lights() {
        let mut transmission = Vec3::ONE;
        let light_dir = (light.center - phit).normalize();
        // One center-to-origin vector per light, shared across the whole
        // occluder scan.
        let to_light_center = light.center - ray_origin;
        for (occluder_index, occluder) in scene.spheres.iter().enumerate() {
            if occluder_index == light_index {
                continue;
            }
            if occluder.intersect(light_dir, to_light_center).is_some() {
                transmission = Vec3::ZERO;
                break;
            }
        }
        color += sphere.surface_color
            * light.emission_color
            * transmission
            * nhit.dot(light_dir).max(0.0);
    }
    color
}
