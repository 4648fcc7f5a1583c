//! Recursive ray casting and Phong shading.
//!
//! [`cast_ray`] finds the nearest primitive along a ray, shades it locally
//! with ambient, diffuse and specular terms, and adds the color seen along
//! the mirror direction scaled by the material's reflectivity. Recursion
//! stops when the scene's depth limit is exceeded or a ray escapes.

use crate::color::Color;
use crate::hittable::{Hittable, Intersection};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{reflect, Vector};

/// Nearest primitive hit along `ray` together with the primitive's index.
///
/// Only strictly positive distances count. On equal distances the primitive
/// that comes first in the scene wins. `exclude` skips one primitive, used
/// for rays leaving a surface.
pub fn nearest_hit(scene: &Scene, ray: &Ray, exclude: Option<usize>) -> Option<(usize, Intersection)> {
    let mut closest: Option<(usize, Intersection)> = None;

    for (index, primitive) in scene.primitives.iter().enumerate() {
        if Some(index) == exclude {
            continue;
        }
        let Some(hit) = primitive.intersect(ray) else {
            continue;
        };
        if hit.distance <= 0.0 {
            continue;
        }
        if closest.is_some_and(|(_, best)| best.distance <= hit.distance) {
            continue;
        }
        closest = Some((index, hit));
    }

    closest
}

/// Color seen along `ray` at reflection level `depth`.
///
/// Primary rays start at depth 0 with `exclude = None`. A reflected ray never
/// tests the primitive it leaves from: spheres and planes cannot be hit again
/// by their own mirror ray, and skipping them avoids zero-distance self hits.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, exclude: Option<usize>) -> Color {
    if depth > scene.max_depth {
        return scene.ambient_color;
    }

    let Some((index, hit)) = nearest_hit(scene, ray, exclude) else {
        return scene.ambient_color;
    };

    let local = shade(scene, &hit, ray.origin, index);
    if hit.material.kr == 0.0 {
        return local;
    }

    let reflected = Ray::new(hit.point, hit.reflection);
    let mirrored = cast_ray(&reflected, scene, depth + 1, Some(index));
    local.add(mirrored.scale(hit.material.kr))
}

/// Local Phong color at `hit` as seen from `viewer`.
///
/// `surface` is the index of the shaded primitive; it is excluded from shadow
/// probes when [`Scene::shadows`] is enabled.
pub fn shade(scene: &Scene, hit: &Intersection, viewer: Vector, surface: usize) -> Color {
    let material = &hit.material;
    let normal = hit.normal;
    let view_dir = (viewer - hit.point).normalize();

    let mut color = material.color.scale(material.ka * scene.ambient_intensity);

    for light in &scene.lights {
        if scene.shadows && !scene.light_visible(light, hit.point, Some(surface)) {
            continue;
        }

        let light_dir = (light.position - hit.point).normalize();
        let lambert = normal.dot(light_dir).max(0.0);
        if lambert <= 0.0 {
            // Light behind the surface.
            continue;
        }

        color = color.add(material.color.scale(material.kd * light.intensity * lambert));

        let mirrored = reflect(normal, light_dir).normalize();
        let alignment = mirrored.dot(view_dir);
        if alignment > 0.0 {
            let highlight = material.ks * light.intensity * alignment.powf(material.alpha);
            color = color.add(light.color.scale(highlight));
        }
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::plane::Plane;
    use crate::scene::LightSource;
    use crate::sphere::Sphere;

    const SKY: Color = Color::new(0, 255, 255);

    fn lit_scene(material: Material) -> Scene {
        let mut scene = Scene::new(SKY);
        scene.add(Sphere::new(Vector::new(0.0, 10.0, 0.0), 2.0, material).unwrap());
        scene.add_light(LightSource::new(Vector::new(0.0, 0.0, 0.0), Color::WHITE, 1.0));
        scene
    }

    #[test]
    fn miss_returns_background() {
        let scene = lit_scene(Material::flat(Color::WHITE));
        let ray = Ray::new(Vector::ZERO, -Vector::Y);
        assert_eq!(cast_ray(&ray, &scene, 0, None), SKY);
    }

    #[test]
    fn depth_beyond_limit_returns_background() {
        let scene = lit_scene(Material::flat(Color::WHITE)).with_max_depth(2);
        let ray = Ray::new(Vector::ZERO, Vector::Y);
        assert_eq!(cast_ray(&ray, &scene, 3, None), SKY);
        assert_eq!(cast_ray(&ray, &scene, 2, None), Color::WHITE);
    }

    #[test]
    fn nearest_hit_prefers_closer_primitive() {
        let mut scene = Scene::new(SKY);
        scene.add(Sphere::new(Vector::new(0.0, 20.0, 0.0), 1.0, Material::flat(Color::WHITE)).unwrap());
        scene.add(Sphere::new(Vector::new(0.0, 10.0, 0.0), 1.0, Material::flat(Color::BLACK)).unwrap());

        let (index, hit) = nearest_hit(&scene, &Ray::new(Vector::ZERO, Vector::Y), None).unwrap();
        assert_eq!(index, 1);
        assert_eq!(hit.point, Vector::new(0.0, 9.0, 0.0));
    }

    #[test]
    fn equal_distances_keep_first_primitive() {
        let mut scene = Scene::new(SKY);
        let twin = Sphere::new(Vector::new(0.0, 10.0, 0.0), 1.0, Material::flat(Color::WHITE)).unwrap();
        scene.add(twin.clone());
        scene.add(twin);

        let (index, _) = nearest_hit(&scene, &Ray::new(Vector::ZERO, Vector::Y), None).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn head_on_light_gives_full_diffuse_and_specular() {
        // Viewer, light and normal all aligned: N·L = 1 and R·V = 1.
        let material = Material::new(Color::new(100, 50, 0), 0.0, 1.0, 0.5, 0.0, 8.0);
        let scene = lit_scene(material);
        let color = cast_ray(&Ray::new(Vector::ZERO, Vector::Y), &scene, 0, None);

        // diffuse (100, 50, 0) plus 127.5 of white, rounded to 128
        assert_eq!(color, Color::new(228, 178, 128));
    }

    #[test]
    fn light_behind_surface_contributes_nothing() {
        let material = Material::new(Color::new(100, 100, 100), 0.2, 1.0, 1.0, 0.0, 1.0);
        let mut scene = Scene::new(SKY);
        scene.add(Sphere::new(Vector::new(0.0, 10.0, 0.0), 2.0, material).unwrap());
        scene.add_light(LightSource::new(Vector::new(0.0, 30.0, 0.0), Color::WHITE, 1.0));

        let color = cast_ray(&Ray::new(Vector::ZERO, Vector::Y), &scene, 0, None);
        assert_eq!(color, Color::new(20, 20, 20));
    }

    #[test]
    fn ambient_intensity_scales_ambient_term() {
        let mut scene = lit_scene(Material::flat(Color::new(100, 100, 100)));
        scene.ambient_intensity = 0.5;
        let color = cast_ray(&Ray::new(Vector::ZERO, Vector::Y), &scene, 0, None);
        assert_eq!(color, Color::new(50, 50, 50));
    }

    #[test]
    fn mirror_picks_up_reflected_geometry() {
        // A mirror floor below a red sphere; the ray bounces up into the sphere.
        let mut scene = Scene::new(SKY).with_max_depth(1);
        scene.add(
            Plane::new(Vector::ZERO, Vector::Z, Vector::X, 50.0, 50.0, Material::mirror()).unwrap(),
        );
        let red = Material::flat(Color::new(255, 0, 0));
        scene.add(Sphere::new(Vector::new(10.0, 0.0, 10.0), 3.0, red).unwrap());

        let ray = Ray::new(Vector::new(0.0, 0.0, 10.0), Vector::new(1.0, 0.0, -2.0));
        // Hits the floor at (5, 0, 0), reflects along (1, 0, 2) into the sphere.
        assert_eq!(cast_ray(&ray, &scene, 0, None), Color::new(255, 0, 0));

        let shallow = scene.clone().with_max_depth(0);
        assert_eq!(cast_ray(&ray, &shallow, 0, None), SKY);
    }

    #[test]
    fn shadows_gate_direct_light() {
        let material = Material::new(Color::new(200, 200, 200), 0.1, 1.0, 0.0, 0.0, 1.0);
        let mut scene = lit_scene(material);
        // Occluder between the light at the origin and the front of the sphere,
        // off the primary ray's path.
        scene.lights[0].position = Vector::new(0.0, 0.0, 10.0);
        scene.add(Sphere::new(Vector::new(0.0, 4.0, 4.5), 1.0, Material::flat(Color::BLACK)).unwrap());

        let ray = Ray::new(Vector::ZERO, Vector::Y);
        let lit = cast_ray(&ray, &scene, 0, None);
        let shadowed = cast_ray(&ray, &scene.clone().with_shadows(true), 0, None);

        assert_eq!(shadowed, Color::new(20, 20, 20));
        assert!(lit.r > shadowed.r);
    }
}
