//! Scene description and shadow visibility.
//!
//! A [`Scene`] is built once before rendering and only read afterwards. Every
//! worker borrows the same instance; no field is mutated while a render is
//! running, so no synchronization is involved.

use log::debug;

use crate::color::Color;
use crate::hittable::{Hittable, Primitive};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::Vector;

/// Point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    /// Position in world coordinates.
    pub position: Vector,
    /// Color of the specular highlight.
    pub color: Color,
    /// Scalar weight applied to diffuse and specular terms.
    pub intensity: f64,
}

impl LightSource {
    /// Create a point light.
    pub fn new(position: Vector, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

/// Everything a render reads: geometry, lights and global settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Background color, returned for rays that miss or exceed the depth limit.
    pub ambient_color: Color,
    /// Multiplier on every material's ambient coefficient.
    pub ambient_intensity: f64,
    /// Lights, each contributing independently.
    pub lights: Vec<LightSource>,
    /// Primitives, scanned linearly in this order.
    pub primitives: Vec<Primitive>,
    /// Deepest reflection level that is still shaded; primary rays are level 0.
    pub max_depth: u32,
    /// Gate diffuse and specular terms on [`Scene::light_visible`].
    pub shadows: bool,
}

// Workers share the scene by reference.
const _: () = {
    const fn assert_sync<T: Sync>() {}
    assert_sync::<Scene>();
};

impl Scene {
    /// Create an empty scene with the given background color.
    ///
    /// Ambient intensity starts at 1.0, the depth limit at 0 (no reflections)
    /// and shadows disabled.
    pub fn new(ambient_color: Color) -> Self {
        Self {
            ambient_color,
            ambient_intensity: 1.0,
            lights: Vec::new(),
            primitives: Vec::new(),
            max_depth: 0,
            shadows: false,
        }
    }

    /// Builder-style setter for the depth limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder-style setter for shadow testing.
    pub fn with_shadows(mut self, shadows: bool) -> Self {
        self.shadows = shadows;
        self
    }

    /// Append a light.
    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    /// Append a primitive and return its index.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> usize {
        self.primitives.push(primitive.into());
        self.primitives.len() - 1
    }

    /// True if nothing blocks the segment from `from` to `light`.
    ///
    /// The probe ray points at the light with an unnormalized direction, so
    /// hits with `0 < t < 1` lie strictly between the point and the light.
    /// The primitive at index `exclude`, normally the shaded surface, is
    /// skipped.
    pub fn light_visible(&self, light: &LightSource, from: Vector, exclude: Option<usize>) -> bool {
        let probe = Ray::new(from, light.position - from);
        !self
            .primitives
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != exclude)
            .filter_map(|(_, primitive)| primitive.intersect(&probe))
            .any(|hit| Interval::SEGMENT.surrounds(hit.distance))
    }

    /// True only if every light is visible from `from`.
    pub fn visible(&self, from: Vector, exclude: Option<usize>) -> bool {
        self.lights
            .iter()
            .all(|light| self.light_visible(light, from, exclude))
    }

    /// Log a one-line summary of the scene contents.
    pub fn log_summary(&self) {
        let spheres = self
            .primitives
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::Sphere(_)))
            .count();
        debug!(
            "Scene: {} spheres, {} planes, {} lights, max depth {}, shadows {}",
            spheres,
            self.primitives.len() - spheres,
            self.lights.len(),
            self.max_depth,
            if self.shadows { "on" } else { "off" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;

    fn occluded_scene() -> (Scene, usize, usize) {
        let mut scene = Scene::new(Color::BLACK);
        scene.add_light(LightSource::new(Vector::new(0.0, 0.0, 10.0), Color::WHITE, 1.0));
        let surface = scene.add(Sphere::new(Vector::new(0.0, 0.0, -1.0), 1.0, Material::mirror()).unwrap());
        let blocker = scene.add(Sphere::new(Vector::new(0.0, 0.0, 5.0), 1.0, Material::mirror()).unwrap());
        (scene, surface, blocker)
    }

    #[test]
    fn blocker_between_point_and_light_occludes() {
        let (scene, surface, _) = occluded_scene();
        assert!(!scene.visible(Vector::ZERO, Some(surface)));
    }

    #[test]
    fn excluded_blocker_is_ignored() {
        let (scene, _, blocker) = occluded_scene();
        assert!(scene.visible(Vector::ZERO, Some(blocker)));
    }

    #[test]
    fn blocker_beyond_light_does_not_occlude() {
        let mut scene = Scene::new(Color::BLACK);
        let light = LightSource::new(Vector::new(0.0, 0.0, 3.0), Color::WHITE, 1.0);
        scene.add_light(light);
        scene.add(Sphere::new(Vector::new(0.0, 0.0, 8.0), 1.0, Material::mirror()).unwrap());

        assert!(scene.light_visible(&light, Vector::ZERO, None));
    }

    #[test]
    fn one_blocked_light_fails_visibility() {
        let (mut scene, surface, _) = occluded_scene();
        let open = LightSource::new(Vector::new(10.0, 0.0, 0.0), Color::WHITE, 1.0);
        scene.add_light(open);

        assert!(scene.light_visible(&open, Vector::ZERO, Some(surface)));
        assert!(!scene.visible(Vector::ZERO, Some(surface)));
    }

    #[test]
    fn scene_without_lights_is_visible() {
        assert!(Scene::new(Color::BLACK).visible(Vector::ZERO, None));
    }
}
