use super::camera::Ray;
use super::sphere::Sphere;

/// Upper bound on reflections per ray. The fixed scene needs far fewer, so
/// the bound only matters for scenes with rays trapped between spheres.
pub const DEFAULT_MAX_BOUNCES: u32 = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    pub spheres: Vec<Sphere>,
    pub max_bounces: u32,
}

impl RenderScene {
    pub fn new(spheres: Vec<Sphere>) -> RenderScene {
        RenderScene {
            spheres,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }

    pub fn with_max_bounces(mut self, max_bounces: u32) -> RenderScene {
        self.max_bounces = max_bounces;
        self
    }

    /// Nearest sphere strictly in front of the ray origin. Ties keep the
    /// sphere that comes first in the scene.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(&Sphere, f64)> {
        let mut hit_distance = f64::MAX;
        let mut closest_sphere: Option<&Sphere> = None;

        for sphere in &self.spheres {
            let Some(distance) = sphere.intersect(ray) else {
                continue;
            };

            if distance > 0.0 && distance < hit_distance {
                hit_distance = distance;
                closest_sphere = Some(sphere);
            }
        }

        closest_sphere.map(|sphere| (sphere, hit_distance))
    }

    /// Reflects `ray` off the sphere field until it escapes, and returns the
    /// number of bounces taken.
    pub fn trace(&self, ray: &mut Ray) -> u32 {
        let mut bounces = 0;

        while let Some((sphere, distance)) = self.closest_hit(ray) {
            if bounces == self.max_bounces {
                log::trace!(
                    "bounce limit of {} reached at origin {}",
                    self.max_bounces,
                    ray.origin
                );
                break;
            }

            sphere.reflect_at(distance, ray);
            bounces += 1;
        }

        bounces
    }
}
