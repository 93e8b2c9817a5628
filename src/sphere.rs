use super::camera::Ray;
use super::vector::{divide, dot, magnitude_squared, reflect, subtract, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Vector,
    pub radius: f64,
}

impl Sphere {
    pub fn new(position: Vector, radius: f64) -> Sphere {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Sphere { position, radius }
    }

    /// Distance along `ray` to the nearer root of the ray/sphere quadratic, or
    /// `None` when the ray misses.
    ///
    /// The returned distance can be zero or negative when the sphere is behind
    /// the ray origin or surrounds it.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        // (bx^2 + by^2 + bz^2)t^2 + 2(a.b)t + (a.a - r^2) = 0
        // where
        // a = ray origin relative to the sphere
        // b = ray direction
        // r = sphere radius
        // t = hit distance
        let origin = subtract(ray.origin, self.position);

        let a = magnitude_squared(ray.direction);
        let b = 2.0 * dot(origin, ray.direction);
        let c = magnitude_squared(origin) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            // missed the sphere
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let near = (-b - sqrt_discriminant) / (2.0 * a);
        let far = (-b + sqrt_discriminant) / (2.0 * a);

        Some(near.min(far))
    }

    /// Moves the ray origin `distance` along its direction onto the surface and
    /// mirrors the direction about the surface normal there.
    pub fn reflect_at(&self, distance: f64, ray: &mut Ray) {
        ray.origin += distance * ray.direction;

        let normal = divide(subtract(ray.origin, self.position), self.radius);
        ray.direction = reflect(ray.direction, normal);
    }
}
