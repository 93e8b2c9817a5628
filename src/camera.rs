use super::pixel_buffer::FrameDimensions;
use super::vector::Vector;

/// The light path currently being traced for one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

/// Fixed pinhole projection looking down -z from `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector,
    pub dimensions: FrameDimensions,

    half_width: u32,
    half_height: u32,
    scale: f64,
}

impl Camera {
    pub fn new(position: Vector, dimensions: FrameDimensions) -> Camera {
        let width = dimensions.width();
        let height = dimensions.height();

        // tiny frames would otherwise divide every offset by zero
        let scale = ((width + height) / 4).max(1);

        Camera {
            position,
            dimensions,
            half_width: width / 2,
            half_height: height / 2,
            scale: f64::from(scale),
        }
    }

    /// Unit length ray through the pixel at (x, y), with the horizontal and
    /// vertical spread set by `scale`.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let mut direction = Vector::new(
            (f64::from(x) - f64::from(self.half_width) - 0.5) / self.scale,
            (f64::from(y) - f64::from(self.half_height) - 0.5) / self.scale,
            0.0,
        );

        direction.z =
            -1.0 / (1.0 + (direction.x * direction.x) + (direction.y * direction.y)).sqrt();
        direction.x *= direction.z;
        direction.y *= direction.z;

        Ray {
            origin: self.position,
            direction,
        }
    }
}
