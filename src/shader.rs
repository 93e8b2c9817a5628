use super::camera::Ray;
use super::palette::COLOUR_COUNT;

/// The floor is the plane y = -FLOOR_OFFSET.
pub const FLOOR_OFFSET: f64 = 2.0;
pub const BASE_BRIGHTNESS: f64 = 0.2;
pub const MIN_SHADE: f64 = 0.3;
/// Extra shade on odd checker tiles.
pub const CHECKER_SHADE: f64 = 0.5;

pub const LUMINANCE_SCALE: f64 = 48.0;
pub const BUCKET_SIZE: f64 = 16.0;

/// 4x4 ordered dither thresholds, indexed `[x % 4][y % 4]`.
pub const DITHER_MATRIX: [[u8; 4]; 4] = [
    [0, 24, 6, 30],
    [36, 12, 42, 18],
    [9, 33, 3, 27],
    [45, 21, 39, 15],
];

#[inline]
pub fn dither(x: u32, y: u32) -> u8 {
    DITHER_MATRIX[(x % 4) as usize][(y % 4) as usize]
}

/// Threshold offset added before bucketing, in brightness units.
#[inline]
pub fn dither_weight(x: u32, y: u32) -> f64 {
    f64::from(dither(x, y) / 3)
}

/// Shades an escaped ray that points downward with the checkered floor.
///
/// The floor brightness is written back into `ray.direction.y`, which is the
/// value `quantize` reads. Returns whether the floor was hit.
pub fn shade_floor(ray: &mut Ray) -> bool {
    if ray.direction.y >= 0.0 {
        return false;
    }

    let p = (ray.origin.y + FLOOR_OFFSET) / ray.direction.y;
    let x = (ray.origin.x - (ray.direction.x * p)).floor() as i64;
    let z = (ray.origin.z - (ray.direction.z * p)).floor() as i64;
    let parity = ((x + z) & 1) as f64;

    ray.direction.y = BASE_BRIGHTNESS - ray.direction.y * (MIN_SHADE + parity * CHECKER_SHADE);
    true
}

/// Maps a brightness in [0, 1] to a palette index for the pixel at (x, y).
/// Brighter values give lower indices.
pub fn quantize(x: u32, y: u32, value: f64) -> u8 {
    debug_assert!(
        (0.0..=1.0).contains(&value),
        "brightness {value} outside [0, 1]"
    );
    let value = value.clamp(0.0, 1.0);

    let bucket = ((LUMINANCE_SCALE * value.sqrt()) + dither_weight(x, y)) / BUCKET_SIZE;
    let bucket = bucket as u8;
    debug_assert!((bucket as usize) < COLOUR_COUNT);

    (COLOUR_COUNT as u8 - 1) - bucket
}

/// Floor shading followed by quantization.
pub fn shade(x: u32, y: u32, ray: &mut Ray) -> u8 {
    shade_floor(ray);
    quantize(x, y, ray.direction.y)
}
