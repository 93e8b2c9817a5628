use glam::DVec3;

pub type Vector = DVec3;

#[inline]
pub fn subtract(a: Vector, b: Vector) -> Vector {
    a - b
}

#[inline]
pub fn divide(vector: Vector, n: f64) -> Vector {
    debug_assert!(n != 0.0, "division of a vector by zero");
    vector / n
}

#[inline]
pub fn dot(a: Vector, b: Vector) -> f64 {
    a.dot(b)
}

#[inline]
pub fn magnitude_squared(vector: Vector) -> f64 {
    dot(vector, vector)
}

/// Mirrors `vector` about the plane with the given normal.
///
/// `normal` has to be unit length, otherwise the result is scaled along it.
#[inline]
pub fn reflect(vector: Vector, normal: Vector) -> Vector {
    vector - (2.0 * dot(vector, normal) * normal)
}
