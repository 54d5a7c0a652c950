//! Plane geometry helpers.

use num_traits::Float;

/// Signed area of the triangle with vertices `a`, `b`, `c` (shoelace formula).
///
/// The sign encodes orientation: clockwise vertices give a positive area,
/// anticlockwise vertices a negative one. Take `.abs()` for the unsigned
/// area.
///
/// # Examples
///
/// ```
/// use exercise_core::math::geometry::triangle_area;
///
/// let area = triangle_area((0.0, 0.0), (0.0, 3.0), (4.0, 0.0));
/// assert_eq!(area, 6.0);
/// let area = triangle_area((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
/// assert_eq!(area, -6.0);
/// ```
pub fn triangle_area<T: Float>(a: (T, T), b: (T, T), c: (T, T)) -> T {
    let half = T::one() / (T::one() + T::one());
    -half * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1))
}
