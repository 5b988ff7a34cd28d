use nalgebra::Rotation2;

use super::Vector2;

/// Rotates `direction` in the plane by `angle_degrees`.
///
/// Positive angles turn counter-clockwise. The result has the same norm as
/// the input up to floating-point rounding.
#[must_use]
pub fn rotate_2d(direction: &Vector2, angle_degrees: f64) -> Vector2 {
    Rotation2::new(angle_degrees.to_radians()) * direction
}
