use crate::error::{GenerationError, Result};

use super::{Matrix3, Vector3, TOLERANCE};

/// Rotates `direction` about `axis` by `angle_degrees` (right-hand rule).
///
/// The axis does not need to be normalized.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidInput`] if the axis is zero-length.
pub fn rotate_3d(direction: &Vector3, axis: &Vector3, angle_degrees: f64) -> Result<Vector3> {
    let unit = unit_axis(axis)?;
    Ok(rodrigues_matrix(&unit, angle_degrees.to_radians()) * direction)
}

/// Normalizes a rotation axis.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidInput`] if the axis is zero-length or not finite.
pub(crate) fn unit_axis(axis: &Vector3) -> Result<Vector3> {
    let len = axis.norm();
    if !len.is_finite() || len < TOLERANCE {
        return Err(GenerationError::InvalidInput(format!(
            "rotation axis must be non-zero and finite, got [{}, {}, {}]",
            axis.x, axis.y, axis.z
        ))
        .into());
    }
    Ok(axis / len)
}

/// Builds the 3x3 rotation matrix around a unit axis by an angle in radians (Rodrigues).
#[must_use]
#[rustfmt::skip]
#[allow(clippy::many_single_char_names)]
pub fn rodrigues_matrix(axis: &Vector3, angle: f64) -> Matrix3 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    Matrix3::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,
    )
}
