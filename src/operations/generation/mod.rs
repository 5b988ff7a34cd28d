mod curve_points;
mod generate_batch;
mod generate_curve;

pub use curve_points::CurvePoints;
pub use generate_batch::{BatchOutcome, GenerateBatch};
pub use generate_curve::GenerateCurve;

use crate::error::{GenerationError, Result};
use crate::math::{Point, Vector};

/// Limits applied before a curve is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    /// Maximum number of points a materialized curve may hold.
    pub max_points: usize,
    /// Maximum recursion depth.
    pub max_depth: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_points: (1 << 24) + 1,
            max_depth: 64,
        }
    }
}

/// Number of points produced by `depth` refinements of a motif with `arity`
/// steps: `arity^depth + 1`. `None` if it does not fit in `u128`.
#[must_use]
pub fn point_count(arity: usize, depth: u32) -> Option<u128> {
    u128::try_from(arity)
        .ok()?
        .checked_pow(depth)?
        .checked_add(1)
}

/// Direction and length of a segment, the anchor of one refinement level.
#[derive(Debug, Clone, Copy)]
struct Segment<const D: usize> {
    direction: Vector<D>,
    length: f64,
}

impl<const D: usize> Segment<D> {
    fn between(start: &Point<D>, end: &Point<D>) -> Self {
        let base = end - start;
        let length = base.norm();
        Self {
            direction: base / length,
            length,
        }
    }
}

/// Rejects base segments whose direction is undefined.
fn validate_base<const D: usize>(start: &Point<D>, end: &Point<D>) -> Result<()> {
    if start.iter().chain(end.iter()).any(|c| !c.is_finite()) {
        let message = "base segment endpoints must be finite".to_string();
        return Err(GenerationError::InvalidInput(message).into());
    }
    let length = (end - start).norm();
    if length <= 0.0 || !length.is_finite() {
        return Err(GenerationError::InvalidInput(format!(
            "base segment length must be non-zero and finite, got {length}"
        ))
        .into());
    }
    Ok(())
}

fn check_depth(depth: u32, params: &GenerationParams) -> Result<()> {
    if depth > params.max_depth {
        return Err(GenerationError::ResourceExceeded {
            resource: "depth",
            requested: u128::from(depth),
            limit: u128::from(params.max_depth),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn point_count_small() {
        assert_eq!(point_count(4, 0), Some(2));
        assert_eq!(point_count(4, 1), Some(5));
        assert_eq!(point_count(8, 3), Some(513));
        assert_eq!(point_count(1, 1000), Some(2));
    }

    #[test]
    fn point_count_overflow() {
        assert_eq!(point_count(2, 128), None);
        assert_eq!(point_count(4, 200), None);
    }

    #[test]
    fn default_params_fit_koch_depth_twelve() {
        let params = GenerationParams::default();
        assert!(point_count(4, 12).is_some_and(|n| n <= params.max_points as u128));
        assert!(point_count(4, 13).is_some_and(|n| n > params.max_points as u128));
    }

    #[test]
    fn zero_length_base_rejected() {
        let p = Point2::new(1.0, 1.0);
        assert!(validate_base(&p, &p).unwrap_err().is_invalid_input());
    }

    #[test]
    fn non_finite_base_rejected() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(f64::INFINITY, 0.0);
        assert!(validate_base(&a, &b).is_err());
    }

    #[test]
    fn depth_over_limit_rejected() {
        let params = GenerationParams {
            max_depth: 3,
            ..GenerationParams::default()
        };
        assert!(check_depth(3, &params).is_ok());
        assert!(check_depth(4, &params).unwrap_err().is_resource_exceeded());
    }
}
