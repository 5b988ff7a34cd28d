use tracing::debug;

use crate::error::{GenerationError, Result};
use crate::geometry::{Curve, Motif, Rotation};
use crate::math::Point;

use super::{check_depth, point_count, validate_base, CurvePoints, GenerationParams, Segment};

/// Expands a base segment into the polyline of a self-similar curve.
///
/// Each refinement replaces a segment by the motif's steps: step `i` has
/// length `parent_length * ratio_i` and the parent direction rotated by the
/// step's turn. Depth 0 yields the two endpoints; depth `n` yields
/// `k^n + 1` points for a motif of `k` steps.
pub struct GenerateCurve<'a, const D: usize, R> {
    start: Point<D>,
    end: Point<D>,
    depth: u32,
    motif: &'a Motif<R>,
    params: GenerationParams,
}

impl<'a, const D: usize, R: Rotation<D>> GenerateCurve<'a, D, R> {
    /// Creates a new `GenerateCurve` operation with default limits.
    #[must_use]
    pub fn new(start: Point<D>, end: Point<D>, depth: u32, motif: &'a Motif<R>) -> Self {
        Self {
            start,
            end,
            depth,
            motif,
            params: GenerationParams::default(),
        }
    }

    /// Replaces the generation limits.
    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the generation, returning the materialized curve.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] if the base segment has zero
    /// length or non-finite endpoints, and [`GenerationError::ResourceExceeded`]
    /// if the depth or the resulting point count is over the configured limit.
    pub fn execute(&self) -> Result<Curve<D>> {
        validate_base(&self.start, &self.end)?;
        check_depth(self.depth, &self.params)?;
        let count = self.checked_point_count()?;
        debug!(
            depth = self.depth,
            arity = self.motif.len(),
            points = count,
            "generating curve"
        );

        let mut points = Vec::with_capacity(count);
        points.push(self.start);
        expand(&self.start, &self.end, self.depth, self.motif, &mut points);
        Ok(Curve::from_points(points))
    }

    /// Returns a lazy iterator over the same points [`execute`](Self::execute)
    /// would produce. No point-count limit applies since nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] for an invalid base segment
    /// and [`GenerationError::ResourceExceeded`] if the depth is over the limit.
    pub fn stream(&self) -> Result<CurvePoints<'a, D, R>> {
        validate_base(&self.start, &self.end)?;
        check_depth(self.depth, &self.params)?;
        Ok(CurvePoints::new(self.start, self.end, self.depth, self.motif))
    }

    fn checked_point_count(&self) -> Result<usize> {
        let limit = self.params.max_points;
        let requested = point_count(self.motif.len(), self.depth).unwrap_or(u128::MAX);
        if let Some(n) = usize::try_from(requested).ok().filter(|&n| n <= limit) {
            return Ok(n);
        }
        Err(GenerationError::ResourceExceeded {
            resource: "point count",
            requested,
            limit: limit as u128,
        }
        .into())
    }
}

/// Appends every point of the refined segment except `start`.
fn expand<const D: usize, R: Rotation<D>>(
    start: &Point<D>,
    end: &Point<D>,
    depth: u32,
    motif: &Motif<R>,
    out: &mut Vec<Point<D>>,
) {
    if depth == 0 {
        out.push(*end);
        return;
    }

    let base = Segment::between(start, end);
    let mut current = *start;
    for step in motif.steps() {
        let direction = step.rotation().rotate(&base.direction);
        let next = current + direction * (base.length * step.scale_ratio());
        expand(&current, &next, depth - 1, motif, out);
        current = next;
    }
}
