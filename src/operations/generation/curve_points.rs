use std::iter::FusedIterator;

use crate::geometry::{Motif, Rotation};
use crate::math::{Point, Vector};

use super::{point_count, Segment};

/// Lazy, single-pass iterator over the points of a generated curve.
///
/// Yields the same points as [`GenerateCurve::execute`](super::GenerateCurve::execute)
/// in the same order, holding only one frame per refinement level.
/// Created by [`GenerateCurve::stream`](super::GenerateCurve::stream).
pub struct CurvePoints<'a, const D: usize, R> {
    motif: &'a Motif<R>,
    start: Option<Point<D>>,
    end: Option<Point<D>>,
    stack: Vec<Frame<D>>,
    remaining: Option<usize>,
}

/// Progress through one segment's motif steps.
struct Frame<const D: usize> {
    current: Point<D>,
    direction: Vector<D>,
    length: f64,
    step: usize,
    depth: u32,
}

impl<const D: usize> Frame<D> {
    fn new(start: Point<D>, end: &Point<D>, depth: u32) -> Self {
        let segment = Segment::between(&start, end);
        Self {
            current: start,
            direction: segment.direction,
            length: segment.length,
            step: 0,
            depth,
        }
    }
}

impl<'a, const D: usize, R: Rotation<D>> CurvePoints<'a, D, R> {
    /// Expects a validated base segment.
    pub(super) fn new(start: Point<D>, end: Point<D>, depth: u32, motif: &'a Motif<R>) -> Self {
        let remaining = point_count(motif.len(), depth).and_then(|n| usize::try_from(n).ok());
        let (end, stack) = if depth == 0 {
            (Some(end), Vec::new())
        } else {
            let mut stack = Vec::with_capacity(depth as usize);
            stack.push(Frame::new(start, &end, depth));
            (None, stack)
        };
        Self {
            motif,
            start: Some(start),
            end,
            stack,
            remaining,
        }
    }

    fn advance(&mut self) -> Option<Point<D>> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        if let Some(end) = self.end.take() {
            return Some(end);
        }
        loop {
            let frame = self.stack.last_mut()?;
            let Some(step) = self.motif.steps().get(frame.step) else {
                self.stack.pop();
                continue;
            };
            frame.step += 1;

            let direction = step.rotation().rotate(&frame.direction);
            let next = frame.current + direction * (frame.length * step.scale_ratio());
            let origin = std::mem::replace(&mut frame.current, next);
            let depth = frame.depth;
            if depth == 1 {
                return Some(next);
            }
            self.stack.push(Frame::new(origin, &next, depth - 1));
        }
    }
}

impl<const D: usize, R: Rotation<D>> Iterator for CurvePoints<'_, D, R> {
    type Item = Point<D>;

    fn next(&mut self) -> Option<Point<D>> {
        let point = self.advance()?;
        if let Some(n) = self.remaining.as_mut() {
            *n = n.saturating_sub(1);
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<const D: usize, R: Rotation<D>> FusedIterator for CurvePoints<'_, D, R> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::{Curve2, PlanarMotif, SpatialMotif};
    use crate::math::{Point2, Point3, Vector3};
    use crate::operations::generation::{GenerateCurve, GenerationParams};

    fn koch() -> PlanarMotif {
        PlanarMotif::planar(&[1.0 / 3.0; 4], &[0.0, 60.0, -60.0, 0.0]).unwrap()
    }

    #[test]
    fn matches_materialized_planar_curve() {
        let motif = PlanarMotif::planar(&[0.3, 0.4, 0.35], &[25.0, -80.0, 40.0]).unwrap();
        let (start, end) = (Point2::new(-1.0, 0.5), Point2::new(2.0, 1.5));
        for depth in 0..6 {
            let op = GenerateCurve::new(start, end, depth, &motif);
            let lazy: Curve2 = op.stream().unwrap().collect();
            assert_eq!(lazy, op.execute().unwrap(), "depth {depth}");
        }
    }

    #[test]
    fn matches_materialized_spatial_curve() {
        let axes = [Vector3::z(), Vector3::x(), Vector3::new(1.0, 1.0, 0.0)];
        let motif = SpatialMotif::spatial(&[0.5, 0.3, 0.4], &axes, &[10.0, 60.0, -45.0]).unwrap();
        let op = GenerateCurve::new(Point3::origin(), Point3::new(0.0, 2.0, 1.0), 4, &motif);
        let lazy: Vec<_> = op.stream().unwrap().collect();
        assert_eq!(lazy, op.execute().unwrap().into_points());
    }

    #[test]
    fn depth_zero_yields_endpoints() {
        let motif = koch();
        let op = GenerateCurve::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0, &motif);
        let pts: Vec<_> = op.stream().unwrap().collect();
        assert_eq!(pts, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
    }

    #[test]
    fn size_hint_counts_down() {
        let motif = koch();
        let op = GenerateCurve::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 2, &motif);
        let mut it = op.stream().unwrap();
        assert_eq!(it.size_hint(), (17, Some(17)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (15, Some(15)));
        assert_eq!(it.by_ref().count(), 15);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn ignores_point_ceiling() {
        let motif = koch();
        let params = GenerationParams {
            max_points: 10,
            ..GenerationParams::default()
        };
        let op = GenerateCurve::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 3, &motif)
            .with_params(params);
        assert!(op.execute().is_err());
        assert_eq!(op.stream().unwrap().count(), 65);
    }

    #[test]
    fn rejects_zero_length_base() {
        let motif = koch();
        let p = Point2::new(1.0, 1.0);
        let result = GenerateCurve::new(p, p, 2, &motif).stream();
        assert!(result.err().unwrap().is_invalid_input());
    }

    #[test]
    fn deep_single_step_motif_streams_two_points() {
        let motif = PlanarMotif::planar(&[1.0], &[0.0]).unwrap();
        let op = GenerateCurve::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 64, &motif);
        assert_eq!(op.stream().unwrap().count(), 2);
    }
}
