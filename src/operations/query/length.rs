use crate::math::Point;

/// Computes the path length of a polyline: the sum of distances between
/// consecutive points.
///
/// Returns `0.0` for an empty or single-point polyline.
#[must_use]
pub fn curve_length<const D: usize>(points: &[Point<D>]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point2, Point3};

    #[test]
    fn unit_segment_is_exactly_one() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(curve_length(&pts).to_bits(), 1.0_f64.to_bits());
    }

    #[test]
    fn single_point_is_zero() {
        assert!(curve_length(&[Point3::new(1.0, 2.0, 3.0)]).abs() < f64::EPSILON);
        assert!(curve_length::<2>(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn sums_segments() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(1.0, 2.0, -2.0),
        ];
        assert!((curve_length(&pts) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn backtracking_counts_both_ways() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        assert!((curve_length(&pts) - 4.0).abs() < 1e-12);
    }
}
