use crate::math::Point;
use crate::operations::query::curve_length;

/// An ordered polyline approximating a fractal curve.
///
/// Produced fresh by each generation call and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<const D: usize> {
    points: Vec<Point<D>>,
}

/// Planar curve.
pub type Curve2 = Curve<2>;

/// Spatial curve.
pub type Curve3 = Curve<3>;

impl<const D: usize> Curve<D> {
    /// Wraps an ordered list of points.
    #[must_use]
    pub fn from_points(points: Vec<Point<D>>) -> Self {
        Self { points }
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point.
    #[must_use]
    pub fn first(&self) -> Option<&Point<D>> {
        self.points.first()
    }

    /// Returns the last point.
    #[must_use]
    pub fn last(&self) -> Option<&Point<D>> {
        self.points.last()
    }

    /// Returns the total path length.
    #[must_use]
    pub fn length(&self) -> f64 {
        curve_length(&self.points)
    }

    /// Consumes the curve, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point<D>> {
        self.points
    }
}

impl<const D: usize> IntoIterator for Curve<D> {
    type Item = Point<D>;
    type IntoIter = std::vec::IntoIter<Point<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<const D: usize> FromIterator<Point<D>> for Curve<D> {
    fn from_iter<I: IntoIterator<Item = Point<D>>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
