use serde::{Deserialize, Serialize};

use crate::error::{KochError, Result};
use crate::math::rotate_3d::unit_axis;
use crate::math::{rodrigues_matrix, rotate_2d, Matrix3, Vector, Vector3};

/// A rotation descriptor that turns a parent direction into a step direction.
///
/// Implementations are infallible: anything that could make the rotation
/// undefined is rejected when the descriptor is constructed.
pub trait Rotation<const D: usize> {
    /// Rotates `direction`, preserving its norm.
    fn rotate(&self, direction: &Vector<D>) -> Vector<D>;
}

/// Planar turn relative to the parent segment, counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarTurn {
    angle_degrees: f64,
}

impl PlanarTurn {
    /// Creates a turn of `angle_degrees`.
    #[must_use]
    pub fn new(angle_degrees: f64) -> Self {
        Self { angle_degrees }
    }

    /// Returns the turn angle in degrees.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }
}

impl Rotation<2> for PlanarTurn {
    fn rotate(&self, direction: &Vector<2>) -> Vector<2> {
        rotate_2d(direction, self.angle_degrees)
    }
}

/// Spatial turn about an arbitrary axis (right-hand rule).
///
/// The axis is normalized on construction and the Rodrigues matrix is
/// cached, so rotating a direction is a single matrix-vector product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisTurnData", into = "AxisTurnData")]
pub struct AxisTurn {
    axis: Vector3,
    angle_degrees: f64,
    matrix: Matrix3,
}

impl AxisTurn {
    /// Creates a turn of `angle_degrees` about `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis` is zero-length or not finite.
    pub fn new(axis: Vector3, angle_degrees: f64) -> Result<Self> {
        let axis = unit_axis(&axis)?;
        Ok(Self {
            axis,
            angle_degrees,
            matrix: rodrigues_matrix(&axis, angle_degrees.to_radians()),
        })
    }

    /// Returns the unit rotation axis.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Returns the turn angle in degrees.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }
}

impl Rotation<3> for AxisTurn {
    fn rotate(&self, direction: &Vector<3>) -> Vector<3> {
        self.matrix * direction
    }
}

/// Serialized form of [`AxisTurn`].
#[derive(Serialize, Deserialize)]
struct AxisTurnData {
    axis: [f64; 3],
    angle_degrees: f64,
}

impl TryFrom<AxisTurnData> for AxisTurn {
    type Error = KochError;

    fn try_from(data: AxisTurnData) -> Result<Self> {
        Self::new(Vector3::from(data.axis), data.angle_degrees)
    }
}

impl From<AxisTurn> for AxisTurnData {
    fn from(turn: AxisTurn) -> Self {
        Self {
            axis: turn.axis.into(),
            angle_degrees: turn.angle_degrees,
        }
    }
}
