use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GenerationError, Result};
use crate::math::Vector3;

use super::{AxisTurn, PlanarTurn};

/// One sub-segment of a motif: a length ratio relative to the parent
/// segment and a rotation relative to the parent direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotifStep<R> {
    scale_ratio: f64,
    #[serde(flatten)]
    rotation: R,
}

impl<R> MotifStep<R> {
    /// Creates a new motif step.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale_ratio` is not a positive finite number.
    pub fn new(scale_ratio: f64, rotation: R) -> Result<Self> {
        if !scale_ratio.is_finite() || scale_ratio <= 0.0 {
            return Err(GenerationError::InvalidInput(format!(
                "scale ratio must be positive and finite, got {scale_ratio}"
            ))
            .into());
        }
        Ok(Self {
            scale_ratio,
            rotation,
        })
    }

    /// Returns the length of this step relative to its parent segment.
    #[must_use]
    pub fn scale_ratio(&self) -> f64 {
        self.scale_ratio
    }

    /// Returns the rotation descriptor.
    #[must_use]
    pub fn rotation(&self) -> &R {
        &self.rotation
    }
}

#[derive(Deserialize)]
struct MotifStepData<R> {
    scale_ratio: f64,
    #[serde(flatten)]
    rotation: R,
}

impl<'de, R: Deserialize<'de>> Deserialize<'de> for MotifStep<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = MotifStepData::<R>::deserialize(deserializer)?;
        Self::new(data.scale_ratio, data.rotation).map_err(serde::de::Error::custom)
    }
}

/// The ordered list of steps one segment is replaced by at each refinement.
///
/// A motif always has at least one step. The steps need not bring the
/// chain back to the parent's end point (open curves such as the Levy
/// C-curve are valid).
#[derive(Debug, Clone, PartialEq)]
pub struct Motif<R> {
    steps: Vec<MotifStep<R>>,
}

/// Motif of planar turns.
pub type PlanarMotif = Motif<PlanarTurn>;

/// Motif of axis-angle turns.
pub type SpatialMotif = Motif<AxisTurn>;

impl<R> Motif<R> {
    /// Creates a motif from its steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is empty.
    pub fn new(steps: Vec<MotifStep<R>>) -> Result<Self> {
        if steps.is_empty() {
            let message = "motif must have at least one step".to_string();
            return Err(GenerationError::InvalidInput(message).into());
        }
        Ok(Self { steps })
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[MotifStep<R>] {
        &self.steps
    }

    /// Returns the number of steps (the branching factor `k`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept alongside [`Motif::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the scale ratios of all steps.
    pub fn scale_ratios(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(MotifStep::scale_ratio)
    }

    /// Returns the common scale ratio if every step has exactly the same one.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn uniform_ratio(&self) -> Option<f64> {
        let first = self.steps.first()?.scale_ratio;
        self.scale_ratios().all(|r| r == first).then_some(first)
    }
}

impl PlanarMotif {
    /// Builds a planar motif from parallel ratio and angle lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length, are empty, or contain
    /// an invalid ratio.
    pub fn planar(ratios: &[f64], angles_degrees: &[f64]) -> Result<Self> {
        check_lengths(&[ratios.len(), angles_degrees.len()])?;
        let steps = ratios
            .iter()
            .zip(angles_degrees)
            .map(|(&r, &a)| MotifStep::new(r, PlanarTurn::new(a)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(steps)
    }
}

impl SpatialMotif {
    /// Builds a spatial motif from parallel ratio, axis and angle lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length, are empty, or contain
    /// an invalid ratio or a zero-length axis.
    pub fn spatial(ratios: &[f64], axes: &[Vector3], angles_degrees: &[f64]) -> Result<Self> {
        check_lengths(&[ratios.len(), axes.len(), angles_degrees.len()])?;
        let steps = ratios
            .iter()
            .zip(axes)
            .zip(angles_degrees)
            .map(|((&r, axis), &a)| MotifStep::new(r, AxisTurn::new(*axis, a)?))
            .collect::<Result<Vec<_>>>()?;
        Self::new(steps)
    }
}

fn check_lengths(lengths: &[usize]) -> Result<()> {
    if lengths.windows(2).any(|w| w[0] != w[1]) {
        return Err(GenerationError::InvalidInput(format!(
            "motif lists must have equal lengths, got {lengths:?}"
        ))
        .into());
    }
    Ok(())
}

impl<R: Serialize> Serialize for Motif<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.steps.serialize(serializer)
    }
}

impl<'de, R: Deserialize<'de>> Deserialize<'de> for Motif<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let steps = Vec::<MotifStep<R>>::deserialize(deserializer)?;
        Self::new(steps).map_err(serde::de::Error::custom)
    }
}
