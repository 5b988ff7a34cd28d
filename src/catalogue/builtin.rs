use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::Result;
use crate::geometry::{PlanarMotif, SpatialMotif};
use crate::math::Vector3;

use super::{PlanarPreset, SpatialPreset};

const THIRD: f64 = 1.0 / 3.0;

pub(super) fn planar() -> Result<Vec<PlanarPreset>> {
    Ok(vec![
        PlanarPreset::new(
            "Classical Koch curve",
            PlanarMotif::planar(&[THIRD; 4], &[0.0, 60.0, -60.0, 0.0])?,
        ),
        PlanarPreset::new(
            "Square Koch curve",
            PlanarMotif::planar(
                &[0.25; 8],
                &[0.0, 90.0, -90.0, 0.0, 0.0, -90.0, 90.0, 0.0],
            )?,
        ),
        PlanarPreset::new(
            "Levy C-curve",
            PlanarMotif::planar(&[FRAC_1_SQRT_2; 2], &[45.0, -45.0])?,
        ),
        PlanarPreset::new("Zigzag fractal", PlanarMotif::planar(&[0.5; 2], &[45.0, -45.0])?),
        PlanarPreset::new(
            "Wavy line fractal",
            PlanarMotif::planar(&[0.25; 4], &[0.0, 30.0, -30.0, 0.0])?,
        ),
    ])
}

pub(super) fn spatial() -> Result<Vec<SpatialPreset>> {
    Ok(vec![SpatialPreset::new(
        "3D Koch fractal",
        SpatialMotif::spatial(
            &[THIRD; 3],
            &[Vector3::z(), Vector3::x(), Vector3::y()],
            &[0.0, 60.0, -60.0],
        )?,
    )])
}
