mod builtin;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, KochError, Result};
use crate::geometry::{AxisTurn, Motif, PlanarTurn};

/// A named motif, the unit of a preset catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset<R> {
    /// Display title, passed through to renderers untouched.
    pub title: String,
    /// The motif, serialized as `steps`.
    #[serde(rename = "steps")]
    pub motif: Motif<R>,
}

/// Preset with planar turns.
pub type PlanarPreset = Preset<PlanarTurn>;

/// Preset with axis-angle turns.
pub type SpatialPreset = Preset<AxisTurn>;

impl<R> Preset<R> {
    /// Creates a new preset.
    #[must_use]
    pub fn new(title: impl Into<String>, motif: Motif<R>) -> Self {
        Self {
            title: title.into(),
            motif,
        }
    }
}

/// A list of planar and spatial presets.
///
/// JSON form:
///
/// ```json
/// {
///   "planar": [
///     {"title": "Zigzag", "steps": [{"scale_ratio": 0.5, "angle_degrees": 45.0}]}
///   ],
///   "spatial": [
///     {"title": "Twist", "steps": [
///       {"scale_ratio": 0.5, "axis": [0, 0, 1], "angle_degrees": 30.0}
///     ]}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    pub planar: Vec<Preset<PlanarTurn>>,
    #[serde(default)]
    pub spatial: Vec<Preset<AxisTurn>>,
}

impl Catalogue {
    /// Returns the built-in presets.
    ///
    /// # Errors
    ///
    /// Does not fail in practice; the built-in data is validated like any
    /// other motif.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            planar: builtin::planar()?,
            spatial: builtin::spatial()?,
        })
    }

    /// Parses a catalogue from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] if the JSON is malformed or any
    /// motif in it is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(parse_error)
    }

    /// Serializes the catalogue to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(serialize_error)
    }

    /// Looks up a planar preset by title.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownPreset`] if no preset has that title.
    pub fn planar_preset(&self, title: &str) -> Result<&Preset<PlanarTurn>> {
        find(&self.planar, title)
    }

    /// Looks up a spatial preset by title.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnknownPreset`] if no preset has that title.
    pub fn spatial_preset(&self, title: &str) -> Result<&Preset<AxisTurn>> {
        find(&self.spatial, title)
    }
}

fn find<'a, R>(presets: &'a [Preset<R>], title: &str) -> Result<&'a Preset<R>> {
    presets
        .iter()
        .find(|p| p.title == title)
        .ok_or_else(|| CatalogueError::UnknownPreset(title.to_owned()).into())
}

fn parse_error(err: serde_json::Error) -> KochError {
    CatalogueError::Parse(err).into()
}

fn serialize_error(err: serde_json::Error) -> KochError {
    CatalogueError::Serialize(err).into()
}
