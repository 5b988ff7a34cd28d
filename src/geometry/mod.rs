mod curve;
mod motif;
mod rotation;

pub use curve::{Curve, Curve2, Curve3};
pub use motif::{Motif, MotifStep, PlanarMotif, SpatialMotif};
pub use rotation::{AxisTurn, PlanarTurn, Rotation};
