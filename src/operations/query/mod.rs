mod dimension;
mod length;

pub use dimension::estimate_dimension;
pub use length::curve_length;
