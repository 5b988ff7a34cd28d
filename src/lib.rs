pub mod catalogue;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod report;

pub use error::{KochError, Result};
