pub mod rotate_2d;
pub mod rotate_3d;

pub use rotate_2d::rotate_2d;
pub use rotate_3d::{rodrigues_matrix, rotate_3d};

/// Point type in `D` dimensions.
pub type Point<const D: usize> = nalgebra::Point<f64, D>;

/// Vector type in `D` dimensions.
pub type Vector<const D: usize> = nalgebra::SVector<f64, D>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 rotation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
