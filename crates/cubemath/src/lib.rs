//! 3D vector, matrix, and quaternion primitives.

pub use {approx, num_traits as num};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons and tiny offsets.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod vector;

pub mod approx_cmp;
pub mod matrix;
pub mod quaternion;

/// Structs, traits, and constants.
pub mod prelude {
    pub use approx::AbsDiffEq;

    pub use crate::approx_cmp::*;
    pub use crate::matrix::*;
    pub use crate::quaternion::*;
    pub use crate::vector::*;
    pub use crate::{EPSILON, Float, row_matrix3, vector3};
}
pub use prelude::*;
