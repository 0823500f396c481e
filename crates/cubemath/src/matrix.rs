//! 3x3 matrix math.

use std::ops::*;

use crate::{EPSILON, Float, Vector3};

/// 3-by-3 square matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3 {
    /// Elements stored in **column-major** order.
    elems: [Float; 9],
}
impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENT
    }
}
impl Matrix3 {
    /// Identity matrix.
    pub const IDENT: Self = Self {
        elems: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };
    /// Matrix with all zeros.
    pub const ZERO: Self = Self { elems: [0.0; 9] };

    /// Constructs a matrix from 9 elements, in **column-major** order.
    pub const fn from_elems(elems: [Float; 9]) -> Self {
        Self { elems }
    }
    /// Returns the 9 elements in **column-major** order.
    pub fn as_slice(&self) -> &[Float] {
        &self.elems
    }
    /// Constructs a matrix from its columns.
    pub fn from_cols(cols: [Vector3; 3]) -> Self {
        Self::from_fn(|col, row| cols[col as usize][row])
    }
    /// Constructs a matrix from its rows.
    pub fn from_rows(rows: [Vector3; 3]) -> Self {
        Self::from_fn(|col, row| rows[row as usize][col])
    }
    /// Constructs a matrix from a function for each element.
    pub fn from_fn(f: impl Fn(u8, u8) -> Float) -> Self {
        Self {
            elems: std::array::from_fn(|i| f(i as u8 / 3, i as u8 % 3)),
        }
    }

    /// Returns an element from the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `col >= 3 || row >= 3`.
    pub fn get(&self, col: u8, row: u8) -> Float {
        assert!(col < 3 && row < 3, "matrix index ({col}, {row}) out of bounds");
        self.elems[col as usize * 3 + row as usize]
    }
    /// Returns a column of the matrix.
    pub fn col(&self, col: u8) -> Vector3 {
        Vector3(std::array::from_fn(|row| self.get(col, row as u8)))
    }
    /// Returns a row of the matrix.
    pub fn row(&self, row: u8) -> Vector3 {
        Vector3(std::array::from_fn(|col| self.get(col as u8, row)))
    }

    /// Returns the determinant of the matrix.
    pub fn determinant(&self) -> Float {
        self.col(0).dot(self.col(1).cross(self.col(2)))
    }
    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(|col, row| self.get(row, col))
    }
    /// Returns whether the matrix is orthonormal, within `EPSILON`.
    pub fn is_orthonormal(&self) -> bool {
        approx::abs_diff_eq!(self * &self.transpose(), Self::IDENT, epsilon = EPSILON)
    }

    /// Transforms a single point.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        self * p
    }
    /// Transforms a list of points in place.
    ///
    /// Treating `points` as an N-by-3 array with one point per row, this is
    /// right-multiplication by the transpose of the matrix.
    pub fn transform_rows(&self, points: &mut [Vector3]) {
        for p in points {
            *p = self * *p;
        }
    }
}

impl Mul for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Self) -> Self::Output {
        Matrix3::from_fn(|col, row| self.row(row).dot(rhs.col(col)))
    }
}
impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
impl Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3(std::array::from_fn(|row| self.row(row as u8).dot(rhs)))
    }
}
impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        &self * rhs
    }
}

impl approx::AbsDiffEq for Matrix3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(self.elems, other.elems).all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

/// Constructs a matrix from rows.
#[macro_export]
macro_rules! row_matrix3 {
    ($([$($n:expr),* $(,)?]),* $(,)?) => {
        $crate::Matrix3::from_elems([$($($n as $crate::Float),*),*]).transpose()
    };
}
