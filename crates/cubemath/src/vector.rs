//! 3D vector math.

use std::fmt;
use std::iter::Sum;
use std::ops::*;

use itertools::Itertools;

use crate::approx_cmp::is_approx_zero;
use crate::{EPSILON, Float};

/// Constructs a 3D vector.
#[macro_export]
macro_rules! vector3 {
    [$x:expr, $y:expr, $z:expr $(,)?] => {
        $crate::Vector3([$x as $crate::Float, $y as $crate::Float, $z as $crate::Float])
    };
}

/// 3D vector, also used for points.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3(pub [Float; 3]);

impl Vector3 {
    /// Zero vector.
    pub const ZERO: Self = Self([0.0; 3]);
    /// Unit vector along the X axis.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }
    /// Returns a unit vector along an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= 3`.
    pub fn unit(axis: u8) -> Self {
        let mut ret = Self::ZERO;
        ret[axis] = 1.0;
        ret
    }

    /// Returns the X component.
    pub fn x(self) -> Float {
        self.0[0]
    }
    /// Returns the Y component.
    pub fn y(self) -> Float {
        self.0[1]
    }
    /// Returns the Z component.
    pub fn z(self) -> Float {
        self.0[2]
    }

    /// Returns an iterator over the components of the vector.
    pub fn iter(self) -> std::array::IntoIter<Float, 3> {
        self.0.into_iter()
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: Self) -> Float {
        std::iter::zip(self.0, rhs.0).map(|(l, r)| l * r).sum()
    }
    /// Returns the cross product of two vectors.
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Returns the magnitude of the vector.
    pub fn mag(self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    pub fn mag2(self) -> Float {
        self.dot(self)
    }
    /// Returns the distance between two points.
    pub fn distance(self, other: Self) -> Float {
        (self - other).mag()
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// zero.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.mag();
        if is_approx_zero(&mag) {
            return None;
        }
        let mult = 1.0 / mag;
        mult.is_finite().then(|| self.scale(mult))
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(self, scalar: Float) -> Self {
        self.map(|x| x * scalar)
    }
    /// Returns a copy of the vector scaled independently along each axis.
    #[must_use]
    pub fn scale_nonuniform(self, factors: Self) -> Self {
        self.zip_map(factors, |l, r| l * r)
    }

    /// Applies a function to each component.
    #[must_use]
    pub fn map(self, f: impl FnMut(Float) -> Float) -> Self {
        Self(self.0.map(f))
    }
    fn zip_map(self, rhs: Self, mut f: impl FnMut(Float, Float) -> Float) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |l, r| l + r)
    }
}
impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |l, r| l - r)
    }
}
impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl Mul<Float> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}
impl Div<Float> for Vector3 {
    type Output = Vector3;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Float) -> Self::Output {
        self.scale(1.0 / rhs)
    }
}
impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Index<u8> for Vector3 {
    type Output = Float;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[index as usize]
    }
}
impl IndexMut<u8> for Vector3 {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        self.0.get_mut(index as usize).unwrap_or_else(|| {
            panic!("vector index out of bounds: the dimensionality is 3 but the index is {index}")
        })
    }
}

impl approx::AbsDiffEq for Vector3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(self.0, other.0).all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl From<[Float; 3]> for Vector3 {
    fn from(value: [Float; 3]) -> Self {
        Self(value)
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

/// Returns the centroid of a set of points, or `None` if there are none.
pub fn centroid(points: &[Vector3]) -> Option<Vector3> {
    (!points.is_empty()).then(|| points.iter().copied().sum::<Vector3>() / points.len() as Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_vector_add_sub() {
        let v1 = vector3![1.0, 2.0, -10.0];
        let v2 = vector3![-5.0, 0.0, 0.0];
        assert_eq!(v1 + v2, vector3![-4.0, 2.0, -10.0]);
        assert_eq!(v1 - v2, vector3![6.0, 2.0, -10.0]);
        assert_eq!(-v1, vector3![-1.0, -2.0, 10.0]);
    }

    #[test]
    pub fn test_dot_and_cross_product() {
        let v1 = vector3![1.0, 2.0, -10.0];
        let v2 = vector3![-5.0, 16.0, 0.0];
        assert_eq!(v1.dot(v2), 27.0);
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    }

    #[test]
    pub fn test_normalize() {
        assert_eq!(Vector3::ZERO.normalize(), None);
        crate::assert_approx_eq!(
            vector3![3, 0, 4].normalize().expect("nonzero vector"),
            vector3![0.6, 0.0, 0.8],
        );
    }

    #[test]
    pub fn test_centroid() {
        assert_eq!(centroid(&[]), None);
        assert_eq!(
            centroid(&[vector3![1, 1, 1], vector3![-1, 1, 3]]),
            Some(vector3![0, 1, 2]),
        );
    }
}
