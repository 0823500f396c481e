//! Unit quaternions representing 3D rotations.

use std::fmt;
use std::ops::Mul;

use crate::{EPSILON, Float, Matrix3, Vector3};

/// Unit quaternion representing a rotation in 3D.
///
/// Composition via `*` is the Hamilton product: applying `a * b` to a point
/// is the same as applying `b` and then `a`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    /// Scalar component.
    pub w: Float,
    /// Vector component.
    pub xyz: Vector3,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENT
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.xyz.0;
        write!(f, "{} + {x}i + {y}j + {z}k", self.w)
    }
}

impl Quaternion {
    /// Identity rotation.
    pub const IDENT: Self = Self {
        w: 1.0,
        xyz: Vector3::ZERO,
    };

    /// Constructs a rotation around `axis` by `theta` radians, following the
    /// right-hand rule.
    ///
    /// Returns `None` if `axis` is zero.
    pub fn from_axis_angle(axis: Vector3, theta: Float) -> Option<Self> {
        Some(Self::from_unit_axis_angle(axis.normalize()?, theta))
    }
    /// Constructs a rotation around `axis` by `theta` radians, assuming that
    /// `axis` is already a unit vector.
    pub fn from_unit_axis_angle(axis: Vector3, theta: Float) -> Self {
        let half_angle = theta / 2.0;
        Self {
            w: half_angle.cos(),
            xyz: axis * half_angle.sin(),
        }
    }

    /// Returns the norm of the quaternion, which is 1 for every rotation.
    pub fn norm(self) -> Float {
        (self.w * self.w + self.xyz.mag2()).sqrt()
    }
    /// Returns whether the quaternion has unit norm, within `EPSILON`.
    pub fn is_normalized(self) -> bool {
        (self.norm() - 1.0).abs() < EPSILON
    }
    /// Returns the composition `self * rhs`, which applies `rhs` first.
    #[must_use]
    pub fn compose(self, rhs: Self) -> Self {
        self * rhs
    }
    /// Returns the inverse rotation.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self {
            w: self.w,
            xyz: -self.xyz,
        }
    }

    /// Returns the rotation matrix for the quaternion.
    pub fn to_matrix(self) -> Matrix3 {
        let w = self.w;
        let [x, y, z] = self.xyz.0;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        crate::row_matrix3![
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ]
    }

    /// Rotates a point.
    pub fn transform_point(self, p: Vector3) -> Vector3 {
        // v' = v + 2w(u x v) + 2(u x (u x v))
        let t = self.xyz.cross(p) * 2.0;
        p + t * self.w + self.xyz.cross(t)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion {
            w: self.w * rhs.w - self.xyz.dot(rhs.xyz),
            xyz: rhs.xyz * self.w + self.xyz * rhs.w + self.xyz.cross(rhs.xyz),
        }
    }
}

impl approx::AbsDiffEq for Quaternion {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon) && self.xyz.abs_diff_eq(&other.xyz, epsilon)
    }
}
