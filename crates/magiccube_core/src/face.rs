use std::f64::consts::{FRAC_PI_2, PI};

use cubemath::{Float, Quaternion, Vector3};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

/// Face of the cube.
///
/// The discriminant of each face is also the color index that its stickers
/// receive when the cube is constructed. Opposite faces are adjacent in this
/// order, so face `2d + b` is on axis `d` with polarity `b`.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Display,
    EnumIter,
    FromRepr,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Face {
    U = 0,
    D = 1,
    L = 2,
    R = 3,
    B = 4,
    F = 5,
}

impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::B, Face::F];
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the face with the given index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }
    /// Returns the index of the face, which is also its color index.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the face with the given letter, such as `'R'`.
    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.letter() == c)
    }
    /// Returns the letter used for the face in move notation.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::B => 'B',
            Face::F => 'F',
        }
    }

    /// Returns the face on the opposite side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::F => Face::B,
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn axis_vector(self) -> Vector3 {
        match self {
            Face::U => Vector3::Y,
            Face::D => -Vector3::Y,
            Face::L => -Vector3::X,
            Face::R => Vector3::X,
            Face::B => -Vector3::Z,
            Face::F => Vector3::Z,
        }
    }

    /// Returns the fixed rotation that carries the `+z` face into the place
    /// of this face.
    pub fn placement_rotation(self) -> Quaternion {
        let (axis, theta) = match self {
            Face::U => (Vector3::X, -FRAC_PI_2),
            Face::D => (Vector3::X, FRAC_PI_2),
            Face::L => (Vector3::Y, -FRAC_PI_2),
            Face::R => (Vector3::Y, FRAC_PI_2),
            Face::B => (Vector3::Y, PI),
            Face::F => return Quaternion::IDENT,
        };
        Quaternion::from_unit_axis_angle(axis, theta)
    }

    /// Returns the rotation for `turns` quarter turns of the face, following
    /// the right-hand rule around its outward normal.
    pub fn twist_rotation(self, turns: i32) -> Quaternion {
        Quaternion::from_unit_axis_angle(self.axis_vector(), turns as Float * FRAC_PI_2)
    }
}

#[cfg(test)]
mod tests {
    use cubemath::assert_approx_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_indices() {
        for (i, face) in Face::iter().enumerate() {
            assert_eq!(face.index() as usize, i);
            assert_eq!(Face::from_index(i as u8), Some(face));
            assert_eq!(Face::from_letter(face.letter()), Some(face));
            assert_eq!(face.to_string(), face.letter().to_string());
            assert_eq!(face.opposite().index(), face.index() ^ 1);
        }
        assert_eq!(Face::from_index(6), None);
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn test_placement_rotation() {
        for face in Face::ALL {
            let q = face.placement_rotation();
            assert!(q.is_normalized());
            assert_approx_eq!(q.transform_point(Vector3::Z), face.axis_vector());
            assert_approx_eq!(face.opposite().axis_vector(), -face.axis_vector());
        }
    }

    #[test]
    fn test_twist_rotation_fixes_axis() {
        for face in Face::ALL {
            let q = face.twist_rotation(1);
            assert_approx_eq!(q.transform_point(face.axis_vector()), face.axis_vector());
            assert_approx_eq!(face.twist_rotation(4).to_matrix(), cubemath::Matrix3::IDENT);
        }
    }
}
