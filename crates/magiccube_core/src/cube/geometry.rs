//! Construction of sticker geometry for a solved cube.

use cubemath::prelude::*;

use crate::Face;

/// Width of a sticker, relative to the width of its cubie.
const STICKER_WIDTH: Float = 0.9;
/// Margin between a sticker and the edge of its cubie.
const STICKER_MARGIN: Float = 0.5 * (1.0 - STICKER_WIDTH);
/// Height of a sticker above the face of its cubie.
const STICKER_THICKNESS: Float = 0.001;

/// Outline of the `+z` face of the whole cube, as a closed polygon.
fn base_face() -> [Vector3; 5] {
    [
        vector3![1, 1, 1],
        vector3![1, -1, 1],
        vector3![-1, -1, 1],
        vector3![-1, 1, 1],
        vector3![1, 1, 1],
    ]
}

/// Outline of a sticker covering the whole `+z` face, with its corners cut,
/// as a closed polygon.
fn base_sticker() -> [Vector3; 9] {
    let d1 = 1.0 - STICKER_MARGIN;
    let d2 = 1.0 - 2.0 * STICKER_MARGIN;
    let d3 = 1.0 + STICKER_THICKNESS;
    [
        vector3![d1, d2, d3],
        vector3![d2, d1, d3],
        vector3![-d2, d1, d3],
        vector3![-d1, d2, d3],
        vector3![-d1, -d2, d3],
        vector3![-d2, -d1, d3],
        vector3![d2, -d1, d3],
        vector3![d1, -d2, d3],
        vector3![d1, d2, d3],
    ]
}

/// Sticker and the cubie face underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    /// Outline of the sticker, as a closed polygon.
    pub polygon: [Vector3; 9],
    /// Center of the sticker.
    pub centroid: Vector3,
    /// Outline of the cubie face, as a closed polygon.
    pub face_polygon: [Vector3; 5],
    /// Center of the cubie face. This determines which slot the sticker
    /// occupies.
    pub face_centroid: Vector3,
    /// Face that the sticker was on when the cube was constructed.
    pub face: Face,
    /// Color index of the sticker.
    pub color: u8,
}

impl Sticker {
    /// Applies a rotation to all the geometry of the sticker.
    pub(super) fn transform(&mut self, m: &Matrix3) {
        m.transform_rows(&mut self.polygon);
        self.centroid = m * self.centroid;
        m.transform_rows(&mut self.face_polygon);
        self.face_centroid = m * self.face_centroid;
    }
}

/// Returns the stickers of a solved cube of size `n`, ordered canonically by
/// the position of their face centroids and then by face.
pub(super) fn solved_stickers(n: usize) -> Vec<Sticker> {
    let cubie_width = 2.0 / n as Float;
    let offset = |i: usize| -1.0 + (i as Float + 0.5) * cubie_width;
    let scale = vector3![1.0 / n as Float, 1.0 / n as Float, 1.0];

    let mut stickers = Vec::with_capacity(Face::COUNT * n * n);
    for face in Face::ALL {
        let rot = face.placement_rotation().to_matrix();
        let place = |p: Vector3, translation: Vector3| &rot * (p.scale_nonuniform(scale) + translation);
        for i in 0..n {
            for j in 0..n {
                let translation = vector3![offset(i), offset(j), 0.0];
                stickers.push(Sticker {
                    polygon: base_sticker().map(|p| place(p, translation)),
                    centroid: &rot * (vector3![0.0, 0.0, 1.0 + STICKER_THICKNESS] + translation),
                    face_polygon: base_face().map(|p| place(p, translation)),
                    face_centroid: &rot * (Vector3::Z + translation),
                    face,
                    color: face.index(),
                });
            }
        }
    }

    stickers.sort_by(|a, b| {
        approx_cmp_slices(&a.face_centroid.0, &b.face_centroid.0).then(a.face.cmp(&b.face))
    });
    stickers
}

/// Returns the integer key identifying a face centroid position on a cube of
/// size `n`.
///
/// Scaling by `n` puts every cubie face center on an integer lattice: face
/// planes map to `±n` and interior coordinates map to `2i + 1 - n`.
pub(super) fn position_key(n: usize, p: Vector3) -> Option<[i32; 3]> {
    let [x, y, z] = p.0.map(|c| round_to_i32(c * n as Float));
    Some([x?, y?, z?])
}
