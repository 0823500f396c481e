//! Geometry and move engine for an N×N×N twisty cube, plus discovery of which
//! physical piece each sticker slot belongs to.
//!
//! ```
//! use magiccube_core::{Cube, Face};
//!
//! let mut cube = Cube::new(3)?;
//! let solved = cube.color_id();
//! cube.rotate_face(Face::R, 1, 0)?;
//! cube.rotate_face(Face::R, -1, 0)?;
//! assert!(cube.history().is_empty());
//! assert_eq!(cube.color_id(), solved);
//! # Ok::<(), magiccube_core::CubeError>(())
//! ```

mod cube;
mod discover;
mod error;
mod face;
mod history;
mod notation;
mod rgb;
mod scramble;
#[cfg(test)]
mod tests;

/// Re-export of `cubemath`.
pub use cubemath;
pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::cube::{Cube, OnChange, Sticker};
    pub use crate::discover::{PieceType, StickerIdentity, discover_sticker_identities};
    pub use crate::error::{CubeError, DiscoveryError, ParseMoveError};
    pub use crate::face::Face;
    pub use crate::history::{Move, MoveHistory, normalize_turns};
    pub use crate::notation::{format_moves, parse_moves};
    pub use crate::rgb::Rgb;
    pub use crate::scramble::ScrambleParams;
}

/// Default plastic color.
pub const DEFAULT_PLASTIC_COLOR: Rgb = Rgb::BLACK;

/// Default palette. The first six entries are the face colors, in face index
/// order.
pub const DEFAULT_FACE_COLORS: [Rgb; 8] = [
    Rgb::WHITE,
    Rgb::new(0xff, 0xcf, 0x00),
    Rgb::new(0x00, 0x00, 0x8f),
    Rgb::new(0x00, 0x9f, 0x0f),
    Rgb::new(0xff, 0x6f, 0x00),
    Rgb::new(0xcf, 0x00, 0x00),
    Rgb::GRAY,
    Rgb::BLACK,
];
