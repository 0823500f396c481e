use smallvec::SmallVec;

use crate::{Face, PieceType};

/// Error from constructing or twisting a cube.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("cube size must be at least 1")]
    ZeroSize,
    #[error("cube size {0} is larger than the maximum of {max}", max = crate::Cube::MAX_SIZE)]
    SizeTooLarge(usize),
    #[error("need at least 6 face colors; got {0}")]
    NotEnoughColors(usize),
    #[error("layer {layer} is out of range for a cube of size {size}")]
    LayerOutOfRange { layer: usize, size: usize },
    #[error("no sticker slot at position {position:?} after twisting {face}")]
    PositionNotFound { face: Face, position: [i32; 3] },
}

/// Error from parsing move notation.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("missing face letter in {0:?}")]
    MissingFace(String),
    #[error("unknown face {0:?}; expected one of U D L R B F")]
    UnknownFace(char),
    #[error("bad layer prefix in {0:?}; layers are numbered from 1")]
    BadLayer(String),
    #[error("bad turn suffix {suffix:?} in {token:?}")]
    BadSuffix { token: String, suffix: String },
}

/// Error from discovering sticker identities.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("sticker discovery only supports 3x3x3 cubes; got size {0}")]
    UnsupportedDimension(usize),
    #[error("every sticker must have its constructed color before discovery")]
    CubeNotReset,
    #[error(
        "expected exactly one {piece} sticker on {face} when probing {probed:?}; \
         found candidates {candidates:?}"
    )]
    Ambiguous {
        piece: PieceType,
        face: Face,
        probed: SmallVec<[Face; 2]>,
        candidates: Vec<usize>,
    },
    #[error(
        "discovery found {corners} corner, {edges} edge, and {centers} center stickers; \
         expected 24, 24, and 6"
    )]
    Incomplete {
        corners: usize,
        edges: usize,
        centers: usize,
    },
    #[error(transparent)]
    Cube(#[from] CubeError),
}
