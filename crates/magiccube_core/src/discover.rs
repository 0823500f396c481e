//! Discovery of which physical piece each sticker slot belongs to.
//!
//! The cube is treated as a black box that can be twisted and read back. Each
//! face is twisted by a quarter turn and back to find out which slots change
//! color. Intersecting those sets, filtered by which face each slot started
//! on, pins down every corner and edge sticker; whatever is left over is a
//! center.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use strum::Display;

use crate::{Cube, CubeError, DiscoveryError, Face};

/// Kind of piece that a sticker belongs to.
#[derive(Serialize, Deserialize, Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum PieceType {
    Center,
    Edge,
    Corner,
}

/// Set of faces that a sticker touches. The first face is always the one the
/// sticker lies on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "piece", content = "faces", rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum StickerIdentity {
    Center(Face),
    Edge([Face; 2]),
    Corner([Face; 3]),
}

impl StickerIdentity {
    /// Returns the kind of piece.
    pub fn piece_type(&self) -> PieceType {
        match self {
            Self::Center(_) => PieceType::Center,
            Self::Edge(_) => PieceType::Edge,
            Self::Corner(_) => PieceType::Corner,
        }
    }
    /// Returns the faces, starting with the face the sticker lies on.
    pub fn faces(&self) -> SmallVec<[Face; 3]> {
        match *self {
            Self::Center(f) => smallvec![f],
            Self::Edge(fs) => SmallVec::from_slice(&fs),
            Self::Corner(fs) => SmallVec::from_slice(&fs),
        }
    }
    /// Returns the face the sticker lies on.
    pub fn own_face(&self) -> Face {
        match *self {
            Self::Center(f) | Self::Edge([f, _]) | Self::Corner([f, _, _]) => f,
        }
    }
}

/// Discovers the identity of the sticker at each slot of a 3x3x3 cube.
///
/// Every slot must have the color it had at construction, but the history
/// does not need to be empty. The cube is twisted repeatedly but is left
/// exactly as it was (history included), and its on-change callback is not
/// invoked.
pub fn discover_sticker_identities(
    cube: &mut Cube,
) -> Result<Vec<StickerIdentity>, DiscoveryError> {
    if cube.size() != 3 {
        return Err(DiscoveryError::UnsupportedDimension(cube.size()));
    }
    if !cube.is_solved() {
        return Err(DiscoveryError::CubeNotReset);
    }

    with_hook_suspended(cube, |cube| Discoverer::new(cube)?.run())
}

/// Runs `f` with the cube's on-change callback removed, and puts it back
/// afterwards whether or not `f` succeeds.
fn with_hook_suspended<T>(
    cube: &mut Cube,
    f: impl FnOnce(&mut Cube) -> Result<T, DiscoveryError>,
) -> Result<T, DiscoveryError> {
    let on_change = cube.take_on_change();
    let result = f(cube);
    cube.restore_on_change(on_change);
    result
}

/// Face of a corner along axis `d`, where the corner is a 3-bit vector with
/// axis 0 in the most significant bit.
fn corner_face(corner: u8, d: usize) -> Face {
    let bit = (corner >> (2 - d)) & 1;
    Face::ALL[2 * d + bit as usize]
}

struct Discoverer<'a> {
    cube: &'a mut Cube,
    /// Face that each slot started on.
    tags: Vec<Face>,
    /// Color state after the last twist.
    state: Vec<u8>,
    /// Slots whose color changes when twisting each face, indexed by face.
    changed: Vec<Vec<usize>>,
    identities: Vec<Option<StickerIdentity>>,
}

impl<'a> Discoverer<'a> {
    fn new(cube: &'a mut Cube) -> Result<Self, DiscoveryError> {
        let state = cube.color_id();
        let tags = state
            .iter()
            .map(|&c| Face::from_index(c).ok_or(DiscoveryError::CubeNotReset))
            .collect::<Result<Vec<_>, _>>()?;
        let identities = vec![None; state.len()];
        Ok(Self {
            cube,
            tags,
            state,
            changed: vec![],
            identities,
        })
    }

    fn run(mut self) -> Result<Vec<StickerIdentity>, DiscoveryError> {
        for face in Face::ALL {
            let changed = self.changed_due_to_face(face)?;
            self.changed.push(changed);
        }

        self.find_corners()?;
        self.find_edges()?;

        let identities = std::iter::zip(self.identities, self.tags)
            .map(|(id, tag)| id.unwrap_or(StickerIdentity::Center(tag)))
            .collect::<Vec<_>>();

        let count = |ty| identities.iter().filter(|id| id.piece_type() == ty).count();
        let (corners, edges, centers) = (
            count(PieceType::Corner),
            count(PieceType::Edge),
            count(PieceType::Center),
        );
        if (corners, edges, centers) != (24, 24, 6) {
            return Err(DiscoveryError::Incomplete {
                corners,
                edges,
                centers,
            });
        }
        Ok(identities)
    }

    /// Twists a face and returns the sorted list of slots whose color changed.
    fn rotate(&mut self, face: Face, turns: i32) -> Result<Vec<usize>, CubeError> {
        self.cube.rotate_face(face, turns, 0)?;
        let new_state = self.cube.color_id();
        let changed = std::iter::zip(&self.state, &new_state)
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(i, _)| i)
            .collect();
        self.state = new_state;
        Ok(changed)
    }

    /// Twists a face and back, and returns the slots changed by the first
    /// twist.
    fn changed_due_to_face(&mut self, face: Face) -> Result<Vec<usize>, CubeError> {
        let changed = self.rotate(face, 1)?;
        self.rotate(face, -1)?;
        Ok(changed)
    }

    fn changed_by(&self, face: Face) -> &[usize] {
        &self.changed[face.index() as usize]
    }

    fn assign(
        &mut self,
        candidates: Vec<usize>,
        identity: StickerIdentity,
        probed: SmallVec<[Face; 2]>,
    ) -> Result<(), DiscoveryError> {
        let &[slot] = candidates.as_slice() else {
            return Err(DiscoveryError::Ambiguous {
                piece: identity.piece_type(),
                face: identity.own_face(),
                probed,
                candidates,
            });
        };
        log::debug!("slot {slot} is {identity:?}");
        self.identities[slot] = Some(identity);
        Ok(())
    }

    fn find_corners(&mut self) -> Result<(), DiscoveryError> {
        for corner in 0..8 {
            let faces: [Face; 3] = std::array::from_fn(|d| corner_face(corner, d));
            for d in 0..3 {
                let own = faces[d];
                let [a, b] = [(d + 1) % 3, (d + 2) % 3].map(|e| faces[e]);
                let (a, b) = (a.min(b), a.max(b));
                let in_b = self.changed_by(b);
                let candidates = self
                    .changed_by(a)
                    .iter()
                    .copied()
                    .filter(|slot| in_b.binary_search(slot).is_ok())
                    .filter(|&slot| self.tags[slot] == own)
                    .collect();
                self.assign(candidates, StickerIdentity::Corner([own, a, b]), smallvec![a, b])?;
            }
        }
        Ok(())
    }

    fn find_edges(&mut self) -> Result<(), DiscoveryError> {
        for corner in 0..8_u8 {
            for d in 0..3 {
                let adjacent = corner ^ (1 << (2 - d));
                if corner >= adjacent {
                    continue;
                }
                let [e1, e2] = [(d + 1) % 3, (d + 2) % 3].map(|e| corner_face(corner, e));
                let (e1, e2) = (e1.min(e2), e1.max(e2));
                for (twisted, own) in [(e1, e2), (e2, e1)] {
                    let candidates = self
                        .changed_by(twisted)
                        .iter()
                        .copied()
                        .filter(|&slot| self.identities[slot].is_none() && self.tags[slot] == own)
                        .collect();
                    let identity = StickerIdentity::Edge([own, twisted]);
                    self.assign(candidates, identity, smallvec![twisted])?;
                }
            }
        }
        Ok(())
    }
}
