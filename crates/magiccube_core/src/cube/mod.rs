//! Cube state and the layer twisting engine.

mod geometry;

use std::collections::HashMap;
use std::fmt;

use cubemath::prelude::*;
use itertools::Itertools;

pub use geometry::Sticker;

use crate::{CubeError, DEFAULT_FACE_COLORS, DEFAULT_PLASTIC_COLOR, Face, Move, MoveHistory, Rgb};

/// Largest margin around a layer when selecting stickers to twist.
const LAYER_MARGIN: Float = 0.1;

/// Callback invoked with the color of each slot after every twist.
pub type OnChange = Box<dyn FnMut(&[u8])>;

/// N×N×N twisty cube.
///
/// Stickers live in an arena in canonical order, and the arena is never
/// reordered. Twisting a layer rotates the geometry of its stickers in place
/// and then resolves the slot each one landed in by its new position. The
/// color of each slot is kept up to date incrementally, so
/// [`Cube::color_id()`] does not need to look at every sticker.
pub struct Cube {
    n: usize,
    plastic_color: Rgb,
    face_colors: Vec<Rgb>,

    /// Stickers, indexed by sticker ID.
    stickers: Vec<Sticker>,
    /// Face centroid of each slot at construction.
    slot_positions: Vec<Vector3>,
    /// Slot at each position key.
    slot_of_position: HashMap<[i32; 3], usize>,
    /// Current slot of each sticker.
    sticker_slots: Vec<usize>,
    /// Current color at each slot.
    slot_colors: Vec<u8>,
    /// Color at each slot at construction.
    initial_colors: Vec<u8>,

    history: MoveHistory,
    on_change: Option<OnChange>,
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cube")
            .field("n", &self.n)
            .field("plastic_color", &self.plastic_color)
            .field("face_colors", &self.face_colors)
            .field("slot_colors", &self.slot_colors)
            .field("history", &self.history)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Cube {
    /// Largest supported cube size.
    ///
    /// Memory grows with `6 * n * n` stickers of about 400 bytes each, so a
    /// cube at this size takes a few tens of megabytes.
    pub const MAX_SIZE: usize = 100;

    /// Constructs a solved cube of size `n` with the default colors.
    pub fn new(n: usize) -> Result<Self, CubeError> {
        Self::with_colors(n, DEFAULT_PLASTIC_COLOR, DEFAULT_FACE_COLORS.to_vec())
    }

    /// Constructs a solved cube of size `n`.
    ///
    /// `face_colors` must have at least one color per face. Stickers on face
    /// `f` get color index `f.index()`; extra colors are kept for renderers.
    pub fn with_colors(
        n: usize,
        plastic_color: Rgb,
        face_colors: Vec<Rgb>,
    ) -> Result<Self, CubeError> {
        if n == 0 {
            return Err(CubeError::ZeroSize);
        }
        if n > Self::MAX_SIZE {
            return Err(CubeError::SizeTooLarge(n));
        }
        if face_colors.len() < Face::COUNT {
            return Err(CubeError::NotEnoughColors(face_colors.len()));
        }

        let stickers = geometry::solved_stickers(n);
        let slot_positions = stickers.iter().map(|s| s.face_centroid).collect_vec();
        let mut slot_of_position = HashMap::with_capacity(stickers.len());
        for (slot, &p) in slot_positions.iter().enumerate() {
            let key = geometry::position_key(n, p).ok_or(CubeError::SizeTooLarge(n))?;
            slot_of_position.insert(key, slot);
        }
        let slot_colors = stickers.iter().map(|s| s.color).collect_vec();

        log::debug!("constructed {n}x{n}x{n} cube with {} stickers", stickers.len());

        Ok(Self {
            n,
            plastic_color,
            face_colors,

            sticker_slots: (0..stickers.len()).collect(),
            initial_colors: slot_colors.clone(),
            slot_colors,
            slot_of_position,
            slot_positions,
            stickers,

            history: MoveHistory::new(),
            on_change: None,
        })
    }

    /// Returns the size of the cube along each axis.
    pub fn size(&self) -> usize {
        self.n
    }
    /// Returns the number of stickers, which is `6 * n * n`.
    pub fn sticker_count(&self) -> usize {
        self.stickers.len()
    }
    /// Returns the width of one cubie, in a cube spanning `-1..=1`.
    pub fn cubie_width(&self) -> Float {
        2.0 / self.n as Float
    }
    /// Returns the color of the plastic.
    pub fn plastic_color(&self) -> Rgb {
        self.plastic_color
    }
    /// Returns the palette indexed by color ID.
    pub fn face_colors(&self) -> &[Rgb] {
        &self.face_colors
    }

    /// Returns the color of each slot.
    ///
    /// Slot `i` is the position that sticker `i` occupied when the cube was
    /// constructed, so this is stable between twists.
    pub fn color_id(&self) -> Vec<u8> {
        self.slot_colors.clone()
    }
    /// Returns the color of each slot without copying.
    pub fn color_state(&self) -> &[u8] {
        &self.slot_colors
    }
    /// Returns the center of the cubie face at each slot.
    pub fn slot_positions(&self) -> &[Vector3] {
        &self.slot_positions
    }
    /// Returns the stickers, indexed by sticker ID.
    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }
    /// Returns the slot currently occupied by a sticker.
    pub fn sticker_slot(&self, sticker: usize) -> Option<usize> {
        self.sticker_slots.get(sticker).copied()
    }
    /// Returns the compacted history of twists since construction.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    /// Returns whether every slot has the color it had at construction, even
    /// if the history is not empty.
    pub fn is_solved(&self) -> bool {
        self.slot_colors == self.initial_colors
    }
    /// Returns whether every slot has the color it had at construction and
    /// there are no twists in the history.
    pub fn is_reset(&self) -> bool {
        self.history.is_empty() && self.is_solved()
    }

    /// Sets the callback to run after each twist.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&[u8]) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }
    /// Removes the callback to run after each twist.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }
    /// Removes and returns the callback to run after each twist.
    pub fn take_on_change(&mut self) -> Option<OnChange> {
        self.on_change.take()
    }
    /// Restores a callback previously returned by [`Cube::take_on_change()`].
    pub fn restore_on_change(&mut self, on_change: Option<OnChange>) {
        self.on_change = on_change;
    }

    /// Twists one layer of the cube by `turns` quarter turns around the
    /// outward normal of `face`.
    ///
    /// Nothing is modified if this returns an error. Twisting by a multiple of
    /// four quarter turns does nothing and is not recorded.
    pub fn rotate_face(&mut self, face: Face, turns: i32, layer: usize) -> Result<(), CubeError> {
        if layer >= self.n {
            return Err(CubeError::LayerOutOfRange {
                layer,
                size: self.n,
            });
        }
        let mv = Move::new(face, turns, layer);
        if mv.is_identity() {
            return Ok(());
        }

        let m = face.twist_rotation(mv.turns).to_matrix();

        // Resolve every destination before touching anything.
        let destinations: Vec<(usize, usize)> = self
            .layer_stickers(face, layer)
            .into_iter()
            .map(|id| {
                let new_position = &m * self.stickers[id].face_centroid;
                let key = geometry::position_key(self.n, new_position);
                match key.and_then(|k| self.slot_of_position.get(&k)) {
                    Some(&slot) => Ok((id, slot)),
                    None => Err(CubeError::PositionNotFound {
                        face,
                        position: key.unwrap_or_default(),
                    }),
                }
            })
            .collect::<Result<_, _>>()?;

        log::trace!("twisting {mv} moves {} stickers", destinations.len());
        self.history.push(mv);

        for &(id, slot) in &destinations {
            let sticker = &mut self.stickers[id];
            sticker.transform(&m);
            // Snap to the exact slot position so that error does not build
            // up over many twists.
            sticker.face_centroid = self.slot_positions[slot];
            self.sticker_slots[id] = slot;
            self.slot_colors[slot] = sticker.color;
        }

        if let Some(on_change) = &mut self.on_change {
            on_change(&self.slot_colors);
        }
        Ok(())
    }

    /// Applies a single move.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), CubeError> {
        self.rotate_face(mv.face, mv.turns, mv.layer)
    }
    /// Applies a sequence of moves, stopping at the first error.
    pub fn apply_moves<'a>(
        &mut self,
        moves: impl IntoIterator<Item = &'a Move>,
    ) -> Result<(), CubeError> {
        moves.into_iter().try_for_each(|&mv| self.apply_move(mv))
    }
    /// Undoes every twist in the history, leaving it empty.
    pub fn undo_all(&mut self) -> Result<(), CubeError> {
        for mv in self.history.inverse() {
            self.apply_move(mv)?;
        }
        Ok(())
    }

    /// Returns the IDs of the stickers in a layer.
    ///
    /// A sticker is in layer `layer` of `face` if the projection of its face
    /// centroid onto the face normal lies in the band of width `cubie_width`
    /// starting `layer` cubies in from the face, widened by a small margin.
    /// The margin is at most a quarter cubie so that the bands of adjacent
    /// layers never overlap.
    fn layer_stickers(&self, face: Face, layer: usize) -> Vec<usize> {
        let axis = face.axis_vector();
        let w = self.cubie_width();
        let margin = LAYER_MARGIN.min(w / 4.0);
        let lo = 1.0 - margin - (layer + 1) as Float * w;
        let hi = 1.0 + margin - layer as Float * w;
        self.stickers
            .iter()
            .positions(|s| {
                let proj = s.face_centroid.dot(axis);
                lo < proj && proj < hi
            })
            .collect()
    }
}
