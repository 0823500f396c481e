use crate::Face;

/// Twist of one layer of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face whose normal is the twist axis.
    pub face: Face,
    /// Number of quarter turns, following the right-hand rule around the
    /// outward normal of `face`.
    pub turns: i32,
    /// Layer, counted from `face` starting at 0.
    pub layer: usize,
}

impl Move {
    /// Constructs a move with normalized turns.
    pub fn new(face: Face, turns: i32, layer: usize) -> Self {
        Self {
            face,
            turns: normalize_turns(turns),
            layer,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, -self.turns, self.layer)
    }

    /// Returns whether the move has no effect.
    pub fn is_identity(self) -> bool {
        normalize_turns(self.turns) == 0
    }
}

/// Reduces a number of quarter turns to the equivalent value of least
/// magnitude: one of `-1`, `0`, `1`, or `2`.
pub fn normalize_turns(turns: i32) -> i32 {
    match turns.rem_euclid(4) {
        3 => -1,
        t => t,
    }
}

/// Sequence of moves applied to a cube, with consecutive moves on the same
/// face and layer merged together.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    /// Constructs an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a move.
    ///
    /// If the last move was on the same face and layer then the two are
    /// merged, and if they cancel out then the last move is removed.
    pub fn push(&mut self, mv: Move) {
        let mv = Move::new(mv.face, mv.turns, mv.layer);
        match self.moves.last_mut() {
            Some(last) if last.face == mv.face && last.layer == mv.layer => {
                let total = normalize_turns(last.turns + mv.turns);
                if total == 0 {
                    self.moves.pop();
                } else {
                    last.turns = total;
                }
            }
            _ if mv.is_identity() => (),
            _ => self.moves.push(mv),
        }
    }

    /// Returns the recorded moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    /// Returns the most recent move.
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }
    /// Returns the number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether no moves are recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Forgets all recorded moves.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Returns the sequence of moves that undoes the whole history: the
    /// recorded moves in reverse order, each inverted.
    pub fn inverse(&self) -> Vec<Move> {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }
}
