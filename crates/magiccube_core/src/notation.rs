//! Move notation such as `R`, `U'`, `F2`, and `2R'`.
//!
//! The optional numeric prefix is the layer counted from 1. A suffix of `'`
//! means a counterclockwise quarter turn and `2` means a half turn.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::{Face, Move, ParseMoveError};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layer > 0 {
            write!(f, "{}", self.layer + 1)?;
        }
        write!(f, "{}", self.face.letter())?;
        match crate::history::normalize_turns(self.turns) {
            -1 => write!(f, "'"),
            2 => write!(f, "2"),
            _ => Ok(()),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        let face_pos = token
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| ParseMoveError::MissingFace(token.to_owned()))?;
        let (prefix, rest) = token.split_at(face_pos);

        let layer = match prefix {
            "" => 0,
            _ => match prefix.parse::<usize>() {
                Ok(n @ 1..) => n - 1,
                _ => return Err(ParseMoveError::BadLayer(token.to_owned())),
            },
        };

        let mut chars = rest.chars();
        let face_char = chars
            .next()
            .ok_or_else(|| ParseMoveError::MissingFace(token.to_owned()))?;
        let face = Face::from_letter(face_char).ok_or(ParseMoveError::UnknownFace(face_char))?;

        let turns = match chars.as_str() {
            "" => 1,
            "'" => -1,
            "2" | "2'" => 2,
            suffix => {
                return Err(ParseMoveError::BadSuffix {
                    token: token.to_owned(),
                    suffix: suffix.to_owned(),
                });
            }
        };

        Ok(Move::new(face, turns, layer))
    }
}

/// Parses a whitespace-separated sequence of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!("R".parse(), Ok(Move::new(Face::R, 1, 0)));
        assert_eq!("U'".parse(), Ok(Move::new(Face::U, -1, 0)));
        assert_eq!("F2".parse(), Ok(Move::new(Face::F, 2, 0)));
        assert_eq!("B2'".parse(), Ok(Move::new(Face::B, 2, 0)));
        assert_eq!("2R'".parse(), Ok(Move::new(Face::R, -1, 1)));
        assert_eq!("1D".parse(), Ok(Move::new(Face::D, 1, 0)));
    }

    #[test]
    fn test_parse_move_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!(
            "12".parse::<Move>(),
            Err(ParseMoveError::MissingFace("12".to_owned())),
        );
        assert_eq!("X".parse::<Move>(), Err(ParseMoveError::UnknownFace('X')));
        assert_eq!(
            "0R".parse::<Move>(),
            Err(ParseMoveError::BadLayer("0R".to_owned())),
        );
        assert_eq!(
            "R3".parse::<Move>(),
            Err(ParseMoveError::BadSuffix {
                token: "R3".to_owned(),
                suffix: "3".to_owned(),
            }),
        );
    }

    #[test]
    fn test_notation_roundtrip() {
        for s in ["R", "U'", "F2", "2R'", "3L2", "D"] {
            let mv: Move = s.parse().expect("valid move");
            assert_eq!(mv.to_string(), s);
        }
        let moves = parse_moves("R U R' U'  2F2\n").expect("valid moves");
        assert_eq!(moves.len(), 5);
        assert_eq!(format_moves(&moves), "R U R' U' 2F2");
        assert!(parse_moves("R Q").is_err());
    }
}
