use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn cube(n: usize) -> Cube {
    Cube::new(n).expect("valid cube size")
}

#[test]
fn test_solved_color_counts() {
    let cube = cube(3);
    let state = cube.color_id();
    assert_eq!(state.len(), 54);
    let mut counts = HashMap::<u8, usize>::new();
    for c in state {
        *counts.entry(c).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&count| count == 9));
}

#[test]
fn test_twist_and_untwist() {
    let mut cube = cube(3);
    let solved = cube.color_id();
    cube.rotate_face(Face::R, 1, 0).expect("valid twist");
    assert_ne!(cube.color_id(), solved);
    cube.rotate_face(Face::R, -1, 0).expect("valid twist");
    assert!(cube.history().is_empty());
    assert_eq!(cube.color_id(), solved);
    assert!(cube.is_reset());
}

#[test]
fn test_reverse_replay_of_scramble() {
    let mut cube = cube(3);
    let solved = cube.color_id();
    let moves = cube
        .scramble(&ScrambleParams::new("reverse replay", 15))
        .expect("valid scramble");
    assert_eq!(moves.len(), 15);
    assert!(!cube.history().is_empty());

    let history = cube.history().moves().to_vec();
    for mv in history.iter().rev() {
        cube.rotate_face(mv.face, -mv.turns, mv.layer)
            .expect("valid twist");
    }
    assert_eq!(cube.color_id(), solved);
    assert!(cube.history().is_empty());
}

#[test]
fn test_quarter_turn_moves_expected_slots() {
    // On a solved 3x3x3, twisting the R face changes the 12 side stickers in
    // that layer and leaves the R face itself alone.
    let mut cube = cube(3);
    let solved = cube.color_id();
    cube.rotate_face(Face::R, 1, 0).expect("valid twist");
    let changed = std::iter::zip(&solved, cube.color_state())
        .positions(|(a, b)| a != b)
        .collect::<Vec<_>>();
    assert_eq!(changed.len(), 12);
    for slot in changed {
        let p = cube.slot_positions()[slot];
        assert!(p.x() > 0.5 && p.x() < 0.99, "slot {slot} at {p}");
    }

    // The middle layer includes four centers.
    let cube = cube_with_moves(3, "2R");
    let changed = std::iter::zip(&solved, cube.color_state())
        .positions(|(a, b)| a != b)
        .collect::<Vec<_>>();
    assert_eq!(changed.len(), 12);
    for slot in changed {
        assert!(cube.slot_positions()[slot].x().abs() < 0.01);
    }
}

fn cube_with_moves(n: usize, moves: &str) -> Cube {
    let mut cube = cube(n);
    let moves = parse_moves(moves).expect("valid moves");
    cube.apply_moves(&moves).expect("valid moves");
    cube
}

#[test]
fn test_commutator_order() {
    // The sexy move (R U R' U') has order 6.
    let mut cube = cube(3);
    let solved = cube.color_id();
    let moves = parse_moves("R U R' U'").expect("valid moves");
    for i in 1..=6 {
        cube.apply_moves(&moves).expect("valid moves");
        assert_eq!(cube.color_id() == solved, i == 6);
    }
}

#[test]
fn test_undo_all() {
    let mut cube = cube_with_moves(4, "R U2 2F' 3L D' B2 R 2U");
    assert!(!cube.is_reset());
    cube.undo_all().expect("valid undo");
    assert!(cube.history().is_empty());
    assert!(cube.is_reset());
}

#[test]
fn test_large_cube_layers() {
    // Layers stay separate on big cubes.
    let mut cube = cube(12);
    for layer in 0..12 {
        cube.rotate_face(Face::F, 1, layer).expect("valid twist");
    }
    // Twisting every layer is a whole-cube rotation: each face stays
    // uniform.
    let state = cube.color_state();
    for face in Face::ALL {
        let axis = face.axis_vector();
        let colors: HashSet<u8> = cube
            .slot_positions()
            .iter()
            .zip(state)
            .filter(|(p, _)| (p.dot(axis) - 1.0).abs() < 1e-6)
            .map(|(_, &c)| c)
            .collect();
        assert_eq!(colors.len(), 1, "face {face}");
    }
}

fn arb_move(n: usize) -> impl Strategy<Value = Move> {
    (0..Face::COUNT, -3..=3_i32, 0..n).prop_map(|(f, turns, layer)| Move {
        face: Face::ALL[f],
        turns,
        layer,
    })
}

fn arb_moves() -> impl Strategy<Value = (usize, Vec<Move>)> {
    (1..=5_usize).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_move(n), 0..30)))
}

proptest! {
    #[test]
    fn proptest_color_state_is_valid((n, moves) in arb_moves()) {
        let mut cube = cube(n);
        cube.apply_moves(&moves).expect("valid moves");
        let state = cube.color_id();
        prop_assert_eq!(state.len(), 6 * n * n);
        prop_assert!(state.iter().all(|&c| (c as usize) < Face::COUNT));

        // Each color still appears `n * n` times.
        for face in Face::ALL {
            prop_assert_eq!(state.iter().filter(|&&c| c == face.index()).count(), n * n);
        }
    }

    #[test]
    fn proptest_quarter_turn_has_order_4(
        (n, moves) in arb_moves(),
        face_index in 0..Face::COUNT,
        turns in -3..=3_i32,
        layer_seed in 0..100_usize,
    ) {
        let mut cube = cube(n);
        cube.apply_moves(&moves).expect("valid moves");
        let before = cube.color_id();
        let face = Face::ALL[face_index];
        let layer = layer_seed % n;
        for _ in 0..4 {
            cube.rotate_face(face, turns, layer).expect("valid twist");
        }
        prop_assert_eq!(cube.color_id(), before);
    }

    #[test]
    fn proptest_reverse_replay_restores_state((n, moves) in arb_moves()) {
        let mut cube = cube(n);
        let solved = cube.color_id();
        cube.apply_moves(&moves).expect("valid moves");
        cube.apply_moves(&cube.history().inverse()).expect("valid moves");
        prop_assert!(cube.history().is_empty());
        prop_assert_eq!(cube.color_id(), solved);
    }
}

#[test]
fn test_discover_sticker_identities() {
    let mut cube = cube(3);
    let called = std::rc::Rc::new(std::cell::Cell::new(false));
    let called2 = std::rc::Rc::clone(&called);
    cube.set_on_change(move |_| called2.set(true));

    let identities = discover_sticker_identities(&mut cube).expect("discovery succeeds");
    assert_eq!(identities.len(), 54);

    // The cube is untouched, and still has its callback.
    assert!(cube.is_reset());
    assert!(!called.get());
    cube.rotate_face(Face::U, 1, 0).expect("valid twist");
    assert!(called.get());

    let count = |ty| identities.iter().filter(|id| id.piece_type() == ty).count();
    assert_eq!(count(PieceType::Corner), 24);
    assert_eq!(count(PieceType::Edge), 24);
    assert_eq!(count(PieceType::Center), 6);

    // Every tuple is distinct.
    let distinct: HashSet<&StickerIdentity> = identities.iter().collect();
    assert_eq!(distinct.len(), 54);

    // Pieces: 8 corners, 12 edges, 6 centers.
    let pieces: HashSet<Vec<Face>> = identities
        .iter()
        .map(|id| id.faces().into_iter().sorted().collect())
        .collect();
    assert_eq!(pieces.iter().filter(|p| p.len() == 3).count(), 8);
    assert_eq!(pieces.iter().filter(|p| p.len() == 2).count(), 12);
    assert_eq!(pieces.iter().filter(|p| p.len() == 1).count(), 6);

    // Every identity matches the geometry of its slot.
    for (slot, id) in identities.iter().enumerate() {
        let p = cube.slot_positions()[slot];
        assert!((p.dot(id.own_face().axis_vector()) - 1.0).abs() < 1e-6);
        for face in id.faces() {
            assert!(p.dot(face.axis_vector()) > 0.5, "slot {slot} is not on {face}");
        }
    }
}

#[test]
fn test_discover_preconditions() {
    let mut cube2 = cube(2);
    assert_eq!(
        discover_sticker_identities(&mut cube2),
        Err(DiscoveryError::UnsupportedDimension(2)),
    );

    let mut scrambled = cube_with_moves(3, "R U");
    assert_eq!(
        discover_sticker_identities(&mut scrambled),
        Err(DiscoveryError::CubeNotReset),
    );
}
