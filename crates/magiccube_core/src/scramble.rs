use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{Cube, CubeError, Face, Move};

/// Parameters to deterministically generate a sequence of moves to scramble a
/// cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Random seed. The same seed always produces the same scramble.
    pub seed: String,
    /// Number of moves to generate.
    pub length: u32,
    /// Whether to twist inner layers as well as outer ones.
    #[serde(default)]
    pub all_layers: bool,
}

impl ScrambleParams {
    /// Default number of moves in a scramble.
    pub const DEFAULT_LENGTH: u32 = 25;

    /// Constructs scramble parameters that only twist outer layers.
    pub fn new(seed: impl Into<String>, length: u32) -> Self {
        Self {
            seed: seed.into(),
            length,
            all_layers: false,
        }
    }

    /// Generates a new random seed using the current time and the OS RNG.
    pub fn random_seed() -> String {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        format!("{now}_{}", rand::rng().random::<u64>())
    }

    fn rng(&self) -> ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        ChaCha12Rng::from_seed(seed)
    }

    /// Generates the scramble moves for a cube of size `n`.
    ///
    /// Each move is a quarter, half, or counterclockwise turn of a uniformly
    /// random face. Only the outermost layer is twisted unless
    /// [`ScrambleParams::all_layers`] is set.
    pub fn generate(&self, n: usize) -> Vec<Move> {
        let mut rng = self.rng();
        (0..self.length)
            .map(|_| {
                let face = Face::ALL[rng.random_range(0..Face::COUNT)];
                let turns = rng.random_range(1..=3);
                let layer = if self.all_layers {
                    rng.random_range(0..n.max(1))
                } else {
                    0
                };
                Move::new(face, turns, layer)
            })
            .collect()
    }
}

impl Cube {
    /// Scrambles the cube and returns the moves applied.
    pub fn scramble(&mut self, params: &ScrambleParams) -> Result<Vec<Move>, CubeError> {
        let moves = params.generate(self.size());
        log::debug!("scrambling with seed {:?} ({} moves)", params.seed, moves.len());
        self.apply_moves(&moves)?;
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scramble_is_deterministic() {
        let params = ScrambleParams::new("hello", 30);
        let a = params.generate(3);
        assert_eq!(a.len(), 30);
        assert_eq!(a, params.generate(3));
        assert_ne!(a, ScrambleParams::new("hello!", 30).generate(3));
        assert!(a.iter().all(|mv| mv.layer == 0 && !mv.is_identity()));
    }

    #[test]
    fn test_scramble_all_layers() {
        let params = ScrambleParams {
            all_layers: true,
            ..ScrambleParams::new("layers", 200)
        };
        let moves = params.generate(4);
        assert!(moves.iter().all(|mv| mv.layer < 4));
        assert!(moves.iter().any(|mv| mv.layer > 0));
    }
}
