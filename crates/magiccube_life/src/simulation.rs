use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::NeighborGraph;

/// What happened during [`LifeSimulation::step()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The simulation advanced by one tick.
    Ticked,
    /// Every cell died, so the simulation restarted with a new population.
    Extinct,
    /// The tick limit was reached, so the simulation restarted with a new
    /// population.
    TimedOut,
}

/// Game of Life running on a [`NeighborGraph`].
///
/// A live cell survives with 2 or 3 live neighbors. A dead cell comes to life
/// with exactly 3 live neighbors. Each live cell tracks its age, which is 1 on
/// the tick it is born.
#[derive(Debug, Clone)]
pub struct LifeSimulation {
    graph: NeighborGraph,
    /// Age of each live cell.
    live: BTreeMap<usize, u32>,
    rng: ChaCha12Rng,
    /// Ticks since the last restart.
    ticks: u32,
    /// Ticks after which [`Self::step()`] restarts the simulation.
    max_ticks: u32,
    /// Number of restarts, including the initial population.
    generation: u32,
}

impl LifeSimulation {
    /// Constructs a simulation with a random initial population.
    pub fn new(graph: NeighborGraph, seed: u64, max_ticks: u32) -> Self {
        let mut ret = Self {
            graph,
            live: BTreeMap::new(),
            rng: ChaCha12Rng::seed_from_u64(seed),
            ticks: 0,
            max_ticks,
            generation: 0,
        };
        ret.reseed();
        ret
    }

    /// Replaces the population with a random one.
    ///
    /// The population size is chosen uniformly between 10% and 100% of the
    /// cells, and then that many distinct cells are chosen uniformly.
    pub fn reseed(&mut self) {
        let n = self.graph.node_count();
        let size = self.rng.random_range(n / 10..=n);
        let cells = rand::seq::index::sample(&mut self.rng, n, size).into_vec();
        self.set_population(cells);
        log::debug!("generation {}: seeded {size} of {n} cells", self.generation);
    }

    /// Replaces the population with the given live cells, each with age 1.
    ///
    /// Cells outside the graph are ignored.
    pub fn set_population(&mut self, cells: impl IntoIterator<Item = usize>) {
        let n = self.graph.node_count();
        self.live = cells.into_iter().filter(|&c| c < n).map(|c| (c, 1)).collect();
        self.ticks = 0;
        self.generation += 1;
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        let mut live_neighbors = vec![0_u8; self.graph.node_count()];
        for &cell in self.live.keys() {
            for &neighbor in self.graph.neighbors(cell) {
                live_neighbors[neighbor] = live_neighbors[neighbor].saturating_add(1);
            }
        }

        self.live = live_neighbors
            .iter()
            .enumerate()
            .filter_map(|(cell, &count)| match self.live.get(&cell) {
                Some(&age) if count == 2 || count == 3 => Some((cell, age + 1)),
                None if count == 3 => Some((cell, 1)),
                _ => None,
            })
            .collect();
        self.ticks += 1;
    }

    /// Advances the simulation by one tick, restarting it with a new random
    /// population if every cell died or the tick limit was reached.
    pub fn step(&mut self) -> StepOutcome {
        self.tick();
        let outcome = if self.live.is_empty() {
            StepOutcome::Extinct
        } else if self.ticks >= self.max_ticks {
            StepOutcome::TimedOut
        } else {
            return StepOutcome::Ticked;
        };
        log::debug!(
            "generation {} ended after {} ticks: {outcome:?}",
            self.generation,
            self.ticks,
        );
        self.reseed();
        outcome
    }

    /// Returns the graph the simulation runs on.
    pub fn graph(&self) -> &NeighborGraph {
        &self.graph
    }
    /// Returns the age of each live cell, ordered by cell.
    pub fn live(&self) -> &BTreeMap<usize, u32> {
        &self.live
    }
    /// Returns the age of each cell, or `None` for dead cells.
    pub fn cell_states(&self) -> Vec<Option<u32>> {
        (0..self.graph.node_count())
            .map(|cell| self.live.get(&cell).copied())
            .collect()
    }
    /// Returns the number of ticks since the last restart.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
    /// Returns the number of populations seeded so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
