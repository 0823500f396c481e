//! Conway's Game of Life on an arbitrary undirected graph, with a graph built
//! from the sticker slots of a cube.

mod graph;
mod simulation;

pub use graph::{GraphError, NeighborGraph};
pub use simulation::{LifeSimulation, StepOutcome};

/// Default number of ticks before a simulation restarts.
pub const DEFAULT_MAX_TICKS: u32 = 100;
