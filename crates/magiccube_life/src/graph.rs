use magiccube_core::Cube;
use smallvec::SmallVec;

/// Slack added to neighbor distance comparisons.
const DISTANCE_EPSILON: f64 = 1e-6;

/// Error constructing a [`NeighborGraph`].
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge ({a}, {b}) refers to a node outside 0..{node_count}")]
    NodeOutOfRange { a: usize, b: usize, node_count: usize },
}

/// Undirected graph with nodes numbered `0..node_count`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NeighborGraph {
    /// Sorted neighbors of each node.
    adjacency: Vec<SmallVec<[usize; 8]>>,
}

impl NeighborGraph {
    /// Constructs a graph from a list of edges.
    ///
    /// Self-loops and duplicate edges are ignored.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut adjacency = vec![SmallVec::<[usize; 8]>::new(); node_count];
        for (a, b) in edges {
            if a >= node_count || b >= node_count {
                return Err(GraphError::NodeOutOfRange { a, b, node_count });
            }
            if a != b {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(Self { adjacency })
    }

    /// Constructs the graph of sticker slots on the surface of a cube.
    ///
    /// Two slots are neighbors if their cubie faces touch, including along a
    /// diagonal or across an edge of the cube. On a 3x3x3 cube, every corner
    /// sticker has 7 neighbors and every other sticker has 8.
    ///
    /// This compares every pair of slots, so it takes quadratic time in the
    /// number of stickers.
    pub fn from_cube(cube: &Cube) -> Self {
        let positions = cube.slot_positions();
        let max_distance = std::f64::consts::SQRT_2 * cube.cubie_width() + DISTANCE_EPSILON;
        let mut adjacency = vec![SmallVec::new(); positions.len()];
        for (i, &p) in positions.iter().enumerate() {
            for (j, &q) in positions.iter().enumerate().skip(i + 1) {
                if p.distance(q) < max_distance {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }
        let graph = Self { adjacency };
        log::debug!(
            "built neighbor graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count(),
        );
        graph
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }
    /// Returns the sorted neighbors of a node, or an empty list if the node
    /// does not exist.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(|n| n.as_slice()).unwrap_or_default()
    }
    /// Returns the number of neighbors of a node.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
    /// Returns an iterator over every edge `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, neighbors)| {
            neighbors.iter().filter(move |&&b| a < b).map(move |&b| (a, b))
        })
    }
}

#[cfg(test)]
mod tests {
    use magiccube_core::{Cube, StickerIdentity, discover_sticker_identities};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_edges() {
        let g = NeighborGraph::from_edges(4, [(0, 1), (1, 0), (1, 2), (3, 3)]).expect("valid");
        assert_eq!(g.neighbors(1), [0, 2]);
        assert_eq!(g.degree(3), 0);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges().collect::<Vec<_>>(), [(0, 1), (1, 2)]);
        assert_eq!(g.neighbors(10), [] as [usize; 0]);

        assert_eq!(
            NeighborGraph::from_edges(2, [(0, 2)]),
            Err(GraphError::NodeOutOfRange {
                a: 0,
                b: 2,
                node_count: 2,
            }),
        );
    }

    #[test]
    fn test_cube_graph_degrees() {
        let mut cube = Cube::new(3).expect("valid cube");
        let g = NeighborGraph::from_cube(&cube);
        assert_eq!(g.node_count(), 54);
        assert_eq!(g.edge_count(), (24 * 7 + 24 * 8 + 6 * 8) / 2);

        let identities = discover_sticker_identities(&mut cube).expect("discovery succeeds");
        for (slot, id) in identities.iter().enumerate() {
            let expected = match id {
                StickerIdentity::Corner(_) => 7,
                StickerIdentity::Edge(_) | StickerIdentity::Center(_) => 8,
            };
            assert_eq!(g.degree(slot), expected, "slot {slot} is {id:?}");
        }
    }

    #[test]
    fn test_cube_graph_other_sizes() {
        for n in [1, 2, 4] {
            let g = NeighborGraph::from_cube(&Cube::new(n).expect("valid cube"));
            assert_eq!(g.node_count(), 6 * n * n);
            for (a, b) in g.edges() {
                assert!(g.neighbors(b).contains(&a));
            }
        }
    }
}
