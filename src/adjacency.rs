use std::collections::BTreeSet;

use petgraph::graphmap::UnGraphMap;
use tracing::debug;

use crate::grid::Grid;
use crate::location::Location;
use crate::shape::{KingStep, Step};

/// All coordinates of `grid`, in row-major order. Holes are excluded.
pub fn coordinates(grid: &Grid) -> BTreeSet<Location> {
    grid.tiles().map(|(location, _)| location).collect()
}

/// King-move neighbor relation over a fixed set of coordinates.
///
/// Backed by an undirected graph, so the relation is symmetric, and it never holds self-loops.
#[derive(Clone, Debug)]
pub struct AdjacencyMap {
    graph: UnGraphMap<Location, ()>,
}

impl AdjacencyMap {
    /// Neighbors of `location`, in row-major order. Empty if `location` is not one of the coordinates.
    pub fn neighbors(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        self.graph.neighbors(location)
    }

    /// Whether `a` and `b` are neighbors.
    pub fn are_adjacent(&self, a: Location, b: Location) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Whether `location` is one of the coordinates this map was built over.
    pub fn contains(&self, location: Location) -> bool {
        self.graph.contains_node(location)
    }

    /// The coordinates this map was built over, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.graph.nodes()
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether the map was built over no coordinates.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

/// Build the 8-neighborhood of every coordinate in `coords`, intersected with `coords`.
pub fn adjacency(coords: &BTreeSet<Location>) -> AdjacencyMap {
    let mut graph = UnGraphMap::with_capacity(
        coords.len(),
        // naively allocate for an interior cell's four forward edges
        coords.len() * KingStep::FORWARD_VARIANTS.len(),
    );

    for location in coords {
        graph.add_node(*location);
    }

    // every backward neighbor of a cell sorts before it and was linked while that neighbor was visited,
    // so each neighbor list is filled in row-major order
    for location in coords {
        for step in KingStep::FORWARD_VARIANTS {
            let neighbor = step.attempt_from(*location);
            if coords.contains(&neighbor) {
                graph.add_edge(*location, neighbor, ());
            }
        }
    }

    debug!(cells = graph.node_count(), edges = graph.edge_count(), "built adjacency");
    AdjacencyMap { graph }
}
