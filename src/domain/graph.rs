//! Directed graph of shortest paths
//!
//! Merges every path of a search result into one graph: a node per visited
//! square, an edge per knight move, labelled with the step number. Uses petgraph
//! for storage and Graphviz DOT export.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

use super::path::Path;
use super::square::Square;

/// Step number of a move along a path, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step(pub usize);

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The union of a set of paths as a directed graph
#[derive(Debug, Default)]
pub struct PathGraph {
    /// The underlying directed graph
    graph: DiGraph<Square, Step>,

    /// Map from square to node index
    node_map: HashMap<Square, NodeIndex>,
}

impl PathGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a collection of paths
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut graph = Self::new();
        for path in paths {
            graph.add_path(path);
        }
        graph
    }

    /// Adds the squares and moves of a path, skipping edges already present
    pub fn add_path(&mut self, path: &Path) {
        let squares = path.squares();
        let mut prev = self.node(squares[0]);

        for (i, &square) in squares.iter().enumerate().skip(1) {
            let next = self.node(square);
            self.graph.update_edge(prev, next, Step(i));
            prev = next;
        }
    }

    fn node(&mut self, square: Square) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&square) {
            return idx;
        }
        let idx = self.graph.add_node(square);
        self.node_map.insert(square, idx);
        idx
    }

    /// Returns true if the graph contains the square
    pub fn contains(&self, square: Square) -> bool {
        self.node_map.contains_key(&square)
    }

    /// Squares reachable in one step along some path
    pub fn successors(&self, square: Square) -> Vec<Square> {
        let Some(&idx) = self.node_map.get(&square) else {
            return vec![];
        };

        let mut next: Vec<Square> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n).copied())
            .collect();
        next.sort();
        next
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Renders the graph in Graphviz DOT format
    pub fn to_dot(&self) -> String {
        let body = Dot::with_config(&self.graph, &[Config::GraphContentOnly]);
        format!("digraph knight_paths {{\n{}}}\n", body)
    }
}
