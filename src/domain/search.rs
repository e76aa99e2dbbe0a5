//! Shortest knight path enumeration
//!
//! A search runs in two phases:
//!
//! 1. **Expansion**: breadth-first, one layer at a time, from the start square.
//!    Every square gets its minimal distance in a [`DistanceMap`] the first time
//!    it is reached, and every square of the previous layer that reaches it is
//!    recorded in the [`PredecessorMap`]. A whole layer is processed before the
//!    end square is checked, so tied predecessors are never missed.
//! 2. **Reconstruction**: an explicit-stack walk of the predecessor map from the
//!    end square back to the start, yielding one [`Path`] per branch.
//!
//! The number of minimal paths grows combinatorially with distance, so callers
//! can cap it with [`SearchOptions::max_paths`]. The cap is checked against an
//! exact count before anything is enumerated.

use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

use super::board::{Board, BoardError};
use super::path::{Path, ShortestPaths};
use super::square::{Square, SquareError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    #[error(transparent)]
    InvalidBoard(#[from] BoardError),

    #[error("No path found from {start} to {end} on a {width}x{height} board")]
    NoPathFound {
        start: Square,
        end: Square,
        width: u32,
        height: u32,
    },

    #[error("Found {count} shortest paths, more than the limit of {limit}")]
    TooManyPaths { count: u64, limit: usize },
}

/// Minimal move count from the start square to every square reached so far
///
/// A distance is final once assigned.
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: HashMap<Square, u32>,
}

impl DistanceMap {
    pub fn get(&self, square: Square) -> Option<u32> {
        self.distances.get(&square).copied()
    }

    pub fn contains(&self, square: Square) -> bool {
        self.distances.contains_key(&square)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Assigns a distance if the square has none yet; returns whether it was new
    fn assign(&mut self, square: Square, distance: u32) -> bool {
        if self.distances.contains_key(&square) {
            return false;
        }
        self.distances.insert(square, distance);
        true
    }

    /// Squares sorted by increasing distance
    fn by_distance(&self) -> Vec<(Square, u32)> {
        let mut entries: Vec<_> = self.distances.iter().map(|(&s, &d)| (s, d)).collect();
        entries.sort_by_key(|&(s, d)| (d, s));
        entries
    }
}

/// For each square, the squares one layer closer to the start that jump to it
#[derive(Debug, Clone, Default)]
pub struct PredecessorMap {
    predecessors: HashMap<Square, BTreeSet<Square>>,
}

impl PredecessorMap {
    /// Predecessors of `square` in (file, rank) order
    pub fn get(&self, square: Square) -> impl Iterator<Item = Square> + '_ {
        self.predecessors
            .get(&square)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    fn add(&mut self, square: Square, predecessor: Square) {
        self.predecessors.entry(square).or_default().insert(predecessor);
    }
}

/// Outcome of the expansion phase
#[derive(Debug, Clone)]
pub enum Expansion {
    /// The end square was reached at `distance`
    Reached {
        distance: u32,
        distances: DistanceMap,
        predecessors: PredecessorMap,
    },

    /// The frontier emptied before reaching the end square
    Unreachable { explored: usize },
}

/// Expands breadth-first layers from `start` until the layer containing `end` is complete
pub fn expand(board: &Board, start: Square, end: Square) -> Expansion {
    let mut distances = DistanceMap::default();
    let mut predecessors = PredecessorMap::default();
    distances.assign(start, 0);

    if start == end {
        return Expansion::Reached {
            distance: 0,
            distances,
            predecessors,
        };
    }

    let mut frontier = vec![start];
    let mut depth = 0;

    while !frontier.is_empty() {
        let next_depth = depth + 1;
        let mut next = Vec::new();

        for &current in &frontier {
            for dest in board.legal_moves(current) {
                if distances.assign(dest, next_depth) {
                    next.push(dest);
                }
                if distances.get(dest) == Some(next_depth) {
                    predecessors.add(dest, current);
                }
            }
        }

        if distances.contains(end) {
            return Expansion::Reached {
                distance: next_depth,
                distances,
                predecessors,
            };
        }

        frontier = next;
        depth = next_depth;
    }

    Expansion::Unreachable {
        explored: distances.len(),
    }
}

/// Counts minimal paths from `start` to `end` without enumerating them
///
/// Saturates at `u64::MAX`.
pub fn count_paths(
    distances: &DistanceMap,
    predecessors: &PredecessorMap,
    start: Square,
    end: Square,
) -> u64 {
    let mut counts: HashMap<Square, u64> = HashMap::new();
    counts.insert(start, 1);

    let Some(end_distance) = distances.get(end) else {
        return 0;
    };

    for (square, distance) in distances.by_distance() {
        if distance == 0 || distance > end_distance {
            continue;
        }
        let total = predecessors
            .get(square)
            .map(|p| counts.get(&p).copied().unwrap_or(0))
            .fold(0u64, u64::saturating_add);
        counts.insert(square, total);
    }

    counts.get(&end).copied().unwrap_or(0)
}

/// Walks the predecessor map back from `end` and returns every minimal path,
/// sorted by square sequence
pub fn reconstruct(predecessors: &PredecessorMap, start: Square, end: Square) -> Vec<Path> {
    let mut paths = Vec::new();
    // Squares from `end` back to the square currently being visited.
    let mut trail: Vec<Square> = Vec::new();
    let mut stack: Vec<(Square, usize)> = vec![(end, 0)];

    while let Some((square, depth)) = stack.pop() {
        trail.truncate(depth);
        trail.push(square);

        if square == start {
            paths.push(Path::new(trail.iter().rev().copied().collect()));
            continue;
        }

        // Reverse so the smallest predecessor is visited first.
        let preds: Vec<Square> = predecessors.get(square).collect();
        for &pred in preds.iter().rev() {
            stack.push((pred, depth + 1));
        }
    }

    paths.sort();
    paths
}

/// Search configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fail with [`SearchError::TooManyPaths`] instead of enumerating more paths than this
    pub max_paths: Option<usize>,
}

/// Finds shortest knight paths on a fixed board
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    board: Board,
    options: SearchOptions,
}

impl PathFinder {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.options.max_paths = Some(max_paths);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Resolves two identifiers and finds every minimal path between them
    pub fn find_between(&self, start: &str, end: &str) -> Result<ShortestPaths, SearchError> {
        let start = self.board.parse_square(start)?;
        let end = self.board.parse_square(end)?;
        self.find(start, end)
    }

    /// Finds every minimal path from `start` to `end`
    pub fn find(&self, start: Square, end: Square) -> Result<ShortestPaths, SearchError> {
        let (distance, distances, predecessors) = self.expand_checked(start, end)?;

        if let Some(limit) = self.options.max_paths {
            let count = count_paths(&distances, &predecessors, start, end);
            if count > limit as u64 {
                return Err(SearchError::TooManyPaths { count, limit });
            }
        }

        Ok(ShortestPaths {
            start,
            end,
            distance,
            paths: reconstruct(&predecessors, start, end),
        })
    }

    /// Minimal number of knight moves from `start` to `end`
    pub fn distance(&self, start: Square, end: Square) -> Result<u32, SearchError> {
        self.expand_checked(start, end).map(|(distance, _, _)| distance)
    }

    /// Number of distinct minimal paths from `start` to `end`, ignoring `max_paths`
    pub fn count(&self, start: Square, end: Square) -> Result<u64, SearchError> {
        let (_, distances, predecessors) = self.expand_checked(start, end)?;
        Ok(count_paths(&distances, &predecessors, start, end))
    }

    fn expand_checked(
        &self,
        start: Square,
        end: Square,
    ) -> Result<(u32, DistanceMap, PredecessorMap), SearchError> {
        for square in [start, end] {
            if !self.board.contains(square) {
                return Err(SquareError::OutOfBounds {
                    identifier: square.to_string(),
                    width: self.board.width(),
                    height: self.board.height(),
                }
                .into());
            }
        }

        match expand(&self.board, start, end) {
            Expansion::Reached {
                distance,
                distances,
                predecessors,
            } => Ok((distance, distances, predecessors)),
            Expansion::Unreachable { .. } => Err(SearchError::NoPathFound {
                start,
                end,
                width: self.board.width(),
                height: self.board.height(),
            }),
        }
    }
}

/// Finds every shortest knight path between two squares given in algebraic notation
pub fn find_all_shortest_paths(
    width: u32,
    height: u32,
    start: &str,
    end: &str,
) -> Result<Vec<Path>, SearchError> {
    let board = Board::new(width, height)?;
    PathFinder::new(board)
        .find_between(start, end)
        .map(ShortestPaths::into_paths)
}
