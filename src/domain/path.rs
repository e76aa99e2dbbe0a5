//! Knight paths and search results

use serde::Serialize;
use std::fmt;

use super::board::{is_knight_move, Board};
use super::square::Square;

/// An ordered sequence of squares from start to end
///
/// A path of `n` moves holds `n + 1` squares. Paths are only built by the
/// search and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    pub(crate) fn new(squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        Self { squares }
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of knight moves in the path
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    pub fn start(&self) -> Square {
        self.squares[0]
    }

    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// Returns true if every square is on the board, consecutive squares are a
    /// knight move apart, and no square repeats
    pub fn is_valid_on(&self, board: &Board) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.squares.iter().all(|&s| board.contains(s) && seen.insert(s))
            && self
                .squares
                .windows(2)
                .all(|pair| is_knight_move(pair[0], pair[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

/// Every minimal path between two squares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: Square,
    pub end: Square,

    /// Minimal number of knight moves
    pub distance: u32,

    /// All minimal paths, sorted by square sequence
    pub paths: Vec<Path>,
}

impl ShortestPaths {
    pub fn count(&self) -> usize {
        self.paths.len()
    }

    /// Step index of each square visited by any path
    ///
    /// A square's step is its distance from the start, so it is the same on
    /// every path that visits it.
    pub fn steps(&self) -> std::collections::BTreeMap<Square, usize> {
        self.paths
            .iter()
            .flat_map(|path| path.squares().iter().enumerate().map(|(i, &s)| (s, i)))
            .collect()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Path {
        let board = Board::standard();
        Path::new(ids.iter().map(|id| board.parse_square(id).unwrap()).collect())
    }

    #[test]
    fn displays_arrow_joined() {
        assert_eq!(path(&["a1", "b3", "c5"]).to_string(), "a1 -> b3 -> c5");
        assert_eq!(path(&["e4"]).to_string(), "e4");
    }

    #[test]
    fn counts_moves() {
        let p = path(&["a1", "b3", "c5"]);
        assert_eq!(p.moves(), 2);
        assert_eq!(p.start().to_string(), "a1");
        assert_eq!(p.end().to_string(), "c5");
    }

    #[test]
    fn validates_knight_steps() {
        let board = Board::standard();
        assert!(path(&["a1", "b3", "c5"]).is_valid_on(&board));
        assert!(!path(&["a1", "a2"]).is_valid_on(&board));
        assert!(!path(&["a1", "b3", "a1"]).is_valid_on(&board));
        assert!(!path(&["a1", "b3"]).is_valid_on(&Board::new(2, 2).unwrap()));
    }

    #[test]
    fn serializes_as_identifier_list() {
        let json = serde_json::to_value(path(&["a1", "b3"])).unwrap();
        assert_eq!(json, serde_json::json!(["a1", "b3"]));
    }

    #[test]
    fn steps_merge_paths() {
        let result = ShortestPaths {
            start: path(&["d4"]).start(),
            end: path(&["e5"]).start(),
            distance: 2,
            paths: vec![path(&["d4", "c6", "e5"]), path(&["d4", "f3", "e5"])],
        };

        let steps: Vec<_> = result
            .steps()
            .into_iter()
            .map(|(s, i)| (s.to_string(), i))
            .collect();
        assert_eq!(
            steps,
            vec![
                ("c6".to_string(), 1),
                ("d4".to_string(), 0),
                ("e5".to_string(), 2),
                ("f3".to_string(), 1),
            ]
        );
    }
}
