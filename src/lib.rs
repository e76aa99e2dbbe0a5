//! knight-paths - Shortest knight path enumeration
//!
//! Finds the minimal number of knight moves between two squares on a board of
//! any size, and every distinct move sequence that achieves it.
//!
//! ```
//! let paths = knight_paths::find_all_shortest_paths(8, 8, "a1", "h8").unwrap();
//! assert_eq!(paths.len(), 108);
//! assert!(paths.iter().all(|p| p.moves() == 6));
//! ```

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{
    find_all_shortest_paths, Board, Path, PathFinder, SearchError, SearchOptions, ShortestPaths,
    Square, SquareError,
};
