//! Domain models for knight path search
//!
//! Contains the board geometry and the search engine without any I/O concerns.

mod square;
mod board;
mod path;
mod search;
mod graph;

pub use square::{file_letters, format_square, parse_square, Square, SquareError};
pub use board::{is_knight_move, legal_moves, Board, BoardError, KNIGHT_OFFSETS, STANDARD_SIZE};
pub use path::{Path, ShortestPaths};
pub use search::{
    count_paths, expand, find_all_shortest_paths, reconstruct, DistanceMap, Expansion, PathFinder,
    PredecessorMap, SearchError, SearchOptions,
};
pub use graph::{PathGraph, Step};
