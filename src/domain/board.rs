//! Board geometry and knight move generation

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::square::{parse_square, Square, SquareError};

/// Width and height of a standard chessboard
pub const STANDARD_SIZE: u32 = 8;

/// The eight knight jumps as `(file delta, rank delta)`
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },
}

/// A rectangular board of `width` files and `height` ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    width: u32,
    height: u32,
}

impl Board {
    /// Creates a board, rejecting zero-sized dimensions
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// The standard 8x8 chessboard
    pub const fn standard() -> Self {
        Self {
            width: STANDARD_SIZE,
            height: STANDARD_SIZE,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of squares
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns true if the square lies on this board
    pub fn contains(&self, square: Square) -> bool {
        square.file() < self.width && square.rank() < self.height
    }

    /// Parses an algebraic identifier against this board's bounds
    pub fn parse_square(&self, identifier: &str) -> Result<Square, SquareError> {
        parse_square(identifier, self.width, self.height)
    }

    /// Knight destinations from `square` that stay on the board, sorted by (file, rank)
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_moves(square, self.width, self.height)
    }

    /// Iterates every square, rank by rank from the first rank
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.height).flat_map(move |rank| (0..self.width).map(move |file| Square::new(file, rank)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Knight destinations from `square` on a `width`x`height` board, sorted by (file, rank)
pub fn legal_moves(square: Square, width: u32, height: u32) -> Vec<Square> {
    let mut moves: Vec<Square> = KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(df, dr)| square.offset(df, dr, width, height))
        .collect();
    moves.sort();
    moves
}

/// Returns true if `from` and `to` are one knight jump apart
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let df = from.file().abs_diff(to.file());
    let dr = from.rank().abs_diff(to.rank());
    (df == 1 && dr == 2) || (df == 2 && dr == 1)
}
