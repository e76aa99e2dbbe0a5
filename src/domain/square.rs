//! Board squares and algebraic notation
//!
//! Notation:
//! - File: a letter sequence in bijective base-26 (`a`..`z`, then `aa`, `ab`, ...)
//! - Rank: a 1-based decimal number without leading zeros
//!
//! Examples: `a1` is `(0, 0)`, `h8` is `(7, 7)`, `aa3` is `(26, 2)`.
//!
//! Parsing is case-insensitive and trims surrounding whitespace. Formatting always
//! produces the lowercase canonical form, so `format` followed by `parse` round-trips.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("Invalid square '{0}': expected algebraic notation like 'a1' or 'h8'")]
    Malformed(String),

    #[error("Invalid square '{identifier}': outside the {width}x{height} board")]
    OutOfBounds {
        identifier: String,
        width: u32,
        height: u32,
    },
}

impl SquareError {
    /// Returns the identifier that failed to resolve
    pub fn identifier(&self) -> &str {
        match self {
            SquareError::Malformed(identifier) => identifier,
            SquareError::OutOfBounds { identifier, .. } => identifier,
        }
    }
}

/// A square on the board, as zero-based `(file, rank)` coordinates
///
/// Ordering compares the file first, then the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Square {
    file: u32,
    rank: u32,
}

impl Square {
    pub const fn new(file: u32, rank: u32) -> Self {
        Self { file, rank }
    }

    /// Zero-based file (column) index
    pub fn file(&self) -> u32 {
        self.file
    }

    /// Zero-based rank (row) index
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Parses an identifier and checks it against the board dimensions
    pub fn parse(identifier: &str, width: u32, height: u32) -> Result<Self, SquareError> {
        parse_square(identifier, width, height)
    }

    /// Returns the square shifted by `(df, dr)` if it stays inside a `width`x`height` board
    pub fn offset(&self, df: i32, dr: i32, width: u32, height: u32) -> Option<Square> {
        let file = i64::from(self.file) + i64::from(df);
        let rank = i64::from(self.rank) + i64::from(dr);

        if (0..i64::from(width)).contains(&file) && (0..i64::from(height)).contains(&rank) {
            Some(Square::new(file as u32, rank as u32))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_letters(self.file), u64::from(self.rank) + 1)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

/// Parses an algebraic identifier into a square on a `width`x`height` board
pub fn parse_square(identifier: &str, width: u32, height: u32) -> Result<Square, SquareError> {
    let trimmed = identifier.trim();
    let malformed = || SquareError::Malformed(identifier.to_string());

    let split = trimmed
        .find(|c: char| !c.is_ascii_alphabetic())
        .ok_or_else(malformed)?;
    let (letters, digits) = trimmed.split_at(split);

    if letters.is_empty() || digits.is_empty() {
        return Err(malformed());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
        return Err(malformed());
    }

    // Values too large for u32 cannot be on any board, so they are out of bounds.
    let out_of_bounds = || SquareError::OutOfBounds {
        identifier: identifier.to_string(),
        width,
        height,
    };
    let file = file_index(letters).ok_or_else(out_of_bounds)?;
    let rank = digits
        .parse::<u32>()
        .map_err(|_| out_of_bounds())?
        - 1;

    if file >= width || rank >= height {
        return Err(out_of_bounds());
    }

    Ok(Square::new(file, rank))
}

/// Formats a square in algebraic notation
pub fn format_square(square: Square) -> String {
    square.to_string()
}

/// Converts a zero-based file index to its letter sequence
pub fn file_letters(file: u32) -> String {
    let mut n = u64::from(file) + 1;
    let mut letters = Vec::new();

    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }

    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Converts a letter sequence to a zero-based file index, `None` on overflow
fn file_index(letters: &str) -> Option<u32> {
    let mut n: u32 = 0;
    for b in letters.bytes() {
        let digit = u32::from(b.to_ascii_lowercase() - b'a') + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_standard_corners() {
        assert_eq!(parse_square("a1", 8, 8).unwrap(), Square::new(0, 0));
        assert_eq!(parse_square("h8", 8, 8).unwrap(), Square::new(7, 7));
        assert_eq!(parse_square("h1", 8, 8).unwrap(), Square::new(7, 0));
        assert_eq!(parse_square("a8", 8, 8).unwrap(), Square::new(0, 7));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(parse_square(" E4 ", 8, 8).unwrap(), Square::new(4, 3));
    }

    #[test]
    fn multi_letter_files() {
        assert_eq!(file_letters(0), "a");
        assert_eq!(file_letters(25), "z");
        assert_eq!(file_letters(26), "aa");
        assert_eq!(file_letters(27), "ab");
        assert_eq!(file_letters(51), "az");
        assert_eq!(file_letters(52), "ba");

        assert_eq!(parse_square("aa1", 30, 1).unwrap(), Square::new(26, 0));
        assert_eq!(parse_square("ba12", 60, 12).unwrap(), Square::new(52, 11));
    }

    #[test]
    fn formats_algebraic() {
        assert_eq!(format_square(Square::new(0, 0)), "a1");
        assert_eq!(format_square(Square::new(1, 2)), "b3");
        assert_eq!(Square::new(26, 99).to_string(), "aa100");
    }

    #[test]
    fn rejects_out_of_bounds() {
        let err = parse_square("z9", 8, 8).unwrap_err();
        assert_eq!(
            err,
            SquareError::OutOfBounds {
                identifier: "z9".to_string(),
                width: 8,
                height: 8,
            }
        );
        assert_eq!(err.identifier(), "z9");

        assert!(parse_square("i1", 8, 8).is_err());
        assert!(parse_square("a9", 8, 8).is_err());
        assert!(parse_square("a99999999999", 8, 8).is_err());
        assert!(parse_square("zzzzzzzzzzzz1", 8, 8).is_err());
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "a", "1", "1a", "a0", "a01", "a1b", "a-1", "é1", "a 1"] {
            assert!(
                matches!(parse_square(bad, 8, 8), Err(SquareError::Malformed(_))),
                "expected '{}' to be malformed",
                bad
            );
        }
    }

    #[test]
    fn offset_stays_in_bounds() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(1, 2, 8, 8), Some(Square::new(1, 2)));
        assert_eq!(corner.offset(-1, 2, 8, 8), None);
        assert_eq!(Square::new(7, 7).offset(1, 0, 8, 8), None);
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&Square::new(7, 7)).unwrap();
        assert_eq!(json, "\"h8\"");
    }

    proptest! {
        #[test]
        fn format_then_parse_round_trips(
            width in 1u32..2000,
            height in 1u32..2000,
            file_seed in any::<u32>(),
            rank_seed in any::<u32>(),
        ) {
            let square = Square::new(file_seed % width, rank_seed % height);
            let parsed = parse_square(&format_square(square), width, height).unwrap();
            prop_assert_eq!(parsed, square);
        }
    }
}
