//! Piece-file loading and validation.
//!
//! The solver assumes a well-formed set of nine four-edge pieces, so
//! everything about reading and vetting the text format lives here and
//! fails with a line-numbered diagnostic before a solver is constructed.

use scramble_core::{Piece, EDGE_COUNT, PIECE_COUNT};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Why a piece file was rejected
#[derive(Debug)]
pub enum InputError {
    /// The file could not be read at all
    Io(io::Error),
    /// A line did not hold exactly four values (1-based line number)
    EdgeCount { line: usize, found: usize },
    /// A token did not parse as a signed 16-bit integer
    BadToken { line: usize, token: String },
    /// Fewer than nine piece lines
    NotEnoughPieces { found: usize },
    /// More than nine piece lines
    TooManyPieces { found: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "cannot read puzzle file: {}", err),
            InputError::EdgeCount { line, found } => write!(
                f,
                "line {}: expected {} edge values, found {}",
                line, EDGE_COUNT, found
            ),
            InputError::BadToken { line, token } => {
                write!(f, "line {}: '{}' is not a valid edge value", line, token)
            }
            InputError::NotEnoughPieces { found } => write!(
                f,
                "not enough pieces: found {}, need {}",
                found, PIECE_COUNT
            ),
            InputError::TooManyPieces { found } => {
                write!(f, "too many pieces: found {}, need {}", found, PIECE_COUNT)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Read and validate a piece file
pub fn load_pieces(path: &Path) -> Result<[Piece; PIECE_COUNT], InputError> {
    let text = fs::read_to_string(path)?;
    parse_pieces(&text)
}

/// Parse nine lines of four whitespace-separated edge values each.
///
/// Every line is validated even when there are too many, so a malformed
/// line is always reported in preference to a bad line count.
pub fn parse_pieces(text: &str) -> Result<[Piece; PIECE_COUNT], InputError> {
    let mut pieces = [Piece::new([0; EDGE_COUNT]); PIECE_COUNT];
    let mut count = 0;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != EDGE_COUNT {
            return Err(InputError::EdgeCount {
                line: line_no,
                found: tokens.len(),
            });
        }

        let mut edges = [0i16; EDGE_COUNT];
        for (side, token) in tokens.iter().enumerate() {
            edges[side] = token.parse().map_err(|_| InputError::BadToken {
                line: line_no,
                token: token.to_string(),
            })?;
        }

        if count < PIECE_COUNT {
            pieces[count] = Piece::new(edges);
        }
        count += 1;
    }

    if count < PIECE_COUNT {
        return Err(InputError::NotEnoughPieces { found: count });
    }
    if count > PIECE_COUNT {
        return Err(InputError::TooManyPieces { found: count });
    }
    Ok(pieces)
}
