//! Core engine for 3x3 edge-matching tile puzzles.
//!
//! Nine square pieces, each with four signed edge values, go into a 3x3
//! grid with rotations allowed. An arrangement is a solution when every
//! pair of touching edges sums to zero. [`Solver`] enumerates all such
//! arrangements by exhaustive backtracking and keeps per-depth call
//! statistics; [`Generator`] produces random piece sets that are
//! guaranteed to have at least one.
//!
//! ```
//! use scramble_core::{Generator, Puzzle, Solver};
//!
//! let pieces = Generator::with_seed(7).generate();
//! let mut solver = Solver::new(Puzzle::new(pieces));
//! solver.solve();
//!
//! assert!(!solver.solutions().is_empty());
//! ```

pub mod generator;
pub mod piece;
pub mod puzzle;
pub mod solver;

pub use generator::{Generator, GeneratorConfig};
pub use piece::{Direction, Piece};
pub use puzzle::{Placement, Puzzle, Solution};
pub use solver::Solver;

/// Number of pieces in a set, and of slots in the grid
pub const PIECE_COUNT: usize = 9;

/// Number of edges on a piece
pub const EDGE_COUNT: usize = 4;

/// Number of distinct orientations of a piece
pub const ROTATION_COUNT: usize = 4;
