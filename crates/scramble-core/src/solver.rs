use crate::puzzle::{Placement, Puzzle, Solution};
use crate::{PIECE_COUNT, ROTATION_COUNT};

/// Exhaustive backtracking solver.
///
/// Fills slots in numeric order (center first, then clockwise around the
/// ring), trying every unused piece in every orientation and pruning as
/// soon as an edge fails to mate. The search keeps going after a hit, so
/// the result is every consistent arrangement, not just the first one.
/// The center piece is only tried unrotated; turning it would spin the
/// whole board, so each arrangement found stands in for its four board
/// rotations.
pub struct Solver {
    puzzle: Puzzle,
    solutions: Vec<Solution>,
    calls_at_depth: [u64; PIECE_COUNT + 1],
}

impl Solver {
    /// Create a solver for the given puzzle
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            solutions: Vec::new(),
            calls_at_depth: [0; PIECE_COUNT + 1],
        }
    }

    /// Run the full search, replacing the results of any earlier run
    pub fn solve(&mut self) {
        self.solutions.clear();
        self.calls_at_depth = [0; PIECE_COUNT + 1];

        let available: Vec<usize> = (0..PIECE_COUNT).collect();
        self.search(0, self.puzzle.clone(), &available);
    }

    fn search(&mut self, depth: usize, current: Puzzle, available: &[usize]) {
        self.calls_at_depth[depth] += 1;

        if depth == PIECE_COUNT {
            self.solutions.push(current.placements());
            return;
        }

        for (index, &piece) in available.iter().enumerate() {
            for rotation in 0..ROTATION_COUNT as u8 {
                if current.fits(depth, piece, rotation) {
                    let mut next = current.clone();
                    next.place(depth, Placement { piece, rotation });

                    let mut remaining = available.to_vec();
                    remaining.remove(index);
                    self.search(depth + 1, next, &remaining);
                }
                if depth == 0 {
                    // One center orientation stands in for all four
                    break;
                }
            }
        }
    }

    /// Every arrangement found by the last [`solve`](Self::solve) run, in
    /// discovery order
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// How many times the search entered each depth; index `k` counts the
    /// calls that had `k` slots already filled, so the last entry counts
    /// completed arrangements
    pub fn tries_at_level(&self) -> [u64; PIECE_COUNT + 1] {
        self.calls_at_depth
    }

    /// Total number of search calls across all depths
    pub fn total_tries(&self) -> u64 {
        self.calls_at_depth.iter().sum()
    }
}
