use serde::{Deserialize, Serialize};

use crate::piece::{Direction, Piece};
use crate::PIECE_COUNT;

/// A piece assigned to a grid slot: which piece, and how it is turned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the piece in the puzzle's piece array
    pub piece: usize,
    /// Clockwise quarter-turns applied to the piece
    pub rotation: u8,
}

/// A complete arrangement, one placement per slot.
///
/// Grid slots are numbered center-first, then clockwise around the ring
/// starting east of the center:
///
/// ```text
/// 6 7 8
/// 5 0 1
/// 4 3 2
/// ```
pub type Solution = [Placement; PIECE_COUNT];

/// Neighbor checks for one slot when slots are filled in numeric order
struct SlotChecks {
    /// Side of the candidate that touches the previously filled slot
    side: Direction,
    /// Second already-filled neighbor for slots that close a ring:
    /// slot index and the side of the candidate touching it
    closes: Option<(usize, Direction)>,
}

/// Which sides of a candidate touch already-placed pieces, per slot.
///
/// Slot `k` always touches slot `k - 1` on `side`. Slots 3, 5 and 7 also
/// touch the center, and slot 8 touches slot 1, closing the ring. The
/// entry for slot 0 is never consulted; the center has no placed
/// neighbors. Together these cover all twelve internal edges of the grid.
const SLOT_CHECKS: [SlotChecks; PIECE_COUNT] = [
    SlotChecks {
        side: Direction::Right,
        closes: None,
    },
    SlotChecks {
        side: Direction::Left,
        closes: None,
    },
    SlotChecks {
        side: Direction::Top,
        closes: None,
    },
    SlotChecks {
        side: Direction::Right,
        closes: Some((0, Direction::Top)),
    },
    SlotChecks {
        side: Direction::Right,
        closes: None,
    },
    SlotChecks {
        side: Direction::Bottom,
        closes: Some((0, Direction::Right)),
    },
    SlotChecks {
        side: Direction::Bottom,
        closes: None,
    },
    SlotChecks {
        side: Direction::Left,
        closes: Some((0, Direction::Bottom)),
    },
    SlotChecks {
        side: Direction::Left,
        closes: Some((1, Direction::Bottom)),
    },
];

/// The nine source pieces plus the arrangement built so far.
///
/// The solver clones a `Puzzle` for every placement it tries, so sibling
/// search branches never observe each other's tentative placements.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pieces: [Piece; PIECE_COUNT],
    placements: [Placement; PIECE_COUNT],
}

impl Puzzle {
    /// Create a puzzle over the given pieces with nothing placed yet
    pub fn new(pieces: [Piece; PIECE_COUNT]) -> Self {
        Self {
            pieces,
            placements: [Placement::default(); PIECE_COUNT],
        }
    }

    /// The source pieces
    pub fn pieces(&self) -> &[Piece; PIECE_COUNT] {
        &self.pieces
    }

    /// Whether piece `piece` turned by `rotation` is edge-compatible with
    /// the already-placed neighbors of `slot`.
    ///
    /// Slots are filled in numeric order, so slot 0 has nothing to check
    /// against and accepts any piece. Callers must have filled slots
    /// `0..slot` already.
    pub fn fits(&self, slot: usize, piece: usize, rotation: u8) -> bool {
        if slot == 0 {
            return true;
        }
        let candidate = &self.pieces[piece];
        let checks = &SLOT_CHECKS[slot];

        let previous = self.placements[slot - 1];
        if !candidate.mates_with(
            rotation,
            checks.side,
            &self.pieces[previous.piece],
            previous.rotation,
            checks.side.opposite(),
        ) {
            return false;
        }

        match checks.closes {
            Some((other_slot, side)) => {
                let other = self.placements[other_slot];
                candidate.mates_with(
                    rotation,
                    side,
                    &self.pieces[other.piece],
                    other.rotation,
                    side.opposite(),
                )
            }
            None => true,
        }
    }

    /// Record `placement` in `slot`
    pub fn place(&mut self, slot: usize, placement: Placement) {
        self.placements[slot] = placement;
    }

    /// The placement array; a solution once all nine slots are filled
    pub fn placements(&self) -> Solution {
        self.placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces_with(front: &[Piece]) -> [Piece; PIECE_COUNT] {
        let mut pieces = [Piece::new([0; 4]); PIECE_COUNT];
        pieces[..front.len()].copy_from_slice(front);
        pieces
    }

    #[test]
    fn test_center_accepts_anything() {
        let puzzle = Puzzle::new(pieces_with(&[Piece::new([7, -3, 2, 9])]));
        for rotation in 0..4 {
            assert!(puzzle.fits(0, 0, rotation));
        }
    }

    #[test]
    fn test_east_slot_checks_left_edge() {
        // Slot 1 sits east of the center, so its left edge must cancel the
        // center's right edge.
        let pieces = pieces_with(&[
            Piece::new([10, 1, 20, 2]),
            Piece::new([3, 4, 5, -1]),
            Piece::new([3, 4, 5, 1]),
        ]);
        let mut puzzle = Puzzle::new(pieces);
        puzzle.place(0, Placement::default());

        assert!(puzzle.fits(1, 1, 0));
        assert!(!puzzle.fits(1, 2, 0));
    }

    #[test]
    fn test_rotation_changes_fit() {
        let pieces = pieces_with(&[
            Piece::new([10, 1, 20, 2]),
            Piece::new([-1, 0, 0, 0]),
        ]);
        let mut puzzle = Puzzle::new(pieces);
        puzzle.place(0, Placement::default());

        // Three turns bring the stored top edge around to the left side.
        assert!(puzzle.fits(1, 1, 3));
        assert!(!puzzle.fits(1, 1, 0));
        assert!(!puzzle.fits(1, 1, 1));
        assert!(!puzzle.fits(1, 1, 2));
    }

    #[test]
    fn test_ring_closure_checks_center() {
        // Slot 3 touches both slot 2 and the center. The first candidate
        // matches slot 2 but not the center's bottom edge.
        let pieces = pieces_with(&[
            Piece::new([10, 1, 20, 2]),
            Piece::new([3, 4, 5, -1]),
            Piece::new([-5, 6, 7, 8]),
            Piece::new([99, -8, 11, 12]),
            Piece::new([-20, -8, 11, 12]),
        ]);
        let mut puzzle = Puzzle::new(pieces);
        puzzle.place(0, Placement::default());
        puzzle.place(1, Placement { piece: 1, rotation: 0 });
        puzzle.place(2, Placement { piece: 2, rotation: 0 });

        assert!(!puzzle.fits(3, 3, 0));
        assert!(puzzle.fits(3, 4, 0));
    }

    #[test]
    fn test_place_records_placement() {
        let mut puzzle = Puzzle::new(pieces_with(&[]));
        puzzle.place(5, Placement { piece: 2, rotation: 3 });

        let placements = puzzle.placements();
        assert_eq!(placements[5], Placement { piece: 2, rotation: 3 });
        assert_eq!(placements[0], Placement::default());
    }

    #[test]
    fn test_placement_serializes_with_named_fields() {
        let placement = Placement { piece: 3, rotation: 2 };
        let json = serde_json::to_value(&placement).unwrap();
        assert_eq!(json, serde_json::json!({"piece": 3, "rotation": 2}));
    }
}
