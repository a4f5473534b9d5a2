use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{EDGE_COUNT, ROTATION_COUNT};

/// One side of a grid cell or piece, in the unrotated frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// The side facing this one on a touching neighbor
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

/// A square puzzle piece: four signed edge values in clockwise order
/// (top, right, bottom, left) before any rotation.
///
/// Two edges mate when their values sum to zero, so pieces are authored
/// with additive inverses on the sides meant to touch (`3` mates with
/// `-3`, and `0` mates with `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Piece {
    edges: [i16; EDGE_COUNT],
}

impl Piece {
    /// Create a piece from its edge values in top, right, bottom, left order
    pub fn new(edges: [i16; EDGE_COUNT]) -> Self {
        Self { edges }
    }

    /// The raw edge values in the unrotated frame
    pub fn edges(&self) -> [i16; EDGE_COUNT] {
        self.edges
    }

    /// Edge value showing on `side` after `rotation` clockwise quarter-turns.
    ///
    /// A clockwise turn carries the stored top edge to the right side, so
    /// the value showing on `side` is the one stored at `side - rotation`
    /// (mod 4). Rotations of 4 or more wrap around.
    pub fn edge(&self, side: Direction, rotation: u8) -> i16 {
        let turns = rotation as usize % ROTATION_COUNT;
        self.edges[(side as usize + EDGE_COUNT - turns) % EDGE_COUNT]
    }

    /// The same piece re-expressed after `quarter_turns` clockwise turns
    pub fn rotated(&self, quarter_turns: u8) -> Piece {
        let turns = quarter_turns as usize % ROTATION_COUNT;
        let mut edges = [0; EDGE_COUNT];
        for (side, value) in edges.iter_mut().enumerate() {
            *value = self.edges[(side + EDGE_COUNT - turns) % EDGE_COUNT];
        }
        Piece { edges }
    }

    /// Whether this piece's `side` under `rotation` mates with `other`'s
    /// `other_side` under `other_rotation`: true when the two facing edge
    /// values sum to zero
    pub fn mates_with(
        &self,
        rotation: u8,
        side: Direction,
        other: &Piece,
        other_rotation: u8,
        other_side: Direction,
    ) -> bool {
        let facing = i32::from(self.edge(side, rotation));
        let opposing = i32::from(other.edge(other_side, other_rotation));
        facing + opposing == 0
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.edges[0], self.edges[1], self.edges[2], self.edges[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_unrotated() {
        let piece = Piece::new([1, 2, 3, 4]);
        assert_eq!(piece.edge(Direction::Top, 0), 1);
        assert_eq!(piece.edge(Direction::Right, 0), 2);
        assert_eq!(piece.edge(Direction::Bottom, 0), 3);
        assert_eq!(piece.edge(Direction::Left, 0), 4);
    }

    #[test]
    fn test_edge_one_clockwise_turn() {
        // One turn carries the stored top edge to the right side
        let piece = Piece::new([1, 2, 3, 4]);
        assert_eq!(piece.edge(Direction::Right, 1), 1);
        assert_eq!(piece.edge(Direction::Bottom, 1), 2);
        assert_eq!(piece.edge(Direction::Left, 1), 3);
        assert_eq!(piece.edge(Direction::Top, 1), 4);
    }

    #[test]
    fn test_edge_rotation_wraps() {
        let piece = Piece::new([5, 6, 7, 8]);
        for side in [
            Direction::Top,
            Direction::Right,
            Direction::Bottom,
            Direction::Left,
        ] {
            assert_eq!(piece.edge(side, 4), piece.edge(side, 0));
            assert_eq!(piece.edge(side, 7), piece.edge(side, 3));
        }
    }

    #[test]
    fn test_rotated_matches_edge_lookup() {
        let piece = Piece::new([9, -2, 4, 0]);
        for rotation in 0..4u8 {
            let turned = piece.rotated(rotation);
            assert_eq!(turned.edges()[0], piece.edge(Direction::Top, rotation));
            assert_eq!(turned.edges()[1], piece.edge(Direction::Right, rotation));
            assert_eq!(turned.edges()[2], piece.edge(Direction::Bottom, rotation));
            assert_eq!(turned.edges()[3], piece.edge(Direction::Left, rotation));
        }
    }

    #[test]
    fn test_mates_with_inverse_values() {
        let a = Piece::new([3, 0, 0, 0]);
        let b = Piece::new([0, 0, -3, 0]);
        assert!(a.mates_with(0, Direction::Top, &b, 0, Direction::Bottom));
        assert!(!a.mates_with(0, Direction::Top, &b, 1, Direction::Bottom));
    }

    #[test]
    fn test_equal_nonzero_values_do_not_mate() {
        let a = Piece::new([3, 0, 0, 0]);
        let b = Piece::new([0, 0, 3, 0]);
        assert!(!a.mates_with(0, Direction::Top, &b, 0, Direction::Bottom));
    }

    #[test]
    fn test_zero_mates_with_zero() {
        let a = Piece::new([0, 1, 2, 3]);
        let b = Piece::new([1, 2, 0, 3]);
        assert!(a.mates_with(0, Direction::Top, &b, 0, Direction::Bottom));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let a = Piece::new([i16::MAX, 0, 0, 0]);
        let b = Piece::new([0, 0, i16::MAX, 0]);
        assert!(!a.mates_with(0, Direction::Top, &b, 0, Direction::Bottom));
    }

    #[test]
    fn test_opposite_sides() {
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::Bottom.opposite(), Direction::Top);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_display_format() {
        let piece = Piece::new([1, -2, 3, -4]);
        assert_eq!(piece.to_string(), "1 -2 3 -4");
    }

    #[test]
    fn test_serializes_as_flat_array() {
        let piece = Piece::new([1, -2, 3, -4]);
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, "[1,-2,3,-4]");
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(back, piece);
    }
}
