//! Hex board geometry with cube coordinates

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Board radius (number of rings around the center cell)
pub const BOARD_RADIUS: i8 = 2;

/// Total number of cells on the board
pub const CELL_COUNT: usize = 1 + 3 * (BOARD_RADIUS as usize) * (BOARD_RADIUS as usize + 1);

/// Cube hex coordinates with the invariant q + r + s = 0
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
    pub s: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8, s: i8) -> Self {
        Self { q, r, s }
    }

    /// Ring distance from the center (0,0,0)
    pub fn level(&self) -> i8 {
        self.q.abs().max(self.r.abs()).max(self.s.abs())
    }

    /// Check if this hex is a cell of the board
    pub fn is_valid(&self) -> bool {
        self.q + self.r + self.s == 0 && self.level() <= BOARD_RADIUS
    }

    const fn scaled(self, n: i8) -> Hex {
        Hex::new(self.q * n, self.r * n, self.s * n)
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.q + other.q, self.r + other.r, self.s + other.s)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, other: Hex) -> Hex {
        Hex::new(self.q - other.q, self.r - other.r, self.s - other.s)
    }
}

/// Direction vectors in cube coordinates
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(0, -1, 1),  // N
    Hex::new(1, -1, 0),  // NE
    Hex::new(1, 0, -1),  // SE
    Hex::new(0, 1, -1),  // S
    Hex::new(-1, 1, 0),  // SW
    Hex::new(-1, 0, 1),  // NW
];

/// The fixed board: a center cell plus two concentric rings, generated once
/// per game.
///
/// Cell order is significant. Each ring is listed in rotational order
/// starting north, and outer-ring index `i` sits radially in front of
/// inner-ring index `i / 2`. The win scans depend on both properties.
#[derive(Clone, Debug)]
pub struct Board {
    inner: Vec<Hex>,
    outer: Vec<Hex>,
    cells: Vec<Hex>,
}

impl Board {
    pub fn new() -> Self {
        let inner = ring(1);
        let outer = ring(2);

        let mut cells = Vec::with_capacity(CELL_COUNT);
        cells.push(Hex::new(0, 0, 0));
        cells.extend_from_slice(&inner);
        cells.extend_from_slice(&outer);

        Self { inner, outer, cells }
    }

    pub fn center(&self) -> Hex {
        Hex::new(0, 0, 0)
    }

    /// Level-1 ring (6 cells)
    pub fn inner(&self) -> &[Hex] {
        &self.inner
    }

    /// Level-2 ring (12 cells)
    pub fn outer(&self) -> &[Hex] {
        &self.outer
    }

    /// All cells: center first, then the inner ring, then the outer ring
    pub fn cells(&self) -> &[Hex] {
        &self.cells
    }

    /// Inner-ring cell radially in front of the outer-ring cell at `outer_index`
    pub fn spoke_inner(&self, outer_index: usize) -> Hex {
        self.inner[outer_index / 2]
    }

    pub fn contains(&self, cell: Hex) -> bool {
        cell.is_valid()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the ring at the given radius: for each spoke, the corner cell
/// followed by the edge steps toward the next corner
fn ring(radius: i8) -> Vec<Hex> {
    let mut cells = Vec::with_capacity(6 * radius as usize);

    for side in 0..6 {
        let corner = DIRECTIONS[side].scaled(radius);
        let edge = DIRECTIONS[(side + 2) % 6];

        for step in 0..radius {
            cells.push(corner + edge.scaled(step));
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_validity() {
        assert!(Hex::new(0, 0, 0).is_valid());
        assert!(Hex::new(2, -2, 0).is_valid());
        assert!(Hex::new(-1, 0, 1).is_valid());
        assert!(!Hex::new(3, -3, 0).is_valid()); // level 3, off the board
        assert!(!Hex::new(1, 1, 1).is_valid()); // q + r + s != 0
    }

    #[test]
    fn test_hex_level() {
        assert_eq!(Hex::new(0, 0, 0).level(), 0);
        assert_eq!(Hex::new(0, -1, 1).level(), 1);
        assert_eq!(Hex::new(1, -2, 1).level(), 2);
        assert_eq!(Hex::new(-2, 2, 0).level(), 2);
    }

    #[test]
    fn test_hex_arithmetic() {
        let a = Hex::new(1, -2, 1);
        let b = Hex::new(0, -1, 1);
        assert_eq!(a + b, Hex::new(1, -3, 2));
        assert_eq!(b - a, Hex::new(-1, 1, 0));
    }

    #[test]
    fn test_ring_sizes() {
        let board = Board::new();
        assert_eq!(board.inner().len(), 6);
        assert_eq!(board.outer().len(), 12);
        assert_eq!(board.cells().len(), CELL_COUNT);
        assert_eq!(CELL_COUNT, 19);
    }

    #[test]
    fn test_cube_invariant_and_levels() {
        let board = Board::new();
        for &cell in board.cells() {
            assert_eq!(cell.q + cell.r + cell.s, 0, "cube invariant broken at {:?}", cell);
        }
        assert_eq!(board.center().level(), 0);
        assert!(board.inner().iter().all(|c| c.level() == 1));
        assert!(board.outer().iter().all(|c| c.level() == 2));
    }

    #[test]
    fn test_inner_ring_order() {
        let board = Board::new();
        let expected = [
            Hex::new(0, -1, 1),
            Hex::new(1, -1, 0),
            Hex::new(1, 0, -1),
            Hex::new(0, 1, -1),
            Hex::new(-1, 1, 0),
            Hex::new(-1, 0, 1),
        ];
        assert_eq!(board.inner(), expected);
    }

    #[test]
    fn test_outer_ring_order() {
        let board = Board::new();
        let expected = [
            Hex::new(0, -2, 2),
            Hex::new(1, -2, 1),
            Hex::new(2, -2, 0),
            Hex::new(2, -1, -1),
            Hex::new(2, 0, -2),
            Hex::new(1, 1, -2),
            Hex::new(0, 2, -2),
            Hex::new(-1, 2, -1),
            Hex::new(-2, 2, 0),
            Hex::new(-2, 1, 1),
            Hex::new(-2, 0, 2),
            Hex::new(-1, -1, 2),
        ];
        assert_eq!(board.outer(), expected);
    }

    #[test]
    fn test_radial_pairing() {
        let board = Board::new();
        for (i, &outer) in board.outer().iter().enumerate() {
            let inner = board.spoke_inner(i);
            assert_eq!(inner.level(), 1);
            // both outer cells of a spoke are adjacent to their inner cell
            assert_eq!((outer - inner).level(), 1, "outer {} not in front of {:?}", i, inner);
        }
        // corners sit exactly on the doubled inner cell
        for k in 0..6 {
            assert_eq!(board.outer()[2 * k], board.inner()[k].scaled(2));
        }
    }
}
