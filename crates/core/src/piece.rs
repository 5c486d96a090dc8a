//! Piece templates and the seven-shape catalog
//!
//! A piece is a set of cell offsets relative to an anchor. The anchor is the
//! piece's position on the grid; rotation turns the offsets about it.

use arrayvec::ArrayVec;

use crate::types::Color;
use crate::vector::Vector;

/// Maximum number of cells in a piece
pub const MAX_CELLS: usize = 4;

/// Immutable piece template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: ArrayVec<Vector, MAX_CELLS>,
    color: Color,
    can_rotate: bool,
}

impl Piece {
    /// Build a piece from offsets (at most four)
    pub fn new(offsets: &[(i32, i32)], color: Color, can_rotate: bool) -> Self {
        debug_assert!(offsets.len() <= MAX_CELLS, "piece has too many cells");
        debug_assert!(color != Color::Empty, "piece color must not be empty");
        let cells = offsets.iter().take(MAX_CELLS).map(|&o| Vector::from(o)).collect();
        Self {
            cells,
            color,
            can_rotate,
        }
    }

    /// One-cell piece, used to test grid mechanics in isolation
    pub fn single(color: Color) -> Self {
        Self::new(&[(0, 0)], color, false)
    }

    pub fn cells(&self) -> &[Vector] {
        &self.cells
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn can_rotate(&self) -> bool {
        self.can_rotate
    }

    /// Offsets turned 90° about the anchor: (x, y) -> (y, -x)
    ///
    /// Returns a new piece; callers test it for collisions before using it.
    pub fn rotate(&self) -> Piece {
        Piece {
            cells: self.cells.iter().map(|v| Vector::new(v.y, -v.x)).collect(),
            color: self.color,
            can_rotate: self.can_rotate,
        }
    }

    /// Smallest `y` offset (never above zero)
    ///
    /// Spawning at `y = -min_y()` keeps the whole piece inside the top row.
    pub fn min_y(&self) -> i32 {
        self.cells.iter().map(|v| v.y).min().unwrap_or(0).min(0)
    }
}

/// The seven standard shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tetromino {
    O,
    I,
    L,
    J,
    T,
    Z,
    S,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::O,
        Tetromino::I,
        Tetromino::L,
        Tetromino::J,
        Tetromino::T,
        Tetromino::Z,
        Tetromino::S,
    ];

    pub fn piece(self) -> Piece {
        match self {
            // 2x2 block
            Tetromino::O => Piece::new(&[(0, 0), (1, 0), (0, 1), (1, 1)], Color::Yellow, false),
            // vertical bar, anchor second from top
            Tetromino::I => Piece::new(&[(0, 0), (0, -1), (0, 1), (0, 2)], Color::Cyan, true),
            Tetromino::L => Piece::new(&[(0, 0), (0, 1), (0, 2), (-1, 2)], Color::Orange, true),
            Tetromino::J => Piece::new(&[(0, 0), (0, 1), (0, 2), (1, 2)], Color::Blue, true),
            Tetromino::T => Piece::new(&[(0, 0), (-1, 0), (1, 0), (0, 1)], Color::Purple, true),
            Tetromino::Z => Piece::new(&[(0, 0), (-1, 0), (0, 1), (1, 1)], Color::Red, true),
            Tetromino::S => Piece::new(&[(0, 0), (1, 0), (0, 1), (-1, 1)], Color::Green, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_pieces_have_four_distinct_cells() {
        for kind in Tetromino::ALL {
            let piece = kind.piece();
            let unique: HashSet<_> = piece.cells().iter().collect();
            assert_eq!(unique.len(), 4, "{kind:?}");
        }
    }

    #[test]
    fn only_the_block_is_fixed() {
        for kind in Tetromino::ALL {
            assert_eq!(kind.piece().can_rotate(), kind != Tetromino::O, "{kind:?}");
        }
    }

    #[test]
    fn four_rotations_return_to_start() {
        for kind in Tetromino::ALL {
            let piece = kind.piece();
            let back = piece.rotate().rotate().rotate().rotate();
            assert_eq!(back, piece, "{kind:?}");
        }
    }

    #[test]
    fn rotate_maps_offsets() {
        let piece = Piece::new(&[(0, 0), (1, 0), (0, 2)], Color::Red, true);
        let rotated = piece.rotate();
        assert_eq!(
            rotated.cells(),
            &[Vector::new(0, 0), Vector::new(0, -1), Vector::new(2, 0)]
        );
        assert_eq!(rotated.color(), Color::Red);
    }

    #[test]
    fn min_y_accounts_for_cells_above_anchor() {
        assert_eq!(Tetromino::I.piece().min_y(), -1);
        assert_eq!(Tetromino::T.piece().min_y(), 0);
        assert_eq!(Piece::single(Color::Blue).min_y(), 0);
    }
}
