//! Game module - the grid engine
//!
//! A `Game` owns the static grid, the falling piece and its anchor, the score
//! and the game-over flag. It is a two-state machine:
//!
//! - **Active**: the piece falls and input is accepted
//! - **GameOver**: terminal; every operation is a no-op
//!
//! Every transform is all-or-nothing: it is committed only if each resulting
//! cell is in bounds and empty on the static grid, otherwise it is dropped
//! without an error. While the game is active the falling piece always
//! occupies valid cells.

use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring::line_clear_score;
use crate::types::{Action, Grid};
use crate::vector::Vector;

/// Outcome of a downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved down one row
    Moved,
    /// The piece locked; `rows` rows were cleared
    Locked { rows: usize },
    /// Nothing happened (game already over)
    Ignored,
}

/// Grid engine state
#[derive(Debug, Clone)]
pub struct Game {
    board: Grid,
    piece: Piece,
    pos: Vector,
    score: u32,
    lines: u32,
    game_over: bool,
    source: PieceSource,
}

impl Game {
    /// New game with an empty board and a first piece drawn from `source`
    pub fn new(height: usize, width: usize, mut source: PieceSource) -> Self {
        let first = source.next_piece();
        Self::with_first(height, width, first, source)
    }

    /// New game with an explicit first piece
    pub fn with_first(height: usize, width: usize, first: Piece, source: PieceSource) -> Self {
        let mut game = Self {
            board: Grid::new(height, width),
            pos: Vector::default(),
            piece: first.clone(),
            score: 0,
            lines: 0,
            game_over: false,
            source,
        };
        game.place(first);
        game
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }

    /// Whether (x, y) lies on the grid
    pub fn is_in_bounds(&self, v: Vector) -> bool {
        self.board.in_bounds(v.x, v.y)
    }

    /// The static grid without the falling piece
    pub fn static_board(&self) -> &Grid {
        &self.board
    }

    /// Mutable static grid (for setting up positions)
    pub fn static_board_mut(&mut self) -> &mut Grid {
        &mut self.board
    }

    /// Snapshot of the board with the falling piece stamped in
    ///
    /// Once the game is over the piece that failed to spawn is not drawn.
    ///
    /// # Panics
    ///
    /// If the active piece is out of bounds, which the movement rules rule out.
    pub fn board(&self) -> Grid {
        let mut out = self.board.clone();
        if self.game_over {
            return out;
        }

        let code = self.piece.color().code();
        for v in self.piece_cells() {
            if !out.set(v.x, v.y, code) {
                panic!(
                    "active piece cell ({}, {}) is outside the {}x{} board",
                    v.x,
                    v.y,
                    self.width(),
                    self.height()
                );
            }
        }
        out
    }

    /// Absolute grid cells of the falling piece
    pub fn piece_cells(&self) -> impl Iterator<Item = Vector> + '_ {
        let pos = self.pos;
        self.piece.cells().iter().map(move |&c| pos + c)
    }

    fn fits(&self, piece: &Piece, pos: Vector) -> bool {
        piece
            .cells()
            .iter()
            .all(|&c| {
                let v = pos + c;
                self.board.is_vacant(v.x, v.y)
            })
    }

    /// Put `piece` at top-center, or end the game if it does not fit
    fn place(&mut self, piece: Piece) {
        let pos = Vector::new((self.width() / 2) as i32, -piece.min_y());
        if !self.fits(&piece, pos) {
            self.game_over = true;
        }
        self.piece = piece;
        self.pos = pos;
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let next = self.pos + Vector::new(dx, dy);
        if self.fits(&self.piece, next) {
            self.pos = next;
            return true;
        }
        false
    }

    fn try_rotate(&mut self) -> bool {
        if !self.piece.can_rotate() {
            return false;
        }
        let rotated = self.piece.rotate();
        if self.fits(&rotated, self.pos) {
            self.piece = rotated;
            return true;
        }
        false
    }

    /// Apply a player action. Returns whether it changed anything.
    pub fn act(&mut self, action: Action) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            Action::MoveLeft => self.try_move(-1, 0),
            Action::MoveRight => self.try_move(1, 0),
            Action::SoftDrop => self.try_move(0, 1),
            Action::Rotate => self.try_rotate(),
            Action::HardDrop => self.hard_drop() != Step::Ignored,
        }
    }

    /// Move the piece down one row, locking it if it cannot move
    pub fn fall(&mut self) -> Step {
        if self.game_over {
            return Step::Ignored;
        }
        if self.try_move(0, 1) {
            return Step::Moved;
        }
        self.lock()
    }

    /// Drop the piece as far as it goes and lock it
    pub fn hard_drop(&mut self) -> Step {
        if self.game_over {
            return Step::Ignored;
        }
        while self.try_move(0, 1) {}
        self.lock()
    }

    /// Burn the piece into the grid, clear rows, score, and spawn the next piece
    fn lock(&mut self) -> Step {
        let code = self.piece.color().code();
        let pos = self.pos;
        for &c in self.piece.cells() {
            let v = pos + c;
            self.board.set(v.x, v.y, code);
        }

        let rows = self.board.clear_full_rows();
        self.score = self.score.saturating_add(line_clear_score(rows));
        self.lines = self.lines.saturating_add(rows as u32);

        let next = self.source.next_piece();
        self.place(next);
        Step::Locked { rows }
    }
}
