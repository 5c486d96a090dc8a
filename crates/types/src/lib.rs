//! Shared types - actions, palette codes, board snapshots and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the engine, the multiplayer session layer and the terminal view
//! alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_TICK_MS` | 1000 | Interval between fall ticks |
//! | `LOOK_TICK_MS` | 2000 | Interval between "has an opponent arrived?" polls |
//!
//! # Examples
//!
//! ```
//! use tetrissh_types::{Action, Color, Grid};
//!
//! let action = Action::from_str("hardDrop").unwrap();
//! assert_eq!(action, Action::HardDrop);
//!
//! let mut grid = Grid::new(20, 10);
//! grid.set(3, 19, Color::Red.code());
//! assert_eq!(grid.get(3, 19), Some(Color::Red.code()));
//! assert_eq!(grid.get(10, 0), None);
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: usize = 20;

/// Fall tick interval in milliseconds
pub const FALL_TICK_MS: u64 = 1000;

/// Matchmaking poll interval in milliseconds
pub const LOOK_TICK_MS: u64 = 2000;

/// Player actions accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90°
    Rotate,
    /// Drop piece as far as it goes and lock it
    HardDrop,
}

impl Action {
    /// Parse action from a camelCase or lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrissh_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("ROTATE"), Some(Action::Rotate));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "softdrop" => Some(Action::SoftDrop),
            "rotate" => Some(Action::Rotate),
            "harddrop" => Some(Action::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::SoftDrop => "softDrop",
            Action::Rotate => "rotate",
            Action::HardDrop => "hardDrop",
        }
    }
}

/// Palette of cell colors
///
/// Cells store the palette code as a `u8`; `0` is reserved for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Yellow,
    Cyan,
}

impl Color {
    /// All non-empty colors in palette order
    pub const PIECES: [Color; 7] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Purple,
        Color::Yellow,
        Color::Cyan,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Color::Empty => 0,
            Color::Red => 1,
            Color::Blue => 2,
            Color::Green => 3,
            Color::Orange => 4,
            Color::Purple => 5,
            Color::Yellow => 6,
            Color::Cyan => 7,
        }
    }

    /// Look up a palette code; `None` for codes outside the palette
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Color::Empty),
            1 => Some(Color::Red),
            2 => Some(Color::Blue),
            3 => Some(Color::Green),
            4 => Some(Color::Orange),
            5 => Some(Color::Purple),
            6 => Some(Color::Yellow),
            7 => Some(Color::Cyan),
            _ => None,
        }
    }
}

/// Empty cell palette code
pub const EMPTY: u8 = Color::Empty.code();

/// A height x width grid of palette codes
///
/// Row-major flat storage, (x, y) with y = 0 at the top. This is the board
/// snapshot handed to sessions and renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether (x, y) lies inside the grid
    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, code: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = code;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|&c| c != EMPTY)
    }

    /// Remove every full row, shifting the rows above down and refilling the
    /// top with empty rows. Returns the number of rows removed.
    ///
    /// Full rows are identified in one bottom-up pass before anything moves,
    /// so adjacent full rows are never skipped.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }

    /// Number of non-empty cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
