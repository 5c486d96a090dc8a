//! Maps game and match views into a framebuffer.
//!
//! Pure: no I/O, so layouts are unit-tested directly.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::play::{MatchView, SingleView};
use crate::types::{Color, Grid};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const LOCAL_BAR: Rgb = Rgb::new(3, 15, 252);
const REMOTE_BAR: Rgb = Rgb::new(250, 2, 2);
const GAP: u16 = 4;

/// Display color for a cell code.
///
/// Unknown codes are a bug upstream; release builds draw them as empty.
pub fn palette(code: u8) -> Rgb {
    match Color::from_code(code) {
        Some(Color::Empty) => WELL_BG,
        Some(Color::Red) => Rgb::new(220, 80, 80),
        Some(Color::Blue) => Rgb::new(80, 120, 220),
        Some(Color::Green) => Rgb::new(100, 220, 120),
        Some(Color::Orange) => Rgb::new(255, 165, 0),
        Some(Color::Purple) => Rgb::new(200, 120, 220),
        Some(Color::Yellow) => Rgb::new(240, 220, 80),
        Some(Color::Cyan) => Rgb::new(80, 220, 220),
        None => {
            debug_assert!(false, "unknown cell code {code}");
            WELL_BG
        }
    }
}

fn text() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
}

fn border() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0))
}

fn banner() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold()
}

/// Draws boards, scores and status screens.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of a framed board.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        (
            grid.width() as u16 * self.cell_w + 2,
            grid.height() as u16 * self.cell_h + 2,
        )
    }

    pub fn render_single(&self, view: &SingleView, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        match view {
            SingleView::Playing { board, score } => {
                let (fw, fh) = self.frame_size(board);
                let x = viewport.width.saturating_sub(fw) / 2;
                let y = viewport.height.saturating_sub(fh + 1) / 2;
                fb.put_str_centered(x, fw, y, &format!("score {score}"), text());
                self.draw_board(fb, x, y + 1, board);
            }
            SingleView::Finished { score } => {
                self.draw_message(
                    fb,
                    viewport,
                    &["GAME OVER", format!("final score {score}").as_str(), "press q to quit"],
                );
            }
        }
    }

    pub fn render_match(&self, view: &MatchView, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        match view {
            MatchView::Looking => {
                self.draw_message(fb, viewport, &["looking for match...", "press q to quit"]);
            }
            MatchView::Canceled => {
                self.draw_message(fb, viewport, &["match canceled", "press q to quit"]);
            }
            MatchView::Running {
                board,
                score,
                game_over,
                opponent,
                opponent_score,
                ratio,
            } => {
                let (fw, fh) = self.frame_size(board);
                let total_w = fw * 2 + GAP;
                let x = viewport.width.saturating_sub(total_w) / 2;
                let y = viewport.height.saturating_sub(fh + 2) / 2;

                self.draw_score_bar(fb, x, y, total_w, *ratio);
                fb.put_str(x, y + 1, &format!("you {score}"), text());
                let theirs = format!("them {opponent_score}");
                let theirs_x = (x + total_w).saturating_sub(theirs.chars().count() as u16);
                fb.put_str(theirs_x, y + 1, &theirs, text());

                self.draw_board(fb, x, y + 2, board);
                if *game_over {
                    self.draw_overlay(fb, x, y + 2, fw, fh, "GAME OVER");
                }

                let ox = x + fw + GAP;
                match opponent {
                    Some(grid) => self.draw_board(fb, ox, y + 2, grid),
                    None => {
                        self.draw_board(fb, ox, y + 2, &Grid::new(board.height(), board.width()));
                        self.draw_overlay(fb, ox, y + 2, fw, fh, "no signal");
                    }
                }
            }
        }
    }

    /// Framed board with its top-left corner at `(x, y)`.
    pub fn draw_board(&self, fb: &mut FrameBuffer, x: u16, y: u16, grid: &Grid) {
        let (fw, fh) = self.frame_size(grid);
        self.draw_border(fb, x, y, fw, fh);
        for (row, cells) in grid.rows().enumerate() {
            for (col, &code) in cells.iter().enumerate() {
                let color = palette(code);
                let (ch, style) = if color == WELL_BG {
                    ('·', CellStyle::new(Rgb::new(90, 90, 100), WELL_BG))
                } else {
                    ('█', CellStyle::new(color, WELL_BG))
                };
                let cx = x + 1 + col as u16 * self.cell_w;
                let cy = y + 1 + row as u16 * self.cell_h;
                fb.fill_rect(cx, cy, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    /// Two-color bar: local share from the left, opponent share on the right.
    pub fn draw_score_bar(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, ratio: f64) {
        let local = (ratio.clamp(0.0, 1.0) * w as f64).round() as u16;
        fb.fill_rect(x, y, local, 1, '█', CellStyle::new(LOCAL_BAR, LOCAL_BAR));
        fb.fill_rect(
            x + local,
            y,
            w - local,
            1,
            '█',
            CellStyle::new(REMOTE_BAR, REMOTE_BAR),
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = border();
        let right = x + w - 1;
        let bottom = y + h - 1;
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, msg: &str) {
        fb.put_str_centered(x, w, y + h / 2, msg, banner());
    }

    fn draw_message(&self, fb: &mut FrameBuffer, viewport: Viewport, lines: &[&str]) {
        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { banner() } else { text() };
            fb.put_str_centered(0, viewport.width, top + i as u16, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn single_board_shows_score_and_cells() {
        let mut board = Grid::new(4, 4);
        board.set(0, 3, Color::Red.code());
        let view = SingleView::Playing { board, score: 300 };
        let mut fb = FrameBuffer::new(0, 0);
        GameView::default().render_single(&view, Viewport::new(20, 8), &mut fb);

        let s = screen(&fb);
        assert!(s.contains("score 300"));
        assert!(s.contains("██"));
        assert_eq!(s.matches('┌').count(), 1);
    }

    #[test]
    fn finished_game_shows_final_score() {
        let mut fb = FrameBuffer::new(0, 0);
        GameView::default().render_single(
            &SingleView::Finished { score: 700 },
            Viewport::new(30, 6),
            &mut fb,
        );
        let s = screen(&fb);
        assert!(s.contains("GAME OVER"));
        assert!(s.contains("final score 700"));
    }

    #[test]
    fn match_screens_show_status() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_match(&MatchView::Looking, Viewport::new(30, 4), &mut fb);
        assert!(screen(&fb).contains("looking for match"));
        view.render_match(&MatchView::Canceled, Viewport::new(30, 4), &mut fb);
        assert!(screen(&fb).contains("match canceled"));
    }

    #[test]
    fn running_match_draws_both_boards() {
        let view = MatchView::Running {
            board: Grid::new(4, 4),
            score: 100,
            game_over: false,
            opponent: Some(Arc::new(Grid::new(4, 4))),
            opponent_score: 300,
            ratio: 0.25,
        };
        let mut fb = FrameBuffer::new(0, 0);
        GameView::default().render_match(&view, Viewport::new(40, 10), &mut fb);

        let s = screen(&fb);
        assert_eq!(s.matches('┌').count(), 2);
        assert!(s.contains("you 100"));
        assert!(s.contains("them 300"));
    }

    #[test]
    fn missing_opponent_board_is_flagged() {
        let view = MatchView::Running {
            board: Grid::new(4, 4),
            score: 0,
            game_over: true,
            opponent: None,
            opponent_score: 0,
            ratio: 0.5,
        };
        let mut fb = FrameBuffer::new(0, 0);
        GameView::default().render_match(&view, Viewport::new(40, 10), &mut fb);

        let s = screen(&fb);
        assert!(s.contains("no signal"));
        assert!(s.contains("GAME OVER"));
    }

    #[test]
    fn score_bar_splits_by_ratio() {
        let mut fb = FrameBuffer::new(10, 1);
        GameView::default().draw_score_bar(&mut fb, 0, 0, 10, 0.3);
        let local = (0..10)
            .filter(|&x| fb.get(x, 0).map(|c| c.style.fg) == Some(LOCAL_BAR))
            .count();
        assert_eq!(local, 3);
    }

    #[test]
    fn palette_covers_every_color() {
        for c in Color::PIECES {
            assert_ne!(palette(c.code()), WELL_BG);
        }
        assert_eq!(palette(Color::Empty.code()), WELL_BG);
    }
}
