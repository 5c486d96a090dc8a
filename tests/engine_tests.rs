//! Grid engine behavior through the public facade.

use tetrissh::core::{line_clear_score, Game, Piece, PieceSource, Step, Tetromino, Vector};
use tetrissh::types::{Action, Color, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn single_cell_game() -> Game {
    Game::new(
        BOARD_HEIGHT,
        BOARD_WIDTH,
        PieceSource::Repeat(Piece::single(Color::Red)),
    )
}

fn fill_row_except(game: &mut Game, y: i32, gap: i32) {
    for x in 0..game.width() as i32 {
        if x != gap {
            game.static_board_mut().set(x, y, Color::Blue.code());
        }
    }
}

#[test]
fn single_cell_falls_to_floor_and_locks() {
    let mut game = single_cell_game();
    assert_eq!(game.pos(), Vector::new(5, 0));

    for _ in 0..19 {
        assert_eq!(game.fall(), Step::Moved);
    }
    assert_eq!(game.pos(), Vector::new(5, 19));

    assert_eq!(game.fall(), Step::Locked { rows: 0 });
    assert_eq!(game.static_board().get(5, 19), Some(Color::Red.code()));
    assert_eq!(game.pos(), Vector::new(5, 0));
    assert!(!game.game_over());
}

#[test]
fn wall_moves_are_idempotent() {
    let mut game = single_cell_game();
    for _ in 0..5 {
        assert!(game.act(Action::MoveLeft));
    }
    assert_eq!(game.pos().x, 0);

    let before = game.board();
    assert!(!game.act(Action::MoveLeft));
    assert_eq!(game.board(), before);

    for _ in 0..BOARD_WIDTH {
        game.act(Action::MoveRight);
    }
    assert_eq!(game.pos().x, BOARD_WIDTH as i32 - 1);
    assert!(!game.act(Action::MoveRight));
}

#[test]
fn square_piece_ignores_rotation() {
    let mut game = Game::with_first(
        BOARD_HEIGHT,
        BOARD_WIDTH,
        Tetromino::O.piece(),
        PieceSource::Repeat(Tetromino::O.piece()),
    );
    let before = game.board();
    assert!(!game.act(Action::Rotate));
    assert_eq!(game.board(), before);
}

#[test]
fn completed_row_is_removed_and_rows_above_shift_down() {
    let mut game = single_cell_game();
    fill_row_except(&mut game, 19, 5);
    game.static_board_mut().set(0, 18, Color::Green.code());

    assert_eq!(game.hard_drop(), Step::Locked { rows: 1 });
    assert_eq!(game.score(), line_clear_score(1));
    assert_eq!(game.static_board().get(0, 19), Some(Color::Green.code()));
    assert_eq!(game.static_board().get(0, 18), Some(EMPTY));
    assert_eq!(game.static_board().filled(), 1);
}

#[test]
fn two_rows_in_one_lock_both_clear() {
    let domino = Piece::new(&[(0, 0), (0, 1)], Color::Purple, true);
    let mut game = Game::with_first(
        BOARD_HEIGHT,
        BOARD_WIDTH,
        domino,
        PieceSource::Repeat(Piece::single(Color::Red)),
    );
    fill_row_except(&mut game, 18, 5);
    fill_row_except(&mut game, 19, 5);
    game.static_board_mut().set(3, 17, Color::Yellow.code());

    assert_eq!(game.hard_drop(), Step::Locked { rows: 2 });
    assert_eq!(game.lines(), 2);
    assert_eq!(game.score(), line_clear_score(2));
    assert!(line_clear_score(2) > line_clear_score(1));
    assert_eq!(game.static_board().get(3, 19), Some(Color::Yellow.code()));
    assert_eq!(game.static_board().filled(), 1);
}

#[test]
fn hard_drop_on_floor_matches_fall_lock() {
    let mut dropped = single_cell_game();
    let mut fallen = single_cell_game();
    for _ in 0..19 {
        dropped.fall();
        fallen.fall();
    }

    assert_eq!(dropped.hard_drop(), fallen.fall());
    assert_eq!(dropped.board(), fallen.board());
    assert_eq!(dropped.score(), fallen.score());
}

#[test]
fn blocked_spawn_ends_the_game() {
    let mut game = single_cell_game();
    for y in 1..BOARD_HEIGHT as i32 {
        game.static_board_mut().set(5, y, Color::Blue.code());
    }

    assert_eq!(game.fall(), Step::Locked { rows: 0 });
    assert!(game.game_over());

    let frozen = game.board();
    assert_eq!(game.fall(), Step::Ignored);
    assert!(!game.act(Action::MoveLeft));
    assert_eq!(game.board(), frozen);
}

#[test]
fn score_never_decreases() {
    let actions = [
        Action::MoveLeft,
        Action::Rotate,
        Action::MoveRight,
        Action::SoftDrop,
        Action::HardDrop,
    ];
    for seed in [1, 7, 42, 12345] {
        let mut game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, PieceSource::random(seed));
        let mut last = 0;
        for i in 0..2000usize {
            if game.game_over() {
                break;
            }
            game.act(actions[(i * 7 + seed as usize) % actions.len()]);
            game.fall();
            assert!(game.score() >= last);
            last = game.score();
        }
    }
}

#[test]
fn same_seed_same_game() {
    let mut a = Game::new(BOARD_HEIGHT, BOARD_WIDTH, PieceSource::random(99));
    let mut b = Game::new(BOARD_HEIGHT, BOARD_WIDTH, PieceSource::random(99));
    for _ in 0..50 {
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
}
