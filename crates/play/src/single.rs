//! Single-player mode.

use tracing::info;

use crate::config::PlayConfig;
use crate::core::{Game, PieceSource};
use crate::effect::{effects, Effect, Effects, Msg};
use crate::types::Grid;

/// What to show for a single-player game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleView {
    Playing { board: Grid, score: u32 },
    Finished { score: u32 },
}

/// Drives one local game from ticks and actions
#[derive(Debug, Clone)]
pub struct SinglePlayer {
    game: Game,
    fall_interval: std::time::Duration,
    final_score: Option<u32>,
}

impl SinglePlayer {
    pub fn new(config: &PlayConfig, seed: u32) -> Self {
        let game = Game::new(config.height, config.width, PieceSource::random(seed));
        Self::with_game(game, config)
    }

    pub fn with_game(game: Game, config: &PlayConfig) -> Self {
        Self {
            game,
            fall_interval: config.fall_interval,
            final_score: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Final score once the game is over
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Effects to apply when the mode starts
    pub fn init(&self) -> Effects {
        effects(&[Effect::ScheduleFall(self.fall_interval)])
    }

    pub fn update(&mut self, msg: Msg) -> Effects {
        if msg == Msg::Quit {
            return effects(&[Effect::Exit]);
        }
        if self.final_score.is_some() {
            return Effects::new();
        }

        match msg {
            Msg::FallTick => {
                self.game.fall();
                if let Some(over) = self.check_game_over() {
                    return effects(&[over]);
                }
                effects(&[Effect::ScheduleFall(self.fall_interval)])
            }
            Msg::Act(action) => {
                self.game.act(action);
                self.check_game_over()
                    .map(|over| effects(&[over]))
                    .unwrap_or_default()
            }
            Msg::LookTick | Msg::Quit => Effects::new(),
        }
    }

    fn check_game_over(&mut self) -> Option<Effect> {
        if !self.game.game_over() {
            return None;
        }
        let score = self.game.score();
        info!(score, lines = self.game.lines(), "single-player game over");
        self.final_score = Some(score);
        Some(Effect::GameOver { score })
    }

    pub fn view(&self) -> SingleView {
        match self.final_score {
            Some(score) => SingleView::Finished { score },
            None => SingleView::Playing {
                board: self.game.board(),
                score: self.game.score(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;
    use crate::types::{Action, Color};

    fn tiny() -> (SinglePlayer, PlayConfig) {
        let config = PlayConfig {
            height: 4,
            width: 4,
            ..PlayConfig::default()
        };
        let game = Game::new(4, 4, PieceSource::Repeat(Piece::single(Color::Red)));
        (SinglePlayer::with_game(game, &config), config)
    }

    #[test]
    fn init_schedules_first_fall() {
        let (single, config) = tiny();
        assert_eq!(
            single.init().as_slice(),
            &[Effect::ScheduleFall(config.fall_interval)]
        );
    }

    #[test]
    fn fall_tick_reschedules_while_playing() {
        let (mut single, config) = tiny();
        let out = single.update(Msg::FallTick);
        assert_eq!(out.as_slice(), &[Effect::ScheduleFall(config.fall_interval)]);
        assert!(matches!(single.view(), SingleView::Playing { .. }));
    }

    #[test]
    fn game_over_reports_final_score_once() {
        let (mut single, _) = tiny();
        for _ in 0..3 {
            assert!(single.update(Msg::Act(Action::HardDrop)).is_empty());
        }
        let out = single.update(Msg::Act(Action::HardDrop));
        assert_eq!(out.as_slice(), &[Effect::GameOver { score: 0 }]);
        assert_eq!(single.final_score(), Some(0));
        assert_eq!(single.view(), SingleView::Finished { score: 0 });

        // later ticks are ignored and do not reschedule
        assert!(single.update(Msg::FallTick).is_empty());
    }

    #[test]
    fn quit_exits() {
        let (mut single, _) = tiny();
        assert_eq!(single.update(Msg::Quit).as_slice(), &[Effect::Exit]);
    }
}
