//! Sparring opponent for local versus play.
//!
//! Pairing is in-process, so a versus game started from one terminal needs a
//! second player in the same process. The bot queues like anyone else and
//! plays a random action on every fall tick.

use std::time::Instant;

use tracing::{debug, info};

use crate::core::SimpleRng;
use crate::play::{Effect, Effects, MatchController, MatchState, Matchmaker, Msg, PlayConfig};
use crate::timers::Timers;
use crate::types::Action;

const MOVES: [Action; 5] = [
    Action::MoveLeft,
    Action::MoveRight,
    Action::Rotate,
    Action::SoftDrop,
    Action::HardDrop,
];

/// Play one match, returning the final score when the match ends.
pub async fn spar(matchmaker: Matchmaker, config: PlayConfig, seed: u32) -> u32 {
    let mut rng = SimpleRng::new(seed.rotate_left(16) ^ 0x5bd1_e995);
    let mut controller = MatchController::new(&matchmaker, &config, seed);
    let mut timers = Timers::default();
    let mut effects = controller.init();
    info!(session = ?controller.session().map(|s| s.id()), "sparring bot queued");

    loop {
        let rest = timers.arm(effects, Instant::now());
        if rest
            .iter()
            .any(|e| matches!(e, Effect::MatchCanceled | Effect::Exit))
        {
            break;
        }

        // Idle after game over until the other side leaves.
        let deadline = timers
            .next_deadline()
            .unwrap_or_else(|| Instant::now() + config.look_interval);
        tokio::time::sleep_until(deadline.into()).await;

        effects = match timers.take_due(Instant::now()) {
            Some(Msg::FallTick) => {
                let action = MOVES[rng.next_range(MOVES.len() as u32) as usize];
                debug!(action = action.as_str(), "bot move");
                let acted = controller.update(Msg::Act(action));
                if acted.is_empty() {
                    controller.update(Msg::FallTick)
                } else {
                    acted
                }
            }
            Some(msg) => controller.update(msg),
            None if controller.state() == MatchState::Canceled => break,
            None => Effects::new(),
        };
    }

    let score = controller.game().score();
    controller.close();
    info!(score, "sparring bot done");
    score
}
