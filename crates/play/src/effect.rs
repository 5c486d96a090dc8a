//! Messages driving a play mode and the effects it asks for.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::types::Action;

/// Input to a play mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Fall tick: move the piece down one row
    FallTick,
    /// Matchmaking poll tick
    LookTick,
    /// A player action
    Act(Action),
    /// The player quit
    Quit,
}

/// Requested follow-ups and lifecycle notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`Msg::FallTick`] after the delay
    ScheduleFall(Duration),
    /// Deliver [`Msg::LookTick`] after the delay
    ScheduleLook(Duration),
    OpponentFound,
    GameOver { score: u32 },
    MatchCanceled,
    /// The mode is finished and can be closed
    Exit,
}

/// At most two effects come out of a single message.
pub type Effects = ArrayVec<Effect, 2>;

/// Build an [`Effects`] list from a slice
pub(crate) fn effects(items: &[Effect]) -> Effects {
    items.iter().copied().take(2).collect()
}
