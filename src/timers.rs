//! Deadline bookkeeping for the `Schedule*` effects.
//!
//! Play modes never sleep; whoever drives them arms these timers from the
//! returned effects and feeds the matching ticks back when they come due.

use std::time::Instant;

use crate::play::{Effect, Effects, Msg};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    fall: Option<Instant>,
    look: Option<Instant>,
}

impl Timers {
    /// Arm timers for the schedule effects and return the rest.
    pub fn arm(&mut self, effects: Effects, now: Instant) -> Effects {
        let mut rest = Effects::new();
        for effect in effects {
            match effect {
                Effect::ScheduleFall(d) => self.fall = Some(now + d),
                Effect::ScheduleLook(d) => self.look = Some(now + d),
                other => rest.push(other),
            }
        }
        rest
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.fall, self.look) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Disarm and return the earliest tick due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<Msg> {
        let fall_due = self.fall.filter(|&t| t <= now);
        let look_due = self.look.filter(|&t| t <= now);
        match (fall_due, look_due) {
            (Some(f), Some(l)) if l < f => {
                self.look = None;
                Some(Msg::LookTick)
            }
            (Some(_), _) => {
                self.fall = None;
                Some(Msg::FallTick)
            }
            (None, Some(_)) => {
                self.look = None;
                Some(Msg::LookTick)
            }
            (None, None) => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
