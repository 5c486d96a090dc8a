//! Play configuration.

use std::time::Duration;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FALL_TICK_MS, LOOK_TICK_MS};

/// Board size, tick cadences and matchmaker queue size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub height: usize,
    pub width: usize,
    pub fall_interval: Duration,
    pub look_interval: Duration,
    pub queue_capacity: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            height: BOARD_HEIGHT,
            width: BOARD_WIDTH,
            fall_interval: Duration::from_millis(FALL_TICK_MS),
            look_interval: Duration::from_millis(LOOK_TICK_MS),
            queue_capacity: 16,
        }
    }
}

impl PlayConfig {
    /// Create from environment variables, falling back to defaults
    ///
    /// - `TETRISSH_HEIGHT`, `TETRISSH_WIDTH`: board size (at least 4)
    /// - `TETRISSH_FALL_MS`: fall tick interval
    /// - `TETRISSH_LOOK_MS`: matchmaking poll interval
    /// - `TETRISSH_QUEUE`: matchmaker queue capacity
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PlayConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let num = |key: &str| -> Option<u64> { lookup(key).and_then(|s| s.trim().parse().ok()) };

        Self {
            height: num("TETRISSH_HEIGHT")
                .map(|v| v as usize)
                .filter(|&v| v >= 4)
                .unwrap_or(defaults.height),
            width: num("TETRISSH_WIDTH")
                .map(|v| v as usize)
                .filter(|&v| v >= 4)
                .unwrap_or(defaults.width),
            fall_interval: num("TETRISSH_FALL_MS")
                .filter(|&v| v > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.fall_interval),
            look_interval: num("TETRISSH_LOOK_MS")
                .filter(|&v| v > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.look_interval),
            queue_capacity: num("TETRISSH_QUEUE")
                .map(|v| (v as usize).max(1))
                .unwrap_or(defaults.queue_capacity),
        }
    }
}
