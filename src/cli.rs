//! Command-line arguments.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Single,
    Versus,
}

/// `tetrissh [single|versus] [--seed N]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub mode: Mode,
    pub seed: Option<u32>,
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = Self::default();
        let mut mode_seen = false;
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "single" | "versus" if !mode_seen => {
                    parsed.mode = if args[i] == "versus" {
                        Mode::Versus
                    } else {
                        Mode::Single
                    };
                    mode_seen = true;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    parsed.seed = Some(
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(parsed)
    }

    /// The explicit seed, or one derived from the clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
