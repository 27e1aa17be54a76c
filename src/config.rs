//! Command-line configuration for the terminal runner.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

pub const USAGE: &str = "usage: tui-2048 [--size N] [--seed N] [--log PATH]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid dimension N (N x N board).
    pub size: usize,
    /// RNG seed; `None` picks one from the clock at startup.
    pub seed: Option<u64>,
    /// Write `log` output here. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

/// Parse arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<GameConfig>> {
    let mut config = GameConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                let size = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
                    return Err(anyhow!(
                        "--size must be between {} and {}, got {}",
                        MIN_GRID_SIZE,
                        MAX_GRID_SIZE,
                        size
                    ));
                }
                config.size = size;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_file = Some(PathBuf::from(v));
            }
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }
    Ok(Some(config))
}
