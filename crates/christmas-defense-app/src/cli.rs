//! Command-line options for the demo driver.

use std::path::PathBuf;

use christmas_defense_core::level::{levels_from_json, LevelDefinition};
use christmas_defense_sim::engine::SimConfig;

use crate::state::AppError;

pub const USAGE: &str = "\
usage: christmas-defense-app [--seed N] [--levels FILE] [--ticks N] [--realtime SECS]

  --seed N         RNG seed (default 42)
  --levels FILE    JSON array of level definitions (default: built-in campaign)
  --ticks N        fixed-step tick cap for the headless run (default 36000)
  --realtime SECS  run the threaded game loop against the wall clock instead";

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub seed: u64,
    pub levels: Option<PathBuf>,
    pub max_ticks: u64,
    /// When set, drive the threaded loop for this many seconds.
    pub realtime_secs: Option<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 42,
            levels: None,
            max_ticks: 36_000,
            realtime_secs: None,
        }
    }
}

impl Options {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, AppError> {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
            };
            match flag.as_str() {
                "--seed" => options.seed = parse_number(&flag, &value()?)?,
                "--levels" => options.levels = Some(PathBuf::from(value()?)),
                "--ticks" => options.max_ticks = parse_number(&flag, &value()?)?,
                "--realtime" => {
                    let secs: f64 = parse_number(&flag, &value()?)?;
                    if !(secs.is_finite() && secs > 0.0) {
                        return Err(AppError::Usage(format!("{flag} must be positive")));
                    }
                    options.realtime_secs = Some(secs);
                }
                other => return Err(AppError::Usage(format!("unknown argument '{other}'"))),
            }
        }
        Ok(options)
    }

    /// Engine configuration, reading the level file if one was given.
    pub fn sim_config(&self) -> Result<SimConfig, AppError> {
        let mut config = SimConfig {
            seed: self.seed,
            ..Default::default()
        };
        if let Some(path) = &self.levels {
            config.levels = load_levels(path)?;
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::Usage(format!("{flag}: '{raw}' is not a valid number")))
}

/// Read and validate a JSON level file.
pub fn load_levels(path: &std::path::Path) -> Result<Vec<LevelDefinition>, AppError> {
    let json = std::fs::read_to_string(path)?;
    Ok(levels_from_json(&json)?)
}
