//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FLIGHT_SEED` | derived from the wall clock |
//! | `FLIGHT_HIGH_SCORE_PATH` | `$HOME/.tui_flight_highscore.json` |
//! | `FLIGHT_LOG_PATH` | unset, logging disabled |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "FLIGHT_SEED";
pub const HIGH_SCORE_PATH_VAR: &str = "FLIGHT_HIGH_SCORE_PATH";
pub const LOG_PATH_VAR: &str = "FLIGHT_LOG_PATH";

pub const HIGH_SCORE_FILE_NAME: &str = ".tui_flight_highscore.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightConfig {
    pub seed: u32,
    pub high_score_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl FlightConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unparseable or empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty(SEED_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let high_score_path = non_empty(HIGH_SCORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                non_empty("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(HIGH_SCORE_FILE_NAME)
            });

        let log_path = non_empty(LOG_PATH_VAR).map(PathBuf::from);

        Self {
            seed,
            high_score_path,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so runs started in the same second still differ.
    (nanos ^ (nanos >> 32)) as u32
}
