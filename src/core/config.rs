//! Game configuration.
//!
//! The rules of Abagio are fixed; what a host configures is pacing and the
//! RNG seed:
//! - `step_duration`: seconds a moving frog spends per space
//! - `slide_duration`: seconds a captured frog takes to slide home
//! - `die_shake_interval`: seconds between face changes while dice roll
//! - `setup_delay`: seconds the board stays in `SettingUpBoard`
//!
//! All pacing is consumed through `Game::advance`, so a headless host can
//! resolve any animation instantly by advancing with a large delta.

use serde::{Deserialize, Serialize};

/// Reasons a configuration is refused.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration { field: &'static str, value: f64 },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the default `GameRng` roller.
    pub seed: u64,

    /// Seconds per space while a frog steps forward.
    pub step_duration: f64,

    /// Seconds for a captured frog to slide back to its root.
    pub slide_duration: f64,

    /// Seconds between die face changes while rolling.
    pub die_shake_interval: f64,

    /// Seconds spent in `SettingUpBoard` before the first roll.
    pub setup_delay: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            step_duration: 0.5,
            slide_duration: 0.5,
            die_shake_interval: 0.075,
            setup_delay: 1.0,
        }
    }
}

impl GameConfig {
    /// Default pacing with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Zero-length pacing: every timed stage resolves on the next positive
    /// `advance`. Convenient for headless play and tests.
    #[must_use]
    pub fn instant(seed: u64) -> Self {
        Self {
            seed,
            step_duration: 0.0,
            slide_duration: 0.0,
            die_shake_interval: 0.0,
            setup_delay: 0.0,
        }
    }

    #[must_use]
    pub fn with_step_duration(mut self, seconds: f64) -> Self {
        self.step_duration = seconds;
        self
    }

    #[must_use]
    pub fn with_slide_duration(mut self, seconds: f64) -> Self {
        self.slide_duration = seconds;
        self
    }

    #[must_use]
    pub fn with_die_shake_interval(mut self, seconds: f64) -> Self {
        self.die_shake_interval = seconds;
        self
    }

    #[must_use]
    pub fn with_setup_delay(mut self, seconds: f64) -> Self {
        self.setup_delay = seconds;
        self
    }

    /// Check that every duration is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("step_duration", self.step_duration),
            ("slide_duration", self.slide_duration),
            ("die_shake_interval", self.die_shake_interval),
            ("setup_delay", self.setup_delay),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }
        Ok(())
    }
}
