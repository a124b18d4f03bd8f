//! One six-sided die with a shake animation.
//!
//! While rolling, the die changes face every shake interval, always to a
//! different face. Stopping keeps whatever face is showing; nothing is
//! re-randomized on stop.

use serde::{Deserialize, Serialize};

use crate::core::DieRoller;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Die {
    face: u8,
    rolling: bool,
    since_change: f64,
}

impl Default for Die {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Die {
    /// A stationary die showing `face`.
    #[must_use]
    pub fn new(face: u8) -> Self {
        assert!((1..=6).contains(&face), "Die faces must be in 1..=6, got {}", face);
        Self {
            face,
            rolling: false,
            since_change: 0.0,
        }
    }

    #[must_use]
    pub fn face(&self) -> u8 {
        self.face
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Show a new random face without animating.
    pub fn roll(&mut self, roller: &mut impl DieRoller) {
        self.face = roller.roll_die();
        self.rolling = false;
        self.since_change = 0.0;
    }

    /// Change face and start shaking.
    pub fn start_roll(&mut self, roller: &mut impl DieRoller) {
        self.face = roller.roll_other(self.face);
        self.rolling = true;
        self.since_change = 0.0;
    }

    /// Advance the shake by `dt` seconds. Returns whether the face changed.
    ///
    /// A zero interval changes face once per call. Elapsed intervals that were
    /// skipped over collapse into a single change.
    pub fn shake(&mut self, dt: f64, interval: f64, roller: &mut impl DieRoller) -> bool {
        if !self.rolling {
            return false;
        }
        if interval <= 0.0 {
            self.face = roller.roll_other(self.face);
            return true;
        }
        self.since_change += dt;
        if !self.since_change.is_finite() {
            self.since_change = 0.0;
        }
        if self.since_change < interval {
            return false;
        }
        self.since_change %= interval;
        self.face = roller.roll_other(self.face);
        true
    }

    /// Stop shaking on the face currently shown.
    pub fn stop(&mut self) -> u8 {
        self.rolling = false;
        self.since_change = 0.0;
        self.face
    }
}
