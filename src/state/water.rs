use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};
use crate::planner::constants::WATER_MAX_GLASSES;

/// Today's water intake in glasses, persisted as a bare integer under the
/// `waterIntake` key. Bounded to 0..=20.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaterIntake {
    glasses: u32,
}

impl WaterIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range stored values are clamped rather than rejected.
    pub fn from_glasses(glasses: u32) -> Self {
        Self {
            glasses: glasses.min(WATER_MAX_GLASSES),
        }
    }

    pub fn glasses(&self) -> u32 {
        self.glasses
    }

    /// Drink one glass; saturates at the ceiling.
    pub fn drink(&mut self) -> u32 {
        if self.glasses < WATER_MAX_GLASSES {
            self.glasses += 1;
        }
        self.glasses
    }

    /// Tap-glass-N semantics: set the count directly.
    pub fn set(&mut self, glasses: u32) -> Result<u32> {
        if glasses > WATER_MAX_GLASSES {
            return Err(TrackError::validation(
                "glasses",
                format!("must be at most {WATER_MAX_GLASSES}"),
            ));
        }
        self.glasses = glasses;
        Ok(self.glasses)
    }

    pub fn reset(&mut self) {
        self.glasses = 0;
    }
}
