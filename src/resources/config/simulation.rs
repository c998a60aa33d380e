use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{NARRATION_COOLDOWN, SIMULATION_TICK_RATE, TUTORIAL_ADVANCE_DELAY};

/// Fixed-tick kinematic integration settings.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Integration ticks per second
    pub tick_rate: f64,
    pub start_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: SIMULATION_TICK_RATE,
            start_running: false,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialConfig {
    /// Seconds between completing a step and moving to the next one
    pub advance_delay: f64,
    pub auto_start: bool,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            advance_delay: TUTORIAL_ADVANCE_DELAY,
            auto_start: false,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    pub enabled: bool,
    /// Seconds before the same message may be spoken again
    pub cooldown: f64,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown: NARRATION_COOLDOWN,
        }
    }
}
