use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Gate for the fixed-tick kinematic integration.
///
/// The integrator's run condition reads this flag before every tick, so
/// clearing it takes effect before the next scheduled tick.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationControl {
    pub running: bool,
    pub ticks: u64,
}

impl SimulationControl {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}
