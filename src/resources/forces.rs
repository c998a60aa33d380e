use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Forces acting on the aircraft, in newtons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Forces {
    pub lift: f64,
    pub drag: f64,
    pub thrust: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// m/s
    pub true_airspeed: f64,
    /// kg/m^3
    pub density: f64,
    /// Pa
    pub dynamic_pressure: f64,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            density: 1.225,
            dynamic_pressure: 0.0,
        }
    }
}

/// Output of the physics evaluator. Rebuilt wholesale on every parameter change.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceState {
    pub air_data: AirData,
    pub forces: Forces,
    pub stalled: bool,
}

impl ForceState {
    /// Lift minus weight; positive means the aircraft climbs.
    pub fn net_vertical(&self) -> f64 {
        self.forces.lift - self.forces.weight
    }

    /// Thrust minus drag; positive means the aircraft accelerates.
    pub fn net_horizontal(&self) -> f64 {
        self.forces.thrust - self.forces.drag
    }

    pub fn lift_to_weight(&self) -> f64 {
        if self.forces.weight > 0.0 {
            self.forces.lift / self.forces.weight
        } else {
            0.0
        }
    }

    pub fn lift_to_drag(&self) -> f64 {
        if self.forces.drag > 0.0 {
            self.forces.lift / self.forces.drag
        } else {
            0.0
        }
    }
}
