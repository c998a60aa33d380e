use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::FlightParameters;
use crate::utils::kmh_to_ms;

/// Marker for the aircraft shown in the scene.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TrainerAircraft;

/// Position and velocity of the displayed aircraft.
///
/// Frame: x along track, y to the right, z up; the ground is at z = 0.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicComponent {
    /// [m]
    pub position: Vector3<f64>,
    /// [m/s]
    pub velocity: Vector3<f64>,
    /// Last acceleration applied by the integrator [m/s^2]
    pub acceleration: Vector3<f64>,
}

impl Default for KinematicComponent {
    fn default() -> Self {
        Self::from_parameters(&FlightParameters::default())
    }
}

impl KinematicComponent {
    /// Level flight at the parameters' altitude and airspeed.
    pub fn from_parameters(params: &FlightParameters) -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, params.altitude),
            velocity: Vector3::new(kmh_to_ms(params.airspeed), 0.0, 0.0),
            acceleration: Vector3::zeros(),
        }
    }

    pub fn on_ground(&self) -> bool {
        self.position.z <= 0.0
    }
}
