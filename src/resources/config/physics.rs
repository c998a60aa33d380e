use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    CRITICAL_ANGLE_OF_ATTACK, DENSITY_SCALE_HEIGHT, GRAVITY, MAX_THRUST, SEA_LEVEL_DENSITY,
    STALL_LIFT_FACTOR,
};

/// Constants of the simplified force model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Thrust at 100% throttle (N)
    pub max_thrust: f64,
    pub gravity: f64,
    pub sea_level_density: f64,
    /// Altitude over which density falls by a factor of e (m)
    pub density_scale_height: f64,
    /// Stall occurs strictly above this angle of attack (deg)
    pub critical_angle_of_attack: f64,
    /// Fraction of lift kept while stalled
    pub stall_lift_factor: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_thrust: MAX_THRUST,
            gravity: GRAVITY,
            sea_level_density: SEA_LEVEL_DENSITY,
            density_scale_height: DENSITY_SCALE_HEIGHT,
            critical_angle_of_attack: CRITICAL_ANGLE_OF_ATTACK,
            stall_lift_factor: STALL_LIFT_FACTOR,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.max_thrust >= 0.0) {
            return Err(format!("max_thrust must be >= 0, got {}", self.max_thrust));
        }
        if !(self.gravity > 0.0) {
            return Err(format!("gravity must be > 0, got {}", self.gravity));
        }
        if !(self.sea_level_density > 0.0) {
            return Err(format!(
                "sea_level_density must be > 0, got {}",
                self.sea_level_density
            ));
        }
        if !(self.density_scale_height > 0.0) {
            return Err(format!(
                "density_scale_height must be > 0, got {}",
                self.density_scale_height
            ));
        }
        if !(0.0..=1.0).contains(&self.stall_lift_factor) {
            return Err(format!(
                "stall_lift_factor must lie in [0, 1], got {}",
                self.stall_lift_factor
            ));
        }
        if !self.critical_angle_of_attack.is_finite() {
            return Err("critical_angle_of_attack must be finite".to_string());
        }
        Ok(())
    }
}
