use bevy::prelude::*;

use crate::resources::{AirData, FlightParameters, ForceState, Forces, PhysicsConfig};
use crate::utils::{air_density, dynamic_pressure, kmh_to_ms};

/// Recomputes the force state whenever the parameters or physics constants change.
pub fn physics_evaluator_system(
    params: Res<FlightParameters>,
    config: Res<PhysicsConfig>,
    mut state: ResMut<ForceState>,
) {
    if !params.is_changed() && !config.is_changed() {
        return;
    }

    let evaluated = evaluate(&params, &config);
    if evaluated.stalled != state.stalled {
        info!(
            "Stall state changed: stalled={} at angle of attack {:.1} deg",
            evaluated.stalled, params.angle_of_attack
        );
    }
    debug!("Evaluated forces: {:?}", evaluated.forces);
    *state = evaluated;
}

/// Evaluates the simplified force model for a set of flight parameters.
///
/// Pure: the result depends only on the arguments.
pub fn evaluate(params: &FlightParameters, config: &PhysicsConfig) -> ForceState {
    let air_data = calculate_air_data(params, config);
    let stalled = is_stalled(params.angle_of_attack, config);

    let reference_force = air_data.dynamic_pressure * params.wing_area;
    let mut lift = reference_force * params.lift_coefficient;
    if stalled {
        lift *= config.stall_lift_factor;
    }
    let drag = reference_force * params.drag_coefficient;
    let thrust = params.throttle / 100.0 * config.max_thrust;
    let weight = params.weight * config.gravity;

    ForceState {
        air_data,
        forces: Forces {
            lift,
            drag,
            thrust,
            weight,
        },
        stalled,
    }
}

/// Stall is strictly above the critical angle.
pub fn is_stalled(angle_of_attack: f64, config: &PhysicsConfig) -> bool {
    angle_of_attack > config.critical_angle_of_attack
}

fn calculate_air_data(params: &FlightParameters, config: &PhysicsConfig) -> AirData {
    let true_airspeed = kmh_to_ms(params.airspeed);
    let density = air_density(
        params.altitude,
        config.sea_level_density,
        config.density_scale_height,
    );

    AirData {
        true_airspeed,
        density,
        dynamic_pressure: dynamic_pressure(density, true_airspeed),
    }
}
