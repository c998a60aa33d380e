use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{KinematicComponent, TrainerAircraft};
use crate::plugins::SimulationCommand;
use crate::resources::{FlightParameters, ForceState, SimulationControl};

/// Run condition for the fixed-tick integrator.
pub fn simulation_running(control: Res<SimulationControl>) -> bool {
    control.running
}

/// Applies start/stop/reset requests to the simulation gate.
pub fn simulation_command_system(
    mut commands: EventReader<SimulationCommand>,
    mut control: ResMut<SimulationControl>,
    params: Res<FlightParameters>,
    mut query: Query<&mut KinematicComponent, With<TrainerAircraft>>,
) {
    for command in commands.read() {
        match command {
            SimulationCommand::Start => {
                info!("Simulation started");
                control.start();
            }
            SimulationCommand::Stop => {
                info!("Simulation stopped after {} ticks", control.ticks);
                control.stop();
            }
            SimulationCommand::Reset => {
                info!("Simulation reset");
                control.ticks = 0;
                for mut kinematics in query.iter_mut() {
                    *kinematics = KinematicComponent::from_parameters(&params);
                }
            }
        }
    }
}

/// Advances the displayed aircraft by one fixed tick of explicit Euler integration.
pub fn kinematic_integrator_system(
    mut query: Query<&mut KinematicComponent, With<TrainerAircraft>>,
    state: Res<ForceState>,
    params: Res<FlightParameters>,
    mut control: ResMut<SimulationControl>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();
    for mut kinematics in query.iter_mut() {
        integrate(&mut kinematics, &state, params.weight, dt);
    }
    control.ticks += 1;
}

/// One explicit Euler step.
///
/// Horizontal acceleration is (thrust - drag) / mass and vertical acceleration
/// is (lift - weight) / mass. Forward speed never goes negative and the
/// aircraft cannot sink below the ground.
pub fn integrate(kinematics: &mut KinematicComponent, state: &ForceState, mass: f64, dt: f64) {
    if !(mass > 0.0) || !(dt > 0.0) {
        return;
    }

    let acceleration = Vector3::new(state.net_horizontal(), 0.0, state.net_vertical()) / mass;
    kinematics.acceleration = acceleration;

    let velocity = kinematics.velocity;
    kinematics.position += velocity * dt;
    kinematics.velocity += acceleration * dt;
    kinematics.velocity.x = kinematics.velocity.x.max(0.0);

    if kinematics.position.z <= 0.0 {
        kinematics.position.z = 0.0;
        kinematics.velocity.z = kinematics.velocity.z.max(0.0);
    }
}
