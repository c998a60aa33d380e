use bevy::prelude::*;

use crate::components::{KinematicComponent, TrainerAircraft};
use crate::plugins::{ParameterChanged, ResetParameters, SimulationCommand, TrainerSet};
use crate::resources::{
    FlightParameters, ForceState, InitialParameters, PhysicsConfig, SimulationConfig,
    SimulationControl,
};
use crate::systems::{
    kinematic_integrator_system, parameter_input_system, physics_evaluator_system,
    simulation_command_system, simulation_running,
};

/// Parameter store, physics evaluator and the fixed-tick kinematic integrator.
pub struct FlightModelPlugin {
    pub parameters: FlightParameters,
    pub physics: PhysicsConfig,
    pub simulation: SimulationConfig,
}

impl Default for FlightModelPlugin {
    fn default() -> Self {
        Self {
            parameters: FlightParameters::default(),
            physics: PhysicsConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl FlightModelPlugin {
    fn setup_aircraft(mut commands: Commands, params: Res<FlightParameters>) {
        commands.spawn((
            TrainerAircraft,
            KinematicComponent::from_parameters(&params),
            Name::new("Trainer Aircraft"),
        ));
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        let parameters = self.parameters.clamped();

        app.insert_resource(InitialParameters(parameters.clone()))
            .insert_resource(parameters)
            .insert_resource(self.physics.clone())
            .insert_resource(self.simulation.clone())
            .insert_resource(SimulationControl {
                running: self.simulation.start_running,
                ticks: 0,
            })
            .init_resource::<ForceState>();

        app.add_event::<ParameterChanged>()
            .add_event::<ResetParameters>()
            .add_event::<SimulationCommand>();

        app.insert_resource(Time::<Fixed>::from_hz(self.simulation.tick_rate));

        app.add_systems(Startup, Self::setup_aircraft)
            .add_systems(
                PreUpdate,
                (
                    // A simulation reset seeds from this frame's parameters.
                    (parameter_input_system, simulation_command_system)
                        .chain()
                        .in_set(TrainerSet::Input),
                    physics_evaluator_system.in_set(TrainerSet::Evaluate),
                ),
            )
            .add_systems(
                FixedUpdate,
                kinematic_integrator_system.run_if(simulation_running),
            );
    }
}
