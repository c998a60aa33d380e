mod evaluator;
mod integrator;

pub use evaluator::{evaluate, is_stalled, physics_evaluator_system};
pub use integrator::{
    integrate, kinematic_integrator_system, simulation_command_system, simulation_running,
};
