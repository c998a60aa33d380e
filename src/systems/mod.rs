mod feedback;
mod input;
mod narration;
pub mod physics;
mod tutorial;

pub use feedback::{classify, feedback_system, STALL_MESSAGE};
pub use input::parameter_input_system;
pub use narration::narration_system;
pub use physics::{
    evaluate, integrate, is_stalled, kinematic_integrator_system, physics_evaluator_system,
    simulation_command_system, simulation_running,
};
pub use tutorial::{tutorial_command_system, tutorial_tracker_system};
