pub mod config;
mod feedback;
mod forces;
mod narration;
mod parameters;
mod simulation;
mod tutorial;

pub use config::{
    ConfigError, NarrationConfig, PhysicsConfig, SimulationConfig, TrainerConfig, TutorialConfig,
};
pub use feedback::{AdvisoryLevel, Feedback};
pub use forces::{AirData, ForceState, Forces};
pub use narration::{ChannelNarrator, LogNarrator, NarrationResource, Narrator};
pub use parameters::{FlightParameter, FlightParameters, InitialParameters};
pub use simulation::SimulationControl;
pub use tutorial::{TutorialState, TutorialStep, TUTORIAL_STEPS};
