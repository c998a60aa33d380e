mod events;
mod feedback;
mod flight_model;
mod narration;
mod trainer;
mod tutorial;

pub use events::{
    NarrationRequest, ParameterChanged, ResetParameters, SimulationCommand, TutorialCommand,
    TutorialStepCompleted,
};
pub use feedback::FeedbackPlugin;
pub use flight_model::FlightModelPlugin;
pub use narration::{attach_narrator, NarrationPlugin};
pub use trainer::{TrainerPlugin, TrainerSet};
pub use tutorial::TutorialPlugin;
