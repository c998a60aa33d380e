mod kinematics;

pub use kinematics::{KinematicComponent, TrainerAircraft};
