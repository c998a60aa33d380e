//! An educational flight-physics trainer.
//!
//! The trainer keeps a set of user-adjustable [`resources::FlightParameters`],
//! evaluates a simplified lift/drag/thrust/weight model from them, walks the
//! user through a scripted tutorial and explains the current state with short
//! advisories. Everything is wired together as Bevy plugins; see
//! [`plugins::TrainerPlugin`].

pub mod components;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod session;
pub mod systems;
pub mod utils;
