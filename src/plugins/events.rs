use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::FlightParameter;

/// A slider moved.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterChanged {
    pub parameter: FlightParameter,
    pub value: f64,
}

impl ParameterChanged {
    pub fn new(parameter: FlightParameter, value: f64) -> Self {
        Self { parameter, value }
    }
}

/// Restore the parameters the session started with.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetParameters;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialCommand {
    Start,
    Next,
    Previous,
    Restart,
    Dismiss,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationCommand {
    Start,
    Stop,
    Reset,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TutorialStepCompleted {
    pub id: &'static str,
}

/// Text to be spoken by the host, subject to debounce.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NarrationRequest {
    pub text: String,
}

impl NarrationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
