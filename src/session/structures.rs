use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::KinematicComponent;
use crate::plugins::{SimulationCommand, TutorialCommand};
use crate::resources::{Feedback, FlightParameter, FlightParameters, ForceState};

fn default_diagram_width() -> u32 {
    400
}

fn default_diagram_height() -> u32 {
    300
}

/// One line of input to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", deny_unknown_fields)]
pub enum Command {
    /// Move a slider.
    Set { parameter: FlightParameter, value: f64 },
    /// Restore the starting parameters.
    Reset,
    Tutorial { action: TutorialCommand },
    Simulation { action: SimulationCommand },
    /// Advance the given number of frames.
    Step { frames: u32 },
    /// Report the current state without changing it.
    Snapshot,
    /// Write the force diagram to a PNG file.
    Diagram {
        path: PathBuf,
        #[serde(default = "default_diagram_width")]
        width: u32,
        #[serde(default = "default_diagram_height")]
        height: u32,
    },
    /// End the session.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorialSnapshot {
    pub active: bool,
    pub current: usize,
    pub step_id: Option<&'static str>,
    pub title: Option<&'static str>,
    pub text: Option<&'static str>,
    pub completed: Vec<&'static str>,
    pub progress: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub running: bool,
    pub ticks: u64,
    pub kinematics: Option<KinematicComponent>,
}

/// Everything the UI renders, captured after a command has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub parameters: FlightParameters,
    pub forces: ForceState,
    pub feedback: Feedback,
    pub tutorial: TutorialSnapshot,
    pub simulation: SimulationSnapshot,
    /// Utterances handed to the narrator while applying the command
    pub narration: Vec<String>,
}

/// One line of output from a session.
#[derive(Debug, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
}

impl Response {
    pub fn success(snapshot: Snapshot) -> Self {
        Self {
            ok: true,
            error: None,
            snapshot: Some(snapshot),
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
            snapshot: None,
        }
    }
}
