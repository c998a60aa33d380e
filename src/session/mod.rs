mod startup;
mod structures;

pub use startup::setup_app;
pub use structures::{Command, Response, SimulationSnapshot, Snapshot, TutorialSnapshot};

use bevy::prelude::*;
use crossbeam_channel::Receiver;
use thiserror::Error;

use crate::components::{KinematicComponent, TrainerAircraft};
use crate::plugins::{attach_narrator, ParameterChanged, ResetParameters};
use crate::rendering::{ForceDiagram, RenderError};
use crate::resources::{
    ChannelNarrator, Feedback, FlightParameters, ForceState, SimulationControl, TrainerConfig,
    TutorialState,
};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Session already closed")]
    Closed,
}

/// A headless trainer driven one command at a time.
pub struct Session {
    app: App,
    narration: Receiver<String>,
    closed: bool,
}

impl Session {
    pub fn new(config: TrainerConfig) -> Self {
        Self::from_app(App::new(), config)
    }

    /// Builds the session on top of an app that may already carry host
    /// plugins, such as logging.
    pub fn from_app(app: App, config: TrainerConfig) -> Self {
        let mut app = setup_app(app, config);

        let (sender, receiver) = crossbeam_channel::unbounded();
        attach_narrator(&mut app, ChannelNarrator::new(sender));

        // Run startup and the first evaluation.
        app.update();

        Self {
            app,
            narration: receiver,
            closed: false,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies a command and reports the resulting state.
    pub fn handle(&mut self, command: Command) -> Result<Snapshot, SessionError> {
        if self.closed {
            return Err(SessionError::Closed);
        }

        match command {
            Command::Set { parameter, value } => {
                self.app
                    .world_mut()
                    .send_event(ParameterChanged::new(parameter, value));
                self.app.update();
            }
            Command::Reset => {
                self.app.world_mut().send_event(ResetParameters);
                self.app.update();
            }
            Command::Tutorial { action } => {
                self.app.world_mut().send_event(action);
                self.app.update();
            }
            Command::Simulation { action } => {
                self.app.world_mut().send_event(action);
                self.app.update();
            }
            Command::Step { frames } => {
                for _ in 0..frames {
                    self.app.update();
                }
            }
            Command::Snapshot => {}
            Command::Diagram {
                path,
                width,
                height,
            } => {
                let state = *self.app.world().resource::<ForceState>();
                ForceDiagram::from_state(&state, width, height).save_png(&path)?;
                info!("Force diagram written to {}", path.display());
            }
            Command::Quit => {
                self.closed = true;
            }
        }

        Ok(self.snapshot())
    }

    /// Captures the current state and drains pending narration.
    pub fn snapshot(&mut self) -> Snapshot {
        let narration: Vec<String> = self.narration.try_iter().collect();
        let world = self.app.world_mut();

        let kinematics = world
            .query_filtered::<&KinematicComponent, With<TrainerAircraft>>()
            .get_single(world)
            .ok()
            .cloned();

        let tutorial = world.resource::<TutorialState>();
        let step = tutorial.current_step();
        let tutorial = TutorialSnapshot {
            active: tutorial.active,
            current: tutorial.current,
            step_id: step.map(|s| s.id),
            title: step.map(|s| s.title),
            text: step.map(|s| s.text),
            completed: tutorial.completed.iter().copied().collect(),
            progress: tutorial.progress(),
        };

        let control = world.resource::<SimulationControl>();

        Snapshot {
            parameters: world.resource::<FlightParameters>().clone(),
            forces: *world.resource::<ForceState>(),
            feedback: world.resource::<Feedback>().clone(),
            tutorial,
            simulation: SimulationSnapshot {
                running: control.running,
                ticks: control.ticks,
                kinematics,
            },
            narration,
        }
    }
}
