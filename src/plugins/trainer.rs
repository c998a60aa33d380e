use bevy::prelude::*;

use crate::plugins::{FeedbackPlugin, FlightModelPlugin, NarrationPlugin, TutorialPlugin};
use crate::resources::TrainerConfig;

/// Ordering of the trainer's systems within a frame.
///
/// `Input` and `Evaluate` run in `PreUpdate`, ahead of the fixed-tick
/// integrator; `Analyse` and `Narrate` run in `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TrainerSet {
    Input,
    Evaluate,
    Analyse,
    Narrate,
}

/// Everything the trainer needs, configured from a [`TrainerConfig`].
#[derive(Default)]
pub struct TrainerPlugin {
    pub config: TrainerConfig,
}

impl TrainerPlugin {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TrainerPlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        info!(
            "Building trainer: tick rate {} Hz, tutorial delay {} s",
            config.simulation.tick_rate, config.tutorial.advance_delay
        );

        app.configure_sets(PreUpdate, (TrainerSet::Input, TrainerSet::Evaluate).chain())
            .configure_sets(Update, (TrainerSet::Analyse, TrainerSet::Narrate).chain());

        app.add_plugins((
            FlightModelPlugin {
                parameters: config.parameters.clone(),
                physics: config.physics.clone(),
                simulation: config.simulation.clone(),
            },
            TutorialPlugin {
                config: config.tutorial.clone(),
            },
            FeedbackPlugin,
            NarrationPlugin {
                config: config.narration.clone(),
            },
        ));
    }
}
