use bevy::prelude::*;

use crate::plugins::{NarrationRequest, TrainerSet, TutorialCommand, TutorialStepCompleted};
use crate::resources::{TutorialConfig, TutorialState, TUTORIAL_STEPS};
use crate::systems::{tutorial_command_system, tutorial_tracker_system};

#[derive(Default)]
pub struct TutorialPlugin {
    pub config: TutorialConfig,
}

impl Plugin for TutorialPlugin {
    fn build(&self, app: &mut App) {
        let mut tutorial = TutorialState::new(TUTORIAL_STEPS, self.config.advance_delay);
        if self.config.auto_start {
            tutorial.start();
        }

        app.insert_resource(self.config.clone())
            .insert_resource(tutorial)
            .add_event::<TutorialCommand>()
            .add_event::<TutorialStepCompleted>()
            .add_event::<NarrationRequest>()
            .add_systems(
                PreUpdate,
                tutorial_command_system.in_set(TrainerSet::Input),
            )
            .add_systems(Update, tutorial_tracker_system.in_set(TrainerSet::Analyse));
    }
}
