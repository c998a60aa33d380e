use bevy::prelude::*;

use crate::plugins::{NarrationRequest, TrainerSet};
use crate::resources::Feedback;
use crate::systems::feedback_system;

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Feedback>()
            .add_event::<NarrationRequest>()
            .add_systems(Update, feedback_system.in_set(TrainerSet::Analyse));
    }
}
