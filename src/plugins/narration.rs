use bevy::prelude::*;

use crate::plugins::{NarrationRequest, TrainerSet};
use crate::resources::{NarrationConfig, NarrationResource, Narrator};
use crate::systems::narration_system;

/// Speech output. Without an attached narrator requests are dropped.
#[derive(Default)]
pub struct NarrationPlugin {
    pub config: NarrationConfig,
}

impl Plugin for NarrationPlugin {
    fn build(&self, app: &mut App) {
        let mut narration = NarrationResource::new(None, self.config.cooldown);
        narration.enabled = self.config.enabled;

        app.insert_resource(self.config.clone())
            .insert_resource(narration)
            .add_event::<NarrationRequest>()
            .add_systems(Update, narration_system.in_set(TrainerSet::Narrate));
    }
}

/// Attaches the host's speech capability to an app built with [`NarrationPlugin`].
pub fn attach_narrator(app: &mut App, narrator: impl Narrator + 'static) {
    match app.world_mut().get_resource_mut::<NarrationResource>() {
        Some(mut narration) => narration.set_narrator(Box::new(narrator)),
        None => warn!("NarrationPlugin not added, narrator ignored"),
    }
}
