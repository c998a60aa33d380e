use bevy::{prelude::*, time::TimeUpdateStrategy};
use std::time::Duration;

use crate::plugins::TrainerPlugin;
use crate::resources::TrainerConfig;

/// Builds a headless trainer app in which every `update` advances exactly
/// one integration tick of simulated time.
pub fn setup_app(mut app: App, config: TrainerConfig) -> App {
    let frame = Duration::from_secs_f64(1.0 / config.simulation.tick_rate);

    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .add_plugins(TrainerPlugin::new(config));

    app
}
