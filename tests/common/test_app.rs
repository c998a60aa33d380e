use bevy::{prelude::*, time::TimeUpdateStrategy};
use crossbeam_channel::Receiver;
use liftoff::{
    components::{KinematicComponent, TrainerAircraft},
    plugins::{attach_narrator, TrainerPlugin},
    resources::{ChannelNarrator, FlightParameters, TrainerConfig},
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: TrainerConfig,
    frame_duration: Duration,
    narrator: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: TrainerConfig::default(),
            frame_duration: Duration::from_secs_f64(1.0 / 60.0),
            narrator: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_parameters(mut self, parameters: FlightParameters) -> Self {
        self.config.parameters = parameters;
        self
    }

    pub fn with_tutorial_delay(mut self, seconds: f64) -> Self {
        self.config.tutorial.advance_delay = seconds;
        self
    }

    pub fn with_frame_duration(mut self, seconds: f64) -> Self {
        self.frame_duration = Duration::from_secs_f64(seconds);
        self
    }

    pub fn without_narrator(mut self) -> Self {
        self.narrator = false;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame_duration))
            .add_plugins(TrainerPlugin::new(self.config));

        let (sender, receiver) = crossbeam_channel::unbounded();
        if self.narrator {
            attach_narrator(&mut app, ChannelNarrator::new(sender));
        }

        // Run an initial update to initialize everything
        app.update();

        TestApp {
            app,
            narration: receiver,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    narration: Receiver<String>,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Sends an event and runs one frame so it takes effect.
    pub fn apply<E: Event>(&mut self, event: E) {
        self.send(event);
        self.run_frame();
    }

    /// Events of type `E` still buffered in the world, oldest first.
    pub fn events<E: Event + Clone>(&self) -> Vec<E> {
        let events = self.app.world().resource::<Events<E>>();
        events.get_cursor().read(events).cloned().collect()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<T> {
        self.app.world_mut().resource_mut::<T>()
    }

    pub fn aircraft(&mut self) -> KinematicComponent {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&KinematicComponent, With<TrainerAircraft>>();
        query
            .get_single(world)
            .expect("trainer aircraft not spawned")
            .clone()
    }

    /// Everything handed to the narrator since the last call.
    pub fn spoken(&self) -> Vec<String> {
        self.narration.try_iter().collect()
    }
}
