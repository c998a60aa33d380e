use bevy::prelude::*;

use crate::plugins::{NarrationRequest, TutorialCommand, TutorialStepCompleted};
use crate::resources::{FlightParameters, TutorialState};

/// Applies navigation requests from the tutorial panel.
pub fn tutorial_command_system(
    mut commands: EventReader<TutorialCommand>,
    mut tutorial: ResMut<TutorialState>,
) {
    for command in commands.read() {
        match command {
            TutorialCommand::Start => tutorial.start(),
            TutorialCommand::Restart => tutorial.restart(),
            TutorialCommand::Next => {
                tutorial.next();
            }
            TutorialCommand::Previous => {
                tutorial.previous();
            }
            TutorialCommand::Dismiss => {
                if tutorial.is_last_step() {
                    info!("Tutorial finished");
                }
                tutorial.dismiss();
            }
        }
        debug!(
            "Tutorial command {:?}: step {} active={}",
            command, tutorial.current, tutorial.active
        );
    }
}

/// Checks the current step against the parameters and performs due advances.
///
/// Entering a step narrates its text; completing one narrates a short
/// acknowledgement.
pub fn tutorial_tracker_system(
    params: Res<FlightParameters>,
    time: Res<Time>,
    mut tutorial: ResMut<TutorialState>,
    mut completed: EventWriter<TutorialStepCompleted>,
    mut narration: EventWriter<NarrationRequest>,
    mut last_seen: Local<Option<(bool, usize)>>,
) {
    let now = time.elapsed_secs_f64();

    if tutorial.active {
        if let Some(step) = tutorial.update(now) {
            debug!("Tutorial advanced to step {}", step);
        }
        if let Some(id) = tutorial.check(&params, now) {
            info!("Tutorial step completed: {}", id);
            completed.send(TutorialStepCompleted { id });
            narration.send(NarrationRequest::new("Well done!"));
        }
    }

    let seen = (tutorial.active, tutorial.current);
    if *last_seen != Some(seen) {
        *last_seen = Some(seen);
        if let (true, Some(step)) = (tutorial.active, tutorial.current_step()) {
            info!("Tutorial step {}: {}", tutorial.current, step.id);
            narration.send(NarrationRequest::new(format!("{}. {}", step.title, step.text)));
        }
    }
}
