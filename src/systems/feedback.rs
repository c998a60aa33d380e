use bevy::prelude::*;

use crate::plugins::NarrationRequest;
use crate::resources::{AdvisoryLevel, Feedback, FlightParameters, ForceState};

const LOW_SPEED: f64 = 120.0; // km/h
const HIGH_SPEED: f64 = 400.0; // km/h
const NEAR_STALL_ANGLE: f64 = 12.0; // deg
const HIGH_ALTITUDE: f64 = 9000.0; // m
const LIFT_BALANCE_TOLERANCE: f64 = 0.1; // fraction of weight
const THRUST_BALANCE_TOLERANCE: f64 = 0.2; // fraction of drag

pub const STALL_MESSAGE: &str =
    "STALL! The airflow has separated from the wing and lift has collapsed.";

/// Refreshes the advisory whenever the force state changes, and asks for a
/// spoken stall warning when the aircraft enters a stall, whatever advisory
/// ends up displayed.
pub fn feedback_system(
    params: Res<FlightParameters>,
    state: Res<ForceState>,
    mut feedback: ResMut<Feedback>,
    mut narration: EventWriter<NarrationRequest>,
    mut was_stalled: Local<bool>,
) {
    if !state.is_changed() {
        return;
    }

    let advisory = classify(&params, &state);
    if state.stalled && !*was_stalled {
        narration.send(NarrationRequest::new(STALL_MESSAGE));
    }
    *was_stalled = state.stalled;

    feedback.set_if_neq(advisory);
}

/// Maps the current parameters and forces to an advisory.
///
/// Checks run in a fixed order. Every match replaces the level and message
/// set by earlier matches and appends its own tips, so the last matching
/// check decides what the user reads.
pub fn classify(params: &FlightParameters, state: &ForceState) -> Feedback {
    let mut feedback = Feedback::default();

    if params.airspeed < LOW_SPEED {
        feedback.level = AdvisoryLevel::Caution;
        feedback.message = "Airspeed is low: the wings are producing little lift.".to_string();
        feedback
            .tips
            .push("Add throttle or lower the nose to gain speed.".to_string());
    }

    if params.airspeed > HIGH_SPEED {
        feedback.level = AdvisoryLevel::Caution;
        feedback.message = "Airspeed is high: drag rises with the square of speed.".to_string();
        feedback
            .tips
            .push("Reduce throttle to stay within structural limits.".to_string());
    }

    if params.angle_of_attack > NEAR_STALL_ANGLE && !state.stalled {
        feedback.level = AdvisoryLevel::Caution;
        feedback.message = "Approaching the critical angle of attack.".to_string();
        feedback
            .tips
            .push("Ease the nose down before the wing stalls.".to_string());
    }

    if state.stalled {
        feedback.level = AdvisoryLevel::Warning;
        feedback.message = STALL_MESSAGE.to_string();
        feedback
            .tips
            .push("Lower the angle of attack below 15 degrees.".to_string());
        feedback
            .tips
            .push("Add power to recover airspeed.".to_string());
    }

    if params.angle_of_attack < 0.0 {
        feedback.level = AdvisoryLevel::Info;
        feedback.message = "Negative angle of attack: the wing is pushing the aircraft down."
            .to_string();
        feedback
            .tips
            .push("Raise the nose to produce positive lift.".to_string());
    }

    if params.altitude > HIGH_ALTITUDE {
        feedback.level = AdvisoryLevel::Caution;
        feedback.message = "High altitude: thin air reduces both lift and drag.".to_string();
        feedback
            .tips
            .push("Fly faster to make up for the lower air density.".to_string());
    }

    if is_balanced(state) {
        feedback.level = AdvisoryLevel::Info;
        feedback.message = "Forces are balanced: steady, level flight.".to_string();
    }

    feedback
}

fn is_balanced(state: &ForceState) -> bool {
    let forces = &state.forces;
    let lift_balanced =
        (forces.lift - forces.weight).abs() <= LIFT_BALANCE_TOLERANCE * forces.weight;
    let thrust_balanced =
        (forces.thrust - forces.drag).abs() <= THRUST_BALANCE_TOLERANCE * forces.drag.max(1.0);
    lift_balanced && thrust_balanced
}
