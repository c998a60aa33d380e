use bevy::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::resources::{FlightParameter, FlightParameters};
use crate::utils::within_bounds;

/// One step of the scripted tutorial.
///
/// Steps without a `target` are informational: they never complete on their
/// own and are left with an explicit `next` or `dismiss`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TutorialStep {
    pub id: &'static str,
    pub target: Option<FlightParameter>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub title: &'static str,
    pub text: &'static str,
}

impl TutorialStep {
    pub fn is_informational(&self) -> bool {
        self.target.is_none()
    }

    /// Whether the tracked parameter currently lies inside the step's range.
    pub fn is_satisfied_by(&self, params: &FlightParameters) -> bool {
        match self.target {
            Some(parameter) => within_bounds(params.get(parameter), self.min, self.max),
            None => false,
        }
    }
}

pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    TutorialStep {
        id: "welcome",
        target: None,
        min: None,
        max: None,
        title: "Welcome",
        text: "Four forces act on an aircraft in flight: lift, weight, thrust and drag. \
               Use the sliders to see how each one responds.",
    },
    TutorialStep {
        id: "airspeed",
        target: Some(FlightParameter::Airspeed),
        min: Some(300.0),
        max: None,
        title: "Speed makes lift",
        text: "Lift grows with the square of airspeed. Increase airspeed above 300 km/h \
               and watch the lift arrow grow.",
    },
    TutorialStep {
        id: "angle_of_attack",
        target: Some(FlightParameter::AngleOfAttack),
        min: Some(8.0),
        max: Some(12.0),
        title: "Angle of attack",
        text: "Tilting the wing into the airflow changes how it meets the air. \
               Set the angle of attack between 8 and 12 degrees.",
    },
    TutorialStep {
        id: "stall",
        target: Some(FlightParameter::AngleOfAttack),
        min: Some(16.0),
        max: None,
        title: "The stall",
        text: "Past the critical angle of 15 degrees the airflow separates from the wing \
               and lift collapses. Raise the angle of attack above 16 degrees.",
    },
    TutorialStep {
        id: "recovery",
        target: Some(FlightParameter::AngleOfAttack),
        max: Some(10.0),
        min: None,
        title: "Stall recovery",
        text: "To recover, lower the nose. Bring the angle of attack back to 10 degrees \
               or less.",
    },
    TutorialStep {
        id: "throttle",
        target: Some(FlightParameter::Throttle),
        min: Some(80.0),
        max: None,
        title: "Thrust",
        text: "Thrust from the engines overcomes drag. Push the throttle to 80 percent \
               or more.",
    },
    TutorialStep {
        id: "altitude",
        target: Some(FlightParameter::Altitude),
        min: Some(8000.0),
        max: None,
        title: "Thin air",
        text: "Air density falls with altitude, and lift falls with it. Climb above \
               8000 metres.",
    },
    TutorialStep {
        id: "complete",
        target: None,
        min: None,
        max: None,
        title: "Tutorial complete",
        text: "You have explored lift, drag, thrust, weight and the stall. Keep \
               experimenting with the sliders.",
    },
];

/// Progress through the scripted tutorial.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct TutorialState {
    #[serde(skip)]
    steps: &'static [TutorialStep],
    pub current: usize,
    pub completed: BTreeSet<&'static str>,
    pub active: bool,
    /// Elapsed time (s) at which the pending advance fires
    pub pending_advance: Option<f64>,
    pub advance_delay: f64,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(TUTORIAL_STEPS, crate::utils::TUTORIAL_ADVANCE_DELAY)
    }
}

impl TutorialState {
    pub fn new(steps: &'static [TutorialStep], advance_delay: f64) -> Self {
        Self {
            steps,
            current: 0,
            completed: BTreeSet::new(),
            active: false,
            pending_advance: None,
            advance_delay,
        }
    }

    pub fn steps(&self) -> &'static [TutorialStep] {
        self.steps
    }

    pub fn current_step(&self) -> Option<&'static TutorialStep> {
        self.steps.get(self.current)
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn start(&mut self) {
        self.active = true;
        self.current = 0;
        self.pending_advance = None;
    }

    /// Returns to the first step. Completed steps stay completed.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Records completion of the current step if the parameters satisfy it.
    ///
    /// Returns the id of a step that completed on this call. Completion also
    /// schedules an advance `advance_delay` seconds after `now`.
    pub fn check(&mut self, params: &FlightParameters, now: f64) -> Option<&'static str> {
        if !self.active || self.pending_advance.is_some() {
            return None;
        }

        let step = self.current_step()?;
        if step.is_informational() || self.completed.contains(step.id) {
            return None;
        }

        if step.is_satisfied_by(params) {
            self.completed.insert(step.id);
            self.pending_advance = Some(now + self.advance_delay);
            Some(step.id)
        } else {
            None
        }
    }

    /// Performs a due pending advance; returns the new step index.
    pub fn update(&mut self, now: f64) -> Option<usize> {
        match self.pending_advance {
            Some(deadline) if self.active && now >= deadline => {
                self.pending_advance = None;
                self.next()
            }
            _ => None,
        }
    }

    /// Moves to the next step; a no-op on the last step.
    pub fn next(&mut self) -> Option<usize> {
        self.pending_advance = None;
        if self.is_last_step() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.pending_advance = None;
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Closes the tutorial. On the last step this is the end of the tutorial.
    pub fn dismiss(&mut self) {
        self.active = false;
        self.pending_advance = None;
    }

    /// (completed, trackable) step counts; informational steps are not trackable.
    pub fn progress(&self) -> (usize, usize) {
        let trackable = self.steps.iter().filter(|s| !s.is_informational()).count();
        (self.completed.len(), trackable)
    }
}
