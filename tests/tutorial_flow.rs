mod common;

use common::*;
use liftoff::{
    plugins::{ParameterChanged, TutorialCommand, TutorialStepCompleted},
    resources::{FlightParameter, TutorialState},
};
use pretty_assertions::assert_eq;

fn tutorial_app() -> TestApp {
    TestAppBuilder::new()
        .with_config(create_test_config())
        .with_frame_duration(0.1)
        .build()
}

fn step_id(app: &TestApp) -> Option<&'static str> {
    app.resource::<TutorialState>().current_step().map(|s| s.id)
}

#[test]
fn test_tutorial_starts_inactive() {
    let app = tutorial_app();
    let tutorial = app.resource::<TutorialState>();
    assert!(!tutorial.active);
    assert_eq!(tutorial.progress().0, 0);
}

#[test]
fn test_start_narrates_welcome() {
    let mut app = tutorial_app();
    app.spoken();

    app.apply(TutorialCommand::Start);

    assert!(app.resource::<TutorialState>().active);
    assert_eq!(step_id(&app), Some("welcome"));
    let spoken = app.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].starts_with("Welcome."));
}

#[test]
fn test_informational_step_waits_for_next() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);

    app.run_steps(20);
    assert_eq!(step_id(&app), Some("welcome"));

    app.apply(TutorialCommand::Next);
    assert_eq!(step_id(&app), Some("airspeed"));
}

#[test]
fn test_completed_step_advances_after_delay() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);
    app.apply(TutorialCommand::Next);
    app.spoken();

    app.apply(ParameterChanged::new(FlightParameter::Airspeed, 320.0));

    let tutorial = app.resource::<TutorialState>();
    assert!(tutorial.is_completed("airspeed"));
    assert!(tutorial.pending_advance.is_some());
    assert_eq!(step_id(&app), Some("airspeed"));
    assert_eq!(app.spoken(), vec!["Well done!".to_string()]);

    // 0.5 s delay at 0.1 s per frame.
    app.run_steps(2);
    assert_eq!(step_id(&app), Some("airspeed"));
    app.run_steps(8);
    assert_eq!(step_id(&app), Some("angle_of_attack"));

    let spoken = app.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].starts_with("Angle of attack."));
}

#[test]
fn test_step_already_satisfied_completes_on_entry() {
    let mut app = tutorial_app();
    app.apply(ParameterChanged::new(FlightParameter::Airspeed, 400.0));
    app.apply(TutorialCommand::Start);
    app.apply(TutorialCommand::Next);
    app.run_frame();

    assert!(app.resource::<TutorialState>().is_completed("airspeed"));
}

#[test]
fn test_stall_lesson_sequence() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);
    for _ in 0..2 {
        app.apply(TutorialCommand::Next);
    }
    assert_eq!(step_id(&app), Some("angle_of_attack"));

    app.apply(ParameterChanged::new(FlightParameter::AngleOfAttack, 10.0));
    app.run_steps(8);
    assert_eq!(step_id(&app), Some("stall"));

    app.apply(ParameterChanged::new(FlightParameter::AngleOfAttack, 18.0));
    app.run_steps(8);
    assert_eq!(step_id(&app), Some("recovery"));

    app.apply(ParameterChanged::new(FlightParameter::AngleOfAttack, 4.0));
    app.run_steps(8);
    assert_eq!(step_id(&app), Some("throttle"));

    let tutorial = app.resource::<TutorialState>();
    for id in ["angle_of_attack", "stall", "recovery"] {
        assert!(tutorial.is_completed(id), "{} not completed", id);
    }
}

#[test]
fn test_manual_next_cancels_pending_advance() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);
    app.apply(TutorialCommand::Next);
    app.apply(ParameterChanged::new(FlightParameter::Airspeed, 320.0));

    app.apply(TutorialCommand::Next);
    app.run_steps(10);

    // Only the manual advance happened.
    assert_eq!(step_id(&app), Some("angle_of_attack"));
    assert_eq!(app.resource::<TutorialState>().pending_advance, None);
}

#[test]
fn test_previous_and_restart_keep_completed_steps() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);
    app.apply(TutorialCommand::Next);
    app.apply(ParameterChanged::new(FlightParameter::Airspeed, 320.0));
    app.run_steps(8);

    app.apply(TutorialCommand::Previous);
    assert_eq!(step_id(&app), Some("airspeed"));

    app.apply(TutorialCommand::Restart);
    let tutorial = app.resource::<TutorialState>();
    assert_eq!(tutorial.current, 0);
    assert!(tutorial.active);
    assert!(tutorial.is_completed("airspeed"));
}

#[test]
fn test_dismiss_stops_tracking() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);
    app.apply(TutorialCommand::Next);
    app.apply(TutorialCommand::Dismiss);

    app.apply(ParameterChanged::new(FlightParameter::Airspeed, 320.0));
    app.run_steps(10);

    let tutorial = app.resource::<TutorialState>();
    assert!(!tutorial.active);
    assert!(!tutorial.is_completed("airspeed"));
}

#[test]
fn test_completion_sends_step_completed_event() {
    let mut app = tutorial_app();
    app.apply(TutorialCommand::Start);
    app.apply(TutorialCommand::Next);
    assert!(app.events::<TutorialStepCompleted>().is_empty());

    app.apply(ParameterChanged::new(FlightParameter::Airspeed, 320.0));

    assert_eq!(
        app.events::<TutorialStepCompleted>(),
        vec![TutorialStepCompleted { id: "airspeed" }]
    );

    // Holding the value does not complete the step again.
    app.run_frame();
    assert_eq!(app.events::<TutorialStepCompleted>().len(), 1);
}
