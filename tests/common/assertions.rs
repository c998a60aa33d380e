use liftoff::{components::KinematicComponent, resources::ForceState};

/// Assert that every force is finite and non-negative
#[track_caller]
pub fn assert_forces_valid(state: &ForceState) {
    let forces = &state.forces;
    for (name, value) in [
        ("lift", forces.lift),
        ("drag", forces.drag),
        ("thrust", forces.thrust),
        ("weight", forces.weight),
    ] {
        assert!(value.is_finite(), "{} is not finite", name);
        assert!(value >= 0.0, "{} is negative: {}", name, value);
    }
    assert!(state.air_data.density > 0.0, "Density must be positive");
}

/// Assert that the aircraft's kinematic state is finite and above ground
#[track_caller]
pub fn assert_kinematics_valid(kinematics: &KinematicComponent) {
    assert!(
        kinematics.position.iter().all(|v| v.is_finite()),
        "Position is not finite"
    );
    assert!(
        kinematics.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite"
    );
    assert!(kinematics.position.z >= 0.0, "Aircraft below ground");
    assert!(kinematics.velocity.x >= 0.0, "Aircraft flying backwards");
}
