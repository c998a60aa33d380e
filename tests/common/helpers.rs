use liftoff::resources::{FlightParameters, TrainerConfig};

/// The reference case: 250 km/h at 5 degrees and 3000 m.
pub fn reference_parameters() -> FlightParameters {
    FlightParameters {
        airspeed: 250.0,
        angle_of_attack: 5.0,
        altitude: 3000.0,
        ..Default::default()
    }
}

/// Config with a short tutorial delay so tests do not need many frames.
pub fn create_test_config() -> TrainerConfig {
    let mut config = TrainerConfig::default();
    config.parameters = reference_parameters();
    config.tutorial.advance_delay = 0.5;
    config
}
