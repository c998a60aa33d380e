pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const DENSITY_SCALE_HEIGHT: f64 = 8500.0; // m
pub const KMH_PER_MS: f64 = 3.6;

pub const MAX_THRUST: f64 = 4000.0; // N at 100% throttle

// Stall model
pub const CRITICAL_ANGLE_OF_ATTACK: f64 = 15.0; // degrees
pub const STALL_LIFT_FACTOR: f64 = 0.3; // fraction of lift kept while stalled

// Tutorial and narration timing
pub const TUTORIAL_ADVANCE_DELAY: f64 = 2.0; // s
pub const NARRATION_COOLDOWN: f64 = 4.0; // s

pub const SIMULATION_TICK_RATE: f64 = 60.0; // Hz
