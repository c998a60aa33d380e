use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names one adjustable flight parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightParameter {
    Airspeed,
    AngleOfAttack,
    Altitude,
    Throttle,
    Weight,
    WingArea,
    LiftCoefficient,
    DragCoefficient,
}

impl FlightParameter {
    pub const ALL: [FlightParameter; 8] = [
        FlightParameter::Airspeed,
        FlightParameter::AngleOfAttack,
        FlightParameter::Altitude,
        FlightParameter::Throttle,
        FlightParameter::Weight,
        FlightParameter::WingArea,
        FlightParameter::LiftCoefficient,
        FlightParameter::DragCoefficient,
    ];

    /// Inclusive input range, matching the limits of the input slider.
    pub fn range(&self) -> (f64, f64) {
        match self {
            FlightParameter::Airspeed => (50.0, 500.0),
            FlightParameter::AngleOfAttack => (-10.0, 25.0),
            FlightParameter::Altitude => (0.0, 12_000.0),
            FlightParameter::Throttle => (0.0, 100.0),
            FlightParameter::Weight => (500.0, 100_000.0),
            FlightParameter::WingArea => (5.0, 500.0),
            FlightParameter::LiftCoefficient => (0.1, 2.0),
            FlightParameter::DragCoefficient => (0.01, 0.5),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            FlightParameter::Airspeed => "km/h",
            FlightParameter::AngleOfAttack => "deg",
            FlightParameter::Altitude => "m",
            FlightParameter::Throttle => "%",
            FlightParameter::Weight => "kg",
            FlightParameter::WingArea => "m^2",
            FlightParameter::LiftCoefficient | FlightParameter::DragCoefficient => "",
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

impl fmt::Display for FlightParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightParameter::Airspeed => "airspeed",
            FlightParameter::AngleOfAttack => "angle of attack",
            FlightParameter::Altitude => "altitude",
            FlightParameter::Throttle => "throttle",
            FlightParameter::Weight => "weight",
            FlightParameter::WingArea => "wing area",
            FlightParameter::LiftCoefficient => "lift coefficient",
            FlightParameter::DragCoefficient => "drag coefficient",
        };
        write!(f, "{}", name)
    }
}

/// Current flight parameters as set by the user.
///
/// Forces are never stored here; they are recomputed from these values by the
/// physics evaluator whenever the resource changes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParameters {
    /// km/h
    pub airspeed: f64,
    /// degrees
    pub angle_of_attack: f64,
    /// m
    pub altitude: f64,
    /// percent
    pub throttle: f64,
    /// kg
    pub weight: f64,
    /// m^2
    pub wing_area: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            airspeed: 250.0,
            angle_of_attack: 5.0,
            altitude: 3000.0,
            throttle: 50.0,
            weight: 5000.0,
            wing_area: 30.0,
            lift_coefficient: 0.8,
            drag_coefficient: 0.03,
        }
    }
}

impl FlightParameters {
    pub fn get(&self, parameter: FlightParameter) -> f64 {
        match parameter {
            FlightParameter::Airspeed => self.airspeed,
            FlightParameter::AngleOfAttack => self.angle_of_attack,
            FlightParameter::Altitude => self.altitude,
            FlightParameter::Throttle => self.throttle,
            FlightParameter::Weight => self.weight,
            FlightParameter::WingArea => self.wing_area,
            FlightParameter::LiftCoefficient => self.lift_coefficient,
            FlightParameter::DragCoefficient => self.drag_coefficient,
        }
    }

    /// Sets a parameter, clamped to its input range, and returns the stored value.
    ///
    /// Non-finite input leaves the parameter untouched.
    pub fn set(&mut self, parameter: FlightParameter, value: f64) -> f64 {
        if !value.is_finite() {
            warn!("Ignoring non-finite value for {}: {}", parameter, value);
            return self.get(parameter);
        }

        let value = parameter.clamp(value);
        let slot = match parameter {
            FlightParameter::Airspeed => &mut self.airspeed,
            FlightParameter::AngleOfAttack => &mut self.angle_of_attack,
            FlightParameter::Altitude => &mut self.altitude,
            FlightParameter::Throttle => &mut self.throttle,
            FlightParameter::Weight => &mut self.weight,
            FlightParameter::WingArea => &mut self.wing_area,
            FlightParameter::LiftCoefficient => &mut self.lift_coefficient,
            FlightParameter::DragCoefficient => &mut self.drag_coefficient,
        };
        *slot = value;
        value
    }

    /// Returns a copy with every parameter clamped to its range.
    ///
    /// Non-finite values are replaced by the parameter's default.
    pub fn clamped(&self) -> Self {
        let mut out = Self::default();
        for parameter in FlightParameter::ALL {
            out.set(parameter, self.get(parameter));
        }
        out
    }

    /// Parameters holding a NaN or infinite value.
    pub fn non_finite(&self) -> Vec<FlightParameter> {
        FlightParameter::ALL
            .into_iter()
            .filter(|p| !self.get(*p).is_finite())
            .collect()
    }
}

/// Parameters the session started with; the target of a reset.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deref)]
pub struct InitialParameters(pub FlightParameters);
