#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_forces_valid, assert_kinematics_valid};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
