use bevy::prelude::*;

use crate::plugins::{ParameterChanged, ResetParameters};
use crate::resources::{FlightParameters, InitialParameters};

/// Applies slider changes to the parameter store.
///
/// All changes read in one frame are applied together, after any reset, so
/// the evaluator sees a single consistent update. Change detection only fires
/// when a value actually moved.
pub fn parameter_input_system(
    mut changes: EventReader<ParameterChanged>,
    mut resets: EventReader<ResetParameters>,
    initial: Res<InitialParameters>,
    mut params: ResMut<FlightParameters>,
) {
    let mut updated = if resets.read().count() > 0 {
        info!("Resetting flight parameters");
        initial.0.clone()
    } else {
        params.clone()
    };

    for change in changes.read() {
        let stored = updated.set(change.parameter, change.value);
        debug!("{} set to {} {}", change.parameter, stored, change.parameter.unit());
    }

    params.set_if_neq(updated);
}
