use bevy::prelude::*;

use crate::plugins::NarrationRequest;
use crate::resources::NarrationResource;

/// Forwards narration requests to the narrator, dropping repeats inside the cooldown.
pub fn narration_system(
    mut requests: EventReader<NarrationRequest>,
    mut narration: ResMut<NarrationResource>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs_f64();
    for request in requests.read() {
        narration.announce(&request.text, now);
    }
}
