use {
    bevy::prelude::*,
    hint_components::{HintTriggerZone, ZoneOccupancy},
    hint_events::ActivateHintTrigger,
    shared_components::Player,
};

/// Fires a zone's hint trigger when the player steps inside it.
pub fn fire_hint_trigger_zones(
    mut commands: Commands,
    players: Query<&Transform, With<Player>>,
    mut zones: Query<(Entity, &Transform, &HintTriggerZone, &mut ZoneOccupancy), Without<Player>>,
) {
    let player = players.single().ok().map(|t| t.translation.truncate());

    for (entity, transform, zone, mut occupancy) in &mut zones {
        let inside = player.is_some_and(|position| {
            transform.translation.truncate().distance(position) <= zone.radius
        });
        if inside && !occupancy.player_inside {
            debug!(?entity, "player entered hint zone");
            commands.trigger(ActivateHintTrigger { entity });
        }
        if occupancy.player_inside != inside {
            occupancy.player_inside = inside;
        }
    }
}
