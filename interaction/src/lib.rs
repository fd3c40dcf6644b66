mod focus;
mod zones;

pub use {focus::*, zones::*};

use {
    bevy::prelude::*, interaction_components::InteractionComponentsPlugin,
    system_schedule::GameSchedule,
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InteractionComponentsPlugin)
            .init_resource::<FocusedInteractable>()
            .register_type::<FocusedInteractable>()
            .add_systems(
                Update,
                (
                    (focus_nearest_interactable, interact_with_focused)
                        .chain()
                        .in_set(GameSchedule::ResolveIntent),
                    fire_hint_trigger_zones.in_set(GameSchedule::Effect),
                ),
            )
            .add_observer(on_interacted_fire_hint_trigger)
            .add_observer(on_interacted_open_door);
    }
}
