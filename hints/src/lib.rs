mod manager;
mod schedule;
mod systems;
mod triggers;

#[cfg(test)]
mod tests;

pub use manager::*;
pub use schedule::*;
pub use systems::*;
pub use triggers::*;

use {
    bevy::prelude::*,
    hint_components::{HintTrigger, HintTriggerZone, ZoneOccupancy},
    hint_resources::{HintDisplay, HintLibrary, HintTimings},
    system_schedule::GameSchedule,
};

pub struct HintsPlugin;

impl Plugin for HintsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources. Timings first, the manager reads them on init.
            .init_resource::<HintTimings>()
            .init_resource::<HintManager>()
            .init_resource::<HintDisplay>()
            .init_resource::<HintLibrary>()
            .register_type::<HintTimings>()
            .register_type::<HintDisplay>()
            .register_type::<HintTrigger>()
            .register_type::<HintTriggerZone>()
            .register_type::<ZoneOccupancy>()
            .add_systems(Update, tick_hint_manager.in_set(GameSchedule::Effect))
            // Hint bus
            .add_observer(on_trigger_hint)
            .add_observer(on_complete_hint)
            .add_observer(on_complete_current_hint)
            .add_observer(on_show_next_hint)
            .add_observer(on_hide_hint)
            .add_observer(on_load_level_hints)
            .add_observer(on_load_level_hints_by_name)
            .add_observer(on_unload_level_hints)
            .add_observer(on_activate_hint_trigger);
    }
}
