mod cookware;
mod cutting;
mod food;
mod pantry;
pub mod physics;
mod sequence;

pub use {cookware::*, cutting::*, food::*, pantry::*, sequence::*};

use {
    bevy::prelude::*, cooking_components::CookingComponentsPlugin, system_schedule::GameSchedule,
};

pub struct CookingPlugin;

impl Plugin for CookingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CookingComponentsPlugin)
            .init_resource::<CursorWorld>()
            .init_resource::<CookingInstruction>()
            .register_type::<CookingInstruction>()
            .add_systems(
                Update,
                (
                    update_cursor_world.in_set(GameSchedule::FrameStart),
                    (
                        pick_up_cookware,
                        drag_cookware,
                        release_cookware,
                        handle_cutting_swipes,
                    )
                        .chain()
                        .in_set(GameSchedule::ResolveIntent),
                    (
                        detect_bowl_shake,
                        prune_bowl_contents,
                        track_bowl_containment,
                        simulate_food,
                    )
                        .chain()
                        .in_set(GameSchedule::PerformAction),
                    (start_cooking_sequences, advance_cooking_sequences)
                        .in_set(GameSchedule::Effect),
                ),
            )
            .add_observer(on_shake_bowl)
            .add_observer(on_pour_bowl)
            .add_observer(on_reset_cookware)
            .add_observer(on_cooking_step_started)
            .add_observer(on_cooking_step_completed)
            .add_observer(on_step_started_show_instruction)
            .add_observer(on_finished_show_instruction)
            .add_observer(on_toggle_pantry)
            .add_observer(on_take_ingredient);
    }
}
