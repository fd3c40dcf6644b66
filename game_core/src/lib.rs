use {
    bevy::prelude::*,
    cooking::CookingPlugin,
    dialogue::DialoguePlugin,
    hint_ui::HintUiPlugin,
    hints::HintsPlugin,
    hud::HudPlugin,
    interaction::InteractionPlugin,
    loading::LoadingManagerPlugin,
    messages::MessagesPlugin,
    pause::PausePlugin,
    pause_ui::PauseUiPlugin,
    player::PlayerPlugin,
    settings::SettingsPlugin,
    states::GameState,
    system_schedule::{GameSchedule, GameSchedulePlugin},
    transitions::TransitionsPlugin,
    widgets::WidgetsPlugin,
};

mod systems;

pub use systems::*;

/// World units per screen pixel.
pub const CAMERA_SCALE: f32 = 1.0 / 64.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins((
                GameSchedulePlugin,
                MessagesPlugin,
                LoadingManagerPlugin,
                SettingsPlugin,
                PausePlugin,
            ))
            .add_plugins(KitchenPlugin)
            .add_plugins((WidgetsPlugin, HintUiPlugin, HudPlugin, PauseUiPlugin))
            .configure_sets(
                Update,
                (
                    GameSchedule::ResolveIntent,
                    GameSchedule::PerformAction,
                    GameSchedule::Effect,
                )
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(Startup, setup_camera);

        if cfg!(debug_assertions) {
            app.add_systems(
                Update,
                debug_complete_current_hint.in_set(GameSchedule::ResolveIntent),
            );
        }
    }
}

/// Gameplay without windows, UI or asset folders. Tests drive it headless.
pub struct KitchenPlugin;

impl Plugin for KitchenPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            HintsPlugin,
            PlayerPlugin,
            InteractionPlugin,
            TransitionsPlugin,
            DialoguePlugin,
            CookingPlugin,
        ))
        .add_systems(
            OnEnter(GameState::Running),
            (spawn_kitchen, load_kitchen_hints).chain(),
        )
        .add_observer(on_interacted_toggle_pantry)
        .add_observer(on_step_completed_fire_hint_trigger);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
