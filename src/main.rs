use {
    bevy::{log::LogPlugin, prelude::*},
    bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::WorldInspectorPlugin},
    game_core::CorePlugin,
};

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(LogPlugin {
                filter: "error,loading=trace,\
                    hints=debug,\
                    cooking=info,\
                    interaction=debug,\
                    transitions=info,\
                    dialogue=debug,\
                    pause=info,\
                    settings=debug"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Hearthside".into(),
                    ..default()
                }),
                ..default()
            }),
    )
    .add_plugins(CorePlugin);

    if cfg!(debug_assertions) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins(WorldInspectorPlugin::new());
    }

    app.run();
}
