use {
    bevy::prelude::*,
    settings::{
        BrightnessTint, ChangeSetting, SettingKind, Settings, SettingsError, SettingsPath,
        SettingsPlugin,
    },
    std::fs,
};

fn app_with_settings_at(path: &std::path::Path) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SettingsPath(path.to_path_buf()))
        .add_plugins(SettingsPlugin);
    app
}

#[test]
fn save_then_load_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.ron");

    let mut settings = Settings::default();
    settings.set(SettingKind::MusicVolume, 0.2);
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn malformed_or_missing_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ron");
    assert!(matches!(Settings::load(&missing), Err(SettingsError::Io(_))));
    assert_eq!(Settings::load_or_default(&missing), Settings::default());

    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(master_volume: loud)").unwrap();
    assert!(matches!(Settings::load(&broken), Err(SettingsError::Parse(_))));
    assert_eq!(Settings::load_or_default(&broken), Settings::default());
}

#[test]
fn partial_and_out_of_range_files_are_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    fs::write(&path, "(brightness: 3.0)").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.brightness, 1.0);
    assert_eq!(settings.master_volume, 0.75);
}

#[test]
fn plugin_loads_on_startup_and_saves_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    fs::write(&path, "(master_volume: 0.3, brightness: 0.0)").unwrap();

    let mut app = app_with_settings_at(&path);
    let floor = app
        .world_mut()
        .spawn((BrightnessTint, Sprite::default()))
        .id();
    app.update();

    assert_eq!(app.world().resource::<Settings>().master_volume, 0.3);
    assert_eq!(
        app.world().get::<Sprite>(floor).unwrap().color,
        Color::srgb(0.5, 0.5, 0.5)
    );

    app.world_mut().trigger(ChangeSetting {
        kind: SettingKind::Brightness,
        value: 1.0,
    });
    app.update();
    assert_eq!(
        app.world().get::<Sprite>(floor).unwrap().color.to_srgba(),
        Srgba::WHITE
    );
    assert_eq!(Settings::load(&path).unwrap().brightness, 1.0);
}
