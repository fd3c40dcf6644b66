//! Player options (volumes, brightness) persisted to a RON file.
//!
//! Settings load once at startup. Every change goes through [`ChangeSetting`],
//! which clamps the value and writes the file straight away.

use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::{
        fs, io,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SettingsPath>()
            .init_resource::<Settings>()
            .register_type::<Settings>()
            .register_type::<BrightnessTint>()
            .add_systems(Startup, load_settings_on_startup)
            .add_systems(Update, apply_brightness.run_if(resource_changed::<Settings>))
            .add_observer(on_change_setting);
    }
}

pub const MIN_BRIGHT_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
pub const MAX_BRIGHT_COLOR: Color = Color::WHITE;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is malformed: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("settings could not be serialized: {0}")]
    Serialize(#[from] ron::Error),
}

/// Where settings live on disk.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SettingsPath(pub PathBuf);

impl Default for SettingsPath {
    fn default() -> Self {
        Self(PathBuf::from("settings.ron"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum SettingKind {
    MasterVolume,
    SfxVolume,
    MusicVolume,
    Brightness,
}

/// Every value is in `[0, 1]`.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct Settings {
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub music_volume: f32,
    pub brightness: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.75,
            sfx_volume: 0.75,
            music_volume: 0.75,
            brightness: 0.5,
        }
    }
}

impl Settings {
    pub fn get(&self, kind: SettingKind) -> f32 {
        match kind {
            SettingKind::MasterVolume => self.master_volume,
            SettingKind::SfxVolume => self.sfx_volume,
            SettingKind::MusicVolume => self.music_volume,
            SettingKind::Brightness => self.brightness,
        }
    }

    pub fn set(&mut self, kind: SettingKind, value: f32) {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            self.get(kind)
        };
        match kind {
            SettingKind::MasterVolume => self.master_volume = value,
            SettingKind::SfxVolume => self.sfx_volume = value,
            SettingKind::MusicVolume => self.music_volume = value,
            SettingKind::Brightness => self.brightness = value,
        }
    }

    /// Clamps every field, for values read from disk.
    pub fn sanitized(mut self) -> Self {
        for kind in [
            SettingKind::MasterVolume,
            SettingKind::SfxVolume,
            SettingKind::MusicVolume,
            SettingKind::Brightness,
        ] {
            let value = self.get(kind);
            self.set(kind, if value.is_finite() { value } else { 0.0 });
        }
        self
    }

    /// The 0 to 10 number shown next to a slider.
    pub fn display_value(&self, kind: SettingKind) -> u32 {
        (self.get(kind) * 10.0).round() as u32
    }

    /// Mixer gain in decibels, floored at -80.
    pub fn volume_db(&self, kind: SettingKind) -> f32 {
        let volume = self.get(kind);
        if volume <= 0.0 {
            -80.0
        } else {
            volume.log10() * 20.0
        }
    }

    pub fn brightness_color(&self) -> Color {
        let min = MIN_BRIGHT_COLOR.to_srgba();
        let max = MAX_BRIGHT_COLOR.to_srgba();
        let t = self.brightness;
        Color::srgb(
            min.red + (max.red - min.red) * t,
            min.green + (max.green - min.green) * t,
            min.blue + (max.blue - min.blue) * t,
        )
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = ron::from_str(&text)?;
        Ok(settings.sanitized())
    }

    /// Missing file means first launch. Anything else is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Sets one option and saves the file.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChangeSetting {
    pub kind: SettingKind,
    pub value: f32,
}

/// Sprites whose color follows the brightness option.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct BrightnessTint;

pub fn load_settings_on_startup(path: Res<SettingsPath>, mut settings: ResMut<Settings>) {
    *settings = Settings::load_or_default(&path.0);
    info!(?settings, "settings loaded");
}

pub fn on_change_setting(
    trigger: On<ChangeSetting>,
    path: Res<SettingsPath>,
    mut settings: ResMut<Settings>,
) {
    let ChangeSetting { kind, value } = *trigger.event();
    settings.set(kind, value);
    debug!(?kind, value = settings.get(kind), "setting changed");
    if let Err(error) = settings.save(&path.0) {
        error!(path = %path.0.display(), %error, "failed to save settings");
    }
}

pub fn apply_brightness(
    settings: Res<Settings>,
    mut sprites: Query<&mut Sprite, With<BrightnessTint>>,
) {
    let color = settings.brightness_color();
    for mut sprite in &mut sprites {
        sprite.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped() {
        let mut settings = Settings::default();
        settings.set(SettingKind::MasterVolume, 1.7);
        settings.set(SettingKind::Brightness, -0.3);
        settings.set(SettingKind::SfxVolume, f32::NAN);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.brightness, 0.0);
        assert_eq!(settings.sfx_volume, 0.75);
    }

    #[test]
    fn brightness_spans_grey_to_white() {
        let mut settings = Settings::default();
        settings.set(SettingKind::Brightness, 0.0);
        assert_eq!(settings.brightness_color(), MIN_BRIGHT_COLOR);
        settings.set(SettingKind::Brightness, 1.0);
        assert_eq!(settings.brightness_color().to_srgba(), Srgba::WHITE);
        settings.set(SettingKind::Brightness, 0.5);
        assert!((settings.brightness_color().to_srgba().red - 0.75).abs() < 1e-6);
    }

    #[test]
    fn display_and_decibels() {
        let settings = Settings::default();
        assert_eq!(settings.display_value(SettingKind::MusicVolume), 8);
        assert_eq!(settings.display_value(SettingKind::Brightness), 5);

        let mut muted = settings;
        muted.set(SettingKind::MasterVolume, 0.0);
        assert_eq!(muted.volume_db(SettingKind::MasterVolume), -80.0);
        muted.set(SettingKind::MasterVolume, 1.0);
        assert_eq!(muted.volume_db(SettingKind::MasterVolume), 0.0);
    }
}
