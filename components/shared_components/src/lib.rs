use bevy::prelude::*;

pub struct SharedComponentsPlugin;

impl Plugin for SharedComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>();
        app.register_type::<PlayerMotor>();
        app.register_type::<DisplayName>();
    }
}

/// The character the keyboard controls. There is exactly one.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
#[require(PlayerMotor)]
pub struct Player;

/// Walking state of the player.
///
/// `input` is the latest move intent in `[-1, 1]` per axis. Transitions switch
/// `inputs_enabled` off so the player cannot walk while the screen is black.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct PlayerMotor {
    pub move_speed: f32,
    pub input: Vec2,
    pub facing_right: bool,
    pub inputs_enabled: bool,
}

impl Default for PlayerMotor {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            input: Vec2::ZERO,
            facing_right: true,
            inputs_enabled: true,
        }
    }
}

impl PlayerMotor {
    /// Stores a new intent, updating facing from its horizontal sign. Zero keeps the
    /// previous facing.
    pub fn set_input(&mut self, input: Vec2) {
        self.input = input.clamp(Vec2::NEG_ONE, Vec2::ONE);
        if self.input.x > 0.0 {
            self.facing_right = true;
        } else if self.input.x < 0.0 {
            self.facing_right = false;
        }
    }

    pub fn step(&self, dt: f32) -> Vec2 {
        if !self.inputs_enabled {
            return Vec2::ZERO;
        }
        self.input * self.move_speed * dt
    }
}

#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct DisplayName(pub String);

impl From<&str> for DisplayName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DisplayName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
