use {
    bevy::prelude::*,
    interaction_components::PlayerInteraction,
    messages::{InteractPressed, MoveIntent, PausePressed},
    shared_components::{DisplayName, Player, PlayerMotor, SharedComponentsPlugin},
    system_schedule::GameSchedule,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SharedComponentsPlugin).add_systems(
            Update,
            (
                read_player_input.in_set(GameSchedule::FrameStart),
                apply_movement.in_set(GameSchedule::PerformAction),
            ),
        );
    }
}

const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const INTERACT: [KeyCode; 2] = [KeyCode::KeyE, KeyCode::Space];

pub fn player_bundle(position: Vec2) -> impl Bundle {
    (
        Player,
        PlayerInteraction::default(),
        DisplayName::from("Cook"),
        Sprite::from_color(Color::srgb(0.85, 0.55, 0.35), Vec2::new(0.6, 1.0)),
        Transform::from_translation(position.extend(5.0)),
    )
}

fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Relays the keyboard into gameplay messages. Pause is always relayed, the rest
/// only while the player has control and the game is running.
pub fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time<Virtual>>,
    motors: Query<&PlayerMotor, With<Player>>,
    mut moves: MessageWriter<MoveIntent>,
    mut interacts: MessageWriter<InteractPressed>,
    mut pauses: MessageWriter<PausePressed>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        pauses.write(PausePressed);
    }

    let enabled = motors.single().is_ok_and(|motor| motor.inputs_enabled);
    if !enabled || time.is_paused() {
        return;
    }

    let intent = Vec2::new(axis(&keyboard, LEFT, RIGHT), axis(&keyboard, DOWN, UP));
    moves.write(MoveIntent(intent.normalize_or_zero()));
    if keyboard.any_just_pressed(INTERACT) {
        interacts.write(InteractPressed);
    }
}

pub fn apply_movement(
    time: Res<Time>,
    mut intents: MessageReader<MoveIntent>,
    mut players: Query<(&mut Transform, &mut PlayerMotor, Option<&mut Sprite>), With<Player>>,
) {
    let latest = intents.read().last().copied();
    let Ok((mut transform, mut motor, sprite)) = players.single_mut() else {
        return;
    };

    motor.set_input(latest.map_or(Vec2::ZERO, |intent| intent.0));
    let step = motor.step(time.delta_secs());
    transform.translation += step.extend(0.0);

    if let Some(mut sprite) = sprite
        && sprite.flip_x == motor.facing_right
    {
        sprite.flip_x = !motor.facing_right;
    }
}
