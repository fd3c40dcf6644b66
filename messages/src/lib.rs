use bevy::prelude::*;

pub struct MessagesPlugin;

impl Plugin for MessagesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MoveIntent>()
            .add_message::<InteractPressed>()
            .add_message::<PausePressed>()
            .register_type::<MoveIntent>();
    }
}

/// Planar movement requested by the player this frame, each axis in `[-1, 1]`.
#[derive(Message, Reflect, Default, Debug, Clone, Copy, PartialEq)]
#[reflect(Default)]
pub struct MoveIntent(pub Vec2);

#[derive(Message, Default, Debug, Clone, Copy)]
pub struct InteractPressed;

#[derive(Message, Default, Debug, Clone, Copy)]
pub struct PausePressed;
