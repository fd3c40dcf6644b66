use bevy::prelude::*;

/// The player used the target interactable.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct Interacted {
    pub entity: Entity,
}

/// Fades the screen out, moves `player` to `target` and fades back in.
#[derive(Event, Debug, Clone, Copy)]
pub struct TransitionToPosition {
    pub target: Vec2,
    pub player: Entity,
    pub face_right: bool,
}

/// The screen is fully visible again after a transition.
#[derive(Event, Debug, Clone, Copy)]
pub struct TransitionFinished {
    pub player: Entity,
}
