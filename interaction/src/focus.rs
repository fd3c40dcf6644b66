use {
    bevy::prelude::*,
    hint_components::HintTrigger,
    hint_events::ActivateHintTrigger,
    interaction_components::{Door, Interactable, PlayerInteraction},
    interaction_events::{Interacted, TransitionToPosition},
    messages::InteractPressed,
    shared_components::Player,
};

/// The interactable the prompt currently points at.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Resource)]
pub struct FocusedInteractable {
    pub entity: Option<Entity>,
    pub name: String,
    pub prompt: String,
}

impl FocusedInteractable {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Picks the closest interactable within the player's reach.
pub fn focus_nearest_interactable(
    mut focused: ResMut<FocusedInteractable>,
    players: Query<(&Transform, &PlayerInteraction), With<Player>>,
    interactables: Query<(Entity, &Transform, &Interactable), Without<Player>>,
) {
    let Ok((player, reach)) = players.single() else {
        if focused.entity.is_some() {
            focused.clear();
        }
        return;
    };
    let origin = player.translation.truncate();

    let nearest = interactables
        .iter()
        .map(|(entity, transform, interactable)| {
            (
                entity,
                interactable,
                transform.translation.truncate().distance(origin),
            )
        })
        .filter(|(_, _, distance)| *distance <= reach.range)
        .min_by(|a, b| a.2.total_cmp(&b.2));

    match nearest {
        Some((entity, interactable, _)) if focused.entity != Some(entity) => {
            debug!(?entity, name = %interactable.name, "focused interactable");
            *focused = FocusedInteractable {
                entity: Some(entity),
                name: interactable.name.clone(),
                prompt: interactable.prompt(),
            };
        }
        Some(_) => {}
        None if focused.entity.is_some() => focused.clear(),
        None => {}
    }
}

pub fn interact_with_focused(
    mut commands: Commands,
    mut pressed: MessageReader<InteractPressed>,
    focused: Res<FocusedInteractable>,
    interactables: Query<&Interactable>,
) {
    if pressed.read().count() == 0 {
        return;
    }
    let Some(entity) = focused.entity else {
        return;
    };
    let Ok(interactable) = interactables.get(entity) else {
        return;
    };
    info!(name = %interactable.name, kind = ?interactable.kind, "interacted");
    commands.trigger(Interacted { entity });
}

pub fn on_interacted_fire_hint_trigger(
    trigger: On<Interacted>,
    mut commands: Commands,
    hint_triggers: Query<(), With<HintTrigger>>,
) {
    let entity = trigger.event().entity;
    if hint_triggers.contains(entity) {
        commands.trigger(ActivateHintTrigger { entity });
    }
}

pub fn on_interacted_open_door(
    trigger: On<Interacted>,
    mut commands: Commands,
    doors: Query<&Door>,
    players: Query<Entity, With<Player>>,
) {
    let Ok(door) = doors.get(trigger.event().entity) else {
        return;
    };
    let Ok(player) = players.single() else {
        warn!("door used without a player");
        return;
    };
    commands.trigger(TransitionToPosition {
        target: door.destination,
        player,
        face_right: door.face_right,
    });
}
