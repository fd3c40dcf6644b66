mod runner;
mod systems;

pub use {runner::*, systems::*};

use {
    bevy::prelude::*,
    dialogue_assets::{DialogueLibrary, DialogueLine},
    interaction_components::Interactable,
    system_schedule::GameSchedule,
};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueRunner>()
            .init_resource::<DialogueLibrary>()
            .init_resource::<DialogueView>()
            .register_type::<DialogueView>()
            .register_type::<Talkable>()
            .add_systems(Update, tick_dialogue.in_set(GameSchedule::Effect))
            .add_observer(on_start_dialogue)
            .add_observer(on_start_dialogue_by_name)
            .add_observer(on_advance_dialogue)
            .add_observer(on_interacted_talk);
    }
}

/// Plays `lines` from the top, replacing any running dialogue.
#[derive(Event, Debug, Clone)]
pub struct StartDialogue {
    pub lines: Vec<DialogueLine>,
}

#[derive(Event, Debug, Clone)]
pub struct StartDialogueByName {
    pub name: String,
}

/// Finishes the line being typed, or moves on if it is already complete.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct AdvanceDialogue;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DialogueStarted;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DialogueEnded;

/// A character the player can talk to. Interacting starts the named dialogue.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Interactable = Interactable::new("Someone", "Talk"))]
pub struct Talkable {
    pub dialogue: String,
}

/// What the dialogue box shows.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Resource)]
pub struct DialogueView {
    pub speaker: String,
    pub text: String,
    pub visible: bool,
}
