use {
    crate::{
        AdvanceDialogue, DialogueEnded, DialogueStarted, DialogueView, StartDialogue,
        StartDialogueByName, Talkable,
        runner::{DialogueNotice, DialogueRunner},
    },
    bevy::prelude::*,
    dialogue_assets::{DialogueDefinition, DialogueLibrary},
    interaction_events::Interacted,
};

fn sync_view(runner: &DialogueRunner, view: &mut DialogueView) {
    let next = DialogueView {
        speaker: runner.speaker().to_string(),
        text: runner.visible_text(),
        visible: runner.is_active(),
    };
    if *view != next {
        *view = next;
    }
}

fn publish_notices(commands: &mut Commands, runner: &mut DialogueRunner) {
    for notice in runner.drain_notices() {
        match notice {
            DialogueNotice::Started => commands.trigger(DialogueStarted),
            DialogueNotice::LineShown { speaker } => trace!(%speaker, "dialogue line"),
            DialogueNotice::Ended => {
                debug!("dialogue ended");
                commands.trigger(DialogueEnded);
            }
        }
    }
}

pub fn tick_dialogue(
    mut commands: Commands,
    time: Res<Time>,
    mut runner: ResMut<DialogueRunner>,
    mut view: ResMut<DialogueView>,
) {
    if !runner.is_active() {
        return;
    }
    runner.tick(time.delta());
    sync_view(&runner, &mut view);
    publish_notices(&mut commands, &mut runner);
}

pub fn on_start_dialogue(
    trigger: On<StartDialogue>,
    mut commands: Commands,
    mut runner: ResMut<DialogueRunner>,
    mut view: ResMut<DialogueView>,
) {
    let lines = trigger.event().lines.clone();
    if lines.is_empty() {
        warn!("tried to start a dialogue with no lines");
        return;
    }
    debug!(lines = lines.len(), "dialogue started");
    runner.start(lines);
    sync_view(&runner, &mut view);
    publish_notices(&mut commands, &mut runner);
}

pub fn on_start_dialogue_by_name(
    trigger: On<StartDialogueByName>,
    mut commands: Commands,
    library: Res<DialogueLibrary>,
    definitions: Res<Assets<DialogueDefinition>>,
) {
    let name = &trigger.event().name;
    let Some(definition) = library.get(name).and_then(|handle| definitions.get(handle)) else {
        error!(%name, "no dialogue registered under this name");
        return;
    };
    commands.trigger(StartDialogue {
        lines: definition.lines.clone(),
    });
}

pub fn on_advance_dialogue(
    _trigger: On<AdvanceDialogue>,
    mut commands: Commands,
    mut runner: ResMut<DialogueRunner>,
    mut view: ResMut<DialogueView>,
) {
    runner.advance();
    sync_view(&runner, &mut view);
    publish_notices(&mut commands, &mut runner);
}

/// Talking to someone mid-conversation skips ahead instead of restarting.
pub fn on_interacted_talk(
    trigger: On<Interacted>,
    mut commands: Commands,
    runner: Res<DialogueRunner>,
    talkables: Query<&Talkable>,
) {
    let Ok(talkable) = talkables.get(trigger.event().entity) else {
        return;
    };
    if runner.is_active() {
        commands.trigger(AdvanceDialogue);
    } else {
        commands.trigger(StartDialogueByName {
            name: talkable.dialogue.clone(),
        });
    }
}
