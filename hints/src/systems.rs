use {
    crate::manager::{HintManager, HintNotice},
    bevy::prelude::*,
    hint_assets::HintSetDefinition,
    hint_events::{
        CompleteCurrentHint, CompleteHint, HideHint, HintHidden, HintShown, HintsCompleted, LoadLevelHints,
        LoadLevelHintsByName, ShowNextHint, TriggerHint, UnloadLevelHints,
    },
    hint_resources::{HintDisplay, HintLibrary},
};

/// Drives fades and delayed actions, then republishes what happened as events.
pub fn tick_hint_manager(
    mut commands: Commands,
    time: Res<Time>,
    mut manager: ResMut<HintManager>,
    mut display: ResMut<HintDisplay>,
) {
    manager.tick(time.delta(), &mut *display);
    publish_notices(&mut commands, &mut manager);
}

pub fn on_trigger_hint(
    trigger: On<TriggerHint>,
    mut commands: Commands,
    mut manager: ResMut<HintManager>,
    mut display: ResMut<HintDisplay>,
) {
    manager.trigger_hint(trigger.event().hint_id, &mut *display);
    publish_notices(&mut commands, &mut manager);
}

pub fn on_complete_hint(
    trigger: On<CompleteHint>,
    mut commands: Commands,
    mut manager: ResMut<HintManager>,
) {
    let hint_id = trigger.event().hint_id;
    match manager.complete_hint(hint_id) {
        Ok(completed) if completed.is_empty() => {
            debug!(hint_id, "complete request changed nothing");
        }
        Ok(_) => {}
        Err(error) => error!(hint_id, %error, "failed to complete hint"),
    }
    publish_notices(&mut commands, &mut manager);
}

pub fn on_complete_current_hint(
    _trigger: On<CompleteCurrentHint>,
    mut commands: Commands,
    mut manager: ResMut<HintManager>,
) {
    match manager.complete_current_hint() {
        None => debug!("no current hint to complete"),
        Some(Ok(completed)) => debug!(?completed, "completed current hint"),
        Some(Err(error)) => error!(%error, "failed to complete current hint"),
    }
    publish_notices(&mut commands, &mut manager);
}

pub fn on_show_next_hint(
    _trigger: On<ShowNextHint>,
    mut commands: Commands,
    mut manager: ResMut<HintManager>,
    mut display: ResMut<HintDisplay>,
) {
    if manager.show_next_hint(&mut *display).is_none() {
        debug!("show next hint: nothing left to show");
    }
    publish_notices(&mut commands, &mut manager);
}

pub fn on_hide_hint(_trigger: On<HideHint>, mut manager: ResMut<HintManager>) {
    manager.hide_current_hint();
}

pub fn on_load_level_hints(
    trigger: On<LoadLevelHints>,
    mut commands: Commands,
    mut manager: ResMut<HintManager>,
    mut display: ResMut<HintDisplay>,
) {
    manager.load_level_hints(trigger.event().set.clone(), &mut *display);
    publish_notices(&mut commands, &mut manager);
}

pub fn on_load_level_hints_by_name(
    trigger: On<LoadLevelHintsByName>,
    mut commands: Commands,
    library: Res<HintLibrary>,
    definitions: Res<Assets<HintSetDefinition>>,
) {
    let level_name = &trigger.event().level_name;
    let Some(handle) = library.get(level_name) else {
        error!(level = %level_name, "no hint set registered for level");
        return;
    };
    let Some(definition) = definitions.get(handle) else {
        error!(level = %level_name, "hint set asset is not loaded");
        return;
    };

    match definition.to_hint_set() {
        Ok(set) => commands.trigger(LoadLevelHints { set }),
        Err(error) => error!(level = %level_name, %error, "invalid hint set"),
    }
}

pub fn on_unload_level_hints(
    _trigger: On<UnloadLevelHints>,
    mut commands: Commands,
    mut manager: ResMut<HintManager>,
) {
    manager.unload_level_hints();
    publish_notices(&mut commands, &mut manager);
}

fn publish_notices(commands: &mut Commands, manager: &mut HintManager) {
    for notice in manager.drain_notices() {
        match notice {
            HintNotice::Shown { hint_id, text } => commands.trigger(HintShown { hint_id, text }),
            HintNotice::Hidden { hint_id } => commands.trigger(HintHidden { hint_id }),
            HintNotice::Completed { hint_ids } => commands.trigger(HintsCompleted { hint_ids }),
        }
    }
}
