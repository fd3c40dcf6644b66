use {
    crate::manager::HintManager,
    bevy::prelude::*,
    hint_components::{HintTrigger, HintTriggerMode},
    hint_events::{ActivateHintTrigger, CompleteHint},
};

/// What a trigger decided to do when it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Complete(i32),
    NoCurrentHint,
    CurrentNotListed { current: i32 },
    NoIds,
}

pub fn resolve_trigger(trigger: &HintTrigger, current: Option<i32>) -> TriggerOutcome {
    match trigger.mode {
        HintTriggerMode::CompleteUpToHighest => match trigger.highest_id() {
            Some(highest) => TriggerOutcome::Complete(highest),
            None => TriggerOutcome::NoIds,
        },
        HintTriggerMode::MatchCurrentOnly => {
            if trigger.hint_ids.is_empty() {
                return TriggerOutcome::NoIds;
            }
            match current {
                None => TriggerOutcome::NoCurrentHint,
                Some(current) if trigger.matches(current) => TriggerOutcome::Complete(current),
                Some(current) => TriggerOutcome::CurrentNotListed { current },
            }
        }
    }
}

pub fn on_activate_hint_trigger(
    trigger: On<ActivateHintTrigger>,
    mut commands: Commands,
    triggers: Query<&HintTrigger>,
    manager: Res<HintManager>,
) {
    let entity = trigger.event().entity;
    let Ok(hint_trigger) = triggers.get(entity) else {
        warn!(?entity, "activated entity has no HintTrigger");
        return;
    };

    match resolve_trigger(hint_trigger, manager.current_hint_id()) {
        TriggerOutcome::Complete(hint_id) => {
            debug!(?entity, hint_id, "hint trigger fired");
            commands.trigger(CompleteHint { hint_id });
        }
        TriggerOutcome::NoIds => warn!(?entity, "hint trigger has no hint ids"),
        outcome => debug!(?entity, ?outcome, "hint trigger ignored"),
    }
}
