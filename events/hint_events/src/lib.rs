//! The hint progression bus.
//!
//! Every request below is a global observer event: publishers call
//! `commands.trigger(..)` and the `hints` crate owns the only observers that act
//! on them. Delivery is synchronous and ordered once the commands are applied.

use {bevy::prelude::*, hint_components::HintSet};

/// Shows the given hint if it exists in the loaded set and is not completed yet.
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerHint {
    pub hint_id: i32,
}

/// Cascade-completes every hint with an id up to and including `hint_id`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CompleteHint {
    pub hint_id: i32,
}

/// Completes the displayed hint, cascading like [`CompleteHint`]. Debug builds bind it to F1.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CompleteCurrentHint;

/// Shows the lowest-id incomplete hint of the loaded set.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ShowNextHint;

/// Fades out the displayed hint without completing it.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct HideHint;

/// Replaces the active hint set.
#[derive(Event, Debug, Clone)]
pub struct LoadLevelHints {
    pub set: HintSet,
}

/// Replaces the active hint set with the one registered for `level_name`.
#[derive(Event, Debug, Clone)]
pub struct LoadLevelHintsByName {
    pub level_name: String,
}

/// Drops the active hint set. Its completion state is discarded.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UnloadLevelHints;

/// Fires the `HintTrigger` on `entity`.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct ActivateHintTrigger {
    pub entity: Entity,
}

// --- Notifications ---

/// A hint became the displayed hint.
#[derive(Event, Debug, Clone)]
pub struct HintShown {
    pub hint_id: i32,
    pub text: String,
}

/// The hint surface finished fading out.
#[derive(Event, Debug, Clone, Copy)]
pub struct HintHidden {
    pub hint_id: Option<i32>,
}

/// Hints that went from pending to completed in one cascade, in declaration order.
#[derive(Event, Debug, Clone)]
pub struct HintsCompleted {
    pub hint_ids: Vec<i32>,
}
