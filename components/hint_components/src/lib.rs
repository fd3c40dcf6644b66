use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Failures surfaced by the hint system. None of these are fatal; callers log them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("no level hints are loaded")]
    NoLevelHints,
    #[error("hint not found: {0}")]
    UnknownHint(i32),
    #[error("hint set '{level_name}' declares hint id {hint_id} more than once")]
    DuplicateHintId { level_name: String, hint_id: i32 },
}

/// A single tutorial hint.
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Hint {
    pub id: i32,
    pub text: String,
    /// Seconds the hint stays up before it completes itself. `0.0` means it waits
    /// for an external trigger.
    #[serde(default)]
    pub display_duration: f32,
    /// Runtime only. Never written back into configuration.
    #[serde(skip)]
    pub is_completed: bool,
}

impl Hint {
    pub fn new(id: i32, text: impl Into<String>, display_duration: f32) -> Self {
        Self {
            id,
            text: text.into(),
            display_duration,
            is_completed: false,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.display_duration > 0.0
    }
}

/// The hints belonging to one level, in declaration order.
///
/// Ids are unique within a set; [`HintSet::new`] rejects duplicates so lookups by id
/// are unambiguous. Ordering for progression is always by id, never by position.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct HintSet {
    level_name: String,
    hints: Vec<Hint>,
    auto_start_first_hint: bool,
}

impl HintSet {
    pub fn new(
        level_name: impl Into<String>,
        hints: Vec<Hint>,
        auto_start_first_hint: bool,
    ) -> Result<Self, HintError> {
        let level_name = level_name.into();
        let mut seen = Vec::with_capacity(hints.len());
        for hint in &hints {
            if seen.contains(&hint.id) {
                return Err(HintError::DuplicateHintId {
                    level_name,
                    hint_id: hint.id,
                });
            }
            seen.push(hint.id);
        }

        Ok(Self {
            level_name,
            hints,
            auto_start_first_hint,
        })
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn auto_start_first_hint(&self) -> bool {
        self.auto_start_first_hint
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hint> {
        self.hints.iter()
    }

    pub fn get(&self, id: i32) -> Option<&Hint> {
        self.hints.iter().find(|hint| hint.id == id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut Hint> {
        self.hints.iter_mut().find(|hint| hint.id == id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// The incomplete hint with the smallest id.
    pub fn next_incomplete(&self) -> Option<&Hint> {
        self.hints
            .iter()
            .filter(|hint| !hint.is_completed)
            .min_by_key(|hint| hint.id)
    }

    /// Ids of every hint with `id <= target`, completed or not.
    pub fn ids_up_to(&self, target: i32) -> Vec<i32> {
        self.hints
            .iter()
            .filter(|hint| hint.id <= target)
            .map(|hint| hint.id)
            .collect()
    }

    /// Marks every hint with `id <= target` as completed and returns the ids that
    /// were still pending, in declaration order.
    pub fn complete_up_to(&mut self, target: i32) -> Vec<i32> {
        let mut newly_completed = Vec::new();
        for hint in self.hints.iter_mut().filter(|hint| hint.id <= target) {
            if !hint.is_completed {
                hint.is_completed = true;
                newly_completed.push(hint.id);
            }
        }
        newly_completed
    }

    pub fn reset_all(&mut self) {
        for hint in &mut self.hints {
            hint.is_completed = false;
        }
    }

    pub fn all_completed(&self) -> bool {
        self.hints.iter().all(|hint| hint.is_completed)
    }
}

/// How a [`HintTrigger`] decides what to complete when it fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum HintTriggerMode {
    /// Completes the displayed hint, but only if its id is one of the trigger's ids.
    #[default]
    MatchCurrentOnly,
    /// Cascade-completes up to the highest configured id, whatever is displayed.
    CompleteUpToHighest,
}

/// World object or UI callback that can complete hints. Holds no runtime state.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct HintTrigger {
    pub hint_ids: Vec<i32>,
    pub mode: HintTriggerMode,
}

impl HintTrigger {
    pub fn new(hint_ids: impl Into<Vec<i32>>, mode: HintTriggerMode) -> Self {
        Self {
            hint_ids: hint_ids.into(),
            mode,
        }
    }

    pub fn highest_id(&self) -> Option<i32> {
        self.hint_ids.iter().copied().max()
    }

    pub fn matches(&self, hint_id: i32) -> bool {
        self.hint_ids.contains(&hint_id)
    }
}

/// Makes a [`HintTrigger`] fire when the player walks into `radius`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(ZoneOccupancy)]
pub struct HintTriggerZone {
    pub radius: f32,
}

/// Whether the player was inside the zone on the previous frame. Zones fire on the
/// outside -> inside edge only.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ZoneOccupancy {
    pub player_inside: bool,
}
