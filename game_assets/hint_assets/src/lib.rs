use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    hint_components::{Hint, HintError, HintSet},
    serde::Deserialize,
};

pub struct HintAssetsPlugin;

impl Plugin for HintAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<HintSetDefinition>::new(&["hints.ron"]));
    }
}

/// One level's hint configuration, loaded from `*.hints.ron`.
///
/// The asset is never mutated at runtime. The hint manager works on the
/// [`HintSet`] built from it, so completion state cannot leak back into the file.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct HintSetDefinition {
    pub level_name: String,
    #[serde(default = "default_auto_start")]
    pub auto_start_first_hint: bool,
    pub hints: Vec<Hint>,
}

fn default_auto_start() -> bool {
    true
}

impl HintSetDefinition {
    /// Builds a fresh runtime set with every hint pending.
    pub fn to_hint_set(&self) -> Result<HintSet, HintError> {
        let mut hints = self.hints.clone();
        for hint in &mut hints {
            hint.is_completed = false;
        }
        HintSet::new(
            self.level_name.clone(),
            hints,
            self.auto_start_first_hint,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KITCHEN: &str = r#"(
        level_name: "kitchen",
        hints: [
            (id: 1, text: "Use WASD to move around the kitchen"),
            (id: 2, text: "Press E near the stove", display_duration: 0.0),
            (id: 3, text: "Shake the bowl to mix", display_duration: 5.0),
        ],
    )"#;

    #[test]
    fn parses_definition_with_defaults() {
        let definition: HintSetDefinition = ron::from_str(KITCHEN).unwrap();
        assert_eq!(definition.level_name, "kitchen");
        assert!(definition.auto_start_first_hint);
        assert_eq!(definition.hints.len(), 3);
        assert_eq!(definition.hints[0].display_duration, 0.0);
        assert_eq!(definition.hints[2].display_duration, 5.0);
    }

    #[test]
    fn runtime_set_starts_pending() {
        let mut definition: HintSetDefinition = ron::from_str(KITCHEN).unwrap();
        definition.hints[0].is_completed = true;

        let set = definition.to_hint_set().unwrap();
        assert!(set.iter().all(|hint| !hint.is_completed));
        assert_eq!(set.next_incomplete().map(|h| h.id), Some(1));
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let definition: HintSetDefinition = ron::from_str(
            r#"(level_name: "pantry", auto_start_first_hint: false, hints: [
                (id: 4, text: "a"), (id: 4, text: "b"),
            ])"#,
        )
        .unwrap();
        assert!(matches!(
            definition.to_hint_set(),
            Err(HintError::DuplicateHintId { hint_id: 4, .. })
        ));
    }
}
