use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
};

pub struct DialogueAssetsPlugin;

impl Plugin for DialogueAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<DialogueDefinition>::new(&["dialogue.ron"]));
    }
}

#[derive(Debug, Clone, PartialEq, Reflect, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// A conversation loaded from `*.dialogue.ron`.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct DialogueDefinition {
    pub name: String,
    pub lines: Vec<DialogueLine>,
}

/// Dialogue definitions indexed by name, filled during loading.
#[derive(Resource, Default)]
pub struct DialogueLibrary {
    pub dialogues: HashMap<String, Handle<DialogueDefinition>>,
}

impl DialogueLibrary {
    pub fn get(&self, name: &str) -> Option<&Handle<DialogueDefinition>> {
        self.dialogues.get(name)
    }
}
