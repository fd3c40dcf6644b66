//! Folder handles kept alive while loading.

use bevy::{asset::LoadedFolder, prelude::*};

#[derive(Debug, Resource)]
pub(super) struct HintsFolderHandle(pub Handle<LoadedFolder>);

#[derive(Debug, Resource)]
pub(super) struct DialogueFolderHandle(pub Handle<LoadedFolder>);
