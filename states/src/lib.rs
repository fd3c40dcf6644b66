use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Loading,
    Running,
}

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadingPhase {
    #[default]
    Assets,
    BuildLibraries, // Index loaded hint sets and dialogues by name
    Ready,
}

/// Which panel of the pause menu is open.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseMenuState {
    #[default]
    Closed,
    Main,
    Options,
}
