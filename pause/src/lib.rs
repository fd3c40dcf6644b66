use {
    bevy::{app::AppExit, prelude::*},
    messages::PausePressed,
    states::PauseMenuState,
    system_schedule::GameSchedule,
};

pub struct PausePlugin;

impl Plugin for PausePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<PauseMenuState>()
            .init_resource::<PauseMode>()
            .add_systems(
                Update,
                handle_pause_pressed.in_set(GameSchedule::FrameStart),
            )
            .add_systems(OnExit(PauseMenuState::Closed), pause_virtual_time)
            .add_systems(OnEnter(PauseMenuState::Closed), resume_virtual_time)
            .add_observer(on_pause_menu_action);
    }
}

/// In-game the pause key stops time. On the main menu it only closes the
/// settings panel, which is opened from a button instead.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PauseMode {
    #[default]
    InGame,
    MainMenu,
}

/// Buttons on the pause panel.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseMenuAction {
    Resume,
    OpenOptions,
    BackToMain,
    /// Opens the panel from a main menu button.
    OpenSettings,
    Quit,
}

/// Where the pause key leads from `current`.
pub fn next_pause_state(mode: PauseMode, current: PauseMenuState) -> PauseMenuState {
    match (mode, current) {
        (PauseMode::InGame, PauseMenuState::Closed) => PauseMenuState::Main,
        (PauseMode::MainMenu, PauseMenuState::Closed) => PauseMenuState::Closed,
        (_, PauseMenuState::Main) => PauseMenuState::Closed,
        (_, PauseMenuState::Options) => PauseMenuState::Main,
    }
}

pub fn handle_pause_pressed(
    mut pressed: MessageReader<PausePressed>,
    mode: Res<PauseMode>,
    state: Res<State<PauseMenuState>>,
    mut next: ResMut<NextState<PauseMenuState>>,
) {
    let presses = pressed.read().count();
    if presses == 0 {
        return;
    }
    let mut target = *state.get();
    for _ in 0..presses {
        target = next_pause_state(*mode, target);
    }
    if target != *state.get() {
        debug!(from = ?state.get(), to = ?target, "pause menu");
        next.set(target);
    }
}

pub fn on_pause_menu_action(
    trigger: On<PauseMenuAction>,
    mode: Res<PauseMode>,
    state: Res<State<PauseMenuState>>,
    mut next: ResMut<NextState<PauseMenuState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let action = *trigger.event();
    let current = *state.get();
    let target = match action {
        PauseMenuAction::Resume => PauseMenuState::Closed,
        PauseMenuAction::OpenOptions if current != PauseMenuState::Closed => PauseMenuState::Options,
        PauseMenuAction::BackToMain if current == PauseMenuState::Options => PauseMenuState::Main,
        PauseMenuAction::OpenSettings if *mode == PauseMode::MainMenu => PauseMenuState::Main,
        PauseMenuAction::Quit => {
            info!("quit requested from pause menu");
            exit.write(AppExit::Success);
            return;
        }
        _ => {
            debug!(?action, ?current, "pause menu action ignored");
            return;
        }
    };
    next.set(target);
}

pub fn pause_virtual_time(mode: Res<PauseMode>, mut time: ResMut<Time<Virtual>>) {
    if *mode == PauseMode::InGame {
        info!("game paused");
        time.pause();
    }
}

pub fn resume_virtual_time(mode: Res<PauseMode>, mut time: ResMut<Time<Virtual>>) {
    if *mode == PauseMode::InGame && time.is_paused() {
        info!("game resumed");
        time.unpause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_game_cycle() {
        let mode = PauseMode::InGame;
        assert_eq!(next_pause_state(mode, PauseMenuState::Closed), PauseMenuState::Main);
        assert_eq!(next_pause_state(mode, PauseMenuState::Main), PauseMenuState::Closed);
        assert_eq!(next_pause_state(mode, PauseMenuState::Options), PauseMenuState::Main);
    }

    #[test]
    fn main_menu_only_closes() {
        let mode = PauseMode::MainMenu;
        assert_eq!(next_pause_state(mode, PauseMenuState::Closed), PauseMenuState::Closed);
        assert_eq!(next_pause_state(mode, PauseMenuState::Main), PauseMenuState::Closed);
        assert_eq!(next_pause_state(mode, PauseMenuState::Options), PauseMenuState::Main);
    }
}
