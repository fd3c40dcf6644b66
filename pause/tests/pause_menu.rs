use {
    bevy::{prelude::*, state::app::StatesPlugin},
    messages::{MessagesPlugin, PausePressed},
    pause::{PauseMenuAction, PauseMode, PausePlugin},
    states::PauseMenuState,
};

fn setup(mode: PauseMode) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins((MessagesPlugin, PausePlugin))
        .insert_resource(mode);
    app.update();
    app
}

fn press_pause(app: &mut App) {
    app.world_mut().write_message(PausePressed);
    // One frame to read the key, one to apply the state change.
    app.update();
    app.update();
}

fn state(app: &App) -> PauseMenuState {
    *app.world().resource::<State<PauseMenuState>>().get()
}

fn paused(app: &App) -> bool {
    app.world().resource::<Time<Virtual>>().is_paused()
}

#[test]
fn escape_pauses_and_resumes() {
    let mut app = setup(PauseMode::InGame);

    press_pause(&mut app);
    assert_eq!(state(&app), PauseMenuState::Main);
    assert!(paused(&app));

    press_pause(&mut app);
    assert_eq!(state(&app), PauseMenuState::Closed);
    assert!(!paused(&app));
}

#[test]
fn escape_backs_out_of_options() {
    let mut app = setup(PauseMode::InGame);
    press_pause(&mut app);

    app.world_mut().trigger(PauseMenuAction::OpenOptions);
    app.update();
    assert_eq!(state(&app), PauseMenuState::Options);
    assert!(paused(&app));

    press_pause(&mut app);
    assert_eq!(state(&app), PauseMenuState::Main);

    app.world_mut().trigger(PauseMenuAction::Resume);
    app.update();
    assert_eq!(state(&app), PauseMenuState::Closed);
    assert!(!paused(&app));
}

#[test]
fn main_menu_never_stops_time() {
    let mut app = setup(PauseMode::MainMenu);

    press_pause(&mut app);
    assert_eq!(state(&app), PauseMenuState::Closed);

    app.world_mut().trigger(PauseMenuAction::OpenSettings);
    app.update();
    assert_eq!(state(&app), PauseMenuState::Main);
    assert!(!paused(&app));

    press_pause(&mut app);
    assert_eq!(state(&app), PauseMenuState::Closed);
}

#[test]
fn options_need_an_open_menu() {
    let mut app = setup(PauseMode::InGame);
    app.world_mut().trigger(PauseMenuAction::OpenOptions);
    app.update();
    assert_eq!(state(&app), PauseMenuState::Closed);
}
