use {
    bevy::prelude::*,
    pause::PauseMenuAction,
    settings::{ChangeSetting, SettingKind, Settings},
    states::PauseMenuState,
    widgets::{UiTheme, label, spawn_action_button, spawn_panel},
};

pub struct PauseUiPlugin;

impl Plugin for PauseUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_pause_menu)
            .add_systems(
                Update,
                (
                    show_pause_screens.run_if(state_changed::<PauseMenuState>),
                    handle_menu_buttons,
                    handle_setting_buttons,
                    update_setting_values.run_if(resource_changed::<Settings>),
                ),
            );
    }
}

/// Step applied by the `-` and `+` buttons.
const SETTING_STEP: f32 = 0.1;

#[derive(Component)]
pub struct PauseMenuRoot;

#[derive(Component)]
pub struct MainScreen;

#[derive(Component)]
pub struct OptionsScreen;

#[derive(Component, Clone, Copy)]
pub struct MenuButton(pub PauseMenuAction);

#[derive(Component, Clone, Copy)]
pub struct SettingButton {
    pub kind: SettingKind,
    pub delta: f32,
}

#[derive(Component, Clone, Copy)]
pub struct SettingValue(pub SettingKind);

const SETTING_ROWS: [(SettingKind, &str); 4] = [
    (SettingKind::MasterVolume, "Master"),
    (SettingKind::SfxVolume, "Effects"),
    (SettingKind::MusicVolume, "Music"),
    (SettingKind::Brightness, "Brightness"),
];

pub fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            PauseMenuRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            GlobalZIndex(50),
            Visibility::Hidden,
        ))
        .with_children(|root| {
            spawn_panel(root, Node::default(), (MainScreen, Visibility::Inherited), |panel| {
                panel.spawn(label("Paused", 28.0, UiTheme::TEXT));
                spawn_action_button(panel, "Resume", MenuButton(PauseMenuAction::Resume));
                spawn_action_button(panel, "Options", MenuButton(PauseMenuAction::OpenOptions));
                spawn_action_button(panel, "Quit", MenuButton(PauseMenuAction::Quit));
            });

            spawn_panel(root, Node::default(), (OptionsScreen, Visibility::Hidden), |panel| {
                panel.spawn(label("Options", 28.0, UiTheme::TEXT));
                for (kind, name) in SETTING_ROWS {
                    panel
                        .spawn(Node {
                            column_gap: Val::Px(8.0),
                            align_items: AlignItems::Center,
                            ..default()
                        })
                        .with_children(|row| {
                            row.spawn(label(name, 16.0, UiTheme::MUTED_TEXT));
                            spawn_action_button(row, "-", SettingButton {
                                kind,
                                delta: -SETTING_STEP,
                            });
                            row.spawn((SettingValue(kind), label("", 16.0, UiTheme::TEXT)));
                            spawn_action_button(row, "+", SettingButton {
                                kind,
                                delta: SETTING_STEP,
                            });
                        });
                }
                spawn_action_button(panel, "Back", MenuButton(PauseMenuAction::BackToMain));
            });
        });
}

pub fn show_pause_screens(
    state: Res<State<PauseMenuState>>,
    mut root: Query<&mut Visibility, With<PauseMenuRoot>>,
    mut main: Query<&mut Visibility, (With<MainScreen>, Without<PauseMenuRoot>, Without<OptionsScreen>)>,
    mut options: Query<&mut Visibility, (With<OptionsScreen>, Without<PauseMenuRoot>, Without<MainScreen>)>,
) {
    let (root_shown, main_shown, options_shown) = match state.get() {
        PauseMenuState::Closed => (false, false, false),
        PauseMenuState::Main => (true, true, false),
        PauseMenuState::Options => (true, false, true),
    };
    let visibility = |shown: bool| {
        if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        }
    };
    for mut v in &mut root {
        *v = visibility(root_shown);
    }
    for mut v in &mut main {
        *v = visibility(main_shown);
    }
    for mut v in &mut options {
        *v = visibility(options_shown);
    }
}

pub fn handle_menu_buttons(
    mut commands: Commands,
    buttons: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            commands.trigger(button.0);
        }
    }
}

pub fn handle_setting_buttons(
    mut commands: Commands,
    settings: Res<Settings>,
    buttons: Query<(&Interaction, &SettingButton), Changed<Interaction>>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            commands.trigger(ChangeSetting {
                kind: button.kind,
                value: settings.get(button.kind) + button.delta,
            });
        }
    }
}

pub fn update_setting_values(
    settings: Res<Settings>,
    mut values: Query<(&mut Text, &SettingValue)>,
) {
    for (mut text, value) in &mut values {
        text.0 = settings.display_value(value.0).to_string();
    }
}
