use bevy::prelude::*;

pub struct WidgetsPlugin;

impl Plugin for WidgetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, highlight_buttons);
    }
}

/// Shared colors for every screen.
pub struct UiTheme;

impl UiTheme {
    pub const PANEL_BG: Color = Color::srgba(0.11, 0.09, 0.07, 0.92);
    pub const PANEL_BORDER: Color = Color::srgba(1.0, 0.9, 0.7, 0.15);
    pub const TEXT: Color = Color::srgb(0.98, 0.95, 0.88);
    pub const MUTED_TEXT: Color = Color::srgb(0.72, 0.66, 0.58);
    pub const ACCENT: Color = Color::srgb(0.93, 0.6, 0.25);
    pub const BUTTON: Color = Color::srgb(0.25, 0.2, 0.16);
    pub const BUTTON_HOVER: Color = Color::srgb(0.35, 0.28, 0.2);
    pub const BUTTON_PRESSED: Color = Color::srgb(0.5, 0.36, 0.2);
}

/// Spawns a bordered panel and fills it with `children`.
pub fn spawn_panel<M: Bundle>(
    parent: &mut ChildSpawnerCommands,
    node: Node,
    marker: M,
    children: impl FnOnce(&mut ChildSpawnerCommands),
) -> Entity {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(8.0),
                border: UiRect::all(Val::Px(1.0)),
                border_radius: BorderRadius::all(Val::Px(10.0)),
                ..node
            },
            BackgroundColor(UiTheme::PANEL_BG),
            BorderColor::all(UiTheme::PANEL_BORDER),
            marker,
        ))
        .with_children(children)
        .id()
}

pub fn label(text: impl Into<String>, font_size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    )
}

/// Spawns a button carrying `marker`, which the caller's systems react to.
pub fn spawn_action_button<M: Component>(
    parent: &mut ChildSpawnerCommands,
    text: &str,
    marker: M,
) {
    parent
        .spawn((
            Button,
            Node {
                min_width: Val::Px(160.0),
                height: Val::Px(36.0),
                padding: UiRect::horizontal(Val::Px(12.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_radius: BorderRadius::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(UiTheme::BUTTON),
            marker,
        ))
        .with_children(|button| {
            button.spawn(label(text, 16.0, UiTheme::TEXT));
        });
}

fn highlight_buttons(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut background) in &mut buttons {
        background.0 = match interaction {
            Interaction::Pressed => UiTheme::BUTTON_PRESSED,
            Interaction::Hovered => UiTheme::BUTTON_HOVER,
            Interaction::None => UiTheme::BUTTON,
        };
    }
}
