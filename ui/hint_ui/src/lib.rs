use {
    bevy::prelude::*,
    hint_resources::HintDisplay,
    states::GameState,
    widgets::{UiTheme, label, spawn_panel},
};

pub struct HintUiPlugin;

impl Plugin for HintUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Running), spawn_hint_panel)
            .add_systems(
                Update,
                mirror_hint_display.run_if(resource_changed::<HintDisplay>),
            );
    }
}

#[derive(Component)]
pub struct HintPanel;

#[derive(Component)]
pub struct HintText;

pub fn spawn_hint_panel(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|root| {
            spawn_panel(
                root,
                Node {
                    max_width: Val::Px(520.0),
                    ..default()
                },
                (HintPanel, Visibility::Hidden),
                |panel| {
                    panel.spawn((HintText, label("", 18.0, UiTheme::TEXT)));
                },
            );
        });
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.alpha() * opacity)
}

pub fn mirror_hint_display(
    display: Res<HintDisplay>,
    mut panels: Query<(&mut Visibility, &mut BackgroundColor), With<HintPanel>>,
    mut texts: Query<(&mut Text, &mut TextColor), With<HintText>>,
) {
    for (mut visibility, mut background) in &mut panels {
        *visibility = if display.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        background.0 = with_opacity(UiTheme::PANEL_BG, display.opacity);
    }
    for (mut text, mut color) in &mut texts {
        if text.0 != display.text {
            text.0.clone_from(&display.text);
        }
        color.0 = with_opacity(UiTheme::TEXT, display.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_follows_display() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<HintDisplay>()
            .add_systems(Startup, spawn_hint_panel)
            .add_systems(Update, mirror_hint_display);
        app.update();

        {
            let mut display = app.world_mut().resource_mut::<HintDisplay>();
            display.text = "Press E near the stove".into();
            display.visible = true;
            display.opacity = 0.5;
        }
        app.update();

        let world = app.world_mut();
        let (visibility, background) = world
            .query_filtered::<(&Visibility, &BackgroundColor), With<HintPanel>>()
            .single(world)
            .unwrap();
        assert_eq!(*visibility, Visibility::Inherited);
        assert!((background.0.alpha() - UiTheme::PANEL_BG.alpha() * 0.5).abs() < 1e-5);

        let (text, color) = world
            .query_filtered::<(&Text, &TextColor), With<HintText>>()
            .single(world)
            .unwrap();
        assert_eq!(text.0, "Press E near the stove");
        assert!((color.0.alpha() - 0.5).abs() < 1e-5);
    }
}
