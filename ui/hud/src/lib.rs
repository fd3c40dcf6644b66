use {
    bevy::prelude::*,
    cooking::CookingInstruction,
    cooking_components::Pantry,
    cooking_events::TakeIngredient,
    dialogue::DialogueView,
    interaction::FocusedInteractable,
    states::GameState,
    transitions::ScreenFade,
    widgets::{UiTheme, label, spawn_action_button, spawn_panel},
};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Running), spawn_hud)
            .add_systems(
                Update,
                (
                    update_interaction_prompt.run_if(resource_changed::<FocusedInteractable>),
                    update_dialogue_box.run_if(resource_changed::<DialogueView>),
                    update_cooking_instruction.run_if(resource_changed::<CookingInstruction>),
                    update_fade_overlay.run_if(resource_changed::<ScreenFade>),
                    update_pantry_panel,
                    handle_pantry_buttons,
                ),
            );
    }
}

#[derive(Component)]
pub struct InteractionPrompt;

#[derive(Component)]
pub struct DialogueBox;

#[derive(Component)]
pub struct DialogueSpeaker;

#[derive(Component)]
pub struct DialogueBody;

#[derive(Component)]
pub struct CookingInstructionText;

#[derive(Component)]
pub struct FadeOverlay;

#[derive(Component)]
pub struct PantryPanel;

#[derive(Component)]
pub struct PantryList;

#[derive(Component, Clone, Copy)]
pub struct PantrySlotButton {
    pub pantry: Entity,
    pub slot: usize,
}

fn shown(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

pub fn spawn_hud(mut commands: Commands) {
    // Prompt, bottom center.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(160.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|root| {
            root.spawn((
                InteractionPrompt,
                Visibility::Hidden,
                label("", 18.0, UiTheme::ACCENT),
            ));
        });

    // Cooking instruction, top left.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            left: Val::Px(24.0),
            ..default()
        })
        .with_children(|root| {
            spawn_panel(
                root,
                Node::default(),
                (CookingInstructionText, Visibility::Hidden),
                |panel| {
                    panel.spawn(label("", 18.0, UiTheme::TEXT));
                },
            );
        });

    // Dialogue box along the bottom edge.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            width: Val::Percent(100.0),
            padding: UiRect::horizontal(Val::Px(48.0)),
            ..default()
        })
        .with_children(|root| {
            spawn_panel(
                root,
                Node {
                    width: Val::Percent(100.0),
                    min_height: Val::Px(120.0),
                    ..default()
                },
                (DialogueBox, Visibility::Hidden),
                |panel| {
                    panel.spawn((DialogueSpeaker, label("", 20.0, UiTheme::ACCENT)));
                    panel.spawn((DialogueBody, label("", 18.0, UiTheme::TEXT)));
                },
            );
        });

    // Pantry drawer, right side.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            right: Val::Px(24.0),
            ..default()
        })
        .with_children(|root| {
            spawn_panel(root, Node::default(), (PantryPanel, Visibility::Hidden), |panel| {
                panel.spawn(label("Pantry", 20.0, UiTheme::ACCENT));
                panel.spawn((
                    PantryList,
                    Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                ));
            });
        });

    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::NONE),
        GlobalZIndex(100),
        Visibility::Hidden,
    ));
}

pub fn update_interaction_prompt(
    focused: Res<FocusedInteractable>,
    mut prompts: Query<(&mut Text, &mut Visibility), With<InteractionPrompt>>,
) {
    for (mut text, mut visibility) in &mut prompts {
        text.0.clone_from(&focused.prompt);
        *visibility = shown(focused.entity.is_some());
    }
}

pub fn update_dialogue_box(
    view: Res<DialogueView>,
    mut boxes: Query<&mut Visibility, With<DialogueBox>>,
    mut speakers: Query<&mut Text, (With<DialogueSpeaker>, Without<DialogueBody>)>,
    mut bodies: Query<&mut Text, (With<DialogueBody>, Without<DialogueSpeaker>)>,
) {
    for mut visibility in &mut boxes {
        *visibility = shown(view.visible);
    }
    for mut speaker in &mut speakers {
        speaker.0.clone_from(&view.speaker);
    }
    for mut body in &mut bodies {
        body.0.clone_from(&view.text);
    }
}

pub fn update_cooking_instruction(
    instruction: Res<CookingInstruction>,
    mut panels: Query<(&mut Visibility, &Children), With<CookingInstructionText>>,
    mut texts: Query<&mut Text>,
) {
    for (mut visibility, children) in &mut panels {
        *visibility = shown(instruction.visible);
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                text.0.clone_from(&instruction.text);
            }
        }
    }
}

pub fn update_fade_overlay(
    fade: Res<ScreenFade>,
    mut overlays: Query<(&mut BackgroundColor, &mut Visibility), With<FadeOverlay>>,
) {
    for (mut background, mut visibility) in &mut overlays {
        background.0 = fade.overlay_color();
        *visibility = shown(fade.alpha > 0.0);
    }
}

/// Rebuilds the drawer whenever a pantry changes.
pub fn update_pantry_panel(
    mut commands: Commands,
    pantries: Query<(Entity, &Pantry), Changed<Pantry>>,
    mut panels: Query<&mut Visibility, With<PantryPanel>>,
    lists: Query<Entity, With<PantryList>>,
) {
    let Some((pantry_entity, pantry)) = pantries.iter().next() else {
        return;
    };
    for mut visibility in &mut panels {
        *visibility = shown(pantry.open);
    }
    let Ok(list) = lists.single() else {
        return;
    };

    commands.entity(list).despawn_related::<Children>();
    commands.entity(list).with_children(|list| {
        for (slot, content) in pantry.slots.iter().enumerate() {
            let Some(ingredient) = content.ingredient.as_ref().filter(|_| !content.is_empty())
            else {
                continue;
            };
            spawn_action_button(
                list,
                &format!("{} x{}", ingredient.name, content.quantity),
                PantrySlotButton {
                    pantry: pantry_entity,
                    slot,
                },
            );
        }
    });
}

pub fn handle_pantry_buttons(
    mut commands: Commands,
    buttons: Query<(&Interaction, &PantrySlotButton), Changed<Interaction>>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            commands.trigger(TakeIngredient {
                entity: button.pantry,
                slot: button.slot,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<FocusedInteractable>()
            .init_resource::<DialogueView>()
            .init_resource::<CookingInstruction>()
            .init_resource::<ScreenFade>()
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (
                    update_interaction_prompt,
                    update_dialogue_box,
                    update_cooking_instruction,
                    update_fade_overlay,
                ),
            );
        app.update();
        app
    }

    fn single<C: Component + Clone, F: Component>(app: &mut App) -> C {
        let world = app.world_mut();
        world
            .query_filtered::<&C, With<F>>()
            .single(world)
            .unwrap()
            .clone()
    }

    #[test]
    fn dialogue_box_mirrors_view() {
        let mut app = app();
        *app.world_mut().resource_mut::<DialogueView>() = DialogueView {
            speaker: "Lola".into(),
            text: "Stir".into(),
            visible: true,
        };
        app.update();

        assert_eq!(single::<Visibility, DialogueBox>(&mut app), Visibility::Inherited);
        assert_eq!(single::<Text, DialogueSpeaker>(&mut app).0, "Lola");
        assert_eq!(single::<Text, DialogueBody>(&mut app).0, "Stir");
    }

    #[test]
    fn overlay_tracks_fade_alpha() {
        let mut app = app();
        assert_eq!(single::<Visibility, FadeOverlay>(&mut app), Visibility::Hidden);

        app.world_mut().resource_mut::<ScreenFade>().alpha = 0.4;
        app.update();
        assert_eq!(single::<Visibility, FadeOverlay>(&mut app), Visibility::Inherited);
        let color = single::<BackgroundColor, FadeOverlay>(&mut app).0;
        assert!((color.alpha() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn prompt_hidden_without_focus() {
        let mut app = app();
        assert_eq!(single::<Visibility, InteractionPrompt>(&mut app), Visibility::Hidden);
    }
}
