use {
    crate::CAMERA_SCALE,
    bevy::prelude::*,
    cooking::food_bundle,
    cooking_components::{
        Bowl, CookingSequence, CookingStep, CutGuide, CuttingBoard, Draggable, FoodPhysics,
        Ingredient, IngredientKind, Pantry,
    },
    cooking_events::{CookingStepCompleted, TogglePantry},
    dialogue::Talkable,
    hint_components::{HintTrigger, HintTriggerMode, HintTriggerZone},
    hint_events::{ActivateHintTrigger, CompleteCurrentHint, LoadLevelHintsByName},
    interaction_components::{Door, Interactable},
    interaction_events::Interacted,
    player::player_bundle,
    settings::BrightnessTint,
};

pub const KITCHEN_LEVEL: &str = "kitchen";
pub const PLAYER_START: Vec2 = Vec2::new(-7.0, -1.0);
pub const COUNTER: Vec2 = Vec2::new(1.5, 0.5);
pub const BOWL_HOME: Vec2 = Vec2::new(3.5, -1.0);
pub const BACKYARD: Vec2 = Vec2::new(30.0, 0.0);
const FOOD_COUNT: usize = 12;

fn ingredient(name: &str, kind: IngredientKind, description: &str) -> Ingredient {
    Ingredient {
        description: description.to_string(),
        ..Ingredient::new(name, kind)
    }
}

pub fn spawn_kitchen(mut commands: Commands) {
    info!("spawning kitchen");

    for (center, size) in [(Vec2::ZERO, Vec2::new(22.0, 10.0)), (BACKYARD, Vec2::new(14.0, 8.0))] {
        commands.spawn((
            Name::new("Floor"),
            BrightnessTint,
            Sprite::from_color(Color::WHITE, size),
            Transform::from_translation(center.extend(-1.0)),
        ));
    }

    commands.spawn((Name::new("Player"), player_bundle(PLAYER_START)));

    commands.spawn((
        Name::new("Lola"),
        Talkable {
            dialogue: "lola".to_string(),
        },
        Interactable::new("Lola", "Talk"),
        HintTrigger::new([2], HintTriggerMode::MatchCurrentOnly),
        Sprite::from_color(Color::srgb(0.55, 0.35, 0.6), Vec2::new(0.6, 1.0)),
        Transform::from_xyz(-5.0, 1.5, 5.0),
    ));

    commands.spawn((
        Name::new("Counter"),
        HintTrigger::new([1], HintTriggerMode::CompleteUpToHighest),
        HintTriggerZone { radius: 1.5 },
        Transform::from_translation(COUNTER.extend(0.0)),
    ));

    // Mixing bowl and what's in it.
    commands.spawn((
        Name::new("Mixing Bowl"),
        Bowl::default(),
        Draggable {
            pick_radius: 1.5,
            ..Draggable::at(BOWL_HOME)
        },
        Sprite::from_color(Color::srgb(0.8, 0.82, 0.85), Vec2::splat(3.0)),
        Transform::from_translation(BOWL_HOME.extend(2.0)),
    ));
    let mut rng = rand::rng();
    for i in 0..FOOD_COUNT {
        let offset = Vec2::new((i % 4) as f32 * 0.5 - 0.75, (i / 4) as f32 * 0.5 - 0.5);
        commands.spawn((
            Name::new("Rice"),
            food_bundle(BOWL_HOME + offset, FoodPhysics::default(), &mut rng),
            Sprite::from_color(Color::srgb(0.95, 0.93, 0.85), Vec2::splat(0.2)),
        ));
    }

    // Cutting board works in pixel-sized local units.
    let board = commands
        .spawn((
            Name::new("Cutting Board"),
            CuttingBoard::new(
                vec![
                    CutGuide::horizontal(Vec2::new(0.0, 50.0), 200.0),
                    CutGuide::horizontal(Vec2::ZERO, 200.0),
                    CutGuide::horizontal(Vec2::new(0.0, -50.0), 200.0),
                ],
                Vec2::new(150.0, 100.0),
            ),
            HintTrigger::new([4], HintTriggerMode::CompleteUpToHighest),
            Sprite::from_color(Color::srgb(0.62, 0.45, 0.28), Vec2::new(300.0, 200.0)),
            Transform::from_xyz(0.0, 3.0, 1.0).with_scale(Vec3::splat(CAMERA_SCALE)),
        ))
        .id();

    commands.spawn((
        Name::new("Adobo"),
        CookingSequence::new(
            "Adobo",
            vec![CookingStep::new("Cut the chicken along the guides", Some(board))],
        ),
    ));

    let mut pantry = Pantry::with_slots(6);
    pantry.stock([
        (ingredient("Soy Sauce", IngredientKind::Liquid, "Salty and dark"), 3),
        (ingredient("Vinegar", IngredientKind::Liquid, "Sour cane vinegar"), 3),
        (ingredient("Garlic", IngredientKind::Vegetable, "Crushed, lots of it"), 6),
        (ingredient("Bay Leaf", IngredientKind::Spice, "Two or three leaves"), 4),
        (ingredient("Peppercorn", IngredientKind::Spice, "Whole black pepper"), 10),
    ]);
    commands.spawn((
        Name::new("Pantry"),
        pantry,
        Interactable::new("Pantry", "Open pantry"),
        HintTrigger::new([5], HintTriggerMode::MatchCurrentOnly),
        Sprite::from_color(Color::srgb(0.45, 0.3, 0.2), Vec2::new(1.5, 2.0)),
        Transform::from_xyz(-3.0, 3.0, 1.0),
    ));

    commands.spawn((
        Name::new("Back Door"),
        Door {
            destination: BACKYARD + Vec2::new(-5.0, 0.0),
            face_right: true,
        },
        Sprite::from_color(Color::srgb(0.35, 0.22, 0.12), Vec2::new(1.0, 2.0)),
        Transform::from_xyz(10.0, 0.0, 1.0),
    ));
    commands.spawn((
        Name::new("Kitchen Door"),
        Door {
            destination: Vec2::new(9.0, 0.0),
            face_right: false,
        },
        Sprite::from_color(Color::srgb(0.35, 0.22, 0.12), Vec2::new(1.0, 2.0)),
        Transform::from_translation((BACKYARD + Vec2::new(-6.5, 0.0)).extend(1.0)),
    ));
}

pub fn load_kitchen_hints(mut commands: Commands) {
    commands.trigger(LoadLevelHintsByName {
        level_name: KITCHEN_LEVEL.to_string(),
    });
}

pub fn on_interacted_toggle_pantry(
    trigger: On<Interacted>,
    mut commands: Commands,
    pantries: Query<(), With<Pantry>>,
) {
    let entity = trigger.event().entity;
    if pantries.contains(entity) {
        commands.trigger(TogglePantry { entity });
    }
}

/// Finishing a station's step counts as using its hint trigger.
pub fn on_step_completed_fire_hint_trigger(
    trigger: On<CookingStepCompleted>,
    mut commands: Commands,
    hint_triggers: Query<(), With<HintTrigger>>,
) {
    let station = trigger.event().station;
    if hint_triggers.contains(station) {
        commands.trigger(ActivateHintTrigger { entity: station });
    }
}

/// Debug shortcut: F1 completes whatever hint is on screen.
pub fn debug_complete_current_hint(mut commands: Commands, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::F1) {
        commands.trigger(CompleteCurrentHint);
    }
}
