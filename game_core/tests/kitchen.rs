use {
    bevy::{prelude::*, state::app::StatesPlugin, time::TimeUpdateStrategy},
    cooking_components::Pantry,
    dialogue::{DialogueView, Talkable},
    dialogue_assets::{DialogueDefinition, DialogueLibrary, DialogueLine},
    game_core::{COUNTER, KitchenPlugin, debug_complete_current_hint},
    hint_assets::HintSetDefinition,
    hint_components::Hint,
    hint_resources::{HintDisplay, HintLibrary},
    hints::HintManager,
    interaction_events::Interacted,
    messages::MessagesPlugin,
    shared_components::Player,
    states::GameState,
    std::time::Duration,
    system_schedule::{GameSchedule, GameSchedulePlugin},
};

fn setup() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
        .init_asset::<HintSetDefinition>()
        .init_asset::<DialogueDefinition>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_state::<GameState>()
        .add_plugins((GameSchedulePlugin, MessagesPlugin, KitchenPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));

    let hints = app
        .world_mut()
        .resource_mut::<Assets<HintSetDefinition>>()
        .add(HintSetDefinition {
            level_name: "kitchen".to_string(),
            auto_start_first_hint: true,
            hints: vec![
                Hint::new(1, "Walk to the counter", 0.0),
                Hint::new(2, "Talk to Lola", 0.0),
                Hint::new(5, "Open the pantry", 0.0),
            ],
        });
    app.world_mut()
        .resource_mut::<HintLibrary>()
        .sets
        .insert("kitchen".to_string(), hints);

    let lola = app
        .world_mut()
        .resource_mut::<Assets<DialogueDefinition>>()
        .add(DialogueDefinition {
            name: "lola".to_string(),
            lines: vec![DialogueLine::new("Lola", "Hungry?")],
        });
    app.world_mut()
        .resource_mut::<DialogueLibrary>()
        .dialogues
        .insert("lola".to_string(), lola);

    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Running);
    app.update();
    app
}

fn find<C: Component>(app: &mut App) -> Entity {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<C>>()
        .single(world)
        .unwrap()
}

fn run(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn entering_the_kitchen_starts_the_tutorial() {
    let mut app = setup();
    find::<Player>(&mut app);
    run(&mut app, 6);

    let display = app.world().resource::<HintDisplay>();
    assert!(display.visible);
    assert_eq!(display.text, "Walk to the counter");
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), Some(1));
}

#[test]
fn tutorial_follows_the_player_around() {
    let mut app = setup();
    run(&mut app, 6);

    let player = find::<Player>(&mut app);
    app.world_mut()
        .get_mut::<Transform>(player)
        .unwrap()
        .translation = COUNTER.extend(5.0);
    run(&mut app, 12);
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), Some(2));

    let lola = find::<Talkable>(&mut app);
    app.world_mut().trigger(Interacted { entity: lola });
    assert_eq!(app.world().resource::<DialogueView>().speaker, "Lola");
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), None);

    run(&mut app, 12);
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), Some(5));

    let pantry = find::<Pantry>(&mut app);
    app.world_mut().trigger(Interacted { entity: pantry });
    assert!(app.world().get::<Pantry>(pantry).unwrap().open);
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), None);
}

#[test]
fn debug_key_completes_the_displayed_hint() {
    let mut app = setup();
    app.add_systems(
        Update,
        debug_complete_current_hint.in_set(GameSchedule::ResolveIntent),
    );
    run(&mut app, 6);
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), Some(1));

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::F1);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), None);

    run(&mut app, 8);
    assert_eq!(app.world().resource::<HintManager>().current_hint_id(), Some(2));
}
