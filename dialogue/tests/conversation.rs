use {
    bevy::{prelude::*, time::TimeUpdateStrategy},
    dialogue::{DialogueEnded, DialoguePlugin, DialogueStarted, DialogueView, Talkable},
    dialogue_assets::{DialogueDefinition, DialogueLibrary, DialogueLine},
    interaction_events::Interacted,
    std::time::Duration,
};

#[derive(Resource, Default)]
struct Seen {
    started: usize,
    ended: usize,
}

fn setup() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(AssetPlugin::default())
        .init_asset::<DialogueDefinition>()
        .add_plugins(DialoguePlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<Seen>()
        .add_observer(|_: On<DialogueStarted>, mut seen: ResMut<Seen>| seen.started += 1)
        .add_observer(|_: On<DialogueEnded>, mut seen: ResMut<Seen>| seen.ended += 1);

    let handle = app
        .world_mut()
        .resource_mut::<Assets<DialogueDefinition>>()
        .add(DialogueDefinition {
            name: "lola".to_string(),
            lines: vec![DialogueLine::new("Lola", "Stir!")],
        });
    app.world_mut()
        .resource_mut::<DialogueLibrary>()
        .dialogues
        .insert("lola".to_string(), handle);
    app.update();
    app
}

fn view(app: &App) -> DialogueView {
    app.world().resource::<DialogueView>().clone()
}

#[test]
fn talking_plays_the_named_dialogue() {
    let mut app = setup();
    let lola = app
        .world_mut()
        .spawn(Talkable {
            dialogue: "lola".to_string(),
        })
        .id();

    app.world_mut().trigger(Interacted { entity: lola });
    let shown = view(&app);
    assert!(shown.visible);
    assert_eq!(shown.speaker, "Lola");
    assert_eq!(shown.text, "S");
    assert_eq!(app.world().resource::<Seen>().started, 1);

    // Five characters at 0.2 s each.
    for _ in 0..8 {
        app.update();
    }
    assert_eq!(view(&app).text, "Stir!");

    // Typing, the 2 s hold and the 1 s end delay all fit in 5 s.
    for _ in 0..42 {
        app.update();
    }
    assert!(!view(&app).visible);
    assert_eq!(app.world().resource::<Seen>().ended, 1);
}

#[test]
fn talking_again_skips_ahead() {
    let mut app = setup();
    let lola = app
        .world_mut()
        .spawn(Talkable {
            dialogue: "lola".to_string(),
        })
        .id();

    app.world_mut().trigger(Interacted { entity: lola });
    app.world_mut().trigger(Interacted { entity: lola });
    assert_eq!(view(&app).text, "Stir!");
    assert_eq!(app.world().resource::<Seen>().started, 1);
}

#[test]
fn unknown_dialogue_is_ignored() {
    let mut app = setup();
    let stranger = app
        .world_mut()
        .spawn(Talkable {
            dialogue: "nobody".to_string(),
        })
        .id();
    app.world_mut().trigger(Interacted { entity: stranger });
    assert_eq!(view(&app), DialogueView::default());
    assert_eq!(app.world().resource::<Seen>().started, 0);
}
