use {
    bevy::{prelude::*, time::TimeUpdateStrategy},
    interaction_events::{TransitionFinished, TransitionToPosition},
    shared_components::{Player, PlayerMotor},
    std::time::Duration,
    transitions::{FadePhase, ScreenFade, TransitionsPlugin},
};

#[derive(Resource, Default)]
struct Finished(Vec<Entity>);

fn setup() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TransitionsPlugin)
        .init_resource::<Finished>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .add_observer(|trigger: On<TransitionFinished>, mut finished: ResMut<Finished>| {
            finished.0.push(trigger.event().player);
        });
    app.update();
    let player = app.world_mut().spawn((Player, Transform::default())).id();
    (app, player)
}

fn request(app: &mut App, player: Entity, target: Vec2) {
    app.world_mut().trigger(TransitionToPosition {
        target,
        player,
        face_right: false,
    });
}

fn run(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn player_is_moved_while_the_screen_is_black() {
    let (mut app, player) = setup();
    request(&mut app, player, Vec2::new(12.0, 3.0));
    assert!(!app.world().get::<PlayerMotor>(player).unwrap().inputs_enabled);

    // 2 alpha per second, 0.1 s frames: black after 5 frames.
    run(&mut app, 4);
    let fade = app.world().resource::<ScreenFade>();
    assert_eq!(fade.phase, FadePhase::FadingOut);
    assert!((fade.alpha - 0.8).abs() < 1e-4);
    assert_eq!(
        app.world().get::<Transform>(player).unwrap().translation.truncate(),
        Vec2::ZERO
    );

    run(&mut app, 1);
    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.translation.truncate(), Vec2::new(12.0, 3.0));
    assert!(!app.world().get::<PlayerMotor>(player).unwrap().facing_right);
    assert!(matches!(
        app.world().resource::<ScreenFade>().phase,
        FadePhase::Holding(_)
    ));

    run(&mut app, 5);
    assert_eq!(app.world().resource::<ScreenFade>().phase, FadePhase::FadingIn);
    assert!(app.world().resource::<Finished>().0.is_empty());

    run(&mut app, 5);
    let fade = app.world().resource::<ScreenFade>();
    assert_eq!(fade.phase, FadePhase::Idle);
    assert_eq!(fade.alpha, 0.0);
    assert!(app.world().get::<PlayerMotor>(player).unwrap().inputs_enabled);
    assert_eq!(app.world().resource::<Finished>().0, vec![player]);
}

#[test]
fn requests_during_a_transition_are_ignored() {
    let (mut app, player) = setup();
    request(&mut app, player, Vec2::new(12.0, 0.0));
    run(&mut app, 2);
    request(&mut app, player, Vec2::new(-40.0, 0.0));

    run(&mut app, 20);
    assert_eq!(
        app.world().get::<Transform>(player).unwrap().translation.truncate(),
        Vec2::new(12.0, 0.0)
    );
    assert_eq!(app.world().resource::<Finished>().0.len(), 1);

    // Idle again, so a new request is accepted.
    request(&mut app, player, Vec2::new(-40.0, 0.0));
    run(&mut app, 20);
    assert_eq!(
        app.world().get::<Transform>(player).unwrap().translation.truncate(),
        Vec2::new(-40.0, 0.0)
    );
}
