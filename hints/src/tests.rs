use {
    crate::{FadePhase, HintManager, HintNotice, HintTask},
    hint_components::{Hint, HintError, HintSet},
    hint_resources::{HintDisplay, HintTimings},
    std::time::Duration,
};

const STEP: Duration = Duration::from_millis(100);

fn kitchen(auto_start: bool) -> HintSet {
    HintSet::new(
        "kitchen",
        vec![
            Hint::new(1, "Walk with WASD", 0.0),
            Hint::new(2, "Open the pantry", 0.0),
            Hint::new(3, "Shake the bowl", 0.0),
        ],
        auto_start,
    )
    .unwrap()
}

fn manager() -> (HintManager, HintDisplay) {
    (HintManager::new(HintTimings::default()), HintDisplay::default())
}

/// Ticks in 100 ms steps until `secs` have passed.
fn advance(manager: &mut HintManager, display: &mut HintDisplay, secs: f32) {
    let steps = (secs / STEP.as_secs_f32()).round() as usize;
    for _ in 0..steps {
        manager.tick(STEP, display);
    }
}

#[test]
fn load_with_auto_start_fades_in_first_hint() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);

    assert_eq!(manager.current_hint_id(), Some(1));
    assert!(display.visible);
    assert_eq!(display.text, "Walk with WASD");
    assert_eq!(display.opacity, 0.0);

    advance(&mut manager, &mut display, 0.2);
    assert!(display.opacity > 0.0 && display.opacity < 1.0);

    advance(&mut manager, &mut display, 0.4);
    assert_eq!(display.opacity, 1.0);
    assert_eq!(manager.phase(), FadePhase::Showing);
}

#[test]
fn load_without_auto_start_shows_nothing() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(false), &mut display);

    assert_eq!(manager.current_hint_id(), None);
    assert!(!display.visible);
    assert!(!manager.is_displaying());
}

#[test]
fn completing_displayed_hint_advances_after_fade_out() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);
    advance(&mut manager, &mut display, 0.6);
    manager.drain_notices();

    assert_eq!(manager.complete_hint(2), Ok(vec![1, 2]));
    assert_eq!(manager.current_hint_id(), None);
    assert!(manager.scheduler().is_scheduled(HintTask::AutoAdvance));

    advance(&mut manager, &mut display, 0.5);
    assert_eq!(manager.current_hint_id(), None);

    advance(&mut manager, &mut display, 0.2);
    assert_eq!(manager.current_hint_id(), Some(3));
    assert_eq!(display.text, "Shake the bowl");
    assert!(display.visible);

    let notices = manager.drain_notices();
    assert_eq!(
        notices,
        vec![
            HintNotice::Completed {
                hint_ids: vec![1, 2]
            },
            HintNotice::Hidden { hint_id: Some(1) },
            HintNotice::Shown {
                hint_id: 3,
                text: "Shake the bowl".to_string()
            },
        ]
    );
}

#[test]
fn completing_earlier_hints_keeps_later_displayed_hint() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(false), &mut display);
    assert!(manager.trigger_hint(3, &mut display));

    assert_eq!(manager.complete_hint(2), Ok(vec![1, 2]));
    assert_eq!(manager.current_hint_id(), Some(3));
    assert!(!manager.scheduler().is_scheduled(HintTask::AutoAdvance));

    advance(&mut manager, &mut display, 1.0);
    assert!(display.visible);
    assert_eq!(display.opacity, 1.0);
}

#[test]
fn completion_is_idempotent() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);

    assert_eq!(manager.complete_hint(1), Ok(vec![1]));
    advance(&mut manager, &mut display, 0.8);
    assert_eq!(manager.current_hint_id(), Some(2));

    assert_eq!(manager.complete_hint(1), Ok(vec![]));
    assert_eq!(manager.current_hint_id(), Some(2));
    assert!(!manager.scheduler().is_scheduled(HintTask::AutoAdvance));
}

#[test]
fn timed_hint_completes_itself() {
    let (mut manager, mut display) = manager();
    let set = HintSet::new(
        "porch",
        vec![Hint::new(1, "Look around", 1.0), Hint::new(2, "Knock", 0.0)],
        true,
    )
    .unwrap();
    manager.load_level_hints(set, &mut display);

    advance(&mut manager, &mut display, 1.4);
    assert_eq!(manager.current_hint_id(), Some(1));
    assert!(!manager.level_hints().unwrap().get(1).unwrap().is_completed);

    advance(&mut manager, &mut display, 0.4);
    assert!(manager.level_hints().unwrap().get(1).unwrap().is_completed);
    assert_eq!(manager.current_hint_id(), None);

    advance(&mut manager, &mut display, 0.8);
    assert_eq!(manager.current_hint_id(), Some(2));
}

#[test]
fn errors_are_reported_without_side_effects() {
    let (mut manager, mut display) = manager();
    assert_eq!(manager.complete_hint(1), Err(HintError::NoLevelHints));

    manager.load_level_hints(kitchen(true), &mut display);
    assert_eq!(manager.complete_hint(42), Err(HintError::UnknownHint(42)));
    assert_eq!(manager.current_hint_id(), Some(1));
    assert!(manager.level_hints().unwrap().iter().all(|h| !h.is_completed));
}

#[test]
fn triggering_completed_or_unknown_hint_is_ignored() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(false), &mut display);
    manager.complete_hint(1).unwrap();

    assert!(!manager.trigger_hint(1, &mut display));
    assert!(!manager.trigger_hint(9, &mut display));
    assert_eq!(manager.current_hint_id(), None);
    assert!(!display.visible);
}

#[test]
fn hide_keeps_current_hint() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);
    advance(&mut manager, &mut display, 0.6);
    manager.drain_notices();

    manager.hide_current_hint();
    advance(&mut manager, &mut display, 0.6);

    assert!(!display.visible);
    assert_eq!(display.opacity, 0.0);
    assert_eq!(manager.current_hint_id(), Some(1));
    assert_eq!(
        manager.drain_notices(),
        vec![HintNotice::Hidden { hint_id: Some(1) }]
    );

    // A matching completion still works on the hidden hint.
    assert_eq!(manager.complete_hint(1), Ok(vec![1]));
}

#[test]
fn explicit_show_cancels_pending_advance() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);
    manager.complete_hint(1).unwrap();
    assert!(manager.scheduler().is_scheduled(HintTask::AutoAdvance));

    manager.trigger_hint(3, &mut display);
    assert!(!manager.scheduler().is_scheduled(HintTask::AutoAdvance));

    advance(&mut manager, &mut display, 1.0);
    assert_eq!(manager.current_hint_id(), Some(3));
}

#[test]
fn loading_a_new_level_resets_both_sets() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);
    manager.complete_hint(2).unwrap();

    let cellar = HintSet::new("cellar", vec![Hint::new(10, "Find the lamp", 0.0)], true).unwrap();
    let outgoing = manager.load_level_hints(cellar, &mut display).unwrap();

    assert_eq!(outgoing.level_name(), "kitchen");
    assert!(outgoing.iter().all(|hint| !hint.is_completed));
    assert_eq!(manager.current_hint_id(), Some(10));
    assert!(!manager.scheduler().is_scheduled(HintTask::AutoAdvance));
}

#[test]
fn reloading_same_level_starts_from_scratch() {
    let (mut manager, mut display) = manager();
    let mut stale = kitchen(true);
    stale.complete_up_to(3);

    manager.load_level_hints(stale, &mut display);
    assert_eq!(manager.current_hint_id(), Some(1));
}

#[test]
fn unload_drops_set_and_fades_out() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);
    advance(&mut manager, &mut display, 0.6);

    let outgoing = manager.unload_level_hints();
    assert!(outgoing.is_some());
    assert!(manager.level_hints().is_none());
    assert_eq!(manager.current_hint_id(), None);

    advance(&mut manager, &mut display, 0.6);
    assert!(!display.visible);
    assert_eq!(manager.complete_hint(1), Err(HintError::NoLevelHints));
}

#[test]
fn complete_current_hint_cascades_from_displayed_hint() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(false), &mut display);
    assert_eq!(manager.complete_current_hint(), None);

    manager.trigger_hint(2, &mut display);
    assert_eq!(manager.complete_current_hint(), Some(Ok(vec![1, 2])));
    assert_eq!(manager.current_hint_id(), None);
    assert!(manager.scheduler().is_scheduled(HintTask::AutoAdvance));
    assert_eq!(manager.complete_current_hint(), None);
}

#[test]
fn new_level_reports_interrupted_hint_as_hidden() {
    let (mut manager, mut display) = manager();
    manager.load_level_hints(kitchen(true), &mut display);
    advance(&mut manager, &mut display, 0.6);
    manager.drain_notices();

    let cellar = HintSet::new("cellar", vec![Hint::new(10, "Find the lamp", 0.0)], true).unwrap();
    manager.load_level_hints(cellar, &mut display);

    assert_eq!(
        manager.drain_notices(),
        vec![
            HintNotice::Hidden { hint_id: Some(1) },
            HintNotice::Shown {
                hint_id: 10,
                text: "Find the lamp".to_string(),
            },
        ]
    );
    assert_eq!(manager.phase(), FadePhase::FadingIn { elapsed: 0.0 });
}
