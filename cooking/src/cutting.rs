use {
    crate::cookware::CursorWorld,
    bevy::prelude::*,
    cooking_components::CuttingBoard,
    cooking_events::{CookingStepCompleted, CookingStepStarted, CutCompleted},
};

/// Board-local position of a world point, undoing the board's translation and scale.
pub fn board_local(transform: &Transform, world: Vec2) -> Vec2 {
    let scale = transform.scale.truncate();
    let scale = Vec2::new(
        if scale.x == 0.0 { 1.0 } else { scale.x },
        if scale.y == 0.0 { 1.0 } else { scale.y },
    );
    (world - transform.translation.truncate()) / scale
}

pub fn handle_cutting_swipes(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorWorld>,
    mut boards: Query<(Entity, &Transform, &mut CuttingBoard)>,
) {
    let Some(cursor) = cursor.0 else {
        return;
    };

    for (entity, transform, mut board) in &mut boards {
        if !board.active {
            continue;
        }
        let local = board_local(transform, cursor);

        if mouse.just_pressed(MouseButton::Left) {
            if board.contains(local) {
                board.swipe_start = Some(local);
            }
            continue;
        }

        if !mouse.just_released(MouseButton::Left) {
            continue;
        }
        let Some(start) = board.swipe_start.take() else {
            continue;
        };
        let Some(guide) = board.try_cut(start, local) else {
            trace!(board = ?entity, "swipe missed every guide");
            continue;
        };

        let progress = board.progress();
        info!(board = ?entity, guide, progress, "cut completed");
        commands.trigger(CutCompleted {
            board: entity,
            guide,
            progress,
        });

        if board.is_complete() {
            board.active = false;
            commands.trigger(CookingStepCompleted { station: entity });
        }
    }
}

/// Cutting boards only take swipes while their step is running.
pub fn on_cooking_step_started(
    trigger: On<CookingStepStarted>,
    mut boards: Query<&mut CuttingBoard>,
) {
    if let Some(station) = trigger.event().station
        && let Ok(mut board) = boards.get_mut(station)
    {
        board.active = true;
        board.swipe_start = None;
    }
}
