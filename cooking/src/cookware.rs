use {
    bevy::{prelude::*, window::PrimaryWindow},
    cooking_components::{Draggable, Dragging},
    cooking_events::ResetCookware,
};

/// Mouse position in world space, `None` when the cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorWorld(pub Option<Vec2>);

pub fn update_cursor_world(
    mut cursor: ResMut<CursorWorld>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
) {
    // Headless apps have no window; leave the cursor to whoever drives it.
    let Ok(window) = windows.single() else {
        return;
    };
    let position = window
        .cursor_position()
        .and_then(|screen| {
            let (camera, camera_transform) = cameras.single().ok()?;
            camera.viewport_to_world_2d(camera_transform, screen).ok()
        });
    if cursor.0 != position {
        cursor.0 = position;
    }
}

pub fn pick_up_cookware(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorWorld>,
    mut cookware: Query<(Entity, &Transform, &Draggable, Option<&mut Sprite>), Without<Dragging>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = cursor.0 else {
        return;
    };

    let picked = cookware
        .iter()
        .filter(|(_, transform, draggable, _)| {
            draggable.enabled
                && transform.translation.truncate().distance(cursor) <= draggable.pick_radius
        })
        .min_by(|(_, a, _, _), (_, b, _, _)| {
            let a = a.translation.truncate().distance_squared(cursor);
            let b = b.translation.truncate().distance_squared(cursor);
            a.total_cmp(&b)
        })
        .map(|(entity, ..)| entity);

    let Some(entity) = picked else {
        return;
    };
    let Ok((_, transform, draggable, sprite)) = cookware.get_mut(entity) else {
        return;
    };

    let mut original_color = Color::WHITE;
    if let Some(mut sprite) = sprite {
        original_color = sprite.color;
        sprite.color = draggable.tint;
    }
    commands.entity(entity).insert(Dragging {
        offset: transform.translation.truncate() - cursor,
        original_color,
    });
    debug!(?entity, "started dragging");
}

pub fn drag_cookware(
    time: Res<Time>,
    cursor: Res<CursorWorld>,
    mut dragged: Query<(&mut Transform, &Draggable, &Dragging)>,
) {
    let Some(cursor) = cursor.0 else {
        return;
    };
    let dt = time.delta_secs();

    for (mut transform, draggable, dragging) in &mut dragged {
        let target = cursor + dragging.offset;
        let next = transform
            .translation
            .truncate()
            .lerp(target, draggable.follow_factor(dt));
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

pub fn release_cookware(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    mut dragged: Query<(Entity, &Dragging, Option<&mut Sprite>)>,
) {
    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    for (entity, dragging, sprite) in &mut dragged {
        if let Some(mut sprite) = sprite {
            sprite.color = dragging.original_color;
        }
        commands.entity(entity).remove::<Dragging>();
        debug!(?entity, "stopped dragging");
    }
}

pub fn on_reset_cookware(
    trigger: On<ResetCookware>,
    mut commands: Commands,
    mut cookware: Query<(&mut Transform, &Draggable, Option<&Dragging>, Option<&mut Sprite>)>,
) {
    let entity = trigger.event().entity;
    let Ok((mut transform, draggable, dragging, sprite)) = cookware.get_mut(entity) else {
        return;
    };

    if let Some(dragging) = dragging {
        if let Some(mut sprite) = sprite {
            sprite.color = dragging.original_color;
        }
        commands.entity(entity).remove::<Dragging>();
    }
    transform.translation.x = draggable.home.x;
    transform.translation.y = draggable.home.y;
    debug!(?entity, home = ?draggable.home, "cookware reset");
}
