use {
    crate::physics::{
        BowlCandidate, BowlFrame, initial_motion, integrate, nearest_bowl, pour_force, shake_kick,
        spin,
    },
    bevy::prelude::*,
    cooking_components::{Bowl, BowlContents, BowlMotion, FoodParticle, FoodPhysics},
    cooking_events::{FoodEnteredBowl, FoodLeftBowl, PourBowl, ShakeBowl},
    rand::Rng,
};

/// Components for a new food particle at `position` with a small random toss.
pub fn food_bundle(position: Vec2, physics: FoodPhysics, rng: &mut impl Rng) -> impl Bundle {
    let (velocity, angular_velocity) = initial_motion(&physics, rng);
    (
        FoodParticle {
            velocity,
            angular_velocity,
            bowl: None,
        },
        physics,
        Transform::from_translation(position.extend(1.0)),
    )
}

/// Moves particles between bowls as they cross bowl boundaries.
pub fn track_bowl_containment(
    mut commands: Commands,
    mut foods: Query<(Entity, &Transform, &FoodPhysics, &mut FoodParticle), Without<Bowl>>,
    mut bowls: Query<(Entity, &Bowl, &Transform, &mut BowlContents), Without<FoodParticle>>,
) {
    let mut candidates: Vec<BowlCandidate> = bowls
        .iter()
        .map(|(entity, bowl, transform, contents)| BowlCandidate {
            entity,
            frame: BowlFrame {
                center: bowl.center(transform),
                radius: bowl.world_radius(transform),
            },
            full: contents.is_full(bowl),
        })
        .collect();

    for (food_entity, transform, physics, mut food) in &mut foods {
        let position = transform.translation.truncate();
        let target = nearest_bowl(position, physics.detection_radius, food.bowl, &candidates);
        if target == food.bowl {
            continue;
        }

        if let Some(previous) = food.bowl.take() {
            if let Ok((_, bowl, _, mut contents)) = bowls.get_mut(previous) {
                contents.remove(food_entity);
                set_full(&mut candidates, previous, contents.is_full(bowl));
                debug!(food = ?food_entity, bowl = ?previous, total = contents.len(), "food left bowl");
            }
            commands.trigger(FoodLeftBowl {
                food: food_entity,
                bowl: previous,
            });
        }

        let Some(next) = target else {
            continue;
        };
        if let Ok((_, bowl, _, mut contents)) = bowls.get_mut(next)
            && contents.insert(food_entity, bowl)
        {
            food.bowl = Some(next);
            set_full(&mut candidates, next, contents.is_full(bowl));
            debug!(food = ?food_entity, bowl = ?next, total = contents.len(), "food entered bowl");
            commands.trigger(FoodEnteredBowl {
                food: food_entity,
                bowl: next,
            });
        }
    }
}

fn set_full(candidates: &mut [BowlCandidate], bowl: Entity, full: bool) {
    if let Some(candidate) = candidates.iter_mut().find(|c| c.entity == bowl) {
        candidate.full = full;
    }
}

/// Forgets particles that no longer exist.
pub fn prune_bowl_contents(
    mut bowls: Query<&mut BowlContents>,
    foods: Query<(), With<FoodParticle>>,
) {
    for mut contents in &mut bowls {
        if contents.0.iter().any(|food| !foods.contains(*food)) {
            contents.0.retain(|food| foods.contains(*food));
        }
    }
}

pub fn simulate_food(
    time: Res<Time>,
    mut foods: Query<(&mut Transform, &mut FoodParticle, &FoodPhysics), Without<Bowl>>,
    bowls: Query<(&Bowl, &Transform), Without<FoodParticle>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let mut rng = rand::rng();

    for (mut transform, mut food, physics) in &mut foods {
        let frame = food
            .bowl
            .and_then(|bowl| bowls.get(bowl).ok())
            .map(|(bowl, bowl_transform)| BowlFrame {
                center: bowl.center(bowl_transform),
                radius: bowl.world_radius(bowl_transform),
            });

        let mut position = transform.translation.truncate();
        integrate(&mut food, &mut position, physics, frame, dt, &mut rng);
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        let degrees = spin(&mut food, physics, dt);
        if degrees != 0.0 {
            transform.rotate_z(degrees.to_radians());
        }
    }
}

/// Shakes a bowl's contents whenever the bowl itself moved far enough in one frame.
pub fn detect_bowl_shake(
    mut commands: Commands,
    mut bowls: Query<(Entity, &Bowl, &Transform, &mut BowlMotion)>,
) {
    for (entity, bowl, transform, mut motion) in &mut bowls {
        let position = transform.translation.truncate();
        let Some(last) = motion.last_position.replace(position) else {
            continue;
        };
        if let Some(intensity) = bowl.shake_intensity(position - last) {
            commands.trigger(ShakeBowl { entity, intensity });
        }
    }
}

pub fn on_shake_bowl(
    trigger: On<ShakeBowl>,
    bowls: Query<&BowlContents>,
    mut foods: Query<(&mut FoodParticle, &FoodPhysics)>,
) {
    let event = trigger.event();
    let Ok(contents) = bowls.get(event.entity) else {
        return;
    };

    let mut rng = rand::rng();
    for food_entity in &contents.0 {
        let Ok((mut food, physics)) = foods.get_mut(*food_entity) else {
            continue;
        };
        let (impulse, torque) = shake_kick(event.intensity, &mut rng);
        food.add_force(impulse, rng.random_range(-1.0..=1.0), physics);
        food.add_torque(torque, physics);
    }
    trace!(bowl = ?event.entity, intensity = event.intensity, count = contents.len(), "shook bowl");
}

pub fn on_pour_bowl(
    trigger: On<PourBowl>,
    bowls: Query<&BowlContents>,
    mut foods: Query<(&mut FoodParticle, &FoodPhysics)>,
) {
    let event = trigger.event();
    let Ok(contents) = bowls.get(event.entity) else {
        warn!(bowl = ?event.entity, "pour requested on something that is not a bowl");
        return;
    };

    let force = pour_force(event.direction, event.force);
    let mut rng = rand::rng();
    for food_entity in &contents.0 {
        if let Ok((mut food, physics)) = foods.get_mut(*food_entity) {
            food.add_force(force, rng.random_range(-1.0..=1.0), physics);
        }
    }
    debug!(bowl = ?event.entity, count = contents.len(), "poured bowl");
}
