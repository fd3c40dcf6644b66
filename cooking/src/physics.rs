//! Food particle integration.
//!
//! Everything here is a pure function of the particle state, its tuning and an
//! RNG, so it can be stepped deterministically in tests. Systems in
//! [`crate::systems`] feed it from the ECS.

use {
    bevy::prelude::*,
    cooking_components::{FoodParticle, FoodPhysics},
    rand::Rng,
};

/// Spin added when food bounces on the counter, in degrees per second.
const FLOOR_SPIN: f32 = 200.0;
/// Spin added per unit of speed when food hits the bowl rim.
const RIM_SPIN_PER_SPEED: f32 = 100.0;
/// How quickly spin catches up with movement, per second.
const SPIN_CATCH_UP: f32 = 5.0;
/// Below this spin, slow food stops turning.
const SPIN_STOP: f32 = 10.0;
/// Below this speed, spin decays instead of following movement.
const SPIN_MIN_SPEED: f32 = 0.1;

/// A bowl as the particle sees it: world center and scaled radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowlFrame {
    pub center: Vec2,
    pub radius: f32,
}

/// Candidate bowl for containment.
#[derive(Debug, Clone, Copy)]
pub struct BowlCandidate {
    pub entity: Entity,
    pub frame: BowlFrame,
    pub full: bool,
}

/// Picks the closest bowl the particle is inside of.
///
/// The particle's detection circle must overlap the bowl's circle and the
/// particle itself must lie within the bowl's radius.
///
/// A full bowl is skipped unless the particle is already one of its contents.
pub fn nearest_bowl(
    position: Vec2,
    detection_radius: f32,
    current: Option<Entity>,
    candidates: &[BowlCandidate],
) -> Option<Entity> {
    candidates
        .iter()
        .filter(|candidate| !candidate.full || Some(candidate.entity) == current)
        .map(|candidate| (candidate, position.distance(candidate.frame.center)))
        .filter(|(candidate, distance)| {
            *distance <= detection_radius + candidate.frame.radius
                && *distance <= candidate.frame.radius
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(candidate, _)| candidate.entity)
}

/// Advances velocity and position by `dt`.
pub fn integrate(
    food: &mut FoodParticle,
    position: &mut Vec2,
    physics: &FoodPhysics,
    bowl: Option<BowlFrame>,
    dt: f32,
    rng: &mut impl Rng,
) {
    match bowl {
        Some(frame) => apply_bowl_forces(food, position, physics, frame, dt, rng),
        None => apply_counter_forces(food, position, physics, dt, rng),
    }

    let speed = food.velocity.length();
    if speed < physics.min_velocity * 2.0 {
        food.velocity *= physics.friction;
    }
    if food.velocity.length() < physics.min_velocity {
        food.velocity = Vec2::ZERO;
    }

    *position += food.velocity * dt;
}

fn apply_bowl_forces(
    food: &mut FoodParticle,
    position: &mut Vec2,
    physics: &FoodPhysics,
    frame: BowlFrame,
    dt: f32,
    rng: &mut impl Rng,
) {
    let from_center = *position - frame.center;
    let distance = from_center.length();

    // Seen from above, the bottom of the bowl is its center.
    food.velocity -= from_center.normalize_or_zero() * physics.gravity * dt;

    let rim = (frame.radius - physics.rim_margin).max(0.0);
    if distance >= rim && distance > 0.0 {
        let inward = -from_center / distance;
        // Only food heading into the wall bounces; food already falling back stays put.
        if food.velocity.dot(inward) < 0.0 {
            food.velocity = food.velocity.reflect(inward) * physics.bounce;
            if physics.enable_rotation {
                let spin = food.velocity.length() * RIM_SPIN_PER_SPEED;
                let torque = rng.random_range(-spin..=spin);
                food.add_torque(torque, physics);
            }
        }
        *position = frame.center - inward * rim;
    }
}

fn apply_counter_forces(
    food: &mut FoodParticle,
    position: &mut Vec2,
    physics: &FoodPhysics,
    dt: f32,
    rng: &mut impl Rng,
) {
    food.velocity.y -= physics.gravity * dt;

    if position.y < physics.floor_y {
        food.velocity.y = food.velocity.y.abs() * physics.bounce;
        position.y = physics.floor_y;
        if physics.enable_rotation {
            food.add_torque(rng.random_range(-FLOOR_SPIN..=FLOOR_SPIN), physics);
        }
    }
}

/// Updates `angular_velocity` and returns the rotation to apply this frame, in degrees.
pub fn spin(food: &mut FoodParticle, physics: &FoodPhysics, dt: f32) -> f32 {
    if !physics.enable_rotation {
        return 0.0;
    }

    let max = physics.max_rotation_speed;
    if physics.rotate_with_velocity {
        let speed = food.velocity.length();
        if speed > SPIN_MIN_SPEED {
            let direction = if food.velocity.x < 0.0 { -1.0 } else { 1.0 };
            let target = (speed * physics.rotation_speed * direction).clamp(-max, max);
            let t = (dt * SPIN_CATCH_UP).clamp(0.0, 1.0);
            food.angular_velocity += (target - food.angular_velocity) * t;
        } else {
            food.angular_velocity *= physics.rotation_friction;
            if food.angular_velocity.abs() < SPIN_STOP {
                food.angular_velocity = 0.0;
            }
        }
    } else {
        food.angular_velocity *= physics.rotation_friction;
    }

    food.angular_velocity = food.angular_velocity.clamp(-max, max);
    food.angular_velocity * dt
}

/// Random impulse and torque for one particle of a shaken bowl.
pub fn shake_kick(intensity: f32, rng: &mut impl Rng) -> (Vec2, f32) {
    let intensity = intensity.max(0.0);
    let impulse = Vec2::new(
        rng.random_range(-intensity..=intensity),
        rng.random_range(0.0..=intensity * 0.5),
    );
    let torque = rng.random_range(-intensity * 100.0..=intensity * 100.0);
    (impulse, torque)
}

pub fn pour_force(direction: Vec2, force: f32) -> Vec2 {
    direction.normalize_or_zero() * force
}

/// Starting velocity and spin for freshly spawned food.
pub fn initial_motion(physics: &FoodPhysics, rng: &mut impl Rng) -> (Vec2, f32) {
    let velocity = Vec2::new(rng.random_range(-2.0..=2.0), rng.random_range(-1.0..=1.0));
    let spin = if physics.enable_rotation {
        rng.random_range(-physics.rotation_speed..=physics.rotation_speed)
    } else {
        0.0
    };
    (velocity, spin)
}
