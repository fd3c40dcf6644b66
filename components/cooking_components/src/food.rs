use bevy::prelude::*;

/// A piece of food simulated in the XY plane.
///
/// `angular_velocity` is in degrees per second; the angle itself lives in the
/// `Transform`. `bowl` is kept in sync with that bowl's [`BowlContents`].
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component, Default)]
#[require(FoodPhysics, Transform)]
pub struct FoodParticle {
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub bowl: Option<Entity>,
}

/// Tuning for a [`FoodParticle`].
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct FoodPhysics {
    pub gravity: f32,
    pub bounce: f32,
    pub friction: f32,
    pub min_velocity: f32,
    pub enable_rotation: bool,
    /// Degrees per second per unit of speed.
    pub rotation_speed: f32,
    pub max_rotation_speed: f32,
    pub rotation_friction: f32,
    /// Spin follows movement when set, otherwise it only decays.
    pub rotate_with_velocity: bool,
    pub detection_radius: f32,
    /// Distance from the rim at which the wall pushes back.
    pub rim_margin: f32,
    /// Height of the counter top for food outside any bowl.
    pub floor_y: f32,
}

impl Default for FoodPhysics {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            bounce: 0.3,
            friction: 0.95,
            min_velocity: 0.1,
            enable_rotation: true,
            rotation_speed: 180.0,
            max_rotation_speed: 720.0,
            rotation_friction: 0.98,
            rotate_with_velocity: true,
            detection_radius: 1.0,
            rim_margin: 0.1,
            floor_y: -5.0,
        }
    }
}

impl FoodParticle {
    /// Adds an impulse plus a random spin proportional to it. `spin` is a roll in `[-1, 1]`.
    pub fn add_force(&mut self, force: Vec2, spin: f32, physics: &FoodPhysics) {
        self.velocity += force;
        if physics.enable_rotation {
            self.add_torque(force.length() * spin * 50.0, physics);
        }
    }

    pub fn add_torque(&mut self, torque: f32, physics: &FoodPhysics) {
        if physics.enable_rotation {
            self.angular_velocity = (self.angular_velocity + torque)
                .clamp(-physics.max_rotation_speed, physics.max_rotation_speed);
        }
    }

    pub fn is_in_bowl(&self) -> bool {
        self.bowl.is_some()
    }
}

/// A bowl food can settle in. Also a piece of [`Draggable`] cookware.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
#[require(BowlContents, BowlMotion, Transform)]
pub struct Bowl {
    pub radius: f32,
    pub center_offset: Vec2,
    pub capacity: usize,
    /// Per-frame movement above which the contents get shaken.
    pub shake_threshold: f32,
    pub shake_multiplier: f32,
}

impl Default for Bowl {
    fn default() -> Self {
        Self {
            radius: 1.5,
            center_offset: Vec2::ZERO,
            capacity: 50,
            shake_threshold: 0.05,
            shake_multiplier: 5.0,
        }
    }
}

impl Bowl {
    pub fn center(&self, transform: &Transform) -> Vec2 {
        transform.translation.truncate() + self.center_offset
    }

    /// Radius after the bowl's horizontal scale is applied.
    pub fn world_radius(&self, transform: &Transform) -> f32 {
        self.radius * transform.scale.x
    }

    /// Shake strength for a frame in which the bowl moved by `delta`, if any.
    pub fn shake_intensity(&self, delta: Vec2) -> Option<f32> {
        let moved = delta.length();
        (moved > self.shake_threshold).then(|| moved * self.shake_multiplier)
    }
}

/// Particles currently inside a bowl, in arrival order.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct BowlContents(pub Vec<Entity>);

impl BowlContents {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, food: Entity) -> bool {
        self.0.contains(&food)
    }

    pub fn is_full(&self, bowl: &Bowl) -> bool {
        self.0.len() >= bowl.capacity
    }

    /// Returns false when the food was already there or the bowl is full.
    pub fn insert(&mut self, food: Entity, bowl: &Bowl) -> bool {
        if self.contains(food) || self.is_full(bowl) {
            return false;
        }
        self.0.push(food);
        true
    }

    pub fn remove(&mut self, food: Entity) -> bool {
        let before = self.0.len();
        self.0.retain(|entity| *entity != food);
        before != self.0.len()
    }
}

/// Where the bowl was on the previous frame.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct BowlMotion {
    pub last_position: Option<Vec2>,
}

/// Cookware the mouse can pick up and move around.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct Draggable {
    /// Fraction of the distance to the cursor still left after one second.
    pub smoothness: f32,
    pub tint: Color,
    pub pick_radius: f32,
    pub home: Vec2,
    pub enabled: bool,
}

impl Default for Draggable {
    fn default() -> Self {
        Self {
            smoothness: 0.1,
            tint: Color::srgba(1.0, 1.0, 1.0, 0.8),
            pick_radius: 1.0,
            home: Vec2::ZERO,
            enabled: true,
        }
    }
}

impl Draggable {
    pub fn at(home: Vec2) -> Self {
        Self {
            home,
            ..default()
        }
    }

    /// Frame-rate independent interpolation factor towards the drag target.
    pub fn follow_factor(&self, dt: f32) -> f32 {
        1.0 - self.smoothness.clamp(0.0, 1.0).powf(dt)
    }
}

/// Present while the mouse holds the entity.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct Dragging {
    /// Entity position minus cursor position at pick-up.
    pub offset: Vec2,
    pub original_color: Color,
}
