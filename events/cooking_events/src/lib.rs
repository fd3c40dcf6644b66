use bevy::prelude::*;

/// A food particle settled into a bowl.
#[derive(Event, Debug, Clone, Copy)]
pub struct FoodEnteredBowl {
    pub food: Entity,
    pub bowl: Entity,
}

/// A food particle left the bowl it was in.
#[derive(Event, Debug, Clone, Copy)]
pub struct FoodLeftBowl {
    pub food: Entity,
    pub bowl: Entity,
}

/// Shakes every particle in the target bowl.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct ShakeBowl {
    pub entity: Entity,
    pub intensity: f32,
}

/// Pushes every particle in the target bowl along `direction`.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct PourBowl {
    pub entity: Entity,
    pub direction: Vec2,
    pub force: f32,
}

/// Sends draggable cookware back to where it started.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct ResetCookware {
    pub entity: Entity,
}

/// A guide on a cutting board was cut.
#[derive(Event, Debug, Clone, Copy)]
pub struct CutCompleted {
    pub board: Entity,
    pub guide: usize,
    pub progress: f32,
}

/// The station performing the current cooking step is done.
#[derive(Event, Debug, Clone, Copy)]
pub struct CookingStepCompleted {
    pub station: Entity,
}

/// A new step became current. `station` receives `active = true`.
#[derive(Event, Debug, Clone)]
pub struct CookingStepStarted {
    pub index: usize,
    pub instruction: String,
    pub station: Option<Entity>,
}

#[derive(Event, Debug, Clone)]
pub struct CookingFinished {
    pub message: String,
}

/// Opens or closes the ingredients drawer.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct TogglePantry {
    pub entity: Entity,
}

/// Uses one ingredient from a pantry slot. The drawer closes afterwards.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct TakeIngredient {
    pub entity: Entity,
    pub slot: usize,
}
