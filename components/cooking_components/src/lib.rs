//! Components for the cooking minigame.

mod cutting;
mod food;
mod pantry;
mod sequence;

pub use {cutting::*, food::*, pantry::*, sequence::*};

use bevy::prelude::*;

pub struct CookingComponentsPlugin;

impl Plugin for CookingComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FoodParticle>()
            .register_type::<FoodPhysics>()
            .register_type::<Bowl>()
            .register_type::<BowlContents>()
            .register_type::<BowlMotion>()
            .register_type::<Draggable>()
            .register_type::<Dragging>()
            .register_type::<CuttingBoard>()
            .register_type::<CutGuide>()
            .register_type::<CookingSequence>()
            .register_type::<Pantry>();
    }
}
