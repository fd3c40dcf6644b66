use {
    bevy::prelude::*,
    cooking_components::Pantry,
    cooking_events::{TakeIngredient, TogglePantry},
};

pub fn on_toggle_pantry(trigger: On<TogglePantry>, mut pantries: Query<&mut Pantry>) {
    let entity = trigger.event().entity;
    if let Ok(mut pantry) = pantries.get_mut(entity) {
        let open = pantry.toggle();
        debug!(?entity, open, "pantry toggled");
    }
}

pub fn on_take_ingredient(trigger: On<TakeIngredient>, mut pantries: Query<&mut Pantry>) {
    let event = trigger.event();
    let Ok(mut pantry) = pantries.get_mut(event.entity) else {
        return;
    };

    if let Some(slot) = pantry.slots.get_mut(event.slot)
        && let Some(ingredient) = slot.ingredient.clone()
        && !slot.is_empty()
    {
        let quantity = slot.quantity;
        slot.try_remove(1);
        info!(
            ingredient = %ingredient.name,
            quantity,
            description = %ingredient.description,
            "took ingredient"
        );
    }
    pantry.open = false;
}
