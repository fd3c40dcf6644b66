use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
};

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientKind {
    #[default]
    Vegetable,
    Seasoning,
    Liquid,
    Spice,
}

/// Static description of an ingredient. Two ingredients are the same when their
/// names match.
#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: IngredientKind,
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
}

fn default_stackable() -> bool {
    true
}

fn default_max_stack() -> u32 {
    99
}

impl Ingredient {
    pub fn new(name: impl Into<String>, kind: IngredientKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            stackable: true,
            max_stack: default_max_stack(),
        }
    }

    pub fn same_as(&self, other: &Ingredient) -> bool {
        self.name == other.name
    }
}

#[derive(Reflect, Debug, Clone, Default, PartialEq)]
pub struct IngredientSlot {
    pub ingredient: Option<Ingredient>,
    pub quantity: u32,
}

impl IngredientSlot {
    pub fn is_empty(&self) -> bool {
        self.ingredient.is_none() || self.quantity == 0
    }

    /// Replaces the slot content. Quantity is clamped to `1..=max_stack`.
    pub fn set(&mut self, ingredient: Ingredient, quantity: u32) {
        self.quantity = quantity.clamp(1, ingredient.max_stack.max(1));
        self.ingredient = Some(ingredient);
    }

    pub fn clear(&mut self) {
        self.ingredient = None;
        self.quantity = 0;
    }

    pub fn can_accept(&self, ingredient: &Ingredient, quantity: u32) -> bool {
        match &self.ingredient {
            _ if self.is_empty() => true,
            Some(current) if current.same_as(ingredient) && ingredient.stackable => {
                self.quantity + quantity <= ingredient.max_stack
            }
            _ => false,
        }
    }

    /// Adds `quantity` to the slot. When the stack would overflow it is filled to the
    /// limit and `false` is returned because not everything fit.
    pub fn try_add(&mut self, ingredient: &Ingredient, quantity: u32) -> bool {
        if self.is_empty() {
            self.set(ingredient.clone(), quantity);
            return true;
        }

        let stacks = self
            .ingredient
            .as_ref()
            .is_some_and(|current| current.same_as(ingredient) && ingredient.stackable);
        if !stacks {
            return false;
        }

        let total = self.quantity + quantity;
        if total <= ingredient.max_stack {
            self.quantity = total;
            true
        } else {
            self.quantity = ingredient.max_stack;
            false
        }
    }

    pub fn try_remove(&mut self, quantity: u32) -> bool {
        if self.is_empty() || quantity == 0 {
            return false;
        }
        if quantity >= self.quantity {
            self.clear();
        } else {
            self.quantity -= quantity;
        }
        true
    }
}

/// The ingredients drawer.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
pub struct Pantry {
    pub slots: Vec<IngredientSlot>,
    pub open: bool,
}

impl Pantry {
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![IngredientSlot::default(); count],
            open: false,
        }
    }

    /// Fills slots in order from a starting stock, one stack per slot.
    pub fn stock(&mut self, starting: impl IntoIterator<Item = (Ingredient, u32)>) {
        for slot in &mut self.slots {
            slot.clear();
        }
        for (slot, (ingredient, quantity)) in self.slots.iter_mut().zip(starting) {
            slot.set(ingredient, quantity);
        }
    }

    /// Stacks onto a slot that can take the whole amount, else uses an empty slot.
    pub fn add_ingredient(&mut self, ingredient: &Ingredient, quantity: u32) -> bool {
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| !slot.is_empty() && slot.can_accept(ingredient, quantity))
        {
            return slot.try_add(ingredient, quantity);
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_empty()) {
            slot.set(ingredient.clone(), quantity);
            return true;
        }
        warn!(ingredient = %ingredient.name, quantity, "no pantry space left");
        false
    }

    pub fn remove_ingredient(&mut self, ingredient: &Ingredient, quantity: u32) -> bool {
        self.slots
            .iter_mut()
            .find(|slot| {
                !slot.is_empty()
                    && slot
                        .ingredient
                        .as_ref()
                        .is_some_and(|current| current.same_as(ingredient))
            })
            .is_some_and(|slot| slot.try_remove(quantity))
    }

    pub fn count(&self, ingredient: &Ingredient) -> u32 {
        self.slots
            .iter()
            .filter(|slot| {
                slot.ingredient
                    .as_ref()
                    .is_some_and(|current| current.same_as(ingredient))
            })
            .map(|slot| slot.quantity)
            .sum()
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soy() -> Ingredient {
        Ingredient {
            max_stack: 5,
            ..Ingredient::new("Soy Sauce", IngredientKind::Liquid)
        }
    }

    #[test]
    fn slot_stacks_up_to_limit() {
        let mut slot = IngredientSlot::default();
        assert!(slot.try_add(&soy(), 3));
        assert!(slot.can_accept(&soy(), 2));
        assert!(!slot.can_accept(&soy(), 3));

        assert!(!slot.try_add(&soy(), 4));
        assert_eq!(slot.quantity, 5);
        assert!(!slot.try_add(&Ingredient::new("Garlic", IngredientKind::Vegetable), 1));
    }

    #[test]
    fn non_stackable_only_fits_empty_slots() {
        let salt = Ingredient {
            stackable: false,
            ..Ingredient::new("Rock Salt", IngredientKind::Seasoning)
        };
        let mut slot = IngredientSlot::default();
        assert!(slot.try_add(&salt, 1));
        assert!(!slot.can_accept(&salt, 1));
    }

    #[test]
    fn removing_everything_clears_the_slot() {
        let mut slot = IngredientSlot::default();
        slot.set(soy(), 2);
        assert!(slot.try_remove(1));
        assert_eq!(slot.quantity, 1);
        assert!(slot.try_remove(10));
        assert!(slot.is_empty());
        assert!(slot.ingredient.is_none());
        assert!(!slot.try_remove(1));
    }

    #[test]
    fn pantry_prefers_existing_stacks() {
        let garlic = Ingredient::new("Garlic", IngredientKind::Vegetable);
        let mut pantry = Pantry::with_slots(2);
        pantry.stock([(soy(), 2)]);

        assert!(pantry.add_ingredient(&soy(), 2));
        assert_eq!(pantry.slots[0].quantity, 4);
        assert!(pantry.slots[1].is_empty());

        // Would overflow the first stack, so it takes the empty slot.
        assert!(pantry.add_ingredient(&soy(), 3));
        assert_eq!(pantry.count(&soy()), 7);

        assert!(!pantry.add_ingredient(&garlic, 1));
        assert!(pantry.remove_ingredient(&soy(), 4));
        assert!(pantry.add_ingredient(&garlic, 1));
        assert_eq!(pantry.count(&garlic), 1);
    }

    #[test]
    fn ingredient_defaults_from_ron() {
        let parsed: Ingredient = ron::from_str(r#"(name: "Bay Leaf", kind: Spice)"#).unwrap();
        assert!(parsed.stackable);
        assert_eq!(parsed.max_stack, 99);
        assert_eq!(parsed.kind, IngredientKind::Spice);
    }
}
