use bevy::prelude::*;

pub struct InteractionComponentsPlugin;

impl Plugin for InteractionComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Interactable>();
        app.register_type::<PlayerInteraction>();
        app.register_type::<Door>();
    }
}

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionKind {
    #[default]
    Click,
    Hold,
}

/// Something the player can walk up to and use.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Transform)]
pub struct Interactable {
    pub name: String,
    pub description: String,
    pub kind: InteractionKind,
}

impl Interactable {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: InteractionKind::Click,
        }
    }

    /// Text shown while this is the focused interactable.
    pub fn prompt(&self) -> String {
        format!("[Space] {}", self.description)
    }
}

/// How far the player reaches.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct PlayerInteraction {
    pub range: f32,
}

impl Default for PlayerInteraction {
    fn default() -> Self {
        Self { range: 2.0 }
    }
}

/// Moves the player to `destination` behind a screen fade.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
#[require(Interactable = Interactable::new("Door", "Enter"))]
pub struct Door {
    pub destination: Vec2,
    pub face_right: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_uses_description() {
        let stove = Interactable::new("Stove", "Cook");
        assert_eq!(stove.prompt(), "[Space] Cook");
    }

    #[test]
    fn door_defaults_its_interactable() {
        let mut world = World::new();
        let door = world
            .spawn(Door {
                destination: Vec2::new(10.0, 0.0),
                face_right: false,
            })
            .id();
        let interactable = world.get::<Interactable>(door).unwrap();
        assert_eq!(interactable.name, "Door");
        assert_eq!(interactable.prompt(), "[Space] Enter");
    }
}
