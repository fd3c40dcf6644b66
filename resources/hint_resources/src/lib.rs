use {
    bevy::{platform::collections::HashMap, prelude::*},
    hint_assets::HintSetDefinition,
};

/// The only calls the hint manager makes into presentation.
pub trait HintSurface {
    fn set_text(&mut self, text: &str);
    fn set_visible(&mut self, visible: bool);
    fn set_opacity(&mut self, opacity: f32);
}

/// Presentation state of the hint panel. `hint_ui` mirrors it into UI nodes.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Resource)]
pub struct HintDisplay {
    pub text: String,
    pub visible: bool,
    pub opacity: f32,
}

impl HintSurface for HintDisplay {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// Fade and auto-advance timings, in seconds.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct HintTimings {
    pub fade_in: f32,
    pub fade_out: f32,
    /// Extra wait after a fade-out before the next hint is shown.
    pub advance_padding: f32,
}

impl Default for HintTimings {
    fn default() -> Self {
        Self {
            fade_in: 0.5,
            fade_out: 0.5,
            advance_padding: 0.1,
        }
    }
}

impl HintTimings {
    pub fn advance_delay(&self) -> f32 {
        self.fade_out + self.advance_padding
    }
}

/// Hint set definitions indexed by level name.
#[derive(Resource, Default)]
pub struct HintLibrary {
    pub sets: HashMap<String, Handle<HintSetDefinition>>,
}

impl HintLibrary {
    pub fn get(&self, level_name: &str) -> Option<&Handle<HintSetDefinition>> {
        self.sets.get(level_name)
    }
}
