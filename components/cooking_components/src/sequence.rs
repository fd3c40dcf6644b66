use bevy::prelude::*;

/// Seconds between finishing a step and starting the next one.
pub const STEP_TRANSITION_SECS: f32 = 1.0;

/// A recipe as an ordered list of steps.
///
/// Each step names the entity that performs it (a cutting board, a bowl, ...)
/// and the instruction shown while it runs.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct CookingSequence {
    pub dish: String,
    pub steps: Vec<CookingStep>,
    pub current: usize,
    pub started: bool,
    /// Counts down to the next step after a completion.
    pub transition: Option<Timer>,
}

#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct CookingStep {
    pub instruction: String,
    pub station: Option<Entity>,
}

impl CookingStep {
    pub fn new(instruction: impl Into<String>, station: Option<Entity>) -> Self {
        Self {
            instruction: instruction.into(),
            station,
        }
    }
}

impl CookingSequence {
    pub fn new(dish: impl Into<String>, steps: Vec<CookingStep>) -> Self {
        Self {
            dish: dish.into(),
            steps,
            current: 0,
            started: false,
            transition: None,
        }
    }

    pub fn current_step(&self) -> Option<&CookingStep> {
        self.steps.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.current >= self.steps.len()
    }

    pub fn finished_message(&self) -> String {
        format!("{} Complete! Well done!", self.dish)
    }

    /// Moves past the current step and starts the transition countdown. Ignored while
    /// a transition is already running or once the sequence is finished.
    pub fn complete_current(&mut self) -> bool {
        if !self.started || self.transition.is_some() || self.is_finished() {
            return false;
        }
        self.current += 1;
        self.transition = Some(Timer::from_seconds(STEP_TRANSITION_SECS, TimerMode::Once));
        true
    }
}
