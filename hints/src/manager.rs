//! Hint progression state machine.
//!
//! The manager owns the runtime copy of the active [`HintSet`], tracks which hint
//! is on screen and drives the fade of the hint surface. It is plain data: Bevy
//! systems call into it and publish the [`HintNotice`]s it queues.

use {
    crate::schedule::{HintScheduler, HintTask},
    bevy::prelude::*,
    hint_components::{Hint, HintError, HintSet},
    hint_resources::{HintSurface, HintTimings},
    std::time::Duration,
};

/// Where the hint surface is in its fade cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FadePhase {
    #[default]
    Idle,
    FadingIn { elapsed: f32 },
    Showing,
    FadingOut {
        from: f32,
        elapsed: f32,
        hint_id: Option<i32>,
    },
}

/// Something other systems may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum HintNotice {
    Shown { hint_id: i32, text: String },
    Hidden { hint_id: Option<i32> },
    Completed { hint_ids: Vec<i32> },
}

#[derive(Resource, Debug)]
pub struct HintManager {
    level_hints: Option<HintSet>,
    current_hint: Option<i32>,
    phase: FadePhase,
    opacity: f32,
    scheduler: HintScheduler,
    timings: HintTimings,
    notices: Vec<HintNotice>,
}

impl FromWorld for HintManager {
    fn from_world(world: &mut World) -> Self {
        let timings = world
            .get_resource::<HintTimings>()
            .copied()
            .unwrap_or_default();
        Self::new(timings)
    }
}

impl HintManager {
    pub fn new(timings: HintTimings) -> Self {
        Self {
            level_hints: None,
            current_hint: None,
            phase: FadePhase::Idle,
            opacity: 0.0,
            scheduler: HintScheduler::default(),
            timings,
            notices: Vec::new(),
        }
    }

    pub fn timings(&self) -> HintTimings {
        self.timings
    }

    pub fn level_hints(&self) -> Option<&HintSet> {
        self.level_hints.as_ref()
    }

    pub fn current_hint_id(&self) -> Option<i32> {
        self.current_hint
    }

    pub fn current_hint(&self) -> Option<&Hint> {
        let id = self.current_hint?;
        self.level_hints.as_ref()?.get(id)
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// True while the surface is visible, including both fades.
    pub fn is_displaying(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    pub fn scheduler(&self) -> &HintScheduler {
        &self.scheduler
    }

    pub fn drain_notices(&mut self) -> Vec<HintNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Makes `set` the active hint set and returns the one it replaces.
    ///
    /// The incoming set always starts with every hint pending. The outgoing set is
    /// reset too when it belongs to a different level. Anything still on screen from
    /// the previous set fades out and all pending timers are dropped.
    pub fn load_level_hints(
        &mut self,
        mut set: HintSet,
        surface: &mut impl HintSurface,
    ) -> Option<HintSet> {
        set.reset_all();

        let mut outgoing = self.level_hints.take();
        if let Some(previous) = outgoing.as_mut()
            && previous.level_name() != set.level_name()
        {
            previous.reset_all();
        }

        self.scheduler.cancel_all();
        let hidden = self.current_hint.take();
        if self.phase != FadePhase::Idle {
            self.begin_fade_out(hidden);
        }

        info!(
            level = %set.level_name(),
            hints = set.len(),
            auto_start = set.auto_start_first_hint(),
            "loaded level hints"
        );

        let auto_start = set.auto_start_first_hint();
        self.level_hints = Some(set);
        if auto_start {
            self.show_next_hint(surface);
        }

        outgoing
    }

    /// Drops the active set, discarding its completion state, and fades out the surface.
    pub fn unload_level_hints(&mut self) -> Option<HintSet> {
        self.scheduler.cancel_all();
        let hidden = self.current_hint.take();
        if self.phase != FadePhase::Idle {
            self.begin_fade_out(hidden);
        }

        let mut outgoing = self.level_hints.take();
        if let Some(set) = outgoing.as_mut() {
            set.reset_all();
            debug!(level = %set.level_name(), "unloaded level hints");
        }
        outgoing
    }

    /// Shows the lowest-id incomplete hint. Returns its id, or `None` if there is nothing left.
    pub fn show_next_hint(&mut self, surface: &mut impl HintSurface) -> Option<i32> {
        let next = self.level_hints.as_ref()?.next_incomplete()?.id;
        self.show_hint(next, surface).then_some(next)
    }

    /// Shows `hint_id` if it exists and is still pending. Unknown or completed ids are
    /// ignored silently.
    pub fn trigger_hint(&mut self, hint_id: i32, surface: &mut impl HintSurface) -> bool {
        let pending = self
            .level_hints
            .as_ref()
            .and_then(|set| set.get(hint_id))
            .is_some_and(|hint| !hint.is_completed);

        if !pending {
            trace!(hint_id, "trigger ignored, hint missing or completed");
            return false;
        }
        self.show_hint(hint_id, surface)
    }

    /// Puts `hint_id` on the surface and starts its fade-in.
    ///
    /// Any pending auto-hide or auto-advance is cancelled: the new hint owns the
    /// surface from here on. Timed hints schedule their auto-hide once the fade-in
    /// has finished.
    pub fn show_hint(&mut self, hint_id: i32, surface: &mut impl HintSurface) -> bool {
        let Some(hint) = self.level_hints.as_ref().and_then(|set| set.get(hint_id)) else {
            return false;
        };
        let text = hint.text.clone();

        self.scheduler.cancel(HintTask::AutoHide);
        self.scheduler.cancel(HintTask::AutoAdvance);

        // The new hint takes over mid fade-out; the old one still counts as hidden.
        if let FadePhase::FadingOut { hint_id: hidden, .. } = self.phase {
            self.notices.push(HintNotice::Hidden { hint_id: hidden });
        }

        self.current_hint = Some(hint_id);
        surface.set_text(&text);
        surface.set_visible(true);
        self.set_opacity(0.0, surface);
        self.phase = FadePhase::FadingIn { elapsed: 0.0 };

        debug!(hint_id, %text, "showing hint");
        self.notices.push(HintNotice::Shown { hint_id, text });
        true
    }

    /// Completes every pending hint with an id up to `hint_id`.
    ///
    /// If the displayed hint is among them it fades out, `current_hint` is cleared and
    /// the next incomplete hint appears once the fade-out and the advance padding have
    /// elapsed. Returns the ids that changed state; calling again with the same id
    /// returns an empty list.
    pub fn complete_hint(&mut self, hint_id: i32) -> Result<Vec<i32>, HintError> {
        let set = self.level_hints.as_mut().ok_or(HintError::NoLevelHints)?;
        if !set.contains(hint_id) {
            return Err(HintError::UnknownHint(hint_id));
        }

        let completed = set.complete_up_to(hint_id);
        for id in &completed {
            if let Some(hint) = set.get(*id) {
                info!(hint_id = id, text = %hint.text, "completed hint");
            }
        }

        let displayed_completed = self
            .current_hint
            .is_some_and(|current| completed.contains(&current));

        if displayed_completed {
            self.hide_current_hint();
            self.current_hint = None;
            self.scheduler
                .schedule(HintTask::AutoAdvance, self.timings.advance_delay());
        }

        if !completed.is_empty() {
            self.notices.push(HintNotice::Completed {
                hint_ids: completed.clone(),
            });
        }
        Ok(completed)
    }

    /// Completes whatever hint is current. `None` when nothing is current.
    pub fn complete_current_hint(&mut self) -> Option<Result<Vec<i32>, HintError>> {
        let current = self.current_hint?;
        Some(self.complete_hint(current))
    }

    /// Cancels a pending auto-hide and fades the surface out.
    ///
    /// `current_hint` is left untouched, so a trigger matching the hidden hint can
    /// still complete it. Only a completion clears it.
    pub fn hide_current_hint(&mut self) {
        self.scheduler.cancel(HintTask::AutoHide);
        match self.phase {
            FadePhase::Idle | FadePhase::FadingOut { .. } => {}
            FadePhase::FadingIn { .. } | FadePhase::Showing => {
                self.begin_fade_out(self.current_hint);
            }
        }
    }

    /// Advances fades and delayed actions by `delta`.
    pub fn tick(&mut self, delta: Duration, surface: &mut impl HintSurface) {
        let due = self.scheduler.tick(delta);
        self.advance_fade(delta.as_secs_f32(), surface);
        for task in due {
            self.run_task(task, surface);
        }
    }

    fn run_task(&mut self, task: HintTask, surface: &mut impl HintSurface) {
        match task {
            HintTask::AutoHide => {
                let timed = self.current_hint().filter(|hint| hint.is_timed()).map(|hint| hint.id);
                match timed {
                    Some(id) => {
                        if let Err(error) = self.complete_hint(id) {
                            error!(%error, "auto-hide could not complete hint");
                        }
                    }
                    None => self.hide_current_hint(),
                }
            }
            HintTask::AutoAdvance => {
                if self.show_next_hint(surface).is_none() {
                    debug!("no incomplete hints left");
                }
            }
        }
    }

    fn advance_fade(&mut self, dt: f32, surface: &mut impl HintSurface) {
        match self.phase {
            FadePhase::Idle | FadePhase::Showing => {}
            FadePhase::FadingIn { elapsed } => {
                let elapsed = elapsed + dt;
                let t = fade_progress(elapsed, self.timings.fade_in);
                self.set_opacity(t, surface);
                if t >= 1.0 {
                    self.phase = FadePhase::Showing;
                    if let Some(hint) = self.current_hint().filter(|hint| hint.is_timed()) {
                        let duration = hint.display_duration;
                        self.scheduler.schedule(HintTask::AutoHide, duration);
                    }
                } else {
                    self.phase = FadePhase::FadingIn { elapsed };
                }
            }
            FadePhase::FadingOut {
                from,
                elapsed,
                hint_id,
            } => {
                let elapsed = elapsed + dt;
                let t = fade_progress(elapsed, self.timings.fade_out);
                self.set_opacity(from * (1.0 - t), surface);
                if t >= 1.0 {
                    surface.set_visible(false);
                    self.phase = FadePhase::Idle;
                    self.notices.push(HintNotice::Hidden { hint_id });
                } else {
                    self.phase = FadePhase::FadingOut {
                        from,
                        elapsed,
                        hint_id,
                    };
                }
            }
        }
    }

    fn begin_fade_out(&mut self, hint_id: Option<i32>) {
        self.phase = FadePhase::FadingOut {
            from: self.opacity,
            elapsed: 0.0,
            hint_id,
        };
    }

    fn set_opacity(&mut self, opacity: f32, surface: &mut impl HintSurface) {
        self.opacity = opacity;
        surface.set_opacity(opacity);
    }
}

fn fade_progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}
