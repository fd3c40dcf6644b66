//! Delayed hint actions with cancel-on-supersede semantics.

use {bevy::prelude::*, std::time::Duration};

/// Work the manager defers to a later frame. Each kind has at most one pending
/// instance; scheduling it again replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum HintTask {
    /// Hide (and, for timed hints, complete) the displayed hint.
    AutoHide,
    /// Show the next incomplete hint after a completion.
    AutoAdvance,
}

#[derive(Debug)]
struct Scheduled {
    task: HintTask,
    timer: Timer,
}

#[derive(Debug, Default)]
pub struct HintScheduler {
    pending: Vec<Scheduled>,
}

impl HintScheduler {
    /// Schedules `task` to fire after `delay_secs`, cancelling a pending one of the same kind.
    pub fn schedule(&mut self, task: HintTask, delay_secs: f32) {
        self.cancel(task);
        self.pending.push(Scheduled {
            task,
            timer: Timer::from_seconds(delay_secs.max(0.0), TimerMode::Once),
        });
    }

    /// Returns whether something was pending.
    pub fn cancel(&mut self, task: HintTask) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| scheduled.task != task);
        before != self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_scheduled(&self, task: HintTask) -> bool {
        self.pending.iter().any(|scheduled| scheduled.task == task)
    }

    /// Advances every timer and removes the ones that are due, returning their tasks
    /// in the order they were scheduled.
    pub fn tick(&mut self, delta: Duration) -> Vec<HintTask> {
        let mut due = Vec::new();
        self.pending.retain_mut(|scheduled| {
            scheduled.timer.tick(delta);
            if scheduled.timer.is_finished() {
                due.push(scheduled.task);
                false
            } else {
                true
            }
        });
        due
    }
}
