use {
    bevy::prelude::*,
    dialogue_assets::DialogueLine,
    std::{collections::VecDeque, time::Duration},
};

/// Seconds per revealed character.
pub const TYPING_SPEED: f32 = 0.2;
/// Pause after a line is fully typed.
pub const LINE_HOLD_SECS: f32 = 2.0;
/// Pause after the last line before the box closes.
pub const END_DELAY_SECS: f32 = 1.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialoguePhase {
    #[default]
    Idle,
    Typing {
        revealed: usize,
        timer: Timer,
    },
    Waiting(Timer),
    Ending(Timer),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogueNotice {
    Started,
    LineShown { speaker: String },
    Ended,
}

/// Plays one conversation at a time, line by line with a typewriter reveal.
#[derive(Resource, Debug, Clone)]
pub struct DialogueRunner {
    typing_speed: f32,
    queue: VecDeque<DialogueLine>,
    line: Option<DialogueLine>,
    phase: DialoguePhase,
    notices: Vec<DialogueNotice>,
}

impl Default for DialogueRunner {
    fn default() -> Self {
        Self::new(TYPING_SPEED)
    }
}

impl DialogueRunner {
    pub fn new(typing_speed: f32) -> Self {
        Self {
            typing_speed,
            queue: VecDeque::new(),
            line: None,
            phase: DialoguePhase::Idle,
            notices: Vec::new(),
        }
    }

    pub fn phase(&self) -> &DialoguePhase {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != DialoguePhase::Idle
    }

    pub fn speaker(&self) -> &str {
        self.line.as_ref().map_or("", |line| line.speaker.as_str())
    }

    pub fn visible_text(&self) -> String {
        let Some(line) = &self.line else {
            return String::new();
        };
        match &self.phase {
            DialoguePhase::Typing { revealed, .. } => line.text.chars().take(*revealed).collect(),
            _ => line.text.clone(),
        }
    }

    pub fn drain_notices(&mut self) -> Vec<DialogueNotice> {
        std::mem::take(&mut self.notices)
    }

    pub fn start(&mut self, lines: Vec<DialogueLine>) {
        self.queue = lines.into();
        self.notices.push(DialogueNotice::Started);
        self.next_line();
    }

    pub fn advance(&mut self) {
        match &self.phase {
            DialoguePhase::Typing { .. } => self.finish_typing(),
            DialoguePhase::Waiting(_) => self.next_line(),
            DialoguePhase::Idle | DialoguePhase::Ending(_) => {}
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        match &mut self.phase {
            DialoguePhase::Idle => {}
            DialoguePhase::Typing { revealed, timer } => {
                let total = self.line.as_ref().map_or(0, |line| line.text.chars().count());
                timer.tick(delta);
                let mut done = false;
                for _ in 0..timer.times_finished_this_tick() {
                    if *revealed < total {
                        *revealed += 1;
                    } else {
                        done = true;
                        break;
                    }
                }
                if done {
                    self.finish_typing();
                }
            }
            DialoguePhase::Waiting(timer) => {
                if timer.tick(delta).is_finished() {
                    self.next_line();
                }
            }
            DialoguePhase::Ending(timer) => {
                if timer.tick(delta).is_finished() {
                    self.queue.clear();
                    self.line = None;
                    self.phase = DialoguePhase::Idle;
                    self.notices.push(DialogueNotice::Ended);
                }
            }
        }
    }

    fn finish_typing(&mut self) {
        self.phase = DialoguePhase::Waiting(Timer::from_seconds(LINE_HOLD_SECS, TimerMode::Once));
    }

    fn next_line(&mut self) {
        match self.queue.pop_front() {
            Some(line) => {
                let revealed = usize::from(!line.text.is_empty());
                self.notices.push(DialogueNotice::LineShown {
                    speaker: line.speaker.clone(),
                });
                self.line = Some(line);
                self.phase = DialoguePhase::Typing {
                    revealed,
                    timer: Timer::from_seconds(self.typing_speed, TimerMode::Repeating),
                };
            }
            None => {
                self.phase = DialoguePhase::Ending(Timer::from_seconds(END_DELAY_SECS, TimerMode::Once));
            }
        }
    }
}
