use {
    bevy::prelude::*,
    interaction_events::{TransitionFinished, TransitionToPosition},
    shared_components::PlayerMotor,
    system_schedule::GameSchedule,
};

pub struct TransitionsPlugin;

impl Plugin for TransitionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .register_type::<ScreenFade>()
            .add_systems(Update, advance_screen_fade.in_set(GameSchedule::FrameEnd))
            .add_observer(on_transition_to_position);
    }
}

/// Seconds the screen stays black while the player is repositioned.
pub const HOLD_SECS: f32 = 0.5;

const ALPHA_SNAP: f32 = 1e-4;

#[derive(Reflect, Debug, Clone, Default, PartialEq)]
pub enum FadePhase {
    #[default]
    Idle,
    FadingOut,
    Holding(Timer),
    FadingIn,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct PendingMove {
    pub target: Vec2,
    pub player: Entity,
    pub face_right: bool,
}

/// Full-screen fade used to hide teleports. The HUD draws `alpha` over everything.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct ScreenFade {
    pub phase: FadePhase,
    pub alpha: f32,
    /// Alpha change per second.
    pub fade_speed: f32,
    pub color: Color,
    pub pending: Option<PendingMove>,
}

impl Default for ScreenFade {
    fn default() -> Self {
        Self {
            phase: FadePhase::Idle,
            alpha: 0.0,
            fade_speed: 2.0,
            color: Color::BLACK,
            pending: None,
        }
    }
}

impl ScreenFade {
    pub fn is_transitioning(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    pub fn overlay_color(&self) -> Color {
        self.color.with_alpha(self.alpha)
    }
}

fn set_inputs(players: &mut Query<&mut PlayerMotor>, player: Entity, enabled: bool) {
    if let Ok(mut motor) = players.get_mut(player) {
        motor.inputs_enabled = enabled;
        motor.input = Vec2::ZERO;
    }
}

pub fn on_transition_to_position(
    trigger: On<TransitionToPosition>,
    mut fade: ResMut<ScreenFade>,
    mut players: Query<&mut PlayerMotor>,
) {
    let request = trigger.event();
    if fade.is_transitioning() {
        debug!(target = ?request.target, "transition already running, request ignored");
        return;
    }

    info!(target = ?request.target, "transition started");
    set_inputs(&mut players, request.player, false);
    fade.pending = Some(PendingMove {
        target: request.target,
        player: request.player,
        face_right: request.face_right,
    });
    fade.phase = FadePhase::FadingOut;
}

pub fn advance_screen_fade(
    mut commands: Commands,
    time: Res<Time>,
    mut fade: ResMut<ScreenFade>,
    mut players: Query<&mut PlayerMotor>,
    mut transforms: Query<&mut Transform>,
) {
    let fade = &mut *fade;
    let step = fade.fade_speed * time.delta_secs();
    match &mut fade.phase {
        FadePhase::Idle => {}
        FadePhase::FadingOut => {
            fade.alpha = (fade.alpha + step).min(1.0);
            if fade.alpha < 1.0 - ALPHA_SNAP {
                return;
            }
            fade.alpha = 1.0;
            if let Some(pending) = fade.pending {
                if let Ok(mut transform) = transforms.get_mut(pending.player) {
                    transform.translation.x = pending.target.x;
                    transform.translation.y = pending.target.y;
                }
                if let Ok(mut motor) = players.get_mut(pending.player) {
                    motor.facing_right = pending.face_right;
                }
            }
            fade.phase = FadePhase::Holding(Timer::from_seconds(HOLD_SECS, TimerMode::Once));
        }
        FadePhase::Holding(timer) => {
            if timer.tick(time.delta()).is_finished() {
                fade.phase = FadePhase::FadingIn;
            }
        }
        FadePhase::FadingIn => {
            fade.alpha = (fade.alpha - step).max(0.0);
            if fade.alpha > ALPHA_SNAP {
                return;
            }
            fade.alpha = 0.0;
            fade.phase = FadePhase::Idle;
            if let Some(pending) = fade.pending.take() {
                set_inputs(&mut players, pending.player, true);
                info!("transition finished");
                commands.trigger(TransitionFinished {
                    player: pending.player,
                });
            }
        }
    }
}
