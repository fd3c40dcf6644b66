use {
    bevy::prelude::*,
    cooking_components::CookingSequence,
    cooking_events::{CookingFinished, CookingStepCompleted, CookingStepStarted},
};

/// The instruction panel text. Empty and hidden until a sequence starts.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Resource)]
pub struct CookingInstruction {
    pub text: String,
    pub visible: bool,
}

fn begin_current_step(commands: &mut Commands, sequence: &CookingSequence) {
    match sequence.current_step() {
        Some(step) => {
            info!(dish = %sequence.dish, step = sequence.current, instruction = %step.instruction, "cooking step started");
            commands.trigger(CookingStepStarted {
                index: sequence.current,
                instruction: step.instruction.clone(),
                station: step.station,
            });
        }
        None => {
            let message = sequence.finished_message();
            info!(dish = %sequence.dish, "cooking finished");
            commands.trigger(CookingFinished { message });
        }
    }
}

pub fn start_cooking_sequences(
    mut commands: Commands,
    mut sequences: Query<&mut CookingSequence, Added<CookingSequence>>,
) {
    for mut sequence in &mut sequences {
        if sequence.started {
            continue;
        }
        sequence.started = true;
        begin_current_step(&mut commands, &sequence);
    }
}

pub fn on_cooking_step_completed(
    trigger: On<CookingStepCompleted>,
    mut sequences: Query<&mut CookingSequence>,
) {
    let station = trigger.event().station;
    for mut sequence in &mut sequences {
        let is_current = sequence
            .current_step()
            .is_some_and(|step| step.station == Some(station));
        if is_current && sequence.complete_current() {
            debug!(dish = %sequence.dish, next = sequence.current, "cooking step done");
        }
    }
}

pub fn advance_cooking_sequences(
    mut commands: Commands,
    time: Res<Time>,
    mut sequences: Query<&mut CookingSequence>,
) {
    for mut sequence in &mut sequences {
        let Some(timer) = sequence.transition.as_mut() else {
            continue;
        };
        timer.tick(time.delta());
        if !timer.is_finished() {
            continue;
        }
        sequence.transition = None;
        begin_current_step(&mut commands, &sequence);
    }
}

pub fn on_step_started_show_instruction(
    trigger: On<CookingStepStarted>,
    mut instruction: ResMut<CookingInstruction>,
) {
    instruction.text.clone_from(&trigger.event().instruction);
    instruction.visible = true;
}

pub fn on_finished_show_instruction(
    trigger: On<CookingFinished>,
    mut instruction: ResMut<CookingInstruction>,
) {
    instruction.text.clone_from(&trigger.event().message);
    instruction.visible = true;
}
