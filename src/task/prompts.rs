use rand::Rng;
use rand::seq::IndexedRandom;

const DEFAULT: &[&str] = &[
    "Operate the control panel to match the target configuration. Adjust each control (switches, sliders, buttons, dials) to the correct state shown in the final image.",
    "Show how to configure the control panel to reach the target state. Animate the operation of each control that needs to be changed.",
    "Demonstrate the sequence of control operations needed to transform the panel from its current state to the target state. Move each control smoothly to its final position.",
    "Animate the control panel being configured to match the target state. Show each control being adjusted to the correct setting.",
];

const SWITCHES: &[&str] = &[
    "Flip the switches on the control panel to match the target configuration. Show each switch being toggled to its correct on/off state.",
    "Operate the toggle switches to achieve the target panel state. Animate each switch flipping to the correct position.",
    "Configure the switches to match the target state. Show the sequence of switch operations needed.",
];

const SLIDER: &[&str] = &[
    "Adjust the slider to the target value shown in the final image. Show the slider moving smoothly from its current position to the target position.",
    "Move the slider control to match the target configuration. Animate the slider smoothly transitioning to the correct value.",
];

const MIXED: &[&str] = &[
    "Operate all the controls on the panel to reach the target state. Show switches being flipped, sliders being adjusted, buttons being pressed, and dials being rotated as needed.",
    "Configure the control panel by operating all necessary controls. Demonstrate the sequence of operations: toggling switches, moving sliders, pressing buttons, and rotating dials to match the target state.",
];

/// Every prompt for `task_type`; unknown types get the `default` family.
pub fn prompts_for(task_type: &str) -> &'static [&'static str] {
    match task_type {
        "switches" => SWITCHES,
        "slider" => SLIDER,
        "mixed" => MIXED,
        _ => DEFAULT,
    }
}

/// Pick one prompt for `task_type` uniformly at random.
pub fn select_prompt<R: Rng + ?Sized>(task_type: &str, rng: &mut R) -> &'static str {
    prompts_for(task_type).choose(rng).copied().unwrap_or(DEFAULT[0])
}

#[cfg(test)]
#[path = "../../tests/unit/task/prompts.rs"]
mod tests;
