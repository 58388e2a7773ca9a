use crate::foundation::math::shortest_arc_deg;
use crate::panel::control::{ControlKind, ControlState};

/// Progress at which binary controls flip from initial to target.
pub const STEP_AT: f64 = 0.5;

/// Return `initial` before the midpoint, `target` from it onward.
///
/// This is the policy for binary archetypes and the fallback for states whose variant does
/// not match the archetype.
pub fn step_at_midpoint(initial: ControlState, target: ControlState, progress: f64) -> ControlState {
    if progress < STEP_AT { initial } else { target }
}

/// Intermediate state of a `kind` control at `progress` (clamped to `[0, 1]`).
///
/// - switch, button: discrete flip at [`STEP_AT`]
/// - slider: linear, rounded to the nearest percent
/// - dial: along the shorter arc, truncated to whole degrees in `[0, 360)`
pub fn interpolate(
    kind: ControlKind,
    initial: ControlState,
    target: ControlState,
    progress: f64,
) -> ControlState {
    let t = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    match (kind, initial, target) {
        (ControlKind::Switch | ControlKind::Button, ControlState::Bool(_), ControlState::Bool(_)) => {
            step_at_midpoint(initial, target, t)
        }
        (ControlKind::Slider, ControlState::Percent(a), ControlState::Percent(b)) => {
            let (a, b) = (f64::from(a), f64::from(b));
            ControlState::Percent((a + (b - a) * t).round().clamp(0.0, 100.0) as u8)
        }
        (ControlKind::Dial, ControlState::Angle(a), ControlState::Angle(b)) => {
            let delta = shortest_arc_deg(i32::from(a), i32::from(b));
            let raw = f64::from(a) + f64::from(delta) * t;
            ControlState::Angle((raw.rem_euclid(360.0).trunc() as u16) % 360)
        }
        _ => step_at_midpoint(initial, target, t),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
