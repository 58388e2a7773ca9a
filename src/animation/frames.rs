use crate::animation::interp::interpolate;
use crate::foundation::error::PanelResult;
use crate::panel::model::Panel;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{PanelRenderer, StateSelector};

/// Shape of a ground-truth animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationOpts {
    /// Copies of the initial render before, and of the target render after, the transition.
    pub hold_frames: u32,
    /// Interpolated frames between the holds.
    pub transition_frames: u32,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self {
            hold_frames: 5,
            transition_frames: 30,
        }
    }
}

impl AnimationOpts {
    /// Total number of frames [`build_frames`] produces.
    pub fn frame_count(self) -> usize {
        2 * self.hold_frames as usize + self.transition_frames as usize
    }

    /// Progress of transition frame `i`: `i / (n - 1)`, or `1.0` for a single frame.
    pub fn progress_at(self, i: u32) -> f64 {
        if self.transition_frames > 1 {
            f64::from(i) / f64::from(self.transition_frames - 1)
        } else {
            1.0
        }
    }
}

/// Render the hold/transition/hold frame sequence for `panel`.
///
/// Each control is interpolated independently from its own initial to target state.
#[tracing::instrument(skip(renderer, panel), fields(controls = panel.controls().len()))]
pub fn build_frames(
    renderer: &mut PanelRenderer,
    panel: &Panel,
    opts: AnimationOpts,
) -> PanelResult<Vec<FrameRGBA>> {
    let mut frames = Vec::with_capacity(opts.frame_count());

    let first = renderer.render(panel, StateSelector::Initial)?;
    for _ in 0..opts.hold_frames {
        frames.push(first.clone());
    }

    for i in 0..opts.transition_frames {
        let t = opts.progress_at(i);
        frames.push(renderer.render_with(panel, |c| {
            interpolate(c.kind, c.initial_state, c.target_state, t)
        })?);
    }

    let last = renderer.render(panel, StateSelector::Target)?;
    for _ in 0..opts.hold_frames {
        frames.push(last.clone());
    }

    tracing::debug!(frames = frames.len(), "assembled animation");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frames.rs"]
mod tests;
