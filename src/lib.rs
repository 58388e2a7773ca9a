//! ctrlpanel synthesizes control-panel task pairs for instruction-following video models.
//!
//! A task shows a panel of switches, sliders, buttons and dials in an initial state and a
//! target state, with an optional ground-truth animation between the two.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `GeneratorConfig + rng -> Panel` (control kinds, layout cells, state pairs)
//! 2. **Render**: `Panel + StateSelector -> FrameRGBA` (CPU raster via `vello_cpu`)
//! 3. **Animate**: `Panel -> Vec<FrameRGBA>` (hold, interpolated transition, hold)
//! 4. **Encode** (optional): hand the frames to a [`VideoEncoder`], by default the system
//!    `ffmpeg` binary
//!
//! Randomness is always threaded explicitly through a seeded `StdRng`, so a configuration
//! with a `seed` reproduces the same tasks pixel for pixel.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Interpolation and frame assembly.
pub mod animation;
/// Video encoding seam.
pub mod encode;
/// Control model and layout engine.
pub mod panel;
/// Panel rendering.
pub mod render;
/// Task-level orchestration.
pub mod task;

pub use crate::foundation::core::{Canvas, Fps, Point, Rect, Rgb8, Size};
pub use crate::foundation::error::{PanelError, PanelResult};

pub use crate::animation::frames::{AnimationOpts, build_frames};
pub use crate::animation::interp::{STEP_AT, interpolate, step_at_midpoint};
pub use crate::encode::ffmpeg::{FfmpegSink, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig, stream_frames};
pub use crate::encode::video::{FfmpegEncoder, VideoEncoder};
pub use crate::panel::control::{
    Control, ControlKind, ControlState, MIN_DIAL_DELTA_DEG, StatePair, generate_states,
};
pub use crate::panel::layout::{
    LayoutCell, LayoutMode, MAX_CONTROLS, MIN_CONTROLS, PalettePool, clamp_control_count,
    generate_panel, plan_cells,
};
pub use crate::panel::model::{Panel, TaskType};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::controls::draw_control;
pub use crate::render::cpu::{LabelFont, PanelRenderer, StateSelector, Surface};
pub use crate::render::fonts::{
    FallbackFonts, FontBytes, FontProvider, NoFonts, PathFontProvider, SystemFontProvider,
};
pub use crate::task::config::GeneratorConfig;
pub use crate::task::generator::{TaskGenerator, TaskPair};
pub use crate::task::prompts::{prompts_for, select_prompt};
