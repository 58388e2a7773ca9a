use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::frames::AnimationOpts;
use crate::foundation::core::{Canvas, Fps, Rgb8};
use crate::foundation::error::{PanelError, PanelResult};
use crate::panel::control::ControlKind;
use crate::panel::layout::clamp_control_count;
use crate::render::fonts::{FallbackFonts, PathFontProvider};

/// Recognized generator options.
///
/// Every field has a default, so `{}` is a valid configuration. Out-of-range values are
/// clamped by [`GeneratorConfig::normalized`] rather than rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Domain tag stamped on every task and used to name the video staging directory.
    pub domain: String,
    /// Canvas `(width, height)` in pixels.
    pub image_size: (u32, u32),
    /// Requested control count; clamped to `[2, 5]`.
    pub num_controls: usize,
    /// Archetype palette controls are drawn from.
    pub control_types: Vec<ControlKind>,
    /// Panel background color.
    pub panel_bg_color: Rgb8,
    /// Produce a ground-truth animation when an encoder is available.
    pub generate_videos: bool,
    /// Output video frame rate.
    pub video_fps: u32,
    /// Seed for reproducible generation; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Hold frames before and after the transition.
    pub hold_frames: u32,
    /// Interpolated transition frames.
    pub transition_frames: u32,
    /// Font files probed before the system font database; `None` uses platform paths.
    pub font_paths: Option<Vec<PathBuf>>,
    /// Root for the video staging directory; `None` uses the OS temp dir.
    pub video_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let anim = AnimationOpts::default();
        Self {
            domain: "control_panel".to_string(),
            image_size: (512, 512),
            num_controls: 3,
            control_types: ControlKind::ALL.to_vec(),
            panel_bg_color: Rgb8::new(40, 40, 50),
            generate_videos: true,
            video_fps: 10,
            seed: None,
            hold_frames: anim.hold_frames,
            transition_frames: anim.transition_frames,
            font_paths: None,
            video_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PanelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PanelError::serde(format!("parse generator config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PanelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PanelError::validation(format!("open generator config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Clamp every option into its supported range.
    pub fn normalized(mut self) -> Self {
        let canvas = Canvas::clamped(self.image_size.0, self.image_size.1);
        self.image_size = (canvas.width, canvas.height);
        self.num_controls = clamp_control_count(self.num_controls);
        if self.control_types.is_empty() {
            self.control_types = ControlKind::ALL.to_vec();
        }
        self.video_fps = self.video_fps.max(1);
        self.transition_frames = self.transition_frames.max(1);
        if self.domain.trim().is_empty() {
            self.domain = Self::default().domain;
        }
        self
    }

    /// Canvas described by `image_size`, clamped.
    pub fn canvas(&self) -> Canvas {
        Canvas::clamped(self.image_size.0, self.image_size.1)
    }

    /// Frame rate for encoded videos.
    pub fn fps(&self) -> Fps {
        Fps {
            num: self.video_fps.max(1),
            den: 1,
        }
    }

    /// Animation shape.
    pub fn animation(&self) -> AnimationOpts {
        AnimationOpts {
            hold_frames: self.hold_frames,
            transition_frames: self.transition_frames,
        }
    }

    /// Font discovery chain: configured or platform paths, then system fonts.
    pub fn font_provider(&self) -> FallbackFonts {
        match &self.font_paths {
            Some(paths) => FallbackFonts::with_paths(PathFontProvider::new(paths.iter().cloned())),
            None => FallbackFonts::platform(),
        }
    }

    /// Directory videos are staged in before being handed back to the caller.
    pub fn video_staging_dir(&self) -> PathBuf {
        self.video_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(format!("{}_videos", self.domain))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/config.rs"]
mod tests;
