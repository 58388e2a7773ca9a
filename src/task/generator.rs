use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::frames::build_frames;
use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::video::{FfmpegEncoder, VideoEncoder};
use crate::foundation::error::PanelResult;
use crate::panel::layout::generate_panel;
use crate::panel::model::Panel;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{PanelRenderer, StateSelector};
use crate::render::fonts::FontProvider;
use crate::task::config::GeneratorConfig;
use crate::task::prompts::select_prompt;

/// One generated task: an instruction plus the panel before and after.
#[derive(Clone, Debug)]
pub struct TaskPair {
    /// Caller-assigned identifier.
    pub task_id: String,
    /// Domain tag from the configuration.
    pub domain: String,
    /// Natural-language instruction.
    pub prompt: String,
    /// Panel in its initial state.
    pub first_image: FrameRGBA,
    /// Panel in its target state.
    pub final_image: FrameRGBA,
    /// Ground-truth animation, when one could be encoded.
    pub ground_truth_video: Option<PathBuf>,
    /// The panel both images were rendered from.
    pub panel: Panel,
}

/// Generates control-panel task pairs.
///
/// Owns its random source, renderer and optional video encoder; tasks share nothing else.
pub struct TaskGenerator {
    config: GeneratorConfig,
    renderer: PanelRenderer,
    encoder: Option<Box<dyn VideoEncoder>>,
    rng: StdRng,
}

impl TaskGenerator {
    /// Build a generator with the configured font chain and, when videos are enabled and
    /// `ffmpeg` is present, the `ffmpeg` encoder.
    pub fn new(config: GeneratorConfig) -> PanelResult<Self> {
        let config = config.normalized();
        let encoder: Option<Box<dyn VideoEncoder>> = if config.generate_videos {
            Some(Box::new(FfmpegEncoder))
        } else {
            None
        };
        let fonts = config.font_provider();
        Self::with_parts(config, &fonts, encoder)
    }

    /// Build a generator from injected collaborators.
    ///
    /// The encoder is dropped when videos are disabled or it reports itself unavailable.
    pub fn with_parts(
        config: GeneratorConfig,
        fonts: &dyn FontProvider,
        encoder: Option<Box<dyn VideoEncoder>>,
    ) -> PanelResult<Self> {
        let config = config.normalized();
        let renderer = PanelRenderer::new(config.canvas(), config.panel_bg_color, fonts)?;
        let encoder = encoder.filter(|e| {
            if !config.generate_videos {
                return false;
            }
            let available = e.is_available();
            if !available {
                tracing::warn!("video encoder unavailable; tasks will have no video");
            }
            available
        });
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            config,
            renderer,
            encoder,
            rng,
        })
    }

    /// Effective (normalized) configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Return `true` when tasks will try to carry a video.
    pub fn videos_enabled(&self) -> bool {
        self.encoder.is_some()
    }

    /// Mutable access to the renderer, e.g. to render extra frames of a panel.
    pub fn renderer_mut(&mut self) -> &mut PanelRenderer {
        &mut self.renderer
    }

    /// Lay out a fresh panel without rendering it.
    pub fn generate_panel(&mut self) -> Panel {
        generate_panel(
            self.config.canvas(),
            self.config.num_controls,
            &self.config.control_types,
            &mut self.rng,
        )
    }

    /// Generate one task pair.
    ///
    /// Fails only for internal rendering inconsistencies; a missing font or encoder degrades
    /// to an unlabelled image or an absent video.
    #[tracing::instrument(skip(self))]
    pub fn generate_task_pair(&mut self, task_id: &str) -> PanelResult<TaskPair> {
        let panel = self.generate_panel();

        let first_image = self.renderer.render(&panel, StateSelector::Initial)?;
        let final_image = self.renderer.render(&panel, StateSelector::Target)?;

        let ground_truth_video = self.generate_video(task_id, &panel);
        let prompt = select_prompt(panel.task_type().as_str(), &mut self.rng).to_string();

        Ok(TaskPair {
            task_id: task_id.to_string(),
            domain: self.config.domain.clone(),
            prompt,
            first_image,
            final_image,
            ground_truth_video,
            panel,
        })
    }

    /// Generate `count` tasks with ids `{domain}_{index:04}`.
    pub fn generate_tasks(&mut self, count: usize) -> PanelResult<Vec<TaskPair>> {
        (0..count)
            .map(|i| {
                let id = format!("{}_{i:04}", self.config.domain);
                self.generate_task_pair(&id)
            })
            .collect()
    }

    /// Where the video for `task_id` is staged.
    pub fn video_path(&self, task_id: &str) -> PathBuf {
        self.config
            .video_staging_dir()
            .join(format!("{task_id}_ground_truth.mp4"))
    }

    fn generate_video(&mut self, task_id: &str, panel: &Panel) -> Option<PathBuf> {
        self.encoder.as_ref()?;
        let path = self.video_path(task_id);
        if let Err(e) = ensure_parent_dir(&path) {
            tracing::warn!(error = %e, "cannot create video staging directory");
            return None;
        }

        let frames = match build_frames(&mut self.renderer, panel, self.config.animation()) {
            Ok(frames) => frames,
            Err(e) => {
                tracing::warn!(task_id, error = %e, "animation frames failed; skipping video");
                return None;
            }
        };

        let fps = self.config.fps();
        let encoder = self.encoder.as_mut()?;
        match encoder.write_video(&frames, &path, fps) {
            Ok(written) => {
                tracing::debug!(
                    task_id,
                    frames = frames.len(),
                    secs = fps.frames_to_secs(frames.len() as u64),
                    path = %written.display(),
                    "ground-truth video written"
                );
                Some(written)
            }
            Err(e) => {
                tracing::warn!(task_id, error = %e, "video encoding failed; task has no video");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/generator.rs"]
mod tests;
