use std::path::Path;
use std::sync::{Arc, Mutex};

use super::*;
use crate::foundation::core::Fps;
use crate::foundation::error::PanelError;
use crate::render::fonts::NoFonts;

#[derive(Clone, Default)]
struct Recording {
    calls: Arc<Mutex<Vec<(usize, PathBuf, Fps, (u32, u32))>>>,
    available: bool,
    fail: bool,
}

impl VideoEncoder for Recording {
    fn is_available(&self) -> bool {
        self.available
    }

    fn write_video(
        &mut self,
        frames: &[FrameRGBA],
        out_path: &Path,
        fps: Fps,
    ) -> PanelResult<PathBuf> {
        let dims = frames.first().map_or((0, 0), |f| (f.width, f.height));
        self.calls
            .lock()
            .unwrap()
            .push((frames.len(), out_path.to_path_buf(), fps, dims));
        if self.fail {
            return Err(PanelError::encode("boom"));
        }
        Ok(out_path.to_path_buf())
    }
}

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        image_size: (256, 256),
        seed: Some(seed),
        video_dir: Some(std::env::temp_dir().join("ctrlpanel_generator_tests")),
        ..GeneratorConfig::default()
    }
}

fn generator(cfg: GeneratorConfig, enc: Option<Recording>) -> TaskGenerator {
    TaskGenerator::with_parts(
        cfg,
        &NoFonts,
        enc.map(|e| Box::new(e) as Box<dyn VideoEncoder>),
    )
    .unwrap()
}

#[test]
fn pair_has_distinct_first_and_final_images() {
    let mut g = generator(config(1), None);
    let pair = g.generate_task_pair("t0").unwrap();
    assert_eq!(pair.task_id, "t0");
    assert_eq!(pair.domain, "control_panel");
    assert_eq!((pair.first_image.width, pair.first_image.height), (256, 256));
    assert_ne!(pair.first_image, pair.final_image);
    assert_eq!(pair.panel.controls().len(), 3);
    assert!(!pair.prompt.is_empty());
    assert!(pair.ground_truth_video.is_none());
}

#[test]
fn same_seed_reproduces_tasks() {
    let a = generator(config(9), None).generate_task_pair("x").unwrap();
    let b = generator(config(9), None).generate_task_pair("x").unwrap();
    assert_eq!(a.panel, b.panel);
    assert_eq!(a.prompt, b.prompt);
    assert_eq!(a.first_image, b.first_image);
    assert_eq!(a.final_image, b.final_image);
}

#[test]
fn encoder_receives_full_animation() {
    let enc = Recording {
        available: true,
        ..Recording::default()
    };
    let calls = enc.calls.clone();
    let mut g = generator(config(2), Some(enc));
    assert!(g.videos_enabled());

    let pair = g.generate_task_pair("vid").unwrap();
    let expected = g.video_path("vid");
    assert_eq!(pair.ground_truth_video.as_deref(), Some(expected.as_path()));
    assert!(expected.ends_with("control_panel_videos/vid_ground_truth.mp4"));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, 40);
    assert_eq!(calls[0].2, Fps::new(10, 1).unwrap());
}

#[test]
fn odd_image_size_still_reaches_the_encoder_with_even_frames() {
    let enc = Recording {
        available: true,
        ..Recording::default()
    };
    let calls = enc.calls.clone();
    let cfg = GeneratorConfig {
        image_size: (511, 511),
        ..config(6)
    };
    let mut g = generator(cfg, Some(enc));
    let pair = g.generate_task_pair("odd").unwrap();
    assert!(pair.ground_truth_video.is_some());
    assert_eq!((pair.first_image.width, pair.first_image.height), (510, 510));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (w, h) = calls[0].3;
    assert_eq!((w % 2, h % 2), (0, 0));
    assert!(crate::encode::ffmpeg::check_config(crate::encode::sink::SinkConfig {
        width: w,
        height: h,
        fps: calls[0].2,
    })
    .is_ok());
}

#[test]
fn unavailable_encoder_is_dropped() {
    let enc = Recording::default();
    let calls = enc.calls.clone();
    let mut g = generator(config(3), Some(enc));
    assert!(!g.videos_enabled());
    let pair = g.generate_task_pair("a").unwrap();
    assert!(pair.ground_truth_video.is_none());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn failing_encoder_degrades_to_no_video() {
    let enc = Recording {
        available: true,
        fail: true,
        ..Recording::default()
    };
    let mut g = generator(config(4), Some(enc));
    let pair = g.generate_task_pair("b").unwrap();
    assert!(pair.ground_truth_video.is_none());
    assert_ne!(pair.first_image, pair.final_image);
}

#[test]
fn disabled_videos_skip_the_encoder() {
    let enc = Recording {
        available: true,
        ..Recording::default()
    };
    let calls = enc.calls.clone();
    let cfg = GeneratorConfig {
        generate_videos: false,
        ..config(5)
    };
    let mut g = generator(cfg, Some(enc));
    assert!(g.generate_task_pair("c").unwrap().ground_truth_video.is_none());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn batch_ids_are_sequential() {
    let mut g = generator(config(6), None);
    let tasks = g.generate_tasks(3).unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, ["control_panel_0000", "control_panel_0001", "control_panel_0002"]);
}

#[test]
fn control_count_is_clamped_through_config() {
    let cfg = GeneratorConfig {
        num_controls: 42,
        ..config(7)
    };
    let mut g = generator(cfg, None);
    assert_eq!(g.config().num_controls, 5);
    assert_eq!(g.generate_panel().controls().len(), 5);
}
