use std::path::{Path, PathBuf};

use crate::encode::ffmpeg::{FfmpegSink, is_ffmpeg_on_path};
use crate::encode::sink::stream_frames;
use crate::foundation::core::Fps;
use crate::foundation::error::PanelResult;
use crate::render::backend::FrameRGBA;

/// Writes an ordered frame sequence to a video file.
///
/// Callers treat any error as "no video": encoder failures are never fatal to a task.
pub trait VideoEncoder: Send {
    /// Return `true` when the encoder can run on this host.
    fn is_available(&self) -> bool;

    /// Encode `frames` at `fps` into `out_path`, returning the written path.
    fn write_video(&mut self, frames: &[FrameRGBA], out_path: &Path, fps: Fps)
    -> PanelResult<PathBuf>;
}

/// MP4 encoder backed by the system `ffmpeg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegEncoder;

impl VideoEncoder for FfmpegEncoder {
    fn is_available(&self) -> bool {
        is_ffmpeg_on_path()
    }

    fn write_video(
        &mut self,
        frames: &[FrameRGBA],
        out_path: &Path,
        fps: Fps,
    ) -> PanelResult<PathBuf> {
        let mut sink = FfmpegSink::new(out_path);
        stream_frames(&mut sink, frames, fps)?;
        Ok(sink.out_path().to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/video.rs"]
mod tests;
