//! MP4 output through the system `ffmpeg` binary.

use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{PanelError, PanelResult};
use crate::render::backend::FrameRGBA;

/// Sink that spawns `ffmpeg` on `begin` and pipes opaque RGBA frames into it.
///
/// If the sink is aborted, dropped before `end`, or `ffmpeg` exits unsuccessfully, the
/// process is reaped and the partial output file is removed.
pub struct FfmpegSink {
    out_path: PathBuf,
    running: Option<Encoder>,
}

struct Encoder {
    cfg: SinkConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
    next_idx: u64,
}

impl FfmpegSink {
    /// Sink writing an H.264 MP4 to `out_path`, replacing any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            running: None,
        }
    }

    /// Destination file.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    fn discard_output(&self) {
        if let Err(e) = std::fs::remove_file(&self.out_path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::debug!(path = %self.out_path.display(), error = %e, "partial video not removed");
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> PanelResult<()> {
        if self.running.is_some() {
            return Err(PanelError::encode("ffmpeg sink already started"));
        }
        check_config(cfg)?;
        ensure_parent_dir(&self.out_path)?;
        if !is_ffmpeg_on_path() {
            return Err(PanelError::encode("ffmpeg was not found on PATH"));
        }
        self.running = Some(Encoder::spawn(cfg, &self.out_path)?);
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> PanelResult<()> {
        let enc = self
            .running
            .as_mut()
            .ok_or_else(|| PanelError::encode("ffmpeg sink not started"))?;
        let res = enc.write(idx, frame);
        if res.is_err() {
            self.abort();
        }
        res
    }

    fn end(&mut self) -> PanelResult<()> {
        let enc = self
            .running
            .take()
            .ok_or_else(|| PanelError::encode("ffmpeg sink not started"))?;
        let res = enc.finish();
        if res.is_err() {
            self.discard_output();
        }
        res
    }

    fn abort(&mut self) {
        if let Some(enc) = self.running.take() {
            enc.kill();
            self.discard_output();
        }
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        self.abort();
    }
}

pub(crate) fn check_config(cfg: SinkConfig) -> PanelResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(PanelError::validation("video width/height must be non-zero"));
    }
    // yuv420p subsamples chroma 2x2.
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(PanelError::validation(format!(
            "video dimensions must be even, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

fn encode_command(cfg: SinkConfig, out_path: &Path) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    cmd.args(["-y", "-loglevel", "error"]);
    // Raw input options must precede `-i`.
    cmd.args(["-f", "rawvideo", "-pix_fmt", "rgba"])
        .args(["-s", &format!("{}x{}", cfg.width, cfg.height)])
        .args(["-r", &format!("{}/{}", cfg.fps.num, cfg.fps.den)])
        .args(["-i", "pipe:0"]);
    cmd.args([
        "-an",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ]);
    cmd.arg(out_path);
    cmd
}

impl Encoder {
    fn spawn(cfg: SinkConfig, out_path: &Path) -> PanelResult<Self> {
        let mut child = encode_command(cfg, out_path)
            .spawn()
            .map_err(|e| PanelError::encode(format!("failed to spawn ffmpeg: {e}")))?;
        let stdin = child.stdin.take();
        // Drained on a thread so a chatty ffmpeg cannot block on a full stderr pipe.
        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf)?;
                Ok(buf)
            })
        });
        tracing::debug!(
            width = cfg.width,
            height = cfg.height,
            path = %out_path.display(),
            "ffmpeg started"
        );
        Ok(Self {
            cfg,
            child,
            stdin,
            stderr,
            next_idx: 0,
        })
    }

    fn write(&mut self, idx: u64, frame: &FrameRGBA) -> PanelResult<()> {
        if idx < self.next_idx {
            return Err(PanelError::encode(format!(
                "frame {idx} arrived after frame {}",
                self.next_idx - 1
            )));
        }
        let expected = (self.cfg.width as usize) * (self.cfg.height as usize) * 4;
        if frame.width != self.cfg.width
            || frame.height != self.cfg.height
            || frame.data.len() != expected
        {
            return Err(PanelError::validation(format!(
                "frame {idx} is {}x{} ({} bytes), video is {}x{}",
                frame.width,
                frame.height,
                frame.data.len(),
                self.cfg.width,
                self.cfg.height
            )));
        }
        debug_assert!(
            frame.data.chunks_exact(4).all(|px| px[3] == 255),
            "panel frames are opaque"
        );

        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| PanelError::encode("ffmpeg stdin is closed"))?;
        stdin
            .write_all(&frame.data)
            .map_err(|e| PanelError::encode(format!("ffmpeg stopped accepting frames: {e}")))?;
        self.next_idx = idx + 1;
        Ok(())
    }

    fn finish(mut self) -> PanelResult<()> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| PanelError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr = self.collect_stderr();
        if !status.success() {
            return Err(PanelError::encode(format!(
                "ffmpeg exited with {status}: {}",
                String::from_utf8_lossy(&stderr).trim()
            )));
        }
        Ok(())
    }

    fn kill(mut self) {
        drop(self.stdin.take());
        if let Err(e) = self.child.kill() {
            tracing::debug!(error = %e, "ffmpeg already exited");
        }
        if let Err(e) = self.child.wait() {
            tracing::warn!(error = %e, "failed to reap ffmpeg");
        }
        self.collect_stderr();
    }

    fn collect_stderr(&mut self) -> Vec<u8> {
        match self.stderr.take().map(JoinHandle::join) {
            Some(Ok(Ok(bytes))) => bytes,
            _ => Vec::new(),
        }
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> PanelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
