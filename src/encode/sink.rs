use crate::foundation::core::Fps;
use crate::foundation::error::{PanelError, PanelResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in order.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> PanelResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> PanelResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PanelResult<()>;
    /// Give up on a started sequence; `end` will not be called.
    fn abort(&mut self) {}
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PanelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> PanelResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PanelResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Stream `frames` into `sink` in order, bracketed by `begin`/`end`.
///
/// The sink's size is taken from the first frame; an empty sequence is rejected. A frame
/// the sink refuses aborts the sink before the error is returned.
pub fn stream_frames(sink: &mut dyn FrameSink, frames: &[FrameRGBA], fps: Fps) -> PanelResult<()> {
    let first = frames
        .first()
        .ok_or_else(|| PanelError::validation("cannot encode an empty frame sequence"))?;
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        fps,
    })?;
    for (i, frame) in frames.iter().enumerate() {
        if let Err(e) = sink.push_frame(i as u64, frame) {
            sink.abort();
            return Err(e);
        }
    }
    sink.end()
}
