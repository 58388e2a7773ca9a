use super::*;
use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::error::PanelError;

fn frames(n: usize) -> Vec<FrameRGBA> {
    (0..n)
        .map(|i| FrameRGBA {
            width: 4,
            height: 2,
            data: vec![i as u8; 4 * 2 * 4],
        })
        .collect()
}

#[test]
fn stream_frames_preserves_order_and_config() {
    let mut sink = InMemorySink::new();
    let fps = Fps::new(10, 1).unwrap();
    stream_frames(&mut sink, &frames(3), fps).unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (4, 2, fps));
    assert!(sink.is_finished());
    let got: Vec<(u64, u8)> = sink.frames().iter().map(|(i, f)| (*i, f.data[0])).collect();
    assert_eq!(got, vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn stream_frames_rejects_empty_sequences() {
    let mut sink = InMemorySink::new();
    assert!(stream_frames(&mut sink, &[], Fps::new(10, 1).unwrap()).is_err());
    assert!(sink.config().is_none());
    sink.end().unwrap();
}

#[derive(Default)]
struct Refusing {
    fail_at: u64,
    pushed: Vec<u64>,
    aborted: bool,
    ended: bool,
}

impl FrameSink for Refusing {
    fn begin(&mut self, _cfg: SinkConfig) -> PanelResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, _frame: &FrameRGBA) -> PanelResult<()> {
        if idx == self.fail_at {
            return Err(PanelError::encode("refused"));
        }
        self.pushed.push(idx);
        Ok(())
    }

    fn end(&mut self) -> PanelResult<()> {
        self.ended = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

#[test]
fn stream_frames_aborts_sink_on_refused_frame() {
    let mut sink = Refusing {
        fail_at: 2,
        ..Refusing::default()
    };
    let err = stream_frames(&mut sink, &frames(5), Fps::new(10, 1).unwrap()).unwrap_err();
    assert!(err.to_string().contains("refused"));
    assert_eq!(sink.pushed, vec![0, 1]);
    assert!(sink.aborted);
    assert!(!sink.ended);
}

#[test]
fn ffmpeg_encoder_reports_availability_consistently() {
    let enc = FfmpegEncoder;
    assert_eq!(enc.is_available(), is_ffmpeg_on_path());
}
