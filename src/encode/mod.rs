//! Video encoding seam.
//!
//! The generator only guarantees frame content and order; containers and codecs are the
//! business of a [`video::VideoEncoder`]. The default encoder streams into the system
//! `ffmpeg` through a [`sink::FrameSink`].

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// Whole-sequence video encoder contract.
pub mod video;
