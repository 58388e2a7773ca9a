//! State interpolation and ground-truth frame assembly.

/// Frame sequencing for animations.
pub mod frames;
/// Per-archetype interpolation between two states.
pub mod interp;
