//! Control archetypes, their state domains, and panel layout.

/// Control archetypes and initial/target state generation.
pub mod control;
/// Grid/column cell partitioning and panel assembly.
pub mod layout;
/// The immutable panel record handed to the renderer.
pub mod model;
