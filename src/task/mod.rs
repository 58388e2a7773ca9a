//! Task-level orchestration: configuration, prompt selection, and task-pair generation.

/// Generator configuration and its clamping rules.
pub mod config;
/// Task-pair generation.
pub mod generator;
/// Instruction prompt table.
pub mod prompts;
