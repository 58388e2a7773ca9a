//! CPU rasterization of panels.
//!
//! Drawing goes through a [`cpu::Surface`] backed by `vello_cpu`; text is shaped with `parley`
//! using whatever font the configured [`fonts::FontProvider`] chain yields. A missing font only
//! removes labels, it never fails a render.

/// Rendered frame buffers.
pub mod backend;
/// Per-archetype draw routines.
pub mod controls;
/// Panel renderer and drawing surface.
pub mod cpu;
/// Font discovery with an ordered fallback chain.
pub mod fonts;
pub(crate) mod text;
