//! Outliner pipeline turning a sprite sheet into an inked one.
//!
//! Overview
//! - Validates every input up front: dimensions against the buffer length,
//!   cell size, border width and both colors. A rejected call leaves the
//!   buffer untouched.
//! - Optionally composites programmatic grid lines over the artwork.
//! - Runs the grid alpha normalizer until it reaches a fixed point.
//! - Classifies every cell from its probe pixels, then paints borders along
//!   exposed edges.
//!
//! Modules
//! - [`params`] – configuration types used by the outliner and CLI.
//! - `pipeline` – the main [`Outliner`] implementation and buffer-level entry
//!   points.
//!
//! Key Ideas
//! - The pixel buffer is the only state; nothing survives between calls.
//! - Classification never observes painted pixels, so the traversal order is
//!   irrelevant to the output.
//! - The probing heuristics were tuned for cell sizes 4, 8 and 16; other sizes
//!   run but log a warning.

pub mod params;
mod pipeline;

pub use params::{GridOverlay, OutlineParams};
pub use pipeline::{normalize_rgba, process, synthesize_rgba, Outliner};
