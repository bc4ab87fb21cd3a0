#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod border;
pub mod color;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod image;
pub mod normalize;
pub mod outliner;

// Building blocks used by the pipeline; public for tools and tests.
pub mod config;
pub mod exposure;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

// Main entry points: outliner + report.
pub use crate::outliner::{normalize_rgba, process, synthesize_rgba, OutlineParams, Outliner};
pub use crate::diagnostics::OutlineReport;

// Inputs and failures.
pub use crate::border::BorderSpec;
pub use crate::color::{AlphaScale, Color};
pub use crate::error::OutlineError;
pub use crate::grid::{CellOrder, GridSpec};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use grid_outliner::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 64usize);
/// let mut rgba = vec![0u8; w * h * 4];
///
/// let outliner = Outliner::new(OutlineParams {
///     cell_size: 16,
///     border: BorderSpec {
///         color: Color::rgb(255.0, 0.0, 0.0),
///         width_px: 2,
///         ..Default::default()
///     },
///     ..Default::default()
/// });
///
/// let report = outliner.process(&mut rgba, w, h).expect("valid input");
/// println!("cells={} latency_ms={:.3}", report.synthesis.occupied_cells, report.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::{BorderSpec, Color, OutlineParams, OutlineReport, Outliner};
}
