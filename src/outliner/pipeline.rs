//! Outliner pipeline driving overlay, normalization and synthesis.
//!
//! Typical usage:
//! ```no_run
//! use grid_outliner::{OutlineParams, Outliner};
//!
//! # fn example(pixels: &mut [u8], width: usize, height: usize) {
//! let outliner = Outliner::new(OutlineParams::default());
//! match outliner.process(pixels, width, height) {
//!     Ok(report) => println!("bordered {} cells", report.synthesis.occupied_cells),
//!     Err(err) => eprintln!("rejected: {err}"),
//! }
//! # }
//! ```
use super::params::OutlineParams;
use crate::border::{synthesize, BorderSpec, ResolvedBorder, SynthesisStats};
use crate::diagnostics::{OutlineReport, PassTimings, Stage};
use crate::error::{ColorRole, OutlineError};
use crate::grid::{CellOrder, GridSpec};
use crate::image::RgbaImageMut;
use crate::normalize::{normalize, NormalizeStats};
use crate::overlay::overlay_grid;
use log::{debug, warn};
use std::time::Instant;

/// Cell sizes the probe offsets were tuned on.
const TUNED_CELL_SIZES: [usize; 3] = [4, 8, 16];

/// Inputs that passed validation.
struct Prepared<'a> {
    image: RgbaImageMut<'a>,
    grid: GridSpec,
    border: ResolvedBorder,
    overlay: Option<[u8; 4]>,
}

/// Stateless driver holding validated-on-use parameters.
#[derive(Clone, Debug, Default)]
pub struct Outliner {
    params: OutlineParams,
}

impl Outliner {
    /// Create an outliner with the supplied parameters.
    pub fn new(params: OutlineParams) -> Self {
        Self { params }
    }

    /// Overlay (optional), normalize and synthesize `pixels` in place.
    ///
    /// On error nothing has been written.
    pub fn process(
        &self,
        pixels: &mut [u8],
        width: usize,
        height: usize,
    ) -> Result<OutlineReport, OutlineError> {
        let total_start = Instant::now();
        let Prepared {
            mut image,
            grid,
            border,
            overlay,
        } = self.prepare(pixels, width, height)?;
        debug!(
            "Outliner::process start w={} h={} cell={} border={}px",
            width,
            height,
            grid.cell_size(),
            border.width
        );
        let mut timings = PassTimings::default();

        let mut overlay_pixels = 0;
        if let Some(rgba) = overlay {
            let start = Instant::now();
            overlay_pixels = overlay_grid(&mut image, &grid, rgba);
            timings.record(Stage::Overlay, elapsed_ms(start));
        }

        let start = Instant::now();
        let normalize_stats = normalize(&mut image, &grid);
        timings.record(Stage::Normalize, elapsed_ms(start));

        let start = Instant::now();
        let synthesis = synthesize(&mut image, &grid, &border, self.params.order);
        timings.record(Stage::Synthesize, elapsed_ms(start));

        let latency_ms = elapsed_ms(total_start);
        timings.total_ms = latency_ms;
        Ok(OutlineReport {
            width,
            height,
            cell_size: grid.cell_size(),
            columns: grid.columns(),
            rows: grid.rows(),
            overlay_pixels,
            normalize: normalize_stats,
            synthesis,
            latency_ms,
            timings,
        })
    }

    fn prepare<'a>(
        &self,
        pixels: &'a mut [u8],
        width: usize,
        height: usize,
    ) -> Result<Prepared<'a>, OutlineError> {
        let image = RgbaImageMut::new(pixels, width, height)?;
        let grid = checked_grid(width, height, self.params.cell_size)?;
        let border = self.params.border.resolve()?;
        let overlay = self
            .params
            .grid_overlay
            .map(|o| o.color.to_rgba(o.alpha_scale, ColorRole::Grid))
            .transpose()?;
        Ok(Prepared {
            image,
            grid,
            border,
            overlay,
        })
    }
}

/// Run the full pass with `params` on a bare buffer.
pub fn process(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    params: &OutlineParams,
) -> Result<OutlineReport, OutlineError> {
    Outliner::new(params.clone()).process(pixels, width, height)
}

/// Normalize a bare buffer after validating its dimensions.
pub fn normalize_rgba(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    cell_size: usize,
) -> Result<NormalizeStats, OutlineError> {
    let mut image = RgbaImageMut::new(pixels, width, height)?;
    let grid = checked_grid(width, height, cell_size)?;
    Ok(normalize(&mut image, &grid))
}

/// Synthesize borders on a bare, already normalized buffer.
pub fn synthesize_rgba(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    cell_size: usize,
    border: &BorderSpec,
) -> Result<SynthesisStats, OutlineError> {
    let mut image = RgbaImageMut::new(pixels, width, height)?;
    let grid = checked_grid(width, height, cell_size)?;
    let border = border.resolve()?;
    Ok(synthesize(&mut image, &grid, &border, CellOrder::RowMajor))
}

fn checked_grid(width: usize, height: usize, cell_size: usize) -> Result<GridSpec, OutlineError> {
    let grid = GridSpec::new(width, height, cell_size)?;
    if !TUNED_CELL_SIZES.contains(&cell_size) {
        warn!("cell size {cell_size} is outside the tuned set {TUNED_CELL_SIZES:?}; edge probes may misjudge anti-aliased lines");
    }
    Ok(grid)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
