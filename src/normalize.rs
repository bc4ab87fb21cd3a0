//! Grid alpha normalizer.
//!
//! Compositing 1-px grid lines over a sprite sheet leaves line pixels with
//! non-zero alpha in otherwise empty space. This pass clears them so that
//! cell occupancy can be decided with a plain `alpha != 0` test.
//!
//! A sweep walks the rows top to bottom:
//! - On a grid row (positive multiple of the cell size) every pixel is a
//!   candidate. It is cleared when the pixels above and below are empty, or
//!   when it sits on a grid column and the pixels above, to the left and
//!   diagonally below-right are empty (line crossings).
//! - On any other row only grid-column pixels are candidates; they are cleared
//!   when both horizontal neighbours are empty.
//!
//! Off-canvas neighbours count as empty. Only the alpha byte is written and
//! only ever set to 0, so sweeps are repeated until one clears nothing; the
//! result is a fixed point and normalizing it again is a no-op.
use crate::grid::GridSpec;
use crate::image::{ImageView, ImageViewMut};
use log::debug;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeStats {
    /// Sweeps executed, including the final one that changed nothing.
    pub sweeps: usize,
    /// Pixels whose alpha was cleared.
    pub cleared: usize,
}

/// Clear grid-line residue in place.
pub fn normalize<I: ImageViewMut>(image: &mut I, grid: &GridSpec) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    loop {
        let cleared = sweep(image, grid);
        stats.sweeps += 1;
        stats.cleared += cleared;
        if cleared == 0 {
            break;
        }
    }
    debug!(
        "normalize: cleared {} px in {} sweeps (cell {})",
        stats.cleared,
        stats.sweeps,
        grid.cell_size()
    );
    stats
}

fn sweep<I: ImageViewMut>(image: &mut I, grid: &GridSpec) -> usize {
    let (w, h) = (image.width(), image.height());
    let cs = grid.cell_size();
    let mut cleared = 0;
    for y in 0..h {
        let yi = y as isize;
        if grid.is_line(y) {
            for x in 0..w {
                let xi = x as isize;
                if image.alpha(xi, yi) != 0 && line_row_residue(image, xi, yi, x % cs == 0) {
                    image.set_alpha(xi, yi, 0);
                    cleared += 1;
                }
            }
        } else {
            for x in (cs..w).step_by(cs) {
                let xi = x as isize;
                if image.alpha(xi, yi) != 0 && horizontally_isolated(image, xi, yi) {
                    image.set_alpha(xi, yi, 0);
                    cleared += 1;
                }
            }
        }
    }
    cleared
}

#[inline]
fn horizontally_isolated<I: ImageView>(image: &I, x: isize, y: isize) -> bool {
    image.alpha(x - 1, y) == 0 && image.alpha(x + 1, y) == 0
}

#[inline]
fn line_row_residue<I: ImageView>(image: &I, x: isize, y: isize, on_column: bool) -> bool {
    let above = image.alpha(x, y - 1) == 0;
    let crossing = on_column && above && image.alpha(x - 1, y) == 0 && image.alpha(x + 1, y + 1) == 0;
    crossing || (above && image.alpha(x, y + 1) == 0)
}
