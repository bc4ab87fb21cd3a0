//! Programmatic grid lines composited over a sprite sheet.
//!
//! Mirrors stroking 1-px lines at `k * cell_size + 0.5` on a 2D canvas: each
//! line covers exactly one pixel row or column, so no partial coverage is
//! involved. Crossings are composited once.
use crate::color::blend_over;
use crate::grid::GridSpec;
use crate::image::ImageViewMut;

/// Composite `rgba` over every grid-line pixel. Returns the number of pixels
/// touched.
pub fn overlay_grid<I: ImageViewMut>(image: &mut I, grid: &GridSpec, rgba: [u8; 4]) -> usize {
    let (w, h) = (image.width(), image.height());
    let mut touched = 0;
    for y in 0..h {
        let line_row = grid.is_line(y);
        for x in 0..w {
            if !(line_row || grid.is_line(x)) {
                continue;
            }
            let (xi, yi) = (x as isize, y as isize);
            if let Some(dst) = image.pixel(xi, yi) {
                image.put_pixel(xi, yi, blend_over(dst, rgba));
                touched += 1;
            }
        }
    }
    touched
}
