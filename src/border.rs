//! Border synthesizer.
//!
//! Paints a flat, hard-edged border along every exposed edge of every
//! occupied cell. Runs trace the perimeter of the cell's frame
//! `[x0, x1] × [y0, y1]`, where `x1`/`y1` is the first column/row of the next
//! cell (the grid line), pulled onto the last column/row at the canvas edge.
//! Each run covers one side without its far corner; the next clockwise run
//! starts on that corner. Extra border width grows away from the cell, and a
//! run is lengthened by the border width when the following edge is painted
//! as well, so thick borders meet at corners without a notch.
//!
//! Synthesis is two-phase: all cells are classified against the normalized
//! buffer, then the plan is painted. Painted pixels never feed back into
//! classification and every write stores the same color, so the result does
//! not depend on the traversal order.
use crate::color::{AlphaScale, Color};
use crate::error::{ColorRole, OutlineError};
use crate::exposure::{classify_cell, Direction, EdgeExposure};
use crate::grid::{Cell, CellOrder, GridSpec};
use crate::image::{ImageView, ImageViewMut};
use log::debug;
use serde::{Deserialize, Serialize};

/// Border color and width as configured by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderSpec {
    pub color: Color,
    pub alpha_scale: AlphaScale,
    pub width_px: usize,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            alpha_scale: AlphaScale::Unit,
            width_px: 1,
        }
    }
}

impl BorderSpec {
    /// Validate and pack. Borders are always painted fully opaque; the alpha
    /// channel is still checked so malformed input is not silently accepted.
    pub fn resolve(&self) -> Result<ResolvedBorder, OutlineError> {
        if self.width_px == 0 {
            return Err(OutlineError::InvalidBorderWidth {
                width: self.width_px,
            });
        }
        let [r, g, b, _] = self.color.to_rgba(self.alpha_scale, ColorRole::Border)?;
        Ok(ResolvedBorder {
            rgba: [r, g, b, 255],
            width: self.width_px,
        })
    }
}

/// Validated border ready for painting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedBorder {
    pub rgba: [u8; 4],
    pub width: usize,
}

/// One occupied cell and the edges it will get.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBorders {
    pub cell: Cell,
    pub exposure: EdgeExposure,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisStats {
    pub occupied_cells: usize,
    pub exposed_edges: usize,
    /// On-canvas pixel writes; corner overlaps are counted once per run.
    pub pixel_writes: usize,
}

/// Classify every cell in `order`. Empty cells are left out.
#[cfg(not(feature = "parallel"))]
pub fn plan_borders<I: ImageView + Sync>(
    image: &I,
    grid: &GridSpec,
    order: CellOrder,
) -> Vec<CellBorders> {
    grid.cells(order)
        .filter_map(|cell| classify_cell(image, &cell).map(|exposure| CellBorders { cell, exposure }))
        .collect()
}

/// Classify every cell in `order` on the rayon pool. Empty cells are left out.
#[cfg(feature = "parallel")]
pub fn plan_borders<I: ImageView + Sync>(
    image: &I,
    grid: &GridSpec,
    order: CellOrder,
) -> Vec<CellBorders> {
    use rayon::prelude::*;

    let cells: Vec<Cell> = grid.cells(order).collect();
    cells
        .par_iter()
        .filter_map(|cell| {
            classify_cell(image, cell).map(|exposure| CellBorders {
                cell: *cell,
                exposure,
            })
        })
        .collect()
}

/// Paint a plan produced by [`plan_borders`].
pub fn paint_plan<I: ImageViewMut>(
    image: &mut I,
    plan: &[CellBorders],
    border: &ResolvedBorder,
) -> SynthesisStats {
    let mut stats = SynthesisStats {
        occupied_cells: plan.len(),
        ..Default::default()
    };
    for entry in plan {
        for dir in Direction::ALL {
            if entry.exposure.exposed(dir) {
                stats.exposed_edges += 1;
                stats.pixel_writes += paint_edge(image, &entry.cell, dir, &entry.exposure, border);
            }
        }
    }
    stats
}

/// Classify, then paint. The buffer must already be normalized.
pub fn synthesize<I: ImageViewMut + Sync>(
    image: &mut I,
    grid: &GridSpec,
    border: &ResolvedBorder,
    order: CellOrder,
) -> SynthesisStats {
    let plan = plan_borders(&*image, grid, order);
    let stats = paint_plan(image, &plan, border);
    debug!(
        "synthesize: {} occupied cells, {} exposed edges, {} px written",
        stats.occupied_cells, stats.exposed_edges, stats.pixel_writes
    );
    stats
}

fn paint_edge<I: ImageViewMut>(
    image: &mut I,
    cell: &Cell,
    dir: Direction,
    exposure: &EdgeExposure,
    border: &ResolvedBorder,
) -> usize {
    let geo = dir.geometry();
    // Past the canvas extent every outward or extended pixel is off-canvas.
    let width = border.width.min(image.width().max(image.height()));
    let x1 = (cell.x0 + cell.w).min(image.width() - 1);
    let y1 = (cell.y0 + cell.h).min(image.height() - 1);
    let sx = (if geo.start_corner.0 { x1 } else { cell.x0 }) as isize;
    let sy = (if geo.start_corner.1 { y1 } else { cell.y0 }) as isize;
    let base = if geo.along.0 != 0 {
        x1 - cell.x0
    } else {
        y1 - cell.y0
    };
    let len = base + if exposure.extends(dir) { width } else { 0 };

    let mut writes = 0;
    for i in 0..len as isize {
        let (ax, ay) = (sx + geo.along.0 * i, sy + geo.along.1 * i);
        for k in 0..width as isize {
            if image.put_pixel(ax + geo.outward.0 * k, ay + geo.outward.1 * k, border.rgba) {
                writes += 1;
            }
        }
    }
    writes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbaImageMut;

    const INK: [u8; 4] = [255, 0, 0, 255];

    fn border(width: usize) -> ResolvedBorder {
        ResolvedBorder { rgba: INK, width }
    }

    fn fill_cell(img: &mut RgbaImageMut<'_>, cell: &Cell) {
        for y in cell.y0..cell.y0 + cell.h {
            for x in cell.x0..cell.x0 + cell.w {
                img.put_pixel(x as isize, y as isize, [0, 200, 0, 255]);
            }
        }
    }

    fn inked(img: &RgbaImageMut<'_>) -> Vec<(isize, isize)> {
        let mut out = Vec::new();
        for y in 0..img.h as isize {
            for x in 0..img.w as isize {
                if img.pixel(x, y) == Some(INK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn zero_width_and_bad_colors_are_rejected() {
        let spec = BorderSpec {
            width_px: 0,
            ..Default::default()
        };
        assert_eq!(
            spec.resolve(),
            Err(OutlineError::InvalidBorderWidth { width: 0 })
        );
        let spec = BorderSpec {
            color: Color::new(0.0, -1.0, 0.0, 1.0),
            ..Default::default()
        };
        assert!(spec.resolve().is_err());
    }

    #[test]
    fn translucent_border_color_is_painted_opaque() {
        let spec = BorderSpec {
            color: Color::new(1.0, 2.0, 3.0, 0.25),
            alpha_scale: AlphaScale::Unit,
            width_px: 2,
        };
        assert_eq!(
            spec.resolve(),
            Ok(ResolvedBorder {
                rgba: [1, 2, 3, 255],
                width: 2
            })
        );
    }

    #[test]
    fn thick_border_closes_every_corner() {
        let grid = GridSpec::new(48, 48, 16).unwrap();
        let mut data = vec![0u8; 48 * 48 * 4];
        let mut img = RgbaImageMut::new(&mut data, 48, 48).unwrap();
        let center = grid.cell(1, 1).unwrap();
        fill_cell(&mut img, &center);

        let stats = synthesize(&mut img, &grid, &border(3), CellOrder::RowMajor);
        assert_eq!(stats.occupied_cells, 1);
        assert_eq!(stats.exposed_edges, 4);

        // ring between the frame [16, 32]² and its 2 px outward growth
        let painted = inked(&img);
        for &(x, y) in &painted {
            let outer = (14..=34).contains(&x) && (14..=34).contains(&y);
            let inner = (17..=31).contains(&x) && (17..=31).contains(&y);
            assert!(outer && !inner, "unexpected ink at ({x}, {y})");
        }
        assert_eq!(painted.len(), 21 * 21 - 15 * 15);
    }

    #[test]
    fn canvas_edge_frame_is_pulled_inside() {
        let grid = GridSpec::new(16, 16, 8).unwrap();
        let mut data = vec![0u8; 16 * 16 * 4];
        let mut img = RgbaImageMut::new(&mut data, 16, 16).unwrap();
        let cell = grid.cell(1, 1).unwrap();
        fill_cell(&mut img, &cell);
        synthesize(&mut img, &grid, &border(1), CellOrder::RowMajor);

        let painted = inked(&img);
        // perimeter of [8, 15]²
        assert_eq!(painted.len(), 4 * 7);
        assert!(painted.contains(&(15, 15)));
        assert!(painted.contains(&(8, 8)));
        assert!(painted.contains(&(15, 8)));
        assert!(painted.contains(&(8, 15)));
        assert_eq!(img.pixel(12, 12), Some([0, 200, 0, 255]));
    }

    #[test]
    fn remainder_cell_uses_its_own_extent() {
        let grid = GridSpec::new(22, 16, 8).unwrap();
        let mut data = vec![0u8; 22 * 16 * 4];
        let mut img = RgbaImageMut::new(&mut data, 22, 16).unwrap();
        let cell = grid.cell(2, 0).unwrap();
        assert_eq!(cell.w, 6);
        fill_cell(&mut img, &cell);
        synthesize(&mut img, &grid, &border(1), CellOrder::RowMajor);

        // frame [16, 21] × [0, 8]
        let painted = inked(&img);
        assert_eq!(painted.len(), 2 * 5 + 2 * 8);
        assert!(painted.iter().all(|&(x, y)| {
            (16..=21).contains(&x) && (0..=8).contains(&y)
        }));
    }

    #[test]
    fn diagonal_neighbour_stops_the_corner_extension() {
        let grid = GridSpec::new(48, 48, 16).unwrap();
        let mut data = vec![0u8; 48 * 48 * 4];
        let mut img = RgbaImageMut::new(&mut data, 48, 48).unwrap();
        let lower = grid.cell(1, 1).unwrap();
        fill_cell(&mut img, &lower);
        fill_cell(&mut img, &grid.cell(2, 0).unwrap());

        let e = classify_cell(&img, &lower).unwrap();
        assert!(e.exposed(Direction::Top) && e.exposed(Direction::Right));
        assert!(!e.end_exposed(Direction::Top));
        assert!(!e.extends(Direction::Top));
        assert!(e.extends(Direction::Right));

        synthesize(&mut img, &grid, &border(3), CellOrder::RowMajor);
        // above and right of the frame corner (32, 16): the neighbour's art
        for y in 14..=15 {
            for x in 33..=34 {
                assert_eq!(img.pixel(x, y), Some([0, 200, 0, 255]), "pixel ({x}, {y})");
            }
        }
        assert_eq!(img.pixel(31, 16), Some(INK));
        assert_eq!(img.pixel(34, 17), Some(INK));
    }

    #[test]
    fn oversized_width_is_clipped_to_the_canvas() {
        let grid = GridSpec::new(32, 32, 16).unwrap();
        let mut huge = vec![0u8; 32 * 32 * 4];
        {
            let mut img = RgbaImageMut::new(&mut huge, 32, 32).unwrap();
            fill_cell(&mut img, &grid.cell(0, 0).unwrap());
        }
        let mut fitted = huge.clone();

        let a = {
            let mut img = RgbaImageMut::new(&mut huge, 32, 32).unwrap();
            synthesize(&mut img, &grid, &border(usize::MAX), CellOrder::RowMajor)
        };
        let b = {
            let mut img = RgbaImageMut::new(&mut fitted, 32, 32).unwrap();
            synthesize(&mut img, &grid, &border(32), CellOrder::RowMajor)
        };
        assert_eq!(a, b);
        assert!(a.pixel_writes > 0);
        assert_eq!(huge, fitted);
    }

    #[test]
    fn painting_never_touches_empty_canvas() {
        let grid = GridSpec::new(16, 16, 4).unwrap();
        let mut data = vec![0u8; 16 * 16 * 4];
        let mut img = RgbaImageMut::new(&mut data, 16, 16).unwrap();
        let stats = synthesize(&mut img, &grid, &border(2), CellOrder::RowMajor);
        assert_eq!(stats, SynthesisStats::default());
        assert!(data.iter().all(|&b| b == 0));
    }
}
