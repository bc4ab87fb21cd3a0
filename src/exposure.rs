//! Edge exposure of occupied cells.
//!
//! Each cell is judged from a handful of probe pixels instead of a full scan:
//! the representative pixel decides occupancy, and per direction a midpoint
//! probe decides whether that edge faces empty space while an end probe
//! (just past the edge's far corner) decides whether the painted run has to
//! be extended to close the corner.
//!
//! Probes on the right and bottom skip one pixel beyond the cell, because the
//! neighbour's first column/row is where the grid overlay draws its lines.
//! Off-canvas probes read as empty, so the canvas boundary borders like empty
//! space.
//!
//! All per-direction arithmetic lives in [`GEOMETRY`]; the border painter
//! reads the same table.
use crate::grid::Cell;
use crate::image::ImageView;

/// Edges of a cell, in clockwise order starting at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    #[inline]
    pub fn geometry(self) -> &'static EdgeGeometry {
        &GEOMETRY[self as usize]
    }

    /// The perpendicular edge sharing this edge's far corner.
    #[inline]
    pub fn next(self) -> Direction {
        Direction::ALL[(self as usize + 1) % 4]
    }
}

/// Probe position relative to a cell: `origin + extent * halves / 2 + offset`.
#[derive(Clone, Copy, Debug)]
pub struct Probe {
    pub halves: (usize, usize),
    pub offset: (isize, isize),
}

impl Probe {
    const fn new(hx: usize, hy: usize, ox: isize, oy: isize) -> Self {
        Self {
            halves: (hx, hy),
            offset: (ox, oy),
        }
    }

    #[inline]
    pub fn locate(&self, cell: &Cell) -> (isize, isize) {
        (
            (cell.x0 + cell.w * self.halves.0 / 2) as isize + self.offset.0,
            (cell.y0 + cell.h * self.halves.1 / 2) as isize + self.offset.1,
        )
    }
}

/// Per-direction constants for probing and painting one edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgeGeometry {
    pub mid: Probe,
    pub end: Probe,
    /// Which frame corner the run starts from: `(far_x, far_y)`.
    pub start_corner: (bool, bool),
    /// Unit step along the run.
    pub along: (isize, isize),
    /// Unit step for each additional pixel of border width.
    pub outward: (isize, isize),
}

pub static GEOMETRY: [EdgeGeometry; 4] = [
    // Top: left to right along the first row, thickening upwards.
    EdgeGeometry {
        mid: Probe::new(1, 0, 0, -1),
        end: Probe::new(2, 0, 0, -1),
        start_corner: (false, false),
        along: (1, 0),
        outward: (0, -1),
    },
    // Right: top to bottom along the far column, thickening rightwards.
    EdgeGeometry {
        mid: Probe::new(2, 1, 1, 0),
        end: Probe::new(2, 2, 1, 0),
        start_corner: (true, false),
        along: (0, 1),
        outward: (1, 0),
    },
    // Bottom: right to left along the far row, thickening downwards.
    EdgeGeometry {
        mid: Probe::new(1, 2, 0, 1),
        end: Probe::new(0, 2, 0, 1),
        start_corner: (true, true),
        along: (-1, 0),
        outward: (0, 1),
    },
    // Left: bottom to top along the first column, thickening leftwards.
    EdgeGeometry {
        mid: Probe::new(0, 1, -1, 0),
        end: Probe::new(0, 0, -1, 1),
        start_corner: (false, true),
        along: (0, -1),
        outward: (-1, 0),
    },
];

/// Which edges of an occupied cell face empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeExposure {
    exposed: [bool; 4],
    end_exposed: [bool; 4],
}

impl EdgeExposure {
    #[inline]
    pub fn exposed(&self, dir: Direction) -> bool {
        self.exposed[dir as usize]
    }

    #[inline]
    pub fn end_exposed(&self, dir: Direction) -> bool {
        self.end_exposed[dir as usize]
    }

    /// An exposed edge is lengthened past its far corner when the next edge
    /// is exposed too and the space beyond that corner is empty.
    #[inline]
    pub fn extends(&self, dir: Direction) -> bool {
        self.exposed(dir) && self.exposed(dir.next()) && self.end_exposed(dir)
    }

    pub fn exposed_count(&self) -> usize {
        self.exposed.iter().filter(|&&e| e).count()
    }
}

#[inline]
fn empty_at<I: ImageView>(image: &I, (x, y): (isize, isize)) -> bool {
    image.alpha(x, y) == 0
}

/// A cell is occupied when its representative pixel is not transparent.
#[inline]
pub fn is_occupied<I: ImageView>(image: &I, cell: &Cell) -> bool {
    !empty_at(image, cell.representative())
}

/// Probe the four edges of `cell`; `None` for empty cells.
pub fn classify_cell<I: ImageView>(image: &I, cell: &Cell) -> Option<EdgeExposure> {
    if !is_occupied(image, cell) {
        return None;
    }
    let mut exposure = EdgeExposure::default();
    for dir in Direction::ALL {
        let geo = dir.geometry();
        exposure.exposed[dir as usize] = empty_at(image, geo.mid.locate(cell));
        exposure.end_exposed[dir as usize] = empty_at(image, geo.end.locate(cell));
    }
    Some(exposure)
}
