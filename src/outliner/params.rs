//! Parameter types configuring the outliner stages.
//!
//! Defaults follow the sprite tool this crate grew out of: 16 px cells, a
//! 1 px black border and no grid overlay.

use crate::border::BorderSpec;
use crate::color::{AlphaScale, Color};
use crate::grid::CellOrder;
use serde::{Deserialize, Serialize};

/// Outliner-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutlineParams {
    /// Edge length of one grid cell in pixels (>= 1).
    pub cell_size: usize,
    /// Border painted along exposed edges.
    pub border: BorderSpec,
    /// Grid lines composited before normalization, if any.
    pub grid_overlay: Option<GridOverlay>,
    /// Cell traversal order for synthesis. Does not affect the output.
    pub order: CellOrder,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            cell_size: 16,
            border: BorderSpec::default(),
            grid_overlay: None,
            order: CellOrder::RowMajor,
        }
    }
}

/// Grid line color drawn over the artwork before normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOverlay {
    pub color: Color,
    #[serde(default)]
    pub alpha_scale: AlphaScale,
}
