//! JSON runtime configuration for the `grid_outliner` binary.
//!
//! ```json
//! {
//!   "input": "sheet.png",
//!   "canvas": { "width": 2016, "height": 2016 },
//!   "grid": { "cellSize": 16, "color": { "r": 0, "g": 0, "b": 0, "a": 1 } },
//!   "border": { "color": { "r": 255, "g": 0, "b": 0, "a": 1 }, "widthPx": 2 },
//!   "output": { "image": "out/sheet.png", "reportJson": "out/report.json" }
//! }
//! ```
use crate::border::BorderSpec;
use crate::color::{AlphaScale, Color};
use crate::grid::CellOrder;
use crate::outliner::{GridOverlay, OutlineParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

/// Canvas the input is drawn onto (top-left aligned, cropped or padded).
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub cell_size: usize,
    /// Grid line color; `null` skips the overlay.
    pub color: Option<Color>,
    pub alpha_scale: AlphaScale,
    pub order: CellOrder,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 16,
            color: Some(Color::BLACK),
            alpha_scale: AlphaScale::Unit,
            order: CellOrder::RowMajor,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub output: OutputConfig,
    /// When absent the image keeps its own size.
    #[serde(default)]
    pub canvas: Option<CanvasConfig>,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub border: BorderSpec,
}

impl RuntimeConfig {
    pub fn to_outline_params(&self) -> OutlineParams {
        OutlineParams {
            cell_size: self.grid.cell_size,
            border: self.border,
            grid_overlay: self.grid.color.map(|color| GridOverlay {
                color,
                alpha_scale: self.grid.alpha_scale,
            }),
            order: self.grid.order,
        }
    }
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig, String> {
    serde_json::from_str(contents).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("{e} ({})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_tool_defaults() {
        let cfg = parse_config(r#"{ "input": "a.png", "output": { "image": "b.png" } }"#).unwrap();
        assert!(cfg.canvas.is_none());
        assert!(cfg.output.report_json.is_none());
        let params = cfg.to_outline_params();
        assert_eq!(params.cell_size, 16);
        assert_eq!(params.border.width_px, 1);
        assert_eq!(params.border.color, Color::BLACK);
        assert_eq!(
            params.grid_overlay.map(|o| o.color),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn null_grid_color_disables_the_overlay() {
        let cfg = parse_config(
            r#"{
                "input": "a.png",
                "output": { "image": "b.png", "reportJson": "r.json" },
                "canvas": { "width": 504, "height": 504 },
                "grid": { "cellSize": 8, "color": null, "order": "column_major" },
                "border": { "color": { "r": 255, "g": 0, "b": 0, "a": 255 }, "alphaScale": "byte", "widthPx": 4 }
            }"#,
        )
        .unwrap();
        let params = cfg.to_outline_params();
        assert!(params.grid_overlay.is_none());
        assert_eq!(params.cell_size, 8);
        assert_eq!(params.order, CellOrder::ColumnMajor);
        assert_eq!(params.border.width_px, 4);
        assert_eq!(params.border.alpha_scale, AlphaScale::Byte);
        assert_eq!(cfg.canvas.map(|c| c.width), Some(504));
    }

    #[test]
    fn load_errors_name_the_file() {
        let dir = std::env::temp_dir().join(format!("grid_outliner_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{err}");
        assert!(err.contains("broken.json"), "{err}");

        let err = load_config(&dir.join("absent.json")).unwrap_err();
        assert!(err.contains("absent.json"), "{err}");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_output_is_an_error() {
        let err = parse_config(r#"{ "input": "a.png" }"#).unwrap_err();
        assert!(err.contains("output"), "{err}");
    }
}
