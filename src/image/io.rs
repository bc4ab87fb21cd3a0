//! I/O helpers for RGBA sprite sheets and JSON.
//!
//! - `load_rgba_image`: read a PNG into an owned 8-bit RGBA buffer.
//! - `place_on_canvas`: draw an image at the top-left of a cleared canvas.
//! - `save_rgba_image`: write an owned RGBA buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::rgba::pixel_index;
use image::{DynamicImage, ImageBuffer, Rgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA buffer, as decoded from or encoded to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedRgbaImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl OwnedRgbaImage {
    /// Construct from raw bytes. Returns `None` if `data.len() != width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (width.checked_mul(height).and_then(|n| n.checked_mul(4)) == Some(data.len())).then_some(
            Self {
                width,
                height,
                data,
            },
        )
    }

    /// Fully transparent canvas.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<OwnedRgbaImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    OwnedRgbaImage::from_raw(width, height, data)
        .ok_or_else(|| format!("Decoded {} has an inconsistent size", path.display()))
}

/// Copy `src` onto a transparent `width × height` canvas at the origin,
/// cropping whatever does not fit.
pub fn place_on_canvas(src: &OwnedRgbaImage, width: usize, height: usize) -> OwnedRgbaImage {
    let mut out = OwnedRgbaImage::transparent(width, height);
    let copy_w = src.width.min(width);
    let copy_h = src.height.min(height);
    for y in 0..copy_h {
        let from = pixel_index(src.width, 0, y);
        let to = pixel_index(width, 0, y);
        out.data[to..to + copy_w * 4].copy_from_slice(&src.data[from..from + copy_w * 4]);
    }
    out
}

/// Save an RGBA buffer to a PNG.
pub fn save_rgba_image(buffer: &OwnedRgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgba8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
