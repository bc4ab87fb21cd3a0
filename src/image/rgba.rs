//! Borrowed RGBA views (4 bytes per pixel, row-major, no padding).
use super::traits::{ImageView, ImageViewMut};
use crate::error::{DimensionIssue, OutlineError};

/// Byte offset of the red channel of pixel `(x, y)`.
#[inline]
pub fn pixel_index(width: usize, x: usize, y: usize) -> usize {
    4 * (y * width + x)
}

/// Check `width`, `height` and the buffer length against each other.
pub fn check_buffer(width: usize, height: usize, len: usize) -> Result<(), OutlineError> {
    if width == 0 {
        return Err(OutlineError::InvalidDimensions(DimensionIssue::ZeroWidth));
    }
    if height == 0 {
        return Err(OutlineError::InvalidDimensions(DimensionIssue::ZeroHeight));
    }
    let expected = width.checked_mul(height).and_then(|n| n.checked_mul(4));
    if expected != Some(len) {
        return Err(OutlineError::InvalidDimensions(
            DimensionIssue::BufferLength {
                expected,
                actual: len,
            },
        ));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
pub struct RgbaImage<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> RgbaImage<'a> {
    pub fn new(data: &'a [u8], w: usize, h: usize) -> Result<Self, OutlineError> {
        check_buffer(w, h, data.len())?;
        Ok(Self { w, h, data })
    }
}

impl ImageView for RgbaImage<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn bytes(&self) -> &[u8] {
        self.data
    }
}

/// Exclusive view used by the passes that rewrite pixels in place.
#[derive(Debug)]
pub struct RgbaImageMut<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a mut [u8],
}

impl<'a> RgbaImageMut<'a> {
    pub fn new(data: &'a mut [u8], w: usize, h: usize) -> Result<Self, OutlineError> {
        check_buffer(w, h, data.len())?;
        Ok(Self { w, h, data })
    }
}

impl ImageView for RgbaImageMut<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn bytes(&self) -> &[u8] {
        &*self.data
    }
}

impl ImageViewMut for RgbaImageMut<'_> {
    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}
