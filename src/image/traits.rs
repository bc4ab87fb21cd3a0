//! Coordinate-level access to packed RGBA buffers.
//!
//! Coordinates are signed so that probes may step off the canvas; anything
//! outside `[0, width) × [0, height)` reads as fully transparent and is never
//! written.

pub trait ImageView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn bytes(&self) -> &[u8];

    #[inline]
    fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Byte offset of the red channel at `(x, y)`, if it lies on the canvas.
    #[inline]
    fn offset(&self, x: isize, y: isize) -> Option<usize> {
        self.contains(x, y)
            .then(|| super::pixel_index(self.width(), x as usize, y as usize))
    }

    /// Alpha at `(x, y)`; off-canvas positions behave like empty space.
    #[inline]
    fn alpha(&self, x: isize, y: isize) -> u8 {
        self.offset(x, y).map_or(0, |i| self.bytes()[i + 3])
    }

    #[inline]
    fn pixel(&self, x: isize, y: isize) -> Option<[u8; 4]> {
        self.offset(x, y).map(|i| {
            let px = &self.bytes()[i..i + 4];
            [px[0], px[1], px[2], px[3]]
        })
    }
}

pub trait ImageViewMut: ImageView {
    fn bytes_mut(&mut self) -> &mut [u8];

    /// Overwrite all four channels; returns `false` for off-canvas targets.
    #[inline]
    fn put_pixel(&mut self, x: isize, y: isize, rgba: [u8; 4]) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.bytes_mut()[i..i + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn set_alpha(&mut self, x: isize, y: isize, a: u8) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.bytes_mut()[i + 3] = a;
                true
            }
            None => false,
        }
    }
}
