/// Tiny xorshift generator so the property tests stay reproducible.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    pub fn chance(&mut self, percent: usize) -> bool {
        self.below(100) < percent
    }
}

/// Transparent RGBA canvas.
pub fn blank(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![0u8; width * height * 4]
}

/// Paint the axis-aligned block `[x0, x0 + w) × [y0, y0 + h)`.
pub fn fill_rect(
    data: &mut [u8],
    width: usize,
    (x0, y0): (usize, usize),
    (w, h): (usize, usize),
    rgba: [u8; 4],
) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            set_pixel(data, width, x, y, rgba);
        }
    }
}

/// Sprite sheet with roughly `percent` of the cells fully painted.
pub fn random_sheet(
    rng: &mut XorShift,
    width: usize,
    height: usize,
    cell: usize,
    percent: usize,
) -> Vec<u8> {
    assert!(cell > 0, "cell size must be positive");
    let mut data = blank(width, height);
    for y0 in (0..height).step_by(cell) {
        for x0 in (0..width).step_by(cell) {
            if rng.chance(percent) {
                let color = [
                    rng.below(256) as u8,
                    rng.below(256) as u8,
                    rng.below(256) as u8,
                    255,
                ];
                let w = cell.min(width - x0);
                let h = cell.min(height - y0);
                fill_rect(&mut data, width, (x0, y0), (w, h), color);
            }
        }
    }
    data
}

/// Buffer with arbitrary RGB and alpha either 0 or random non-zero.
pub fn random_noise(
    rng: &mut XorShift,
    width: usize,
    height: usize,
    percent_opaque: usize,
) -> Vec<u8> {
    let mut data = blank(width, height);
    for px in data.chunks_exact_mut(4) {
        px[0] = rng.below(256) as u8;
        px[1] = rng.below(256) as u8;
        px[2] = rng.below(256) as u8;
        px[3] = if rng.chance(percent_opaque) {
            1 + rng.below(255) as u8
        } else {
            0
        };
    }
    data
}

/// All `(x, y)` positions on the perimeter of `[x0, x1] × [y0, y1]`.
pub fn perimeter(x0: usize, y0: usize, x1: usize, y1: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            if x == x0 || x == x1 || y == y0 || y == y1 {
                out.push((x, y));
            }
        }
    }
    out
}

pub fn pixel(data: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let i = 4 * (y * width + x);
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

pub fn set_pixel(data: &mut [u8], width: usize, x: usize, y: usize, rgba: [u8; 4]) {
    let i = 4 * (y * width + x);
    data[i..i + 4].copy_from_slice(&rgba);
}
