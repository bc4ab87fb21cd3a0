//! Colors as supplied by callers and their packed RGBA form.
//!
//! Channels arrive as numbers so that out-of-range input can be reported
//! instead of silently clamped. Alpha is either a 0–1 fraction (the way color
//! pickers hand it out) or a 0–255 byte; [`AlphaScale`] says which.
use crate::error::{Channel, ColorRole, OutlineError};
use serde::{Deserialize, Serialize};

/// Interpretation of [`Color::a`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaScale {
    /// Alpha in `[0, 1]`.
    #[default]
    Unit,
    /// Alpha in `[0, 255]`, same as the color channels.
    Byte,
}

/// RGBA color with unchecked channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque_unit_alpha")]
    pub a: f32,
}

fn opaque_unit_alpha() -> f32 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color with alpha expressed on the unit scale.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Validate every channel and pack to bytes, scaling alpha when it is a
    /// fraction.
    pub fn to_rgba(&self, scale: AlphaScale, role: ColorRole) -> Result<[u8; 4], OutlineError> {
        let malformed = |channel, value| OutlineError::MalformedColor {
            role,
            channel,
            value,
            scale,
        };
        let byte = |channel, value: f32| {
            if value.is_finite() && (0.0..=255.0).contains(&value) {
                Ok(value.round() as u8)
            } else {
                Err(malformed(channel, value))
            }
        };

        let r = byte(Channel::Red, self.r)?;
        let g = byte(Channel::Green, self.g)?;
        let b = byte(Channel::Blue, self.b)?;
        let a = match scale {
            AlphaScale::Byte => byte(Channel::Alpha, self.a)?,
            AlphaScale::Unit => {
                if !(self.a.is_finite() && (0.0..=1.0).contains(&self.a)) {
                    return Err(malformed(Channel::Alpha, self.a));
                }
                (self.a * 255.0).round() as u8
            }
        };
        Ok([r, g, b, a])
    }
}

/// Source-over composite of `src` onto `dst`, both straight (non-premultiplied)
/// RGBA.
pub fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}
