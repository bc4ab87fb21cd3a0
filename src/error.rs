//! Input validation failures reported by the outliner.
//!
//! Every check runs before the buffer is touched, so a returned error always
//! means the caller's pixels are exactly as they were handed in.
use crate::color::AlphaScale;

/// Which dimension of the input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionIssue {
    ZeroWidth,
    ZeroHeight,
    ZeroCellSize,
    /// `expected` is `None` when `width * height * 4` overflows `usize`.
    BufferLength {
        expected: Option<usize>,
        actual: usize,
    },
}

/// Color channel names used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
            Channel::Alpha => "a",
        }
    }
}

/// Which configured color a [`OutlineError::MalformedColor`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRole {
    Border,
    Grid,
}

/// Reasons why an outline pass refuses to start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlineError {
    InvalidDimensions(DimensionIssue),
    InvalidBorderWidth {
        width: usize,
    },
    MalformedColor {
        role: ColorRole,
        channel: Channel,
        value: f32,
        scale: AlphaScale,
    },
}

impl std::fmt::Display for OutlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutlineError::InvalidDimensions(issue) => match issue {
                DimensionIssue::ZeroWidth => write!(f, "invalid dimensions: width must be positive"),
                DimensionIssue::ZeroHeight => {
                    write!(f, "invalid dimensions: height must be positive")
                }
                DimensionIssue::ZeroCellSize => {
                    write!(f, "invalid dimensions: cell size must be positive")
                }
                DimensionIssue::BufferLength {
                    expected: Some(expected),
                    actual,
                } => write!(
                    f,
                    "invalid dimensions: buffer holds {actual} bytes, width*height*4 = {expected}"
                ),
                DimensionIssue::BufferLength {
                    expected: None,
                    actual,
                } => write!(
                    f,
                    "invalid dimensions: width*height*4 overflows (buffer holds {actual} bytes)"
                ),
            },
            OutlineError::InvalidBorderWidth { width } => {
                write!(f, "border width must be at least 1 pixel (got {width})")
            }
            OutlineError::MalformedColor {
                role,
                channel,
                value,
                scale,
            } => {
                let role = match role {
                    ColorRole::Border => "border",
                    ColorRole::Grid => "grid",
                };
                let range = match (channel, scale) {
                    (Channel::Alpha, AlphaScale::Unit) => "[0, 1]",
                    _ => "[0, 255]",
                };
                write!(
                    f,
                    "malformed {role} color: channel {} = {value} is outside {range}",
                    channel.name()
                )
            }
        }
    }
}

impl std::error::Error for OutlineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_field() {
        let err = OutlineError::InvalidDimensions(DimensionIssue::ZeroCellSize);
        assert!(err.to_string().contains("cell size"));

        let err = OutlineError::InvalidDimensions(DimensionIssue::BufferLength {
            expected: Some(64),
            actual: 63,
        });
        assert!(err.to_string().contains("63"), "{err}");

        let err = OutlineError::MalformedColor {
            role: ColorRole::Grid,
            channel: Channel::Alpha,
            value: 1.5,
            scale: AlphaScale::Unit,
        };
        let msg = err.to_string();
        assert!(msg.contains("grid") && msg.contains("[0, 1]"), "{msg}");
    }
}
