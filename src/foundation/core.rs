use crate::foundation::error::{TfeError, TfeResult};

pub use kurbo::Point;

/// A curve control point: `x` is the domain position, `y` the alpha value.
pub type ControlPoint = Point;

/// Closed interval `[lower, upper]` over which a function is defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }
}

impl ValueRange {
    /// Build a range, rejecting reversed or non-finite bounds.
    pub fn new(lower: f64, upper: f64) -> TfeResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(TfeError::validation("ValueRange bounds must be finite"));
        }
        if lower > upper {
            return Err(TfeError::validation("ValueRange lower must be <= upper"));
        }
        Ok(Self { lower, upper })
    }

    /// `true` when `x` lies inside the closed interval. NaN is never contained.
    pub fn contains(self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Straight (non-premultiplied) float color sample.
///
/// Channels are nominally in `[0, 1]` but are only clamped when packed.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, the value of an untouched texel.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build a color from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from an [`Rgb`].
    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 1.0)
    }
}

/// Opaque color, used for backgrounds and configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::gray(0.0);
    /// White.
    pub const WHITE: Self = Self::gray(1.0);

    /// Build a color from its three channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Gray level `v` on all three channels.
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
