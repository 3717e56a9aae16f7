//! Rasterizable layers and the 1-D alpha functions built on them.

pub(crate) mod checkers;
pub(crate) mod piecewise;
pub(crate) mod tent;

use std::rc::Rc;

use crate::foundation::color::pack;
use crate::foundation::core::{Rgba, ValueRange};
use crate::raster::texture::Texture;

/// Fill color of the area chart drawn for a function.
pub const FUNCTION_FILL: Rgba = Rgba::new(0.6, 0.6, 0.6, 0.95);

/// Anything that can be turned into a pixel buffer.
pub trait Layer {
    /// Render into a fresh texture of exactly `width x height`.
    fn rasterize(&self, width: u32, height: u32) -> Texture;
}

/// A 1-D alpha curve over its [`ValueRange`].
///
/// Implementors usually forward [`Layer::rasterize`] to [`rasterize_area`].
pub trait Function: Layer {
    /// Alpha at domain position `x`; `0` outside [`Function::value_range`].
    fn eval(&self, x: f64) -> f64;

    /// Interval over which the curve is defined.
    fn value_range(&self) -> ValueRange;
}

/// Shared handle to a background layer.
pub type LayerRef = Rc<dyn Layer>;

/// Shared handle to a function layer.
pub type FunctionRef = Rc<dyn Function>;

/// Domain position of column `x` in a raster `width` pixels wide.
///
/// A single column maps to `0`.
pub(crate) fn column_position(x: u32, width: u32) -> f64 {
    if width <= 1 {
        return 0.0;
    }
    f64::from(x) / f64::from(width - 1)
}

/// Number of rows covered by an alpha of `y` in a raster `height` rows tall.
pub(crate) fn covered_rows(y: f64, height: u32) -> u32 {
    let rows = (y * f64::from(height)).floor();
    if rows.is_nan() || rows <= 0.0 {
        return 0;
    }
    rows.min(f64::from(height)) as u32
}

/// Area chart of `f`: each column is filled with [`FUNCTION_FILL`] from the
/// baseline up to `floor(eval(u) * height)`.
pub fn rasterize_area<F: Function + ?Sized>(f: &F, width: u32, height: u32) -> Texture {
    let mut tex = Texture::new(width, height);
    let fill = pack(FUNCTION_FILL);
    for x in 0..width {
        let rows = covered_rows(f.eval(column_position(x, width)), height);
        for y in 0..rows {
            tex.set(x, y, fill);
        }
    }
    tex
}

#[cfg(test)]
#[path = "../../tests/unit/layer/area.rs"]
mod tests;
