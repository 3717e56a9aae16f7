use crate::foundation::core::{ControlPoint, Point, ValueRange};
use crate::layer::piecewise::PiecewiseLinear;
use crate::layer::{Function, Layer, rasterize_area};
use crate::raster::texture::Texture;

/// Trapezoid centered on `tip.x`: flat top `top_width` wide at height `tip.y`,
/// falling to zero over `bottom_width`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tent {
    tip: Point,
    top_width: f64,
    bottom_width: f64,
    internal: PiecewiseLinear,
}

impl Default for Tent {
    fn default() -> Self {
        Self::new(Point::new(0.5, 1.0), 0.0, 1.0)
    }
}

impl Tent {
    /// Build a tent from its tip and widths.
    pub fn new(tip: Point, top_width: f64, bottom_width: f64) -> Self {
        let internal = PiecewiseLinear::new(vec![
            Point::new(tip.x - bottom_width / 2.0, 0.0),
            Point::new(tip.x - top_width / 2.0, tip.y),
            Point::new(tip.x + top_width / 2.0, tip.y),
            Point::new(tip.x + bottom_width / 2.0, 0.0),
        ]);
        Self {
            tip,
            top_width,
            bottom_width,
            internal,
        }
    }

    /// Return the tent restricted to `range`.
    pub fn with_value_range(mut self, range: ValueRange) -> Self {
        self.internal = self.internal.with_value_range(range);
        self
    }

    /// Peak position and height.
    pub fn tip(&self) -> Point {
        self.tip
    }

    /// Width of the flat top.
    pub fn top_width(&self) -> f64 {
        self.top_width
    }

    /// Width at the base.
    pub fn bottom_width(&self) -> f64 {
        self.bottom_width
    }

    /// The four control points the tent is built from.
    pub fn control_points(&self) -> &[ControlPoint] {
        self.internal.control_points()
    }
}

impl Function for Tent {
    fn eval(&self, x: f64) -> f64 {
        self.internal.eval(x)
    }

    fn value_range(&self) -> ValueRange {
        self.internal.value_range()
    }
}

impl Layer for Tent {
    fn rasterize(&self, width: u32, height: u32) -> Texture {
        rasterize_area(self, width, height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/tent.rs"]
mod tests;
