use crate::foundation::core::{ControlPoint, Point, ValueRange};
use crate::layer::{Function, Layer, rasterize_area};
use crate::raster::texture::Texture;

/// Curve through an ordered set of control points, linear between neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseLinear {
    control_points: Vec<ControlPoint>,
    value_range: ValueRange,
}

impl Default for PiecewiseLinear {
    /// Identity ramp from `(0, 0)` to `(1, 1)`.
    fn default() -> Self {
        Self::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
    }
}

impl PiecewiseLinear {
    /// Build a curve; points are sorted ascending by `x`.
    pub fn new(mut control_points: Vec<ControlPoint>) -> Self {
        control_points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self {
            control_points,
            value_range: ValueRange::default(),
        }
    }

    /// Return the curve restricted to `range`.
    pub fn with_value_range(mut self, range: ValueRange) -> Self {
        self.value_range = range;
        self
    }

    /// Control points in ascending `x` order.
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    fn interpolate(p1: Point, p2: Point, x: f64) -> f64 {
        let dx = p2.x - p1.x;
        if dx == 0.0 {
            // Coincident x: step, keep the left value.
            tracing::trace!(x, "degenerate control point pair");
            return p1.y;
        }
        let slope = (p2.y - p1.y) / dx;
        p1.y + slope * (x - p1.x)
    }
}

impl Function for PiecewiseLinear {
    fn eval(&self, x: f64) -> f64 {
        if self.control_points.len() < 2 || !self.value_range.contains(x) {
            return 0.0;
        }
        self.control_points
            .windows(2)
            .find(|pair| pair[0].x <= x && x <= pair[1].x)
            .map_or(0.0, |pair| Self::interpolate(pair[0], pair[1], x))
    }

    fn value_range(&self) -> ValueRange {
        self.value_range
    }
}

impl Layer for PiecewiseLinear {
    fn rasterize(&self, width: u32, height: u32) -> Texture {
        rasterize_area(self, width, height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/piecewise.rs"]
mod tests;
