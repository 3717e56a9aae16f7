use super::*;

struct Constant(f64);

impl Layer for Constant {
    fn rasterize(&self, width: u32, height: u32) -> Texture {
        rasterize_area(self, width, height)
    }
}

impl Function for Constant {
    fn eval(&self, _x: f64) -> f64 {
        self.0
    }

    fn value_range(&self) -> ValueRange {
        ValueRange::default()
    }
}

struct Identity;

impl Layer for Identity {
    fn rasterize(&self, width: u32, height: u32) -> Texture {
        rasterize_area(self, width, height)
    }
}

impl Function for Identity {
    fn eval(&self, x: f64) -> f64 {
        x
    }

    fn value_range(&self) -> ValueRange {
        ValueRange::default()
    }
}

fn filled_rows(tex: &Texture, x: u32) -> u32 {
    (0..tex.height()).filter(|&y| tex.get(x, y) != 0).count() as u32
}

#[test]
fn column_position_spans_unit_interval() {
    assert_eq!(column_position(0, 5), 0.0);
    assert_eq!(column_position(4, 5), 1.0);
    assert_eq!(column_position(2, 5), 0.5);
}

#[test]
fn single_column_maps_to_zero() {
    assert_eq!(column_position(0, 1), 0.0);
}

#[test]
fn covered_rows_clamps_to_height() {
    assert_eq!(covered_rows(0.5, 10), 5);
    assert_eq!(covered_rows(0.59, 10), 5);
    assert_eq!(covered_rows(2.0, 10), 10);
    assert_eq!(covered_rows(-1.0, 10), 0);
    assert_eq!(covered_rows(f64::NAN, 10), 0);
}

#[test]
fn row_boundaries_use_double_precision() {
    // 666 / 999 is exactly 2/3 in f64; 2/3 * 300 rounds up to 200.
    let u = column_position(666, 1000);
    assert_eq!(u, 2.0 / 3.0);
    assert_eq!(covered_rows(u, 300), 200);
}

#[test]
fn area_chart_fills_from_the_baseline() {
    let tex = Constant(0.5).rasterize(3, 8);
    for x in 0..3 {
        for y in 0..4 {
            assert_eq!(tex.get(x, y), pack(FUNCTION_FILL));
        }
        for y in 4..8 {
            assert_eq!(tex.get(x, y), 0);
        }
    }
}

#[test]
fn area_chart_follows_the_curve() {
    let tex = Identity.rasterize(5, 4);
    assert_eq!(filled_rows(&tex, 0), 0);
    assert_eq!(filled_rows(&tex, 2), 2);
    assert_eq!(filled_rows(&tex, 4), 4);
}

#[test]
fn one_pixel_wide_raster_is_defined() {
    let tex = Identity.rasterize(1, 4);
    assert_eq!(tex.width(), 1);
    assert_eq!(filled_rows(&tex, 0), 0);
}
