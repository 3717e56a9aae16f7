use crate::foundation::color::pack;
use crate::foundation::core::{Rgb, Rgba};
use crate::layer::Layer;
use crate::raster::texture::Texture;

/// Opaque checkerboard, the usual backdrop that makes translucent curves legible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkers {
    checker_size: u32,
    color1: Rgb,
    color2: Rgb,
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new(8, Rgb::BLACK, Rgb::WHITE)
    }
}

impl Checkers {
    /// Tiles `checker_size` pixels wide; a size of 0 is treated as 1.
    pub fn new(checker_size: u32, color1: Rgb, color2: Rgb) -> Self {
        Self {
            checker_size: checker_size.max(1),
            color1,
            color2,
        }
    }

    /// Tile edge length in pixels.
    pub fn checker_size(&self) -> u32 {
        self.checker_size
    }
}

impl Layer for Checkers {
    fn rasterize(&self, width: u32, height: u32) -> Texture {
        let mut tex = Texture::new(width, height);
        let colors = [
            pack(Rgba::opaque(self.color1)),
            pack(Rgba::opaque(self.color2)),
        ];
        for y in 0..height {
            let yy = (y / self.checker_size) % 2;
            for x in 0..width {
                let xx = (x / self.checker_size) % 2;
                let idx = usize::from(xx != yy);
                tex.set(x, y, colors[idx]);
            }
        }
        tex
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/checkers.rs"]
mod tests;
