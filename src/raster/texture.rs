use crate::foundation::color::{pack, unpack};
use crate::foundation::core::Rgba;
use crate::foundation::error::{TfeError, TfeResult};

/// CPU-resident RGBA8 pixel buffer.
///
/// Texels are packed with [`pack`](crate::pack). Addressing is bottom-up:
/// `get`/`set` at row `y` touch storage row `height - y - 1`, so the first
/// storage row is the top of the image while `y = 0` is the curve baseline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Texture {
    /// Fully transparent texture of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Rebuild a texture from `width * height * 4` bytes in storage order.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> TfeResult<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(TfeError::validation(format!(
                "rgba8 buffer for {width}x{height} needs {expected} bytes, got {}",
                bytes.len()
            )));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed texels in storage order, `width * height` entries.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Packed texel at `(x, y)`; `y = 0` is the bottom row.
    ///
    /// Panics when the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.data[self.linear_index(x, self.flip(y))]
    }

    /// Store a packed texel at `(x, y)`; `y = 0` is the bottom row.
    ///
    /// Panics when the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.linear_index(x, self.flip(y));
        self.data[idx] = val;
    }

    /// Unpacked color at `(x, y)`.
    pub fn color(&self, x: u32, y: u32) -> Rgba {
        unpack(self.get(x, y))
    }

    /// Pack and store a color at `(x, y)`.
    pub fn set_color(&mut self, x: u32, y: u32, c: Rgba) {
        self.set(x, y, pack(c));
    }

    /// Bytes in R, G, B, A order, top storage row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_le_bytes()).collect()
    }

    fn linear_index(&self, x: u32, row: u32) -> usize {
        debug_assert!(x < self.width && row < self.height);
        x as usize + self.width as usize * row as usize
    }

    fn flip(&self, y: u32) -> u32 {
        self.height - y - 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/texture.rs"]
mod tests;
