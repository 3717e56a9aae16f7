//! Conversions between float color samples and packed RGBA8 texels.
//!
//! Packed layout is logical, not a memory reinterpretation: red occupies bits
//! 0..8, green 8..16, blue 16..24 and alpha 24..32 on every platform.

use crate::foundation::core::Rgba;

/// Quantize a float channel to a byte: `round(255 * clamp(f, 0, 1))`.
///
/// Out-of-range input saturates; NaN maps to 0.
pub fn to_byte(f: f32) -> u8 {
    if f.is_nan() {
        return 0;
    }
    (255.0 * f.clamp(0.0, 1.0)).round() as u8
}

/// Expand a byte channel back to `[0, 1]`.
pub fn to_float(b: u8) -> f32 {
    f32::from(b) / 255.0
}

/// Pack a color sample into an RGBA8 texel.
pub fn pack(c: Rgba) -> u32 {
    u32::from_le_bytes([to_byte(c.r), to_byte(c.g), to_byte(c.b), to_byte(c.a)])
}

/// Unpack an RGBA8 texel into a float color sample.
pub fn unpack(u: u32) -> Rgba {
    let [r, g, b, a] = u.to_le_bytes();
    Rgba::new(to_float(r), to_float(g), to_float(b), to_float(a))
}

/// `a` over `b`, computed as `a + (1 - a.alpha) * b` on every channel.
///
/// This is the editor's established blend and does not divide by the result
/// alpha; keep it as is so rasters stay byte-identical.
pub fn over(a: Rgba, b: Rgba) -> Rgba {
    let k = 1.0 - a.a;
    Rgba::new(a.r + k * b.r, a.g + k * b.g, a.b + k * b.b, a.a + k * b.a)
}

/// [`over`] on packed texels.
pub fn over_packed(a: u32, b: u32) -> u32 {
    pack(over(unpack(a), unpack(b)))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
