use super::*;

#[test]
fn to_byte_clamps_before_scaling() {
    assert_eq!(to_byte(-0.5), 0);
    assert_eq!(to_byte(1.5), 255);
    assert_eq!(to_byte(0.0), 0);
    assert_eq!(to_byte(1.0), 255);
    assert_eq!(to_byte(f32::NAN), 0);
}

#[test]
fn to_byte_rounds_to_nearest() {
    assert_eq!(to_byte(0.5), 128);
    assert_eq!(to_byte(0.6), 153);
    assert_eq!(to_byte(0.95), 242);
}

#[test]
fn pack_uses_rgba_bit_offsets() {
    let u = pack(Rgba::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(u, 0x0000_00ff);
    let u = pack(Rgba::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(u, 0x0000_ff00);
    let u = pack(Rgba::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(u, 0x00ff_0000);
    let u = pack(Rgba::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(u, 0xff00_0000);
}

#[test]
fn unpack_recovers_quantized_values() {
    for step in 0u8..=255 {
        let f = to_float(step);
        let back = unpack(pack(Rgba::new(f, f, f, f)));
        for ch in [back.r, back.g, back.b, back.a] {
            assert!((ch - f).abs() <= 1.0 / 255.0, "step {step}: {ch} vs {f}");
        }
    }
}

#[test]
fn over_opaque_a_replaces_b() {
    let a = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let b = Rgba::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(over(a, b), a);
}

#[test]
fn over_transparent_a_keeps_b() {
    let b = Rgba::new(0.2, 0.4, 0.6, 0.8);
    assert_eq!(over(Rgba::TRANSPARENT, b), b);
}

#[test]
fn over_does_not_renormalize_by_result_alpha() {
    let a = Rgba::new(0.6, 0.6, 0.6, 0.5);
    let b = Rgba::new(1.0, 1.0, 1.0, 0.5);
    let out = over(a, b);
    assert!((out.a - 0.75).abs() < 1e-6);
    assert!((out.r - 1.1).abs() < 1e-6);
    assert!((out.r - 1.1 / out.a).abs() > 0.1);
    assert_eq!(pack(out), 0xbfff_ffff);
}

#[test]
fn over_opaque_b_yields_unit_alpha() {
    let a = Rgba::new(0.6, 0.6, 0.6, 0.5);
    let b = Rgba::new(1.0, 1.0, 1.0, 1.0);
    let out = over(a, b);
    assert!((out.a - 1.0).abs() < 1e-6);
    assert!((out.r - 1.1).abs() < 1e-6);
    assert_eq!(pack(out), 0xffff_ffff);
}

#[test]
fn over_packed_matches_float_path() {
    let a = pack(Rgba::new(0.6, 0.6, 0.6, 0.95));
    let b = pack(Rgba::opaque(crate::foundation::core::Rgb::BLACK));
    assert_eq!(over_packed(a, b), pack(over(unpack(a), unpack(b))));
}
