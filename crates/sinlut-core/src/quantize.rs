// crates/sinlut-core/src/quantize.rs
//
// Balanced C2 quantization of the unit sine.
//
// "Balanced" leaves the most negative two's-complement code unused: a signed
// width of NBIT maps ±1.0 to ±(2^(NBIT-1) - 1), so positive and negative full
// scale have equal magnitude and the step size is symmetric around zero.

use std::f64::consts::TAU;

/// Narrowest width that carries a signed balanced range. At 1 bit the
/// full-scale magnitude is 2^0 - 1 = 0 and the lsb formula divides by zero.
pub const MIN_BITS: u32 = 2;

/// Widest width whose full-scale magnitude fits the `i32` sample type.
/// At 32 the magnitude is exactly `i32::MAX`.
pub const MAX_BITS: u32 = 32;

/// Balanced full-scale magnitude: 2^(bits-1) - 1.
#[inline]
pub fn full_scale(bits: u32) -> i32 {
    debug_assert!((MIN_BITS..=MAX_BITS).contains(&bits));
    ((1i64 << (bits - 1)) - 1) as i32
}

/// Least-significant-bit step of the balanced scale: 1 / (2^(bits-1) - 1).
#[inline]
pub fn lsb(bits: u32) -> f64 {
    1.0 / full_scale(bits) as f64
}

/// Quantize a continuous value in [-1, 1] to the nearest balanced code.
///
/// - `round(f / lsb)` with round-half-away-from-zero (`f64::round`), so the
///   tie rule is fixed and symmetric around zero.
/// - The rounded quotient can land one code past full scale when `f` carries
///   floating-point error at ±1; the clamp keeps it inside the balanced range.
/// - `bits` outside MIN_BITS..=MAX_BITS is the validator's job to reject,
///   never handled here.
pub fn quantize(f: f64, bits: u32) -> i32 {
    debug_assert!((MIN_BITS..=MAX_BITS).contains(&bits));

    let fs = full_scale(bits) as f64;
    let q = (f / lsb(bits)).round();
    q.clamp(-fs, fs) as i32
}

/// Quantized sine at one phase index of a `lines`-entry table:
/// `quantize(sin(2π · index / lines))`.
///
/// The phase argument stays in f64 throughout; `index` and `lines` can both
/// be large and a narrower intermediate costs phase accuracy on big tables.
pub fn sin_sample(index: u32, lines: u32, bits: u32) -> i32 {
    debug_assert!(lines >= 1);
    debug_assert!(index < lines);

    let phase = TAU * f64::from(index) / f64::from(lines);
    quantize(phase.sin(), bits)
}
