// SPDX-License-Identifier: MIT
//
// srlab-color — the SR LAB 2 color engine.
//
// Three interoperable color models live here: gamma/linear RGB, the
// perceptual SR LAB 2 space (Jan Behrens) in rectangular form, and its
// polar LCH form. Conversion between them is exact up to the published
// six-figure matrix constants, and every mixing operation is aware of the
// hue wheel where it matters.
//
// Conversion pipeline:
//
//   gamma sRGB ↔ linear sRGB ↔ XYZ ↔ XYZ' (compressed) ↔ LAB ↔ LCH
//
// Hue is stored as a fraction of a full turn in [0, 1) everywhere. Degree
// and radian views exist only as thin wrappers on `Lch`.
//
// Everything is a pure function over plain `Copy` values. Nothing here
// allocates except harmony generation, and nothing here logs.

// Single-char math variables (r, g, b, l, a, c, h, x, y, z) are standard
// in color science.
#![allow(clippy::many_single_char_names)]
// Encoders truncate after an explicit clamp.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Packing widens small integers into floats.
#![allow(clippy::cast_precision_loss)]
// l/a/b and their primed counterparts are inherently similar names.
#![allow(clippy::similar_names)]
// Matrix constants are quoted with their published digits.
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

pub mod angle;
pub mod convert;
pub mod error;
pub mod harmony;
pub mod lab;
pub mod lch;
pub mod mix;
pub mod rgb;

pub use angle::Direction;
pub use error::{ParseHexError, Result};
pub use harmony::Harmony;
pub use lab::Lab;
pub use lch::Lch;
pub use rgb::Rgb;

/// Chroma-squared threshold below which a color counts as gray.
///
/// Hue is undefined for gray colors and is treated as 0 by every additive
/// or interpolating operation.
pub const GRAY_EPSILON: f64 = 1e-6;

/// Tolerance used by the `approx_eq` helpers on the value types.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Floor-based wraparound of `value` into `[0, range)`.
///
/// Unlike `%`, the result is never negative. A result that rounds up to
/// `range` itself is folded back to 0.
#[inline]
#[must_use]
pub fn wrap(value: f64, range: f64) -> f64 {
    let w = value - range * (value / range).floor();
    if w >= range { 0.0 } else { w }
}

/// Shorthand for [`wrap`] with a period of one turn.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    wrap(h, 1.0)
}

/// Round-half-up encoding of a unit-range value into `[0, max]`.
///
/// `value * max + 0.5`, truncated, saturating at both ends.
#[inline]
pub(crate) fn quantize(value: f64, max: f64) -> f64 {
    value.mul_add(max, 0.5).clamp(0.0, max).trunc()
}

/// Write `v` with four fixed decimals, the way the JSON-shaped renderers do.
///
/// Shared with `srlab-gradient` so keys and colors render alike.
///
/// # Errors
///
/// Propagates the formatter's error.
#[doc(hidden)]
pub fn fmt_fixed(f: &mut std::fmt::Formatter<'_>, v: f64) -> std::fmt::Result {
    // Avoid "-0.0000" for tiny negative drift.
    let v = if v.abs() < 0.000_05 { 0.0 } else { v };
    write!(f, "{v:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_positive_and_negative() {
        assert!((wrap(1.25, 1.0) - 0.25).abs() < 1e-12);
        assert!((wrap(-0.25, 1.0) - 0.75).abs() < 1e-12);
        assert!((wrap(370.0, 360.0) - 10.0).abs() < 1e-9);
        assert!((wrap(-10.0, 360.0) - 350.0).abs() < 1e-9);
    }

    #[test]
    fn wrap_never_reaches_range() {
        let w = wrap(-1e-18, 1.0);
        assert!((0.0..1.0).contains(&w), "wrapped to {w}");
        assert_eq!(wrap(1.0, 1.0), 0.0);
        assert_eq!(wrap(0.0, 1.0), 0.0);
    }

    #[test]
    fn quantize_rounds_half_up_and_saturates() {
        assert_eq!(quantize(1.0, 255.0), 255.0);
        assert_eq!(quantize(0.0, 255.0), 0.0);
        assert_eq!(quantize(2.0, 255.0), 255.0);
        assert_eq!(quantize(-1.0, 255.0), 0.0);
        // 0.5 * 255 = 127.5 rounds up.
        assert_eq!(quantize(0.5, 255.0), 128.0);
    }

    struct Fixed(f64);

    impl std::fmt::Display for Fixed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            fmt_fixed(f, self.0)
        }
    }

    #[test]
    fn fmt_fixed_drops_negative_zero() {
        assert_eq!(Fixed(-0.000_01).to_string(), "0.0000");
        assert_eq!(Fixed(0.333_33).to_string(), "0.3333");
        assert_eq!(Fixed(-12.5).to_string(), "-12.5000");
    }
}
