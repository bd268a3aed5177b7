// SPDX-License-Identifier: MIT
//
// LCH — the polar form of SR LAB 2.
//
// Hue is a turn in [0, 1), not degrees or radians. Degree and radian
// accessors are provided for display code, but nothing stores them.

use std::f64::consts::TAU;
use std::fmt;

use crate::{GRAY_EPSILON, fmt_fixed, quantize, wrap_hue};

/// Upper bound of the chroma encoding range. The sRGB gamut peaks near 117.
pub const CHROMA_ENCODE_MAX: f64 = 135.0;

/// A color in SR LCH space with alpha.
///
/// # Examples
///
/// ```
/// use srlab_color::Lch;
///
/// let teal = Lch::from_degrees(60.0, 40.0, 200.0, 1.0);
/// let comp = teal.complement();
/// assert!((comp.hue_degrees() - 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lch {
    /// Lightness: 0.0 (black) to 100.0 (white).
    pub l: f64,
    /// Chroma: 0.0 (gray) upward, about 0–135 in practice.
    pub c: f64,
    /// Hue as a fraction of a full turn, in [0, 1).
    pub h: f64,
    /// Opacity, conventionally 0.0 to 1.0.
    pub alpha: f64,
}

impl Lch {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color. Chroma is clamped to ≥ 0 and hue wrapped into [0, 1).
    #[inline]
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self { l, c: c.max(0.0), h: wrap_hue(h), alpha }
    }

    /// Create an opaque color.
    #[inline]
    #[must_use]
    pub fn lch(l: f64, c: f64, h: f64) -> Self {
        Self::new(l, c, h, 1.0)
    }

    /// Create a color with the hue given in degrees.
    #[must_use]
    pub fn from_degrees(l: f64, c: f64, degrees: f64, alpha: f64) -> Self {
        Self::new(l, c, degrees / 360.0, alpha)
    }

    /// Create a color with the hue given in radians.
    #[must_use]
    pub fn from_radians(l: f64, c: f64, radians: f64, alpha: f64) -> Self {
        Self::new(l, c, radians / TAU, alpha)
    }

    pub const BLACK: Self = Self { l: 0.0, c: 0.0, h: 0.0, alpha: 1.0 };
    pub const WHITE: Self = Self { l: 100.0, c: 0.0, h: 0.0, alpha: 1.0 };
    pub const CLEAR_BLACK: Self = Self { l: 0.0, c: 0.0, h: 0.0, alpha: 0.0 };
    pub const CLEAR_WHITE: Self = Self { l: 100.0, c: 0.0, h: 0.0, alpha: 0.0 };

    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    // ─── Hue Views ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }

    #[inline]
    #[must_use]
    pub fn hue_radians(self) -> f64 {
        self.h * TAU
    }

    // ─── Chroma ──────────────────────────────────────────────────────────

    /// Whether chroma is too small for hue to mean anything.
    #[inline]
    #[must_use]
    pub fn is_gray(self) -> bool {
        self.c * self.c < GRAY_EPSILON
    }

    /// Drop chroma and hue, keeping lightness and alpha.
    #[inline]
    #[must_use]
    pub const fn gray(self) -> Self {
        Self { c: 0.0, h: 0.0, ..self }
    }

    // ─── Adjustments ─────────────────────────────────────────────────────

    /// Add offsets to every component. Chroma stays ≥ 0, hue wraps.
    #[must_use]
    pub fn adjust(self, dl: f64, dc: f64, dh: f64, dalpha: f64) -> Self {
        Self::new(self.l + dl, self.c + dc, self.h + dh, self.alpha + dalpha)
    }

    /// Rotate hue by `turns`. Gray colors keep hue 0.
    #[must_use]
    pub fn rotate_hue(self, turns: f64) -> Self {
        if self.is_gray() {
            return self.gray();
        }
        Self { h: wrap_hue(self.h + turns), ..self }
    }

    /// Rotate hue by half a turn.
    #[must_use]
    pub fn complement(self) -> Self {
        self.rotate_hue(0.5)
    }

    /// Component-wise comparison within `epsilon`.
    ///
    /// Hue is compared on the wheel, so 0.9999 and 0.0001 are close. Hue is
    /// ignored when both colors are gray.
    #[must_use]
    pub fn approx_eq(self, other: &Self, epsilon: f64) -> bool {
        let hue_ok = (self.is_gray() && other.is_gray()) || {
            let d = (self.h - other.h).abs();
            d.min(1.0 - d) <= epsilon
        };
        (self.l - other.l).abs() <= epsilon
            && (self.c - other.c).abs() <= epsilon
            && (self.alpha - other.alpha).abs() <= epsilon
            && hue_ok
    }

    // ─── Encoders ────────────────────────────────────────────────────────
    //
    // l in [0, 100], c in [0, CHROMA_ENCODE_MAX] and alpha in [0, 1] are
    // unit-scaled and saturate. Hue is periodic, so it scales by the full
    // code count and wraps instead of saturating.

    /// Encode as bytes `[l, c, h, alpha]`.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            quantize(self.l * 0.01, 255.0) as u8,
            quantize(self.c / CHROMA_ENCODE_MAX, 255.0) as u8,
            (wrap_hue(self.h).mul_add(256.0, 0.5) as u32 % 256) as u8,
            quantize(self.alpha, 255.0) as u8,
        ]
    }

    /// Decode bytes `[l, c, h, alpha]`.
    #[must_use]
    pub fn from_bytes([l, c, h, alpha]: [u8; 4]) -> Self {
        Self::new(
            f64::from(l) * 100.0 / 255.0,
            f64::from(c) * CHROMA_ENCODE_MAX / 255.0,
            f64::from(h) / 256.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Encode as 16-bit values `[l, c, h, alpha]`.
    #[must_use]
    pub fn to_shorts(self) -> [u16; 4] {
        [
            quantize(self.l * 0.01, 65535.0) as u16,
            quantize(self.c / CHROMA_ENCODE_MAX, 65535.0) as u16,
            (wrap_hue(self.h).mul_add(65536.0, 0.5) as u32 % 65536) as u16,
            quantize(self.alpha, 65535.0) as u16,
        ]
    }

    /// Decode 16-bit values `[l, c, h, alpha]`.
    #[must_use]
    pub fn from_shorts([l, c, h, alpha]: [u16; 4]) -> Self {
        Self::new(
            f64::from(l) * 100.0 / 65535.0,
            f64::from(c) * CHROMA_ENCODE_MAX / 65535.0,
            f64::from(h) / 65536.0,
            f64::from(alpha) / 65535.0,
        )
    }
}

impl Default for Lch {
    /// Default is opaque white.
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\"l\":")?;
        fmt_fixed(f, self.l)?;
        f.write_str(",\"c\":")?;
        fmt_fixed(f, self.c)?;
        f.write_str(",\"h\":")?;
        fmt_fixed(f, self.h)?;
        f.write_str(",\"alpha\":")?;
        fmt_fixed(f, self.alpha)?;
        f.write_str("}")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn constructor_normalizes() {
        let c = Lch::new(50.0, -3.0, -0.25, 1.0);
        assert_eq!(c.c, 0.0);
        assert_eq!(c.h, 0.75);
        assert_eq!(Lch::lch(50.0, 10.0, 1.0).h, 0.0);
    }

    #[test]
    fn degree_and_radian_views() {
        let c = Lch::from_degrees(50.0, 20.0, 90.0, 1.0);
        assert_eq!(c.h, 0.25);
        assert!(approx_eq(c.hue_radians(), std::f64::consts::FRAC_PI_2, 1e-12));
        let r = Lch::from_radians(50.0, 20.0, -std::f64::consts::FRAC_PI_2, 1.0);
        assert!(approx_eq(r.hue_degrees(), 270.0, 1e-9));
    }

    #[test]
    fn adjust_wraps_and_clamps() {
        let c = Lch::lch(50.0, 5.0, 0.9).adjust(10.0, -8.0, 0.2, 0.0);
        assert_eq!(c.l, 60.0);
        assert_eq!(c.c, 0.0);
        assert!(approx_eq(c.h, 0.1, 1e-12));
    }

    #[test]
    fn rotate_gray_is_noop() {
        let g = Lch { l: 40.0, c: 0.0, h: 0.3, alpha: 1.0 };
        assert_eq!(g.rotate_hue(0.25), Lch::lch(40.0, 0.0, 0.0));
    }

    #[test]
    fn complement_half_turn() {
        let c = Lch::lch(50.0, 30.0, 0.8).complement();
        assert!(approx_eq(c.h, 0.3, 1e-12));
    }

    #[test]
    fn approx_eq_across_seam() {
        let a = Lch::lch(50.0, 30.0, 0.9999);
        let b = Lch::lch(50.0, 30.0, 0.0001);
        assert!(a.approx_eq(&b, 1e-3));
        assert!(!a.approx_eq(&Lch::lch(50.0, 30.0, 0.5), 1e-3));
    }

    #[test]
    fn bytes_roundtrip_is_close() {
        let c = Lch::new(64.0, 80.0, 0.6, 0.5);
        let back = Lch::from_bytes(c.to_bytes());
        assert!(approx_eq(back.l, c.l, 0.2));
        assert!(approx_eq(back.c, c.c, 0.3));
        assert!(approx_eq(back.h, c.h, 1.0 / 256.0));
    }

    #[test]
    fn hue_code_wraps() {
        // 0.999 rounds to code 256, which is hue 0 again.
        let c = Lch::lch(50.0, 20.0, 0.999);
        assert_eq!(c.to_bytes()[2], 0);
    }

    #[test]
    fn shorts_roundtrip_is_close() {
        let c = Lch::new(12.5, 101.0, 0.123, 1.0);
        let back = Lch::from_shorts(c.to_shorts());
        assert!(back.approx_eq(&c, 0.003), "{back}");
    }

    #[test]
    fn display_is_json_shaped() {
        assert_eq!(
            Lch::lch(50.0, 10.0, 0.25).to_string(),
            "{\"l\":50.0000,\"c\":10.0000,\"h\":0.2500,\"alpha\":1.0000}"
        );
    }
}
