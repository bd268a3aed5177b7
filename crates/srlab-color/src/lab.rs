// SPDX-License-Identifier: MIT
//
// LAB — rectangular SR LAB 2 coordinates.
//
// `l` is lightness, conceptually 0 (black) to 100 (white). `a` runs
// green (negative) to magenta (positive) and `b` blue (negative) to yellow
// (positive); both are unbounded, with the sRGB gamut inside roughly
// [-111, 111]. Chroma and hue are derived on demand, never stored.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::{GRAY_EPSILON, fmt_fixed, quantize, wrap_hue};

/// A color in SR LAB 2 space with alpha.
///
/// # Examples
///
/// ```
/// use srlab_color::{Lab, Harmony};
///
/// let orange = Lab::lab(70.0, 30.0, 60.0);
/// assert!(orange.chroma() > 60.0);
///
/// let triad = orange.harmony(Harmony::Triadic);
/// assert_eq!(triad.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white).
    pub l: f64,
    /// Green–magenta axis.
    pub a: f64,
    /// Blue–yellow axis.
    pub b: f64,
    /// Opacity, conventionally 0.0 to 1.0.
    pub alpha: f64,
}

impl Lab {
    // ─── Constructors ────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { l, a, b, alpha }
    }

    /// Create an opaque color.
    #[inline]
    #[must_use]
    pub const fn lab(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b, alpha: 1.0 }
    }

    pub const BLACK: Self = Self::lab(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::lab(100.0, 0.0, 0.0);
    pub const CLEAR_BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const CLEAR_WHITE: Self = Self::new(100.0, 0.0, 0.0, 0.0);

    /// The sRGB red primary.
    pub const SR_RED: Self = Self::lab(53.22597394850298, 78.20428687492416, 67.7006179200894);
    /// The sRGB green primary.
    pub const SR_GREEN: Self = Self::lab(87.51518690606284, -82.95596898925629, 83.03677966784846);
    /// The sRGB blue primary.
    pub const SR_BLUE: Self =
        Self::lab(30.643949914852268, -12.025804834164333, -110.80780195452375);

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

    // ─── Derived Quantities ──────────────────────────────────────────────

    /// Squared chroma, `a² + b²`.
    #[inline]
    #[must_use]
    pub fn chroma_sq(self) -> f64 {
        self.a.mul_add(self.a, self.b * self.b)
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    #[must_use]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue as a turn in [0, 1). Gray colors report 0.
    #[must_use]
    pub fn hue(self) -> f64 {
        if self.is_gray() {
            0.0
        } else {
            wrap_hue(self.b.atan2(self.a) / std::f64::consts::TAU)
        }
    }

    /// Whether chroma is too small for hue to mean anything.
    #[inline]
    #[must_use]
    pub fn is_gray(self) -> bool {
        self.chroma_sq() < GRAY_EPSILON
    }

    /// Drop chroma, keeping lightness and alpha.
    #[inline]
    #[must_use]
    pub const fn gray(self) -> Self {
        Self { a: 0.0, b: 0.0, ..self }
    }

    // ─── Adjustments ─────────────────────────────────────────────────────

    /// Add offsets to every component. Nothing is clamped.
    #[must_use]
    pub fn adjust(self, dl: f64, da: f64, db: f64, dalpha: f64) -> Self {
        Self::new(self.l + dl, self.a + da, self.b + db, self.alpha + dalpha)
    }

    /// Rotate the (a, b) point around the neutral axis by `turns`.
    #[must_use]
    pub fn rotate_hue(self, turns: f64) -> Self {
        let (sin, cos) = (turns * std::f64::consts::TAU).sin_cos();
        Self {
            a: self.a.mul_add(cos, -(self.b * sin)),
            b: self.a.mul_add(sin, self.b * cos),
            ..self
        }
    }

    /// Multiply chroma by `factor`, keeping hue.
    #[must_use]
    pub fn scale_chroma(self, factor: f64) -> Self {
        Self { a: self.a * factor, b: self.b * factor, ..self }
    }

    /// Flip the (a, b) point through the neutral axis, a half-turn rotation.
    #[must_use]
    pub fn negate_ab(self) -> Self {
        Self { a: -self.a, b: -self.b, ..self }
    }

    /// Euclidean distance in (l, a, b). Alpha is ignored.
    #[must_use]
    pub fn dist(self, other: &Self) -> f64 {
        self.dist_sq(other).sqrt()
    }

    /// Squared Euclidean distance in (l, a, b).
    #[must_use]
    pub fn dist_sq(self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da))
    }

    /// Component-wise comparison within `epsilon`, alpha included.
    #[must_use]
    pub fn approx_eq(self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() <= epsilon
            && (self.a - other.a).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.alpha - other.alpha).abs() <= epsilon
    }

    // ─── Encoders ────────────────────────────────────────────────────────
    //
    // l and alpha are unit-scaled (l / 100). a and b are stored offset by
    // half the integer range, at one unit per byte step or 1/256 unit per
    // short step, so 0 maps to the exact middle code.

    /// Encode as bytes `[l, a, b, alpha]`.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            quantize(self.l * 0.01, 255.0) as u8,
            (self.a + 128.5).clamp(0.0, 255.0) as u8,
            (self.b + 128.5).clamp(0.0, 255.0) as u8,
            quantize(self.alpha, 255.0) as u8,
        ]
    }

    /// Decode bytes `[l, a, b, alpha]`.
    #[must_use]
    pub fn from_bytes([l, a, b, alpha]: [u8; 4]) -> Self {
        Self::new(
            f64::from(l) * 100.0 / 255.0,
            f64::from(a) - 128.0,
            f64::from(b) - 128.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Encode as 16-bit values `[l, a, b, alpha]`.
    #[must_use]
    pub fn to_shorts(self) -> [u16; 4] {
        [
            quantize(self.l * 0.01, 65535.0) as u16,
            (self.a + 128.0).mul_add(256.0, 0.5).clamp(0.0, 65535.0) as u16,
            (self.b + 128.0).mul_add(256.0, 0.5).clamp(0.0, 65535.0) as u16,
            quantize(self.alpha, 65535.0) as u16,
        ]
    }

    /// Decode 16-bit values `[l, a, b, alpha]`.
    #[must_use]
    pub fn from_shorts([l, a, b, alpha]: [u16; 4]) -> Self {
        Self::new(
            f64::from(l) * 100.0 / 65535.0,
            f64::from(a) / 256.0 - 128.0,
            f64::from(b) / 256.0 - 128.0,
            f64::from(alpha) / 65535.0,
        )
    }

    /// Pack into 32 bits, `alpha, l, a, b` from most significant byte down.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        let [l, a, b, alpha] = self.to_bytes();
        u32::from_be_bytes([alpha, l, a, b])
    }

    /// Unpack from [`to_u32`](Self::to_u32) layout.
    #[must_use]
    pub fn from_u32(packed: u32) -> Self {
        let [alpha, l, a, b] = packed.to_be_bytes();
        Self::from_bytes([l, a, b, alpha])
    }

    /// Pack into 64 bits, `alpha, l, a, b` from most significant short down.
    #[must_use]
    pub fn to_u64(self) -> u64 {
        let [l, a, b, alpha] = self.to_shorts();
        (u64::from(alpha) << 48) | (u64::from(l) << 32) | (u64::from(a) << 16) | u64::from(b)
    }

    /// Unpack from [`to_u64`](Self::to_u64) layout.
    #[must_use]
    pub fn from_u64(packed: u64) -> Self {
        let short = |shift: u32| ((packed >> shift) & 0xffff) as u16;
        Self::from_shorts([short(32), short(16), short(0), short(48)])
    }
}

impl Default for Lab {
    /// Default is opaque white.
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\"l\":")?;
        fmt_fixed(f, self.l)?;
        f.write_str(",\"a\":")?;
        fmt_fixed(f, self.a)?;
        f.write_str(",\"b\":")?;
        fmt_fixed(f, self.b)?;
        f.write_str(",\"alpha\":")?;
        fmt_fixed(f, self.alpha)?;
        f.write_str("}")
    }
}

// Component-wise arithmetic over all four channels. The Bezier and
// Catmull-Rom code treats colors as points in a 4D affine space.

impl Add for Lab {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.l + rhs.l, self.a + rhs.a, self.b + rhs.b, self.alpha + rhs.alpha)
    }
}

impl Sub for Lab {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.l - rhs.l, self.a - rhs.a, self.b - rhs.b, self.alpha - rhs.alpha)
    }
}

impl Mul<f64> for Lab {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.l * s, self.a * s, self.b * s, self.alpha * s)
    }
}

impl Neg for Lab {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.l, -self.a, -self.b, -self.alpha)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
