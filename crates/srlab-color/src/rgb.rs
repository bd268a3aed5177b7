// SPDX-License-Identifier: MIT
//
// RGB — additive color values, the sRGB transfer function, and encoders.
//
// An `Rgb` carries no flag saying whether it is gamma-encoded (display) or
// linear (physical light). Which one you hold is decided by the function
// that produced it. Mixing the two without converting is a caller error.
//
// Channels are never clamped internally, so out-of-gamut colors survive
// every math operation. Saturation happens only at the integer and hex
// encoders, where the target cannot represent anything else.

use std::fmt;

use crate::error::{ParseHexError, Result};
use crate::{fmt_fixed, quantize};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A red, green, blue and alpha quadruple.
///
/// # Examples
///
/// ```
/// use srlab_color::Rgb;
///
/// let green = Rgb::rgb(0.0, 1.0, 0.0);
/// assert_eq!(green.to_hex_web(), "00ff00");
///
/// let linear = Rgb::rgb(0.5, 0.5, 0.5).gamma_to_linear();
/// assert!((linear.r - 0.214).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel, conventionally 0.0 to 1.0.
    pub r: f64,
    /// Green channel, conventionally 0.0 to 1.0.
    pub g: f64,
    /// Blue channel, conventionally 0.0 to 1.0.
    pub b: f64,
    /// Opacity, conventionally 0.0 (clear) to 1.0 (opaque).
    pub alpha: f64,
}

/// Luminance weights of the sRGB primaries, applied to linear channels.
pub const LUMINANCE: [f64; 3] = [0.21264935, 0.71516913, 0.07218152];

// ACES filmic fit (Stephen Hill). Input and output matrices fold the sRGB
// to ACES AP1 conversion together with the RRT saturation adjustment.
const ACES_IN: [[f64; 3]; 3] = [
    [0.59719, 0.35458, 0.04823],
    [0.07600, 0.90834, 0.01566],
    [0.02840, 0.13383, 0.83777],
];

const ACES_OUT: [[f64; 3]; 3] = [
    [1.60475, -0.53108, -0.07367],
    [-0.10208, 1.10813, -0.00605],
    [-0.00327, -0.07276, 1.07602],
];

impl Rgb {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from all four channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create an opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const CLEAR_BLACK: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const CLEAR_WHITE: Self = Self::new(1.0, 1.0, 1.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Return a fully opaque copy.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    // ─── Transfer Functions ──────────────────────────────────────────────

    /// Remove the sRGB gamma curve from the color channels. Alpha passes
    /// through.
    #[must_use]
    pub fn gamma_to_linear(self) -> Self {
        Self {
            r: gamma_to_linear_channel(self.r),
            g: gamma_to_linear_channel(self.g),
            b: gamma_to_linear_channel(self.b),
            alpha: self.alpha,
        }
    }

    /// Apply the sRGB gamma curve to the color channels. Alpha passes
    /// through.
    #[must_use]
    pub fn linear_to_gamma(self) -> Self {
        Self {
            r: linear_to_gamma_channel(self.r),
            g: linear_to_gamma_channel(self.g),
            b: linear_to_gamma_channel(self.b),
            alpha: self.alpha,
        }
    }

    /// Compress a linear color into displayable range with the ACES filmic
    /// curve. The result is linear and clamped to [0, 1].
    #[must_use]
    pub fn tone_map_aces_linear(self) -> Self {
        let v = [self.r, self.g, self.b];
        let fwd = mul_mat3(&ACES_IN, v);
        let fit = [aces_fit(fwd[0]), aces_fit(fwd[1]), aces_fit(fwd[2])];
        let out = mul_mat3(&ACES_OUT, fit);
        Self {
            r: out[0].clamp(0.0, 1.0),
            g: out[1].clamp(0.0, 1.0),
            b: out[2].clamp(0.0, 1.0),
            alpha: self.alpha,
        }
    }

    /// [`tone_map_aces_linear`](Self::tone_map_aces_linear) for a gamma
    /// color: linearize, tone map, re-encode.
    #[must_use]
    pub fn tone_map_aces_gamma(self) -> Self {
        self.gamma_to_linear().tone_map_aces_linear().linear_to_gamma()
    }

    // ─── Grayscale ───────────────────────────────────────────────────────

    /// Relative luminance of a linear color.
    #[inline]
    #[must_use]
    pub fn luminance_linear(self) -> f64 {
        LUMINANCE[2].mul_add(self.b, LUMINANCE[0].mul_add(self.r, LUMINANCE[1] * self.g))
    }

    /// Relative luminance of a gamma color (linearized first).
    #[inline]
    #[must_use]
    pub fn luminance_gamma(self) -> f64 {
        self.gamma_to_linear().luminance_linear()
    }

    /// Convert a linear color to the linear gray of equal luminance.
    #[must_use]
    pub fn gray_linear(self) -> Self {
        let v = self.luminance_linear();
        Self::new(v, v, v, self.alpha)
    }

    /// Convert a gamma color to the gamma gray of equal luminance.
    #[must_use]
    pub fn gray_gamma(self) -> Self {
        let v = linear_to_gamma_channel(self.luminance_gamma());
        Self::new(v, v, v, self.alpha)
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Multiply the color channels by alpha.
    ///
    /// Alpha at or below zero yields clear black; alpha at or above one
    /// leaves the color unchanged.
    #[must_use]
    pub fn premul(self) -> Self {
        if self.alpha <= 0.0 {
            Self::CLEAR_BLACK
        } else if self.alpha >= 1.0 {
            self
        } else {
            Self::new(self.r * self.alpha, self.g * self.alpha, self.b * self.alpha, self.alpha)
        }
    }

    /// Divide the color channels by alpha, undoing [`premul`](Self::premul).
    #[must_use]
    pub fn unpremul(self) -> Self {
        if self.alpha <= 0.0 {
            Self::CLEAR_BLACK
        } else if self.alpha >= 1.0 {
            self
        } else {
            let inv = 1.0 / self.alpha;
            Self::new(self.r * inv, self.g * inv, self.b * inv, self.alpha)
        }
    }

    // ─── Gamut ───────────────────────────────────────────────────────────

    /// Whether r, g and b all lie within `[-tolerance, 1 + tolerance]`.
    /// Alpha is not checked.
    #[must_use]
    pub fn in_gamut(self, tolerance: f64) -> bool {
        let range = -tolerance..=1.0 + tolerance;
        range.contains(&self.r) && range.contains(&self.g) && range.contains(&self.b)
    }

    /// Clamp all four channels to [0, 1].
    #[must_use]
    pub const fn clamp_01(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Channel-wise comparison within `epsilon`, alpha included.
    #[must_use]
    pub fn approx_eq(self, other: &Self, epsilon: f64) -> bool {
        self.approx_eq_rgb(other, epsilon) && (self.alpha - other.alpha).abs() <= epsilon
    }

    /// Channel-wise comparison within `epsilon`, alpha ignored.
    #[must_use]
    pub fn approx_eq_rgb(self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
    }

    // ─── Encoders ────────────────────────────────────────────────────────

    /// Encode as bytes `[r, g, b, alpha]`, rounding half up and saturating.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            quantize(self.r, 255.0) as u8,
            quantize(self.g, 255.0) as u8,
            quantize(self.b, 255.0) as u8,
            quantize(self.alpha, 255.0) as u8,
        ]
    }

    /// Decode bytes `[r, g, b, alpha]`.
    #[must_use]
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Encode as 16-bit channels `[r, g, b, alpha]`.
    #[must_use]
    pub fn to_shorts(self) -> [u16; 4] {
        [
            quantize(self.r, 65535.0) as u16,
            quantize(self.g, 65535.0) as u16,
            quantize(self.b, 65535.0) as u16,
            quantize(self.alpha, 65535.0) as u16,
        ]
    }

    /// Decode 16-bit channels `[r, g, b, alpha]`.
    #[must_use]
    pub fn from_shorts([r, g, b, a]: [u16; 4]) -> Self {
        Self::new(
            f64::from(r) / 65535.0,
            f64::from(g) / 65535.0,
            f64::from(b) / 65535.0,
            f64::from(a) / 65535.0,
        )
    }

    /// Pack into a 32-bit `0xAARRGGBB` integer.
    #[must_use]
    pub fn to_u32_argb(self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Unpack a 32-bit `0xAARRGGBB` integer.
    #[must_use]
    pub fn from_u32_argb(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes();
        Self::from_bytes([r, g, b, a])
    }

    /// Pack into a 64-bit `0xAAAARRRRGGGGBBBB` integer.
    #[must_use]
    pub fn to_u64_argb(self) -> u64 {
        let [r, g, b, a] = self.to_shorts();
        (u64::from(a) << 48) | (u64::from(r) << 32) | (u64::from(g) << 16) | u64::from(b)
    }

    /// Unpack a 64-bit `0xAAAARRRRGGGGBBBB` integer.
    #[must_use]
    pub fn from_u64_argb(packed: u64) -> Self {
        let short = |shift: u32| ((packed >> shift) & 0xffff) as u16;
        Self::from_shorts([short(32), short(16), short(0), short(48)])
    }

    /// Six lowercase hex digits `rrggbb`, no prefix, alpha dropped.
    #[must_use]
    pub fn to_hex_web(self) -> String {
        let [r, g, b, _] = self.to_bytes();
        format!("{r:02x}{g:02x}{b:02x}")
    }

    /// Eight lowercase hex digits `aarrggbb`, no prefix.
    #[must_use]
    pub fn to_hex_argb(self) -> String {
        format!("{:08x}", self.to_u32_argb())
    }

    /// Parse a hex color string.
    ///
    /// Supports `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, with or without a
    /// leading `#`. Short forms repeat each digit.
    ///
    /// # Errors
    ///
    /// Returns [`ParseHexError`] for any other length or a non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let offset = usize::from(digits.len() < s.len());
        let len = digits.chars().count();
        if !matches!(len, 3 | 4 | 6 | 8) {
            return Err(ParseHexError::InvalidLength(len));
        }

        let nibbles = digits
            .chars()
            .enumerate()
            .map(|(i, c)| {
                parse_hex_digit(c)
                    .ok_or(ParseHexError::InvalidDigit { digit: c, index: i + offset })
            })
            .collect::<Result<Vec<u8>>>()?;

        let mut out = [0xff_u8; 4];
        if len < 6 {
            for (slot, &n) in out.iter_mut().zip(&nibbles) {
                *slot = (n << 4) | n;
            }
        } else {
            for (slot, pair) in out.iter_mut().zip(nibbles.chunks_exact(2)) {
                *slot = (pair[0] << 4) | pair[1];
            }
        }
        Ok(Self::from_bytes(out))
    }
}

impl Default for Rgb {
    /// Default is opaque white.
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\"r\":")?;
        fmt_fixed(f, self.r)?;
        f.write_str(",\"g\":")?;
        fmt_fixed(f, self.g)?;
        f.write_str(",\"b\":")?;
        fmt_fixed(f, self.b)?;
        f.write_str(",\"alpha\":")?;
        fmt_fixed(f, self.alpha)?;
        f.write_str("}")
    }
}

impl From<[f64; 4]> for Rgb {
    fn from([r, g, b, alpha]: [f64; 4]) -> Self {
        Self::new(r, g, b, alpha)
    }
}

impl From<Rgb> for [f64; 4] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b, c.alpha]
    }
}

// ─── Channel Functions ───────────────────────────────────────────────────────
//
// IEC 61966-2-1 piecewise transfer curve.

/// Convert a single linear channel to gamma (apply the sRGB curve).
#[inline]
#[must_use]
pub fn linear_to_gamma_channel(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single gamma channel to linear (remove the sRGB curve).
#[inline]
#[must_use]
pub fn gamma_to_linear_channel(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Row-major 3×3 matrix times column vector.
#[inline]
pub(crate) fn mul_mat3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][2].mul_add(v[2], m[0][0].mul_add(v[0], m[0][1] * v[1])),
        m[1][2].mul_add(v[2], m[1][0].mul_add(v[0], m[1][1] * v[1])),
        m[2][2].mul_add(v[2], m[2][0].mul_add(v[0], m[2][1] * v[1])),
    ]
}

/// RRT + ODT rational fit.
#[inline]
fn aces_fit(x: f64) -> f64 {
    let num = x.mul_add(x + 0.0245786, -0.000090537);
    let den = x.mul_add(0.983729f64.mul_add(x, 0.4329510), 0.238081);
    num / den
}

#[inline]
fn parse_hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Transfer ─────────────────────────────────────────────────────────

    #[test]
    fn transfer_endpoints() {
        assert_eq!(gamma_to_linear_channel(0.0), 0.0);
        assert!(approx_eq(gamma_to_linear_channel(1.0), 1.0, 1e-12));
        assert!(approx_eq(linear_to_gamma_channel(1.0), 1.0, 1e-12));
    }

    #[test]
    fn transfer_linear_segment() {
        assert!(approx_eq(gamma_to_linear_channel(0.04), 0.04 / 12.92, 1e-15));
        assert!(approx_eq(linear_to_gamma_channel(0.003), 0.003 * 12.92, 1e-15));
    }

    #[test]
    fn transfer_mid_gray() {
        assert!(approx_eq(gamma_to_linear_channel(0.5), 0.214_041, 1e-6));
    }

    #[test]
    fn transfer_roundtrip() {
        for i in 0..=20 {
            let v = f64::from(i) / 20.0;
            let back = linear_to_gamma_channel(gamma_to_linear_channel(v));
            assert!(approx_eq(v, back, 1e-9), "{v} -> {back}");
        }
    }

    #[test]
    fn transfer_keeps_alpha() {
        let c = Rgb::new(0.2, 0.4, 0.6, 0.3);
        assert_eq!(c.gamma_to_linear().alpha, 0.3);
        assert_eq!(c.linear_to_gamma().alpha, 0.3);
    }

    // ── Tone Mapping ─────────────────────────────────────────────────────

    #[test]
    fn tone_map_clamps_bright_input() {
        let hot = Rgb::rgb(8.0, 4.0, 12.0).tone_map_aces_linear();
        assert!(hot.in_gamut(0.0), "{hot}");
        assert!(hot.r > 0.5 && hot.b > 0.5);
    }

    #[test]
    fn tone_map_black_stays_dark() {
        let black = Rgb::BLACK.tone_map_aces_linear();
        assert!(black.r < 0.01 && black.g < 0.01 && black.b < 0.01, "{black}");
        assert_eq!(black.alpha, 1.0);
    }

    #[test]
    fn tone_map_gamma_is_monotonic_on_grays() {
        let mut prev = -1.0;
        for i in 0..=10 {
            let v = f64::from(i) / 10.0;
            let mapped = Rgb::rgb(v, v, v).tone_map_aces_gamma();
            assert!(mapped.g >= prev, "not monotonic at {v}");
            prev = mapped.g;
        }
    }

    // ── Grayscale ────────────────────────────────────────────────────────

    #[test]
    fn luminance_of_primaries() {
        assert!(approx_eq(Rgb::RED.luminance_linear(), 0.21264935, 1e-12));
        assert!(approx_eq(Rgb::GREEN.luminance_linear(), 0.71516913, 1e-12));
        assert!(approx_eq(Rgb::BLUE.luminance_linear(), 0.07218152, 1e-12));
        assert!(approx_eq(Rgb::WHITE.luminance_linear(), 1.0, 1e-6));
    }

    #[test]
    fn gray_gamma_of_white_is_white() {
        let g = Rgb::WHITE.gray_gamma();
        assert!(g.approx_eq(&Rgb::WHITE, 1e-6), "{g}");
    }

    #[test]
    fn gray_linear_is_achromatic() {
        let g = Rgb::new(0.9, 0.1, 0.4, 0.5).gray_linear();
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
        assert_eq!(g.alpha, 0.5);
    }

    // ── Alpha ────────────────────────────────────────────────────────────

    #[test]
    fn premul_branches() {
        assert_eq!(Rgb::new(1.0, 0.5, 0.2, 0.0).premul(), Rgb::CLEAR_BLACK);
        assert_eq!(Rgb::new(1.0, 0.5, 0.2, -1.0).premul(), Rgb::CLEAR_BLACK);
        let opaque = Rgb::rgb(1.0, 0.5, 0.2);
        assert_eq!(opaque.premul(), opaque);
        assert_eq!(Rgb::new(1.0, 0.5, 0.2, 0.5).premul(), Rgb::new(0.5, 0.25, 0.1, 0.5));
    }

    #[test]
    fn unpremul_inverts_premul() {
        let c = Rgb::new(0.8, 0.4, 0.2, 0.25);
        assert!(c.premul().unpremul().approx_eq(&c, 1e-12));
        assert_eq!(Rgb::new(0.3, 0.3, 0.3, 0.0).unpremul(), Rgb::CLEAR_BLACK);
    }

    // ── Encoders ─────────────────────────────────────────────────────────

    #[test]
    fn hex_web_pure_green() {
        assert_eq!(Rgb::new(0.0, 1.0, 0.0, 1.0).to_hex_web(), "00ff00");
    }

    #[test]
    fn hex_web_saturates() {
        assert_eq!(Rgb::rgb(1.5, -0.2, 0.5).to_hex_web(), "ff0080");
    }

    #[test]
    fn hex_argb_puts_alpha_first() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0, 0.0).to_hex_argb(), "00ff0000");
        assert_eq!(Rgb::BLUE.to_hex_argb(), "ff0000ff");
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = [12, 200, 99, 255];
        assert_eq!(Rgb::from_bytes(bytes).to_bytes(), bytes);
    }

    #[test]
    fn shorts_roundtrip() {
        let shorts = [0, 65535, 1234, 40000];
        assert_eq!(Rgb::from_shorts(shorts).to_shorts(), shorts);
    }

    #[test]
    fn u32_packing() {
        assert_eq!(Rgb::RED.to_u32_argb(), 0xffff_0000);
        assert_eq!(Rgb::from_u32_argb(0x80_00ff00).to_bytes(), [0, 255, 0, 128]);
    }

    #[test]
    fn u64_packing() {
        assert_eq!(Rgb::GREEN.to_u64_argb(), 0xffff_0000_ffff_0000);
        let c = Rgb::from_u64_argb(0x8000_1111_2222_3333);
        assert_eq!(c.to_shorts(), [0x1111, 0x2222, 0x3333, 0x8000]);
    }

    #[test]
    fn parse_long_and_short_forms() {
        assert_eq!(Rgb::from_hex("#00ff00").unwrap(), Rgb::GREEN);
        assert_eq!(Rgb::from_hex("f00").unwrap(), Rgb::RED);
        assert_eq!(Rgb::from_hex("#0000ff00").unwrap().to_bytes(), [0, 0, 255, 0]);
        assert_eq!(Rgb::from_hex("FFF8").unwrap().to_bytes(), [255, 255, 255, 0x88]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Rgb::from_hex("#12345"), Err(ParseHexError::InvalidLength(5)));
        assert_eq!(Rgb::from_hex(""), Err(ParseHexError::InvalidLength(0)));
        assert_eq!(
            Rgb::from_hex("#12g456"),
            Err(ParseHexError::InvalidDigit { digit: 'g', index: 3 })
        );
    }

    #[test]
    fn parse_errors_count_chars_not_bytes() {
        assert_eq!(
            Rgb::from_hex("#\u{e9}00"),
            Err(ParseHexError::InvalidDigit { digit: '\u{e9}', index: 1 })
        );
        assert_eq!(
            Rgb::from_hex("12\u{2192}4"),
            Err(ParseHexError::InvalidDigit { digit: '\u{2192}', index: 2 })
        );
        // Two chars, eight bytes.
        assert_eq!(Rgb::from_hex("\u{1f3a8}\u{1f3a8}"), Err(ParseHexError::InvalidLength(2)));
    }

    #[test]
    fn hex_roundtrip() {
        let c = Rgb::from_hex("3a7bd5").unwrap();
        assert_eq!(c.to_hex_web(), "3a7bd5");
    }

    // ── Misc ─────────────────────────────────────────────────────────────

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Rgb::default(), Rgb::WHITE);
    }

    #[test]
    fn gamut_check_ignores_alpha() {
        assert!(Rgb::new(0.0, 1.0, 0.5, 3.0).in_gamut(0.0));
        assert!(!Rgb::rgb(1.01, 0.0, 0.0).in_gamut(0.0));
        assert!(Rgb::rgb(1.01, 0.0, 0.0).in_gamut(0.02));
    }

    #[test]
    fn display_is_json_shaped() {
        assert_eq!(
            Rgb::RED.to_string(),
            "{\"r\":1.0000,\"g\":0.0000,\"b\":0.0000,\"alpha\":1.0000}"
        );
    }

    #[test]
    fn array_boundary() {
        let c: Rgb = [0.1, 0.2, 0.3, 0.4].into();
        let back: [f64; 4] = c.into();
        assert_eq!(back, [0.1, 0.2, 0.3, 0.4]);
    }
}
