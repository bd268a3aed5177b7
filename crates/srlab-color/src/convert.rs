// SPDX-License-Identifier: MIT
//
// Color-space conversion engine — RGB ↔ SR LAB 2 ↔ LCH.
//
// SR LAB 2 (Jan Behrens) is built like CIELAB but with matrices refit so
// that hue lines stay straight. The forward path is:
//
//   linear sRGB ─M1→ XYZ ─compress→ XYZ' ─M2→ LAB
//
// where `compress` is linear below 216/24389 and `1.16·∛x − 0.16` above.
// The inverse path runs each stage backwards. Its cube branch switches at
// 0.08, which is where the compressed curve crosses 216/24389.
//
// The matrix constants are the published six-figure values. Changing any
// digit changes which color a given LAB triple names, so they stay
// verbatim. The forward and inverse matrices are not exact inverses of
// each other at that precision: a gamut round trip drifts by up to about
// 1e-3 per channel, which is a property of the transform family.
//
// Every function here is total over finite input. Out-of-range values
// simply produce out-of-gamut results.

use std::f64::consts::TAU;

use crate::lab::Lab;
use crate::lch::Lch;
use crate::rgb::{Rgb, mul_mat3};
use crate::{GRAY_EPSILON, wrap_hue};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Linear sRGB → XYZ, SR LAB 2 variant.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.32053, 0.63692, 0.04256],
    [0.161987, 0.756636, 0.081376],
    [0.017228, 0.10866, 0.874112],
];

/// Compressed XYZ' → LAB.
const XYZ_TO_LAB: [[f64; 3]; 3] = [
    [37.0950, 62.9054, -0.0008],
    [663.4684, -750.5078, 87.0328],
    [63.9569, 108.4576, -172.4152],
];

/// LAB → compressed XYZ'.
const LAB_TO_XYZ: [[f64; 3]; 3] = [
    [0.01, 0.000904127, 0.000456344],
    [0.01, -0.000533159, -0.000269178],
    [0.01, 0.0, -0.0058],
];

/// XYZ → linear sRGB.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [5.435679, -4.599131, 0.163593],
    [-1.168090, 2.327977, -0.159798],
    [0.037840, -0.198564, 1.160644],
];

/// Below this XYZ value compression is linear (CIE ε = 216/24389).
const COMPRESS_THRESHOLD: f64 = 216.0 / 24389.0;

/// Slope of the linear compression segment (CIE κ / 100 = 24389/2700).
const COMPRESS_SLOPE: f64 = 24389.0 / 2700.0;

/// Below this XYZ' value decompression is linear.
const DECOMPRESS_THRESHOLD: f64 = 0.08;

// ─── Stages ──────────────────────────────────────────────────────────────────

#[inline]
fn compress(x: f64) -> f64 {
    if x <= COMPRESS_THRESHOLD {
        x * COMPRESS_SLOPE
    } else {
        1.16f64.mul_add(x.cbrt(), -0.16)
    }
}

#[inline]
fn decompress(x: f64) -> f64 {
    if x <= DECOMPRESS_THRESHOLD {
        x / COMPRESS_SLOPE
    } else {
        let v = (x + 0.16) / 1.16;
        v * v * v
    }
}

/// Linear sRGB → XYZ (SR LAB 2 variant coefficients). Alpha is dropped.
#[inline]
#[must_use]
pub fn linear_rgb_to_xyz(c: Rgb) -> [f64; 3] {
    mul_mat3(&RGB_TO_XYZ, [c.r, c.g, c.b])
}

/// XYZ → linear sRGB with the given alpha.
#[inline]
#[must_use]
pub fn xyz_to_linear_rgb([x, y, z]: [f64; 3], alpha: f64) -> Rgb {
    let [r, g, b] = mul_mat3(&XYZ_TO_RGB, [x, y, z]);
    Rgb::new(r, g, b, alpha)
}

/// XYZ → SR LAB 2 with the given alpha.
#[inline]
#[must_use]
pub fn xyz_to_sr_lab2([x, y, z]: [f64; 3], alpha: f64) -> Lab {
    let [l, a, b] = mul_mat3(&XYZ_TO_LAB, [compress(x), compress(y), compress(z)]);
    Lab::new(l, a, b, alpha)
}

/// SR LAB 2 → XYZ. Alpha is dropped.
#[inline]
#[must_use]
pub fn sr_lab2_to_xyz(c: Lab) -> [f64; 3] {
    let [x, y, z] = mul_mat3(&LAB_TO_XYZ, [c.l, c.a, c.b]);
    [decompress(x), decompress(y), decompress(z)]
}

// ─── RGB ↔ LAB ───────────────────────────────────────────────────────────────

/// Linear sRGB → SR LAB 2.
#[must_use]
pub fn linear_rgb_to_sr_lab2(c: Rgb) -> Lab {
    xyz_to_sr_lab2(linear_rgb_to_xyz(c), c.alpha)
}

/// Gamma sRGB → SR LAB 2.
#[must_use]
pub fn gamma_rgb_to_sr_lab2(c: Rgb) -> Lab {
    linear_rgb_to_sr_lab2(c.gamma_to_linear())
}

/// SR LAB 2 → linear sRGB (may be out of gamut).
#[must_use]
pub fn sr_lab2_to_linear_rgb(c: Lab) -> Rgb {
    xyz_to_linear_rgb(sr_lab2_to_xyz(c), c.alpha)
}

/// SR LAB 2 → gamma sRGB (may be out of gamut).
#[must_use]
pub fn sr_lab2_to_gamma_rgb(c: Lab) -> Rgb {
    sr_lab2_to_linear_rgb(c).linear_to_gamma()
}

// ─── LAB ↔ LCH ───────────────────────────────────────────────────────────────

/// Rectangular → polar.
///
/// Chroma is `√(a² + b²)`, hue is `atan2(b, a)` as a turn in [0, 1).
/// A gray color (chroma² below [`GRAY_EPSILON`]) collapses to chroma 0
/// and hue 0.
#[must_use]
pub fn lab_to_lch(c: Lab) -> Lch {
    let csq = c.chroma_sq();
    if csq < GRAY_EPSILON {
        return Lch::new(c.l, 0.0, 0.0, c.alpha);
    }
    Lch::new(c.l, csq.sqrt(), wrap_hue(c.b.atan2(c.a) / TAU), c.alpha)
}

/// Polar → rectangular. Negative chroma is treated as 0.
#[must_use]
pub fn lch_to_lab(c: Lch) -> Lab {
    let chroma = c.c.max(0.0);
    let (sin, cos) = (c.h * TAU).sin_cos();
    Lab::new(c.l, chroma * cos, chroma * sin, c.alpha)
}

// ─── RGB ↔ LCH ───────────────────────────────────────────────────────────────

/// Gamma sRGB → SR LCH.
#[must_use]
pub fn gamma_rgb_to_sr_lch(c: Rgb) -> Lch {
    lab_to_lch(gamma_rgb_to_sr_lab2(c))
}

/// Linear sRGB → SR LCH.
#[must_use]
pub fn linear_rgb_to_sr_lch(c: Rgb) -> Lch {
    lab_to_lch(linear_rgb_to_sr_lab2(c))
}

/// SR LCH → gamma sRGB.
#[must_use]
pub fn sr_lch_to_gamma_rgb(c: Lch) -> Rgb {
    sr_lab2_to_gamma_rgb(lch_to_lab(c))
}

/// SR LCH → linear sRGB.
#[must_use]
pub fn sr_lch_to_linear_rgb(c: Lch) -> Rgb {
    sr_lab2_to_linear_rgb(lch_to_lab(c))
}

impl From<Lab> for Lch {
    fn from(c: Lab) -> Self {
        lab_to_lch(c)
    }
}

impl From<Lch> for Lab {
    fn from(c: Lch) -> Self {
        lch_to_lab(c)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
