// SPDX-License-Identifier: MIT
//
// Mixing engine — interpolation between two colors of the same model.
//
// Rectangular models (RGB, LAB) mix component-wise. Polar mixing (LCH,
// and LAB viewed as polar) has to decide what to do with hue when one or
// both ends are gray, because a gray color's stored hue is meaningless.
//
// Every function returns `o` exactly for `t <= 0` and `d` exactly for
// `t >= 1`.

use crate::GRAY_EPSILON;
use crate::angle::{Direction, mix_angle};
use crate::convert::{lab_to_lch, lch_to_lab};
use crate::lab::Lab;
use crate::lch::Lch;
use crate::rgb::Rgb;

#[inline]
fn lerp(o: f64, d: f64, t: f64) -> f64 {
    (1.0 - t).mul_add(o, t * d)
}

/// Exact endpoint short-circuit shared by every mixer.
#[inline]
fn endpoint<T: Copy>(o: &T, d: &T, t: f64) -> Option<T> {
    if t <= 0.0 {
        Some(*o)
    } else if t >= 1.0 {
        Some(*d)
    } else {
        None
    }
}

// ─── Rectangular ─────────────────────────────────────────────────────────────

/// Component-wise mix of two linear colors, alpha included.
#[must_use]
pub fn mix_linear_rgb(o: &Rgb, d: &Rgb, t: f64) -> Rgb {
    if let Some(c) = endpoint(o, d, t) {
        return c;
    }
    Rgb::new(lerp(o.r, d.r, t), lerp(o.g, d.g, t), lerp(o.b, d.b, t), lerp(o.alpha, d.alpha, t))
}

/// Mix two gamma colors through linear space.
///
/// Mixing gamma-encoded values directly darkens the midpoint, so both ends
/// are linearized, mixed, and re-encoded.
#[must_use]
pub fn mix_gamma_rgb(o: &Rgb, d: &Rgb, t: f64) -> Rgb {
    if let Some(c) = endpoint(o, d, t) {
        return c;
    }
    mix_linear_rgb(&o.gamma_to_linear(), &d.gamma_to_linear(), t).linear_to_gamma()
}

/// Component-wise mix of two LAB colors, alpha included.
#[must_use]
pub fn mix_lab(o: &Lab, d: &Lab, t: f64) -> Lab {
    if let Some(c) = endpoint(o, d, t) {
        return c;
    }
    Lab::new(lerp(o.l, d.l, t), lerp(o.a, d.a, t), lerp(o.b, d.b, t), lerp(o.alpha, d.alpha, t))
}

// ─── Polar ───────────────────────────────────────────────────────────────────

/// Mix two LCH colors, hue along the shortest arc.
///
/// - both gray: the result is gray.
/// - one gray: the gray end contributes nothing to the (a, b) plane; the
///   other end's (a, b) is scaled by its weight and converted back, so hue
///   stays fixed while chroma ramps from zero.
/// - neither gray: chroma mixes linearly, hue by the angular utility.
#[must_use]
pub fn mix_lch(o: &Lch, d: &Lch, t: f64) -> Lch {
    mix_lch_dir(o, d, t, Direction::Near)
}

/// [`mix_lch`] with a caller-chosen hue direction.
#[must_use]
pub fn mix_lch_dir(o: &Lch, d: &Lch, t: f64, direction: Direction) -> Lch {
    if let Some(c) = endpoint(o, d, t) {
        return c;
    }
    let u = 1.0 - t;
    let l = lerp(o.l, d.l, t);
    let alpha = lerp(o.alpha, d.alpha, t);

    match (o.is_gray(), d.is_gray()) {
        (true, true) => Lch::new(l, 0.0, 0.0, alpha),
        (true, false) => {
            let ab = lch_to_lab(*d);
            lab_to_lch(Lab::new(l, ab.a * t, ab.b * t, alpha))
        }
        (false, true) => {
            let ab = lch_to_lab(*o);
            lab_to_lch(Lab::new(l, ab.a * u, ab.b * u, alpha))
        }
        (false, false) => Lch::new(
            l,
            lerp(o.c, d.c, t),
            mix_angle(direction, o.h, d.h, t, 1.0),
            alpha,
        ),
    }
}

/// Mix two LAB colors as though they were LCH, without an explicit
/// conversion by the caller.
///
/// Falls back to [`mix_lab`] when either end is gray (chroma² below
/// [`GRAY_EPSILON`]).
#[must_use]
pub fn mix_lab_polar(o: &Lab, d: &Lab, t: f64, direction: Direction) -> Lab {
    if let Some(c) = endpoint(o, d, t) {
        return c;
    }
    let ocsq = o.chroma_sq();
    let dcsq = d.chroma_sq();
    if ocsq < GRAY_EPSILON || dcsq < GRAY_EPSILON {
        return mix_lab(o, d, t);
    }

    let oc = ocsq.sqrt();
    let dc = dcsq.sqrt();
    let oh = o.b.atan2(o.a) / std::f64::consts::TAU;
    let dh = d.b.atan2(d.a) / std::f64::consts::TAU;

    let c = lerp(oc, dc, t);
    let h = mix_angle(direction, oh, dh, t, 1.0) * std::f64::consts::TAU;
    let (sin, cos) = h.sin_cos();
    Lab::new(lerp(o.l, d.l, t), c * cos, c * sin, lerp(o.alpha, d.alpha, t))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Boundary laws ────────────────────────────────────────────────────

    #[test]
    fn rgb_boundaries_exact() {
        let o = Rgb::new(0.1, 0.7, 0.3, 0.9);
        let d = Rgb::new(0.8, 0.2, 0.5, 0.4);
        assert_eq!(mix_linear_rgb(&o, &d, 0.0), o);
        assert_eq!(mix_linear_rgb(&o, &d, 1.0), d);
        assert_eq!(mix_gamma_rgb(&o, &d, 0.0), o);
        assert_eq!(mix_gamma_rgb(&o, &d, 1.0), d);
    }

    #[test]
    fn lab_boundaries_exact() {
        let o = Lab::new(20.0, 15.0, -40.0, 1.0);
        let d = Lab::new(80.0, -60.0, 10.0, 0.5);
        assert_eq!(mix_lab(&o, &d, 0.0), o);
        assert_eq!(mix_lab(&o, &d, 1.0), d);
        for dir in Direction::all() {
            assert_eq!(mix_lab_polar(&o, &d, 0.0, *dir), o);
            assert_eq!(mix_lab_polar(&o, &d, 1.0, *dir), d);
        }
    }

    #[test]
    fn lch_boundaries_exact() {
        let o = Lch::lch(20.0, 0.0, 0.0);
        let d = Lch::lch(80.0, 45.0, 0.7);
        assert_eq!(mix_lch(&o, &d, 0.0), o);
        assert_eq!(mix_lch(&o, &d, 1.0), d);
        assert_eq!(mix_lch(&d, &o, 0.0), d);
        assert_eq!(mix_lch(&d, &o, 1.0), o);
    }

    // ── Rectangular ──────────────────────────────────────────────────────

    #[test]
    fn lab_midpoint() {
        let mid = mix_lab(&Lab::BLACK, &Lab::WHITE, 0.5);
        assert_eq!(mid, Lab::new(50.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn gamma_mix_is_brighter_than_naive() {
        let mid = mix_gamma_rgb(&Rgb::BLACK, &Rgb::WHITE, 0.5);
        // Linear 0.5 re-encoded is about 0.735.
        assert!(approx_eq(mid.r, 0.735_357, 1e-5), "{mid}");
        assert_eq!(mid.r, mid.g);
    }

    #[test]
    fn linear_mix_mixes_alpha() {
        let mid = mix_linear_rgb(&Rgb::CLEAR_BLACK, &Rgb::WHITE, 0.25);
        assert_eq!(mid, Rgb::new(0.25, 0.25, 0.25, 0.25));
    }

    // ── LCH ──────────────────────────────────────────────────────────────

    #[test]
    fn lch_black_to_white_stays_gray() {
        let mid = mix_lch(&Lch::lch(0.0, 0.0, 0.0), &Lch::lch(100.0, 0.0, 0.0), 0.5);
        assert_eq!(mid, Lch::new(50.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn lch_one_gray_keeps_other_hue() {
        let gray = Lch { l: 50.0, c: 0.0, h: 0.9, alpha: 1.0 };
        let vivid = Lch::lch(50.0, 60.0, 0.3);
        let mid = mix_lch(&gray, &vivid, 0.25);
        assert!(approx_eq(mid.h, 0.3, 1e-9), "{mid}");
        assert!(approx_eq(mid.c, 15.0, 1e-9), "{mid}");

        let back = mix_lch(&vivid, &gray, 0.25);
        assert!(approx_eq(back.h, 0.3, 1e-9), "{back}");
        assert!(approx_eq(back.c, 45.0, 1e-9), "{back}");
    }

    #[test]
    fn lch_hue_shortest_path() {
        let o = Lch::lch(50.0, 40.0, 0.95);
        let d = Lch::lch(50.0, 40.0, 0.05);
        let mid = mix_lch(&o, &d, 0.5);
        assert!(mid.h < 0.01 || mid.h > 0.99, "{mid}");
        assert!(approx_eq(mid.c, 40.0, 1e-12));
    }

    #[test]
    fn lch_direction_far() {
        let o = Lch::lch(50.0, 40.0, 0.95);
        let d = Lch::lch(50.0, 40.0, 0.05);
        let mid = mix_lch_dir(&o, &d, 0.5, Direction::Far);
        assert!(approx_eq(mid.h, 0.5, 1e-9), "{mid}");
    }

    // ── LAB as polar ─────────────────────────────────────────────────────

    #[test]
    fn lab_polar_gray_falls_back_to_lab() {
        let o = Lab::lab(30.0, 0.0, 0.0);
        let d = Lab::lab(70.0, 40.0, -20.0);
        assert_eq!(mix_lab_polar(&o, &d, 0.3, Direction::Near), mix_lab(&o, &d, 0.3));
    }

    #[test]
    fn lab_polar_preserves_chroma_between_equal_chromas() {
        let o = Lab::lab(50.0, 40.0, 0.0);
        let d = Lab::lab(50.0, 0.0, 40.0);
        let mid = mix_lab_polar(&o, &d, 0.5, Direction::Near);
        assert!(approx_eq(mid.chroma(), 40.0, 1e-9), "{mid}");
        assert!(approx_eq(mid.hue(), 0.125, 1e-9), "{mid}");
        // Plain LAB mixing cuts the corner.
        assert!(mix_lab(&o, &d, 0.5).chroma() < 30.0);
    }

    #[test]
    fn lab_polar_ccw_goes_the_long_way() {
        let o = Lab::lab(50.0, 0.0, 40.0);
        let d = Lab::lab(50.0, 40.0, 0.0);
        let mid = mix_lab_polar(&o, &d, 0.5, Direction::Ccw);
        assert!(approx_eq(mid.hue(), 0.625, 1e-9), "{mid}");
    }

    #[test]
    fn lab_polar_far_takes_the_long_arc_both_ways() {
        let o = Lab::lab(50.0, 40.0, 0.0);
        let d = Lab::lab(50.0, 0.0, 40.0);
        let up = mix_lab_polar(&o, &d, 0.5, Direction::Far);
        assert!(approx_eq(up.hue(), 0.625, 1e-9), "{up}");
        let down = mix_lab_polar(&d, &o, 0.5, Direction::Far);
        assert!(approx_eq(down.hue(), 0.625, 1e-9), "{down}");
        assert!(approx_eq(up.chroma(), 40.0, 1e-9), "{up}");
    }

    #[test]
    fn lab_polar_cw_decreases_hue() {
        let o = Lab::lab(50.0, 40.0, 0.0);
        let d = Lab::lab(50.0, 0.0, 40.0);
        // 0 -> 0.25 clockwise wraps through 0.75.
        let long = mix_lab_polar(&o, &d, 0.5, Direction::Cw);
        assert!(approx_eq(long.hue(), 0.625, 1e-9), "{long}");
        let quarter = mix_lab_polar(&o, &d, 0.25, Direction::Cw);
        assert!(approx_eq(quarter.hue(), 0.8125, 1e-9), "{quarter}");
        // 0.25 -> 0 clockwise is the short way.
        let short = mix_lab_polar(&d, &o, 0.5, Direction::Cw);
        assert!(approx_eq(short.hue(), 0.125, 1e-9), "{short}");
    }
}
