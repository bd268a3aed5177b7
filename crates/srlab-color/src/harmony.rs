// SPDX-License-Identifier: MIT
//
// Harmony engine — classic color-wheel schemes in SR LCH.
//
// Each scheme rotates the source hue by fixed fractions of a turn and
// redistributes lightness around the mid-tone (l = 50) so that the
// generated colors sit on the opposite side of middle gray from a very
// dark or very light source. Chroma and alpha are kept.
//
// The source color is not part of the output.

use crate::convert::{lab_to_lch, lch_to_lab};
use crate::lab::Lab;
use crate::lch::Lch;

/// A color-wheel harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Harmony {
    /// Neighbors ±30°.
    Analogous,
    /// Opposite hue.
    Complement,
    /// The two neighbors of the complement, ±150°.
    Split,
    /// 90° spacing (3 colors).
    Square,
    /// Rectangle on the wheel: +60°, +180°, +240° (3 colors).
    Tetradic,
    /// 120° spacing (2 colors).
    Triadic,
}

impl Harmony {
    /// Generate the harmony for an LCH source.
    #[must_use]
    pub fn generate(self, src: Lch) -> Vec<Lch> {
        generate(self, src)
    }

    /// Number of colors this scheme produces.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Complement => 1,
            Self::Analogous | Self::Split | Self::Triadic => 2,
            Self::Square | Self::Tetradic => 3,
        }
    }

    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complement => "complement",
            Self::Split => "split",
            Self::Square => "square",
            Self::Tetradic => "tetradic",
            Self::Triadic => "triadic",
        }
    }

    /// Parse a scheme from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Complement,
            Self::Split,
            Self::Square,
            Self::Tetradic,
            Self::Triadic,
        ]
    }
}

/// One generated member: hue offset in turns and the new lightness.
fn member(src: Lch, turns: f64, l: f64) -> Lch {
    let rotated = src.rotate_hue(turns);
    Lch { l, ..rotated }
}

/// Core harmony dispatch.
fn generate(kind: Harmony, src: Lch) -> Vec<Lch> {
    let l = src.l;
    match kind {
        Harmony::Analogous => {
            let la = (2.0f64).mul_add(l, 50.0) / 3.0;
            vec![member(src, 1.0 / 12.0, la), member(src, -1.0 / 12.0, la)]
        }
        Harmony::Complement => {
            vec![member(src, 0.5, 100.0 - l)]
        }
        Harmony::Split => {
            let ls = (-2.0f64).mul_add(l, 250.0) / 3.0;
            vec![member(src, 5.0 / 12.0, ls), member(src, -5.0 / 12.0, ls)]
        }
        Harmony::Square => {
            vec![member(src, 0.25, 50.0), member(src, 0.5, 100.0 - l), member(src, 0.75, 50.0)]
        }
        Harmony::Tetradic => {
            vec![
                member(src, 1.0 / 6.0, (200.0 - l) / 3.0),
                member(src, 0.5, 100.0 - l),
                member(src, 2.0 / 3.0, (100.0 + l) / 3.0),
            ]
        }
        Harmony::Triadic => {
            let lt = (200.0 - l) / 3.0;
            vec![member(src, 1.0 / 3.0, lt), member(src, -1.0 / 3.0, lt)]
        }
    }
}

impl Lch {
    /// Generate a harmony around this color.
    #[must_use]
    pub fn harmony(self, kind: Harmony) -> Vec<Self> {
        kind.generate(self)
    }
}

impl Lab {
    /// Generate a harmony around this color (computed in LCH).
    #[must_use]
    pub fn harmony(self, kind: Harmony) -> Vec<Self> {
        kind.generate(lab_to_lch(self)).into_iter().map(lch_to_lab).collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn hue_dist(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    #[test]
    fn counts_match_output() {
        let src = Lch::lch(40.0, 50.0, 0.2);
        for kind in Harmony::all() {
            assert_eq!(src.harmony(*kind).len(), kind.count(), "{kind:?}");
        }
    }

    #[test]
    fn complement_opposite_hue_and_lightness() {
        let out = Lch::lch(30.0, 50.0, 0.2).harmony(Harmony::Complement);
        assert!(approx_eq(out[0].h, 0.7, 1e-12));
        assert_eq!(out[0].l, 70.0);
        assert_eq!(out[0].c, 50.0);
    }

    #[test]
    fn triadic_is_evenly_spaced() {
        let out = Lch::lch(50.0, 40.0, 0.1).harmony(Harmony::Triadic);
        assert!(hue_dist(out[0].h, 0.1 + 1.0 / 3.0) < 1e-12);
        assert!(hue_dist(out[1].h, 0.1 - 1.0 / 3.0 + 1.0) < 1e-12);
        assert!(approx_eq(out[0].l, 50.0, 1e-12));
    }

    #[test]
    fn analogous_pulls_toward_middle() {
        let out = Lch::lch(20.0, 40.0, 0.5).harmony(Harmony::Analogous);
        assert!(approx_eq(out[0].l, 30.0, 1e-12));
        assert!(hue_dist(out[0].h, 0.5 + 1.0 / 12.0) < 1e-12);
        assert!(hue_dist(out[1].h, 0.5 - 1.0 / 12.0) < 1e-12);
    }

    #[test]
    fn square_has_quarter_turns() {
        let out = Lch::lch(50.0, 40.0, 0.0).harmony(Harmony::Square);
        let hues: Vec<f64> = out.iter().map(|c| c.h).collect();
        assert!(approx_eq(hues[0], 0.25, 1e-12));
        assert!(approx_eq(hues[1], 0.5, 1e-12));
        assert!(approx_eq(hues[2], 0.75, 1e-12));
    }

    #[test]
    fn gray_source_stays_gray() {
        let out = Lch::lch(50.0, 0.0, 0.4).harmony(Harmony::Split);
        for c in out {
            assert_eq!(c.c, 0.0);
            assert_eq!(c.h, 0.0);
        }
    }

    #[test]
    fn lab_harmony_matches_lch_harmony() {
        let src = Lab::lab(60.0, 30.0, -20.0);
        let via_lab = src.harmony(Harmony::Tetradic);
        let via_lch: Vec<Lab> = lab_to_lch(src)
            .harmony(Harmony::Tetradic)
            .into_iter()
            .map(lch_to_lab)
            .collect();
        assert_eq!(via_lab, via_lch);
        for c in &via_lab {
            assert!(approx_eq(c.chroma(), src.chroma(), 1e-9));
        }
    }

    #[test]
    fn names_roundtrip() {
        for kind in Harmony::all() {
            assert_eq!(Harmony::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(Harmony::from_name("Triadic"), Some(Harmony::Triadic));
        assert_eq!(Harmony::from_name("pentagram"), None);
    }
}
