// SPDX-License-Identifier: MIT
//
// Angular interpolation over a periodic scalar.
//
// Hue lives on a circle, so "halfway between" has four reasonable answers:
// the short way round, the long way round, or a fixed rotational sense.
// Every function here takes the period `range` explicitly: 1.0 for the
// library's turn-based hue, TAU for radians, 360 for degrees.
//
// All four policies wrap both endpoints into [0, range) first, then shift
// one endpoint by a full period where the chosen arc crosses the seam,
// interpolate linearly, and wrap the result again.

use crate::wrap;

/// Which way around the circle an angular interpolation travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Shortest arc.
    #[default]
    Near,
    /// Longest arc.
    Far,
    /// Always decreasing angle.
    Cw,
    /// Always increasing angle.
    Ccw,
}

impl Direction {
    /// Human-readable name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Near => "near",
            Self::Far => "far",
            Self::Cw => "cw",
            Self::Ccw => "ccw",
        }
    }

    /// Parse a direction from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|d| d.name() == lower).copied()
    }

    /// All directions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Near, Self::Far, Self::Cw, Self::Ccw]
    }
}

/// Interpolate from `o` to `d` by `t` over a period of `range`, travelling
/// in `direction`.
#[must_use]
pub fn mix_angle(direction: Direction, o: f64, d: f64, t: f64, range: f64) -> f64 {
    match direction {
        Direction::Near => mix_angle_near(o, d, t, range),
        Direction::Far => mix_angle_far(o, d, t, range),
        Direction::Cw => mix_angle_cw(o, d, t, range),
        Direction::Ccw => mix_angle_ccw(o, d, t, range),
    }
}

/// Shared prologue: wrap both ends and short-circuit the exact cases.
///
/// Returns `Err(result)` when no interpolation is needed, `Ok((o, d))`
/// with wrapped endpoints otherwise.
#[inline]
fn endpoints(o: f64, d: f64, t: f64, range: f64) -> Result<(f64, f64), f64> {
    let o = wrap(o, range);
    let d = wrap(d, range);
    if t <= 0.0 || o == d {
        Err(o)
    } else if t >= 1.0 {
        Err(d)
    } else {
        Ok((o, d))
    }
}

#[inline]
fn lerp_wrap(o: f64, d: f64, t: f64, range: f64) -> f64 {
    wrap((1.0 - t).mul_add(o, t * d), range)
}

/// Shortest-arc interpolation.
#[must_use]
pub fn mix_angle_near(o: f64, d: f64, t: f64, range: f64) -> f64 {
    let (o, d) = match endpoints(o, d, t, range) {
        Ok(ends) => ends,
        Err(exact) => return exact,
    };
    let diff = d - o;
    let half = range * 0.5;
    if o < d && diff > half {
        lerp_wrap(o + range, d, t, range)
    } else if o > d && diff < -half {
        lerp_wrap(o, d + range, t, range)
    } else {
        lerp_wrap(o, d, t, range)
    }
}

/// Longest-arc interpolation.
#[must_use]
pub fn mix_angle_far(o: f64, d: f64, t: f64, range: f64) -> f64 {
    let (o, d) = match endpoints(o, d, t, range) {
        Ok(ends) => ends,
        Err(exact) => return exact,
    };
    let diff = d - o;
    let half = range * 0.5;
    if o < d && diff < half {
        lerp_wrap(o + range, d, t, range)
    } else if o > d && diff > -half {
        lerp_wrap(o, d + range, t, range)
    } else {
        lerp_wrap(o, d, t, range)
    }
}

/// Interpolation with decreasing angle.
#[must_use]
pub fn mix_angle_cw(o: f64, d: f64, t: f64, range: f64) -> f64 {
    let (o, d) = match endpoints(o, d, t, range) {
        Ok(ends) => ends,
        Err(exact) => return exact,
    };
    if o < d {
        lerp_wrap(o + range, d, t, range)
    } else {
        lerp_wrap(o, d, t, range)
    }
}

/// Interpolation with increasing angle.
#[must_use]
pub fn mix_angle_ccw(o: f64, d: f64, t: f64, range: f64) -> f64 {
    let (o, d) = match endpoints(o, d, t, range) {
        Ok(ends) => ends,
        Err(exact) => return exact,
    };
    if o > d {
        lerp_wrap(o, d + range, t, range)
    } else {
        lerp_wrap(o, d, t, range)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
