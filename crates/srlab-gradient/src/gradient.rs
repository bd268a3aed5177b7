//! Keyframed gradients.
//!
//! A gradient is a list of `(step, color)` keys. Evaluation clamps the
//! requested step into the key range, finds the bracketing pair with a
//! binary search, and mixes the two colors with the policy chosen by a
//! [`Preset`].
//!
//! Keys are expected in ascending step order. Nothing sorts them behind
//! the caller's back: use [`Gradient::insert_sorted`] or
//! [`Gradient::sort`] when the order is not already guaranteed.

use std::fmt;

use srlab_color::convert::gamma_rgb_to_sr_lab2;
use srlab_color::mix::{mix_lab, mix_lab_polar};
use srlab_color::{Direction, Lab, Rgb, fmt_fixed};
use tracing::debug;

use crate::spaced;

/// A single gradient control point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    /// Position along the gradient, in [0, 1].
    pub step: f64,
    pub color: Lab,
}

impl Key {
    /// Create a key. The step is clamped to [0, 1].
    #[must_use]
    pub fn new(step: f64, color: Lab) -> Self {
        Self { step: step.clamp(0.0, 1.0), color }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\"step\":")?;
        fmt_fixed(f, self.step)?;
        write!(f, ",\"color\":{}}}", self.color)
    }
}

// ─── Preset ──────────────────────────────────────────────────────────────────

/// How neighboring keys are mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// Straight line through LAB.
    #[default]
    Lab,
    /// Polar, shortest hue arc.
    Near,
    /// Polar, longest hue arc.
    Far,
    /// Polar, decreasing hue.
    Cw,
    /// Polar, increasing hue.
    Ccw,
}

impl Preset {
    /// The hue direction of a polar preset, `None` for [`Preset::Lab`].
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Lab => None,
            Self::Near => Some(Direction::Near),
            Self::Far => Some(Direction::Far),
            Self::Cw => Some(Direction::Cw),
            Self::Ccw => Some(Direction::Ccw),
        }
    }

    /// Mix two colors with this preset's policy.
    #[must_use]
    pub fn mix(self, o: &Lab, d: &Lab, t: f64) -> Lab {
        match self.direction() {
            None => mix_lab(o, d, t),
            Some(direction) => mix_lab_polar(o, d, t, direction),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Near => "near",
            Self::Far => "far",
            Self::Cw => "cw",
            Self::Ccw => "ccw",
        }
    }

    /// Parse a preset from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|p| p.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Lab, Self::Near, Self::Far, Self::Cw, Self::Ccw]
    }
}

// ─── Gradient ────────────────────────────────────────────────────────────────

/// An ordered list of color keys.
///
/// # Examples
///
/// ```
/// use srlab_color::Lab;
/// use srlab_gradient::{Gradient, Preset};
///
/// let g = Gradient::from_colors(&[Lab::BLACK, Lab::WHITE]);
/// let mid = g.eval(0.5, Preset::Lab);
/// assert!((mid.l - 50.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    keys: Vec<Key>,
}

impl Gradient {
    #[must_use]
    pub const fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Build from any key sequence, keeping its order.
    #[must_use]
    pub fn from_keys<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        Self { keys: keys.into_iter().collect() }
    }

    /// Keys evenly spaced across [0, 1].
    ///
    /// No colors gives black to white. A single color is placed between
    /// black and white at the midpoint.
    #[must_use]
    pub fn from_colors(colors: &[Lab]) -> Self {
        match colors {
            [] => {
                debug!("no colors, falling back to black to white");
                Self::black_to_white()
            }
            [only] => {
                debug!(color = %only, "single color, framing with black and white");
                Self::new(vec![
                    Key::new(0.0, Lab::BLACK),
                    Key::new(0.5, *only),
                    Key::new(1.0, Lab::WHITE),
                ])
            }
            _ => {
                let last = (colors.len() - 1) as f64;
                let keys = colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| Key::new(i as f64 / last, *c))
                    .collect();
                Self::new(keys)
            }
        }
    }

    /// Sample a gamma-RGB source at `count` evenly spaced steps.
    ///
    /// This is the bridge for gradients owned by a host framework: pass a
    /// closure that evaluates the host gradient at `t` in [0, 1]. At least
    /// two samples are taken.
    #[must_use]
    pub fn from_sampler<F>(count: usize, mut sample: F) -> Self
    where
        F: FnMut(f64) -> Rgb,
    {
        let keys = spaced(count, 0.0, 1.0)
            .map(|t| Key::new(t, gamma_rgb_to_sr_lab2(sample(t))))
            .collect();
        Self::new(keys)
    }

    fn black_to_white() -> Self {
        Self::new(vec![Key::new(0.0, Lab::BLACK), Key::new(1.0, Lab::WHITE)])
    }

    // ─── Keys ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Key> {
        self.keys.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Append a key. The caller keeps the order ascending.
    pub fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Insert after every key with a step ≤ `key.step`.
    pub fn insert_sorted(&mut self, key: Key) {
        let i = self.keys.partition_point(|k| k.step <= key.step);
        self.keys.insert(i, key);
    }

    /// Remove and return the key at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Key> {
        (index < self.keys.len()).then(|| self.keys.remove(index))
    }

    /// Stable sort by step.
    pub fn sort(&mut self) {
        self.keys.sort_by(|a, b| a.step.total_cmp(&b.step));
    }

    // ─── Evaluation ──────────────────────────────────────────────────────

    /// Color at step `t`.
    ///
    /// `t` is clamped to the first and last key steps, so the end keys'
    /// colors are returned exactly at and beyond either end. An empty
    /// gradient evaluates to `Lab::default()`.
    #[must_use]
    pub fn eval(&self, t: f64, preset: Preset) -> Lab {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Lab::default();
        };
        // max/min rather than clamp: unsorted keys must not panic.
        let t = t.max(first.step).min(last.step);

        let i = self.keys.partition_point(|k| k.step <= t);
        let prev = &self.keys[i.saturating_sub(1)];
        let next = &self.keys[i.min(self.keys.len() - 1)];

        let span = next.step - prev.step;
        let local = if span > 0.0 { (t - prev.step) / span } else { 0.0 };
        preset.mix(&prev.color, &next.color, local)
    }

    /// `count` (at least 2) evenly spaced samples from `start` to `stop`.
    #[must_use]
    pub fn eval_range(&self, count: usize, preset: Preset, start: f64, stop: f64) -> Vec<Lab> {
        spaced(count, start, stop).map(|t| self.eval(t, preset)).collect()
    }

    /// Evaluate at each of `steps`.
    #[must_use]
    pub fn colors_at(&self, steps: &[f64], preset: Preset) -> Vec<Lab> {
        steps.iter().map(|&t| self.eval(t, preset)).collect()
    }

    // ─── Structural transforms ───────────────────────────────────────────

    /// Same colors, steps respaced evenly across [0, 1].
    #[must_use]
    pub fn distributed(&self) -> Self {
        if self.keys.len() < 2 {
            return self.clone();
        }
        let colors: Vec<Lab> = self.keys.iter().map(|k| k.color).collect();
        Self::from_colors(&colors)
    }

    /// Mirror image: order reversed, each step replaced by `1 - step`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.keys.iter().rev().map(|k| Key::new(1.0 - k.step, k.color)).collect()
    }

    /// Difference between the largest and smallest step. 0 when empty.
    #[must_use]
    pub fn extent(&self) -> f64 {
        let mut steps = self.keys.iter().map(|k| k.step);
        let Some(seed) = steps.next() else {
            return 0.0;
        };
        let (lo, hi) = steps.fold((seed, seed), |(lo, hi), s| (lo.min(s), hi.max(s)));
        hi - lo
    }
}

impl Default for Gradient {
    /// Black to white.
    fn default() -> Self {
        Self::black_to_white()
    }
}

impl FromIterator<Key> for Gradient {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\"keys\":[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]}")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
