//! # srlab-gradient — keyframed gradients and Bezier curves in SR LAB 2
//!
//! Two ways of walking through color space, both built on `srlab-color`:
//!
//! ```text
//! Gradient: [Key(step, Lab)]  ──eval(t, Preset)──▶  Lab
//!              piecewise mix between bracketing keys
//!
//! Curve:    [Knot(coord, fore, rear)]  ──eval(step)──▶  Lab
//!              cubic Bezier per segment, Catmull-Rom fitting
//! ```
//!
//! A gradient is the cheap option: one binary search and one mix per
//! sample. A curve passes through every anchor with a continuous tangent,
//! which avoids the visible kinks a gradient shows at its keys.
//!
//! Both render as JSON-shaped strings through `Display`, and a gradient can
//! be exported as a standalone SVG document for inspection.
//!
//! # Logging
//!
//! Fallback and structural paths (empty input, boundary padding, resizing)
//! emit `tracing` events at `debug` level. Install a subscriber to see them.

// Sample counts and knot indices are converted to floats and back.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod curve;
pub mod gradient;
pub mod svg;

pub use curve::{Curve, Knot};
pub use gradient::{Gradient, Key, Preset};
pub use svg::SvgOptions;

/// `count` evenly spaced values from `start` to `stop`, both ends exact.
pub(crate) fn spaced(count: usize, start: f64, stop: f64) -> impl Iterator<Item = f64> {
    let count = count.max(2);
    let last = (count - 1) as f64;
    (0..count).map(move |i| {
        let u = i as f64 / last;
        (1.0 - u).mul_add(start, u * stop)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_hits_both_ends() {
        let v: Vec<f64> = spaced(5, 0.2, 0.6).collect();
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], 0.2);
        assert_eq!(v[4], 0.6);
        assert!((v[2] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn spaced_enforces_two_samples() {
        let v: Vec<f64> = spaced(0, 0.0, 1.0).collect();
        assert_eq!(v, vec![0.0, 1.0]);
    }
}
