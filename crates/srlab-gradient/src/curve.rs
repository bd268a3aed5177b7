//! Cubic Bezier curves through LAB.
//!
//! A [`Curve`] is a chain of [`Knot`]s. Each knot is an anchor the curve
//! passes through plus two handles: the fore handle shapes the segment
//! leaving the knot, the rear handle shapes the segment arriving at it.
//! Every component (l, a, b, alpha) is interpolated independently, so a
//! color is just a point in a 4D affine space here.
//!
//! Handles are usually not placed by hand. [`Knot::fit_linear`] gives a
//! straight segment with uniform speed, and [`Curve::from_catmull`] fits a
//! smooth curve through a list of anchors with Catmull-Rom tangents.

use std::fmt;

use srlab_color::{Lab, wrap};
use tracing::debug;

use crate::spaced;

const ZERO: Lab = Lab::new(0.0, 0.0, 0.0, 0.0);

/// One anchor of a Bezier curve with its two handles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knot {
    pub coord: Lab,
    /// Outgoing handle.
    pub fore_handle: Lab,
    /// Incoming handle.
    pub rear_handle: Lab,
}

impl Knot {
    #[must_use]
    pub const fn new(coord: Lab, fore_handle: Lab, rear_handle: Lab) -> Self {
        Self { coord, fore_handle, rear_handle }
    }

    /// A knot with both handles collapsed onto the anchor.
    #[must_use]
    pub const fn at(coord: Lab) -> Self {
        Self::new(coord, coord, coord)
    }

    /// Straighten the segment from `self` to `next`.
    ///
    /// Handles go to 1/3 and 2/3 of the way, which makes the Bezier equal
    /// to plain linear interpolation at every parameter.
    pub fn fit_linear(&mut self, next: &mut Self) {
        let (fore, rear) = linear_handles(self.coord, next.coord);
        self.fore_handle = fore;
        next.rear_handle = rear;
    }

    /// Fit the segment from `self` to `next` with Catmull-Rom tangents.
    ///
    /// `prev` is the anchor before `self` and `next2` the one after `next`.
    /// `tightness` 0 is the classic Catmull-Rom spline, 1 a straight line.
    pub fn fit_catmull(&mut self, next: &mut Self, prev: Lab, next2: Lab, tightness: f64) {
        let (fore, rear) = catmull_handles(prev, self.coord, next.coord, next2, tightness);
        self.fore_handle = fore;
        next.rear_handle = rear;
    }

    /// Point the rear handle opposite the fore handle.
    pub fn mirror_handles_forward(&mut self) {
        self.rear_handle = mirror(self.coord, self.fore_handle);
    }

    /// Point the fore handle opposite the rear handle.
    pub fn mirror_handles_backward(&mut self) {
        self.fore_handle = mirror(self.coord, self.rear_handle);
    }

    /// Swap handles, for walking the curve the other way.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.fore_handle, &mut self.rear_handle);
    }

    /// Point on the segment from `self` to `next` at `t` in [0, 1].
    #[must_use]
    pub fn bezier_point(&self, next: &Self, t: f64) -> Lab {
        let u = 1.0 - t;
        let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        self.coord * b0 + self.fore_handle * b1 + next.rear_handle * b2 + next.coord * b3
    }

    /// Derivative of [`Knot::bezier_point`] with respect to `t`.
    ///
    /// Not normalized: the magnitude is the parametric speed.
    #[must_use]
    pub fn bezier_tangent(&self, next: &Self, t: f64) -> Lab {
        let u = 1.0 - t;
        (self.fore_handle - self.coord) * (3.0 * u * u)
            + (next.rear_handle - self.fore_handle) * (6.0 * u * t)
            + (next.coord - next.rear_handle) * (3.0 * t * t)
    }
}

fn mirror(coord: Lab, handle: Lab) -> Lab {
    coord - (handle - coord)
}

fn linear_handles(from: Lab, to: Lab) -> (Lab, Lab) {
    let delta = to - from;
    (from + delta * (1.0 / 3.0), from + delta * (2.0 / 3.0))
}

/// Fore handle of `curr` and rear handle of `next` for a Catmull-Rom
/// segment.
fn catmull_handles(prev: Lab, curr: Lab, next: Lab, next2: Lab, tightness: f64) -> (Lab, Lab) {
    if (tightness - 1.0).abs() < f64::EPSILON {
        return linear_handles(curr, next);
    }
    let k = (tightness - 1.0) / 6.0;
    (curr - (next - prev) * k, next + (next2 - curr) * k)
}

impl fmt::Display for Knot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"coord\":{},\"foreHandle\":{},\"rearHandle\":{}}}",
            self.coord, self.fore_handle, self.rear_handle
        )
    }
}

// ─── Curve ───────────────────────────────────────────────────────────────────

/// A piecewise cubic Bezier curve through LAB, open or closed.
///
/// # Examples
///
/// ```
/// use srlab_color::Lab;
/// use srlab_gradient::Curve;
///
/// let anchors = [Lab::BLACK, Lab::SR_RED, Lab::SR_GREEN, Lab::WHITE];
/// let curve = Curve::from_catmull(false, &anchors, 0.0);
/// assert_eq!(curve.eval(0.0), Lab::BLACK);
/// assert_eq!(curve.eval(1.0), Lab::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    closed_loop: bool,
    knots: Vec<Knot>,
}

/// Where a curve parameter lands: the two knots of a segment and the
/// local parameter between them.
struct Segment {
    from: usize,
    to: usize,
    t: f64,
}

impl Curve {
    #[must_use]
    pub const fn new(closed_loop: bool, knots: Vec<Knot>) -> Self {
        Self { closed_loop, knots }
    }

    /// An open, straight, uniformly parameterized curve from `a` to `b`.
    #[must_use]
    pub fn from_seg_linear(a: Lab, b: Lab) -> Self {
        let mut start = Knot::at(a);
        let mut end = Knot::at(b);
        start.fit_linear(&mut end);
        start.mirror_handles_forward();
        end.mirror_handles_backward();
        Self::new(false, vec![start, end])
    }

    /// Fit a smooth curve through `anchors`.
    ///
    /// Open curves pad the missing neighbors at either end by repeating the
    /// end anchors, and the dangling outer handles are mirrored. Closed
    /// curves take neighbors modulo the anchor count. With fewer than two
    /// anchors there is nothing to fit and a straight curve is returned:
    /// black to white for none, a constant curve for one.
    #[must_use]
    pub fn from_catmull(closed_loop: bool, anchors: &[Lab], tightness: f64) -> Self {
        let n = anchors.len();
        match anchors {
            [] => {
                debug!("no anchors, falling back to black to white");
                return Self::from_seg_linear(Lab::BLACK, Lab::WHITE);
            }
            [only] => {
                debug!(anchor = %only, "single anchor, returning a constant curve");
                return Self::from_seg_linear(*only, *only);
            }
            _ => {}
        }

        let mut knots: Vec<Knot> = anchors.iter().copied().map(Knot::at).collect();

        if closed_loop {
            for i in 0..n {
                let (fore, rear) = catmull_handles(
                    anchors[(i + n - 1) % n],
                    anchors[i],
                    anchors[(i + 1) % n],
                    anchors[(i + 2) % n],
                    tightness,
                );
                knots[i].fore_handle = fore;
                knots[(i + 1) % n].rear_handle = rear;
            }
        } else {
            if n < 4 {
                debug!(anchors = n, "padding open curve ends");
            }
            for i in 0..n - 1 {
                let (fore, rear) = catmull_handles(
                    anchors[i.saturating_sub(1)],
                    anchors[i],
                    anchors[i + 1],
                    anchors[(i + 2).min(n - 1)],
                    tightness,
                );
                knots[i].fore_handle = fore;
                knots[i + 1].rear_handle = rear;
            }
            knots[0].mirror_handles_forward();
            knots[n - 1].mirror_handles_backward();
        }

        Self::new(closed_loop, knots)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[must_use]
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    #[must_use]
    pub const fn closed_loop(&self) -> bool {
        self.closed_loop
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    // ─── Evaluation ──────────────────────────────────────────────────────

    /// Map a curve parameter to a segment.
    ///
    /// Open curves clamp `step` to [0, 1] and land exactly on the end
    /// anchors outside it. Closed curves wrap `step` and include the
    /// segment from the last knot back to the first.
    fn locate(&self, step: f64) -> Option<Segment> {
        let n = self.knots.len();
        match n {
            0 => None,
            1 => Some(Segment { from: 0, to: 0, t: 0.0 }),
            _ if self.closed_loop => {
                let s = wrap(step, 1.0) * n as f64;
                let from = (s.floor() as usize).min(n - 1);
                Some(Segment { from, to: (from + 1) % n, t: s - from as f64 })
            }
            _ if step <= 0.0 => Some(Segment { from: 0, to: 1, t: 0.0 }),
            _ if step >= 1.0 => Some(Segment { from: n - 2, to: n - 1, t: 1.0 }),
            _ => {
                let s = step * (n - 1) as f64;
                let from = (s.floor() as usize).min(n - 2);
                Some(Segment { from, to: from + 1, t: s - from as f64 })
            }
        }
    }

    /// Color at `step`. An empty curve evaluates to `Lab::default()`.
    #[must_use]
    pub fn eval(&self, step: f64) -> Lab {
        self.locate(step).map_or_else(Lab::default, |seg| {
            self.knots[seg.from].bezier_point(&self.knots[seg.to], seg.t)
        })
    }

    /// Derivative at `step`, per unit of segment parameter.
    #[must_use]
    pub fn eval_tangent(&self, step: f64) -> Lab {
        self.locate(step).map_or(ZERO, |seg| {
            self.knots[seg.from].bezier_tangent(&self.knots[seg.to], seg.t)
        })
    }

    /// `count` (at least 2) evenly spaced samples from `start` to `stop`.
    #[must_use]
    pub fn eval_range(&self, count: usize, start: f64, stop: f64) -> Vec<Lab> {
        spaced(count, start, stop).map(|s| self.eval(s)).collect()
    }

    // ─── Mutation ────────────────────────────────────────────────────────

    /// Change the knot count to `len` (at least 2).
    ///
    /// Shrinking drops knots from the end. Growing appends knots that keep
    /// stepping by the last segment's anchor delta, joined by straight
    /// segments. On a closed loop the segment from the new last knot back
    /// to the first is refit as a straight line.
    pub fn resize(&mut self, len: usize) {
        let len = len.max(2);
        let n = self.knots.len();
        if len == n {
            return;
        }
        debug!(from = n, to = len, "resizing curve");

        if len < n {
            self.knots.truncate(len);
        } else {
            if n == 0 {
                let closed_loop = self.closed_loop;
                *self = Self::from_seg_linear(Lab::BLACK, Lab::WHITE);
                self.closed_loop = closed_loop;
            }
            self.grow(len);
        }

        if self.closed_loop {
            self.close_straight();
        }
    }

    fn grow(&mut self, len: usize) {
        let n = self.knots.len();
        let mut prev = self.knots[n - 1];
        let delta = if n == 1 { ZERO } else { prev.coord - self.knots[n - 2].coord };
        for _ in n..len {
            let mut knot = Knot::at(prev.coord + delta);
            prev.fit_linear(&mut knot);
            knot.mirror_handles_backward();
            let tail = self.knots.len() - 1;
            self.knots[tail] = prev;
            self.knots.push(knot);
            prev = knot;
        }
    }

    /// Straighten the segment from the last knot back to the first.
    fn close_straight(&mut self) {
        let last = self.knots.len() - 1;
        let (fore, rear) = linear_handles(self.knots[last].coord, self.knots[0].coord);
        self.knots[last].fore_handle = fore;
        self.knots[0].rear_handle = rear;
    }

    /// Walk the curve the other way.
    pub fn reverse(&mut self) {
        self.knots.reverse();
        for knot in &mut self.knots {
            knot.reverse();
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"closedLoop\":{},\"knots\":[", self.closed_loop)?;
        for (i, knot) in self.knots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{knot}")?;
        }
        f.write_str("]}")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
