// SPDX-License-Identifier: MIT
//
// srlab — perceptual color math in SR LAB 2.
//
// This facade wires the two member crates together under one name:
//
//   srlab-color    → Rgb / Lab / Lch, conversion, angular mixing, harmonies
//   srlab-gradient → keyframed gradients, Bezier curves, SVG export
//
// Typical flow:
//
//   gamma sRGB ──gamma_rgb_to_sr_lab2──▶ Lab ──Gradient / Curve──▶ Lab
//        ▲                                                          │
//        └──────────────────sr_lab2_to_gamma_rgb────────────────────┘
//
// Enable the `serde` feature to derive Serialize/Deserialize on every
// public value type in both crates.

//! Perceptual color math in SR LAB 2.
//!
//! ```
//! use srlab::{Gradient, Preset, Rgb};
//! use srlab::convert::{gamma_rgb_to_sr_lab2, sr_lab2_to_gamma_rgb};
//!
//! let g = Gradient::from_colors(&[
//!     gamma_rgb_to_sr_lab2(Rgb::RED),
//!     gamma_rgb_to_sr_lab2(Rgb::BLUE),
//! ]);
//! let start = sr_lab2_to_gamma_rgb(g.eval(0.0, Preset::Near));
//! assert!(start.approx_eq_rgb(&Rgb::RED, 2e-3));
//! let mid = g.eval(0.5, Preset::Near);
//! assert!(mid.chroma() > g.eval(0.5, Preset::Lab).chroma());
//! ```

pub use srlab_color::{
    DEFAULT_EPSILON, Direction, GRAY_EPSILON, Harmony, Lab, Lch, ParseHexError, Result, Rgb,
    angle, convert, mix, wrap, wrap_hue,
};
pub use srlab_gradient::{Curve, Gradient, Key, Knot, Preset, SvgOptions};
