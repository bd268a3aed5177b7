//! SVG export for eyeballing gradients.
//!
//! The document has two bands. The top half is an SVG `<linearGradient>`
//! built from stops, which the browser interpolates in gamma sRGB. The
//! bottom half is a row of solid swatches, one per stop, so the stop
//! colors can be compared against the browser's blend.

use srlab_color::Lab;
use srlab_color::convert::sr_lab2_to_gamma_rgb;
use tracing::trace;

use crate::gradient::{Gradient, Preset};

/// Layout and sampling options for [`Gradient::to_svg_string`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgOptions {
    /// `id` of the `<linearGradient>` element. Characters other than ASCII
    /// letters, digits, `-` and `_` are written as `_`.
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Gradient axis start, in bounding-box units.
    pub x1: f64,
    pub y1: f64,
    /// Gradient axis end, in bounding-box units.
    pub x2: f64,
    pub y2: f64,
    /// Evenly spaced samples to emit as stops. `None` uses the keys.
    pub samples: Option<usize>,
    /// Mix policy used when sampling.
    pub preset: Preset,
}

const DEFAULT_ID: &str = "srlabGradient";

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            width: 768,
            height: 64,
            x1: 0.0,
            y1: 0.5,
            x2: 1.0,
            y2: 0.5,
            samples: None,
            preset: Preset::Lab,
        }
    }
}

impl SvgOptions {
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_axis(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Sample `count` stops (at least 2) instead of using the keys.
    #[must_use]
    pub const fn with_samples(mut self, count: usize) -> Self {
        self.samples = Some(count);
        self
    }

    #[must_use]
    pub const fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }
}

/// One resolved stop: offset and display color.
struct Stop {
    offset: f64,
    hex: String,
    opacity: f64,
}

impl Stop {
    fn new(offset: f64, color: Lab) -> Self {
        let rgb = sr_lab2_to_gamma_rgb(color).clamp_01();
        Self { offset, hex: rgb.to_hex_web(), opacity: rgb.alpha }
    }
}

/// `id` made safe for both an attribute value and a `url(#...)` reference.
///
/// An id must start with a letter or `_`, so a leading digit or `-` gets an
/// `_` prefix. An empty id falls back to the default.
fn element_id(id: &str) -> String {
    let mut out: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    match out.chars().next() {
        None => DEFAULT_ID.to_string(),
        Some(c) if c.is_ascii_digit() || c == '-' => {
            out.insert(0, '_');
            out
        }
        Some(_) => out,
    }
}

impl Gradient {
    /// Render as a standalone SVG document.
    #[must_use]
    pub fn to_svg_string(&self, opts: &SvgOptions) -> String {
        let stops: Vec<Stop> = match opts.samples {
            Some(count) => {
                let count = count.max(2);
                let last = (count - 1) as f64;
                self.eval_range(count, opts.preset, 0.0, 1.0)
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| Stop::new(i as f64 / last, c))
                    .collect()
            }
            None => self.keys().iter().map(|k| Stop::new(k.step, k.color)).collect(),
        };
        let id = element_id(&opts.id);
        trace!(%id, stops = stops.len(), "rendering svg");

        let (w, h) = (opts.width, opts.height);
        let band = f64::from(h) / 2.0;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n"
        );

        svg.push_str("  <defs>\n");
        svg.push_str(&format!(
            "    <linearGradient id=\"{id}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">\n",
            opts.x1, opts.y1, opts.x2, opts.y2
        ));
        for stop in &stops {
            svg.push_str(&format!(
                "      <stop offset=\"{:.4}\" stop-color=\"#{}\" stop-opacity=\"{:.4}\"/>\n",
                stop.offset, stop.hex, stop.opacity
            ));
        }
        svg.push_str("    </linearGradient>\n");
        svg.push_str("  </defs>\n");

        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{band}\" fill=\"url(#{id})\"/>\n"
        ));

        if !stops.is_empty() {
            let swatch = f64::from(w) / stops.len() as f64;
            for (i, stop) in stops.iter().enumerate() {
                svg.push_str(&format!(
                    "  <rect x=\"{:.2}\" y=\"{band}\" width=\"{swatch:.2}\" height=\"{band}\" \
                     fill=\"#{}\" fill-opacity=\"{:.4}\"/>\n",
                    i as f64 * swatch,
                    stop.hex,
                    stop.opacity
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}
