// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from plot space to output pixels.

use serde::{Deserialize, Serialize};

use crate::{Error, Point, Result};

/// Points per inch, the unit line widths and font sizes are given in.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Physical size of the output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Figure {
    /// Width and height in inches; the figure is square.
    pub size: f64,
    /// Pixels per inch.
    pub dpi: f64,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            size: 10.0,
            dpi: 100.0,
        }
    }
}

impl Figure {
    /// Check that the figure has a drawable size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] unless both size and resolution are
    /// positive and the result is at least one pixel.
    pub fn validate(&self) -> Result<()> {
        if !(self.size > 0.0 && self.dpi > 0.0) || self.pixels() == 0 {
            return Err(Error::InvalidConfig(format!(
                "figure of {} in at {} dpi has no pixels",
                self.size, self.dpi
            )));
        }
        Ok(())
    }

    /// Width and height in pixels.
    pub fn pixels(&self) -> u32 {
        let px = (self.size * self.dpi).round();
        if px.is_finite() && px >= 0.0 {
            px.min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }

    /// Pixels per point.
    pub fn px_per_pt(&self) -> f64 {
        self.dpi / POINTS_PER_INCH
    }
}

/// The region of plot space that must be visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Half the visible width, centred on the origin.
    pub half_width: f64,
    /// Lowest visible `y`.
    pub bottom: f64,
    /// Highest visible `y`.
    pub top: f64,
}

impl Frame {
    /// A frame centred on the origin.
    pub fn square(half_width: f64) -> Self {
        Self {
            half_width,
            bottom: -half_width,
            top: half_width,
        }
    }
}

/// A uniform scale and translation that also flips `y`.
///
/// If the translation is `(x, y)` and the scale is `s`, a plot point
/// `(px, py)` lands at pixel `(x + s·px, y − s·py)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    translation: Point,
    scale: f64,
}

impl Viewport {
    /// Create a viewport from translation and scale.
    #[inline]
    pub const fn new(translation: Point, scale: f64) -> Self {
        Self { translation, scale }
    }

    /// The largest viewport that fits `frame` in a square of `pixels`,
    /// leaving a `margin` fraction of the image empty on every side.
    pub fn fit(frame: Frame, pixels: u32, margin: f64) -> Self {
        let px = f64::from(pixels);
        let usable = px * (1.0 - 2.0 * margin);
        let width = 2.0 * frame.half_width;
        let height = frame.top - frame.bottom;
        let scale = (usable / width).min(usable / height);
        let mid_y = 0.5 * (frame.top + frame.bottom);
        Self::new(Point::new(0.5 * px, 0.5 * px + scale * mid_y), scale)
    }

    /// The scale factor.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a plot point to pixels.
    #[inline]
    pub fn apply(&self, pt: Point) -> Point {
        Point::new(
            self.translation.x + self.scale * pt.x,
            self.translation.y - self.scale * pt.y,
        )
    }

    /// Map a pixel back to plot space.
    #[inline]
    pub fn inverse(&self, px: Point) -> Point {
        Point::new(
            (px.x - self.translation.x) / self.scale,
            (self.translation.y - px.y) / self.scale,
        )
    }
}
