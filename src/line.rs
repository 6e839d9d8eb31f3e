// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use arrayvec::ArrayVec;

use crate::{Path, Point, Polar};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// A radial line at angle `theta`, from radius `r0` out to `r1`.
    ///
    /// Every tick on the dial is one of these.
    pub fn radial(theta: f64, r0: f64, r1: f64) -> Self {
        Self::new(Polar::new(theta, r0), Polar::new(theta, r1))
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// Apply a point mapping to both ends.
    #[inline]
    #[must_use]
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self::new(f(self.p0), f(self.p1))
    }

    /// The four corners of this line stroked with butt caps at `width`.
    ///
    /// A degenerate line has no direction to stroke along and yields an
    /// empty outline.
    pub fn outline(self, width: f64) -> ArrayVec<Point, 4> {
        let mut corners = ArrayVec::new();
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return corners;
        }
        let half = 0.5 * width / len;
        let normal = Point::new(
            -(self.p1.y - self.p0.y) * half,
            (self.p1.x - self.p0.x) * half,
        );
        corners.push(self.p0 + normal);
        corners.push(self.p1 + normal);
        corners.push(self.p1 - normal);
        corners.push(self.p0 - normal);
        corners
    }

    /// The stroked outline as a closed path.
    pub fn stroke_path(self, width: f64) -> Path {
        Path::polygon(self.outline(width))
    }
}
