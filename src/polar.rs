// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar coordinates on the calendar dial, and the day-to-angle scale.
//!
//! The dial is laid out like a clock face: angle zero points straight up and
//! angles grow clockwise. A polar point `(theta, r)` therefore lands at
//! `x = r sin(theta)`, `y = r cos(theta)` in plot space.

use core::f64::consts::TAU;

use crate::Point;

/// A point in polar coordinates.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Polar {
    /// Angle in radians, clockwise from north.
    pub theta: f64,
    /// Distance from the centre.
    pub r: f64,
}

impl Polar {
    /// Create a new polar point.
    #[inline]
    pub const fn new(theta: f64, r: f64) -> Self {
        Self { theta, r }
    }

    /// Convert to a plot-space point.
    #[inline]
    pub fn to_point(self) -> Point {
        let (sin, cos) = self.theta.sin_cos();
        Point::new(self.r * sin, self.r * cos)
    }

    /// Convert a plot-space point back to polar form.
    ///
    /// The returned angle is normalized to `[0, 2π)`.
    pub fn from_point(pt: Point) -> Self {
        let theta = pt.x.atan2(pt.y).rem_euclid(TAU);
        Self::new(theta, pt.hypot())
    }
}

impl From<Polar> for Point {
    #[inline]
    fn from(p: Polar) -> Self {
        p.to_point()
    }
}

/// Rotation, in degrees counter-clockwise, for text drawn at angle `theta`.
///
/// Text rotated this way reads outward along the radius, so every label on
/// the dial stays legible from outside the circle.
#[inline]
pub fn label_rotation(theta: f64) -> f64 {
    -theta.to_degrees() + 90.0
}

/// `n` evenly spaced samples from `start` to `end`, both included.
///
/// A single sample yields `start`; zero samples yield nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if i + 1 == n && n > 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Maps day offsets within a period onto the full turn of the dial.
///
/// Every day gets the same angular width, `2π / days`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularScale {
    days: usize,
    increment: f64,
}

impl AngularScale {
    /// A scale that spreads `days` days over a full turn.
    ///
    /// # Panics
    ///
    /// Panics if `days` is zero. [`Period`](crate::Period) never produces
    /// an empty scale.
    pub fn new(days: usize) -> Self {
        assert!(days > 0, "an angular scale needs at least one day");
        Self {
            days,
            increment: TAU / days as f64,
        }
    }

    /// Number of days on the dial.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Angular width of a single day.
    #[inline]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Angle of the line at the start of the day `offset` days in.
    ///
    /// Negative offsets and offsets past the end extrapolate linearly.
    #[inline]
    pub fn angle(&self, offset: i64) -> f64 {
        offset as f64 * self.increment
    }

    /// Angle through the middle of the day `offset` days in.
    ///
    /// Labels for a day are centred on this angle.
    #[inline]
    pub fn mid_angle(&self, offset: i64) -> f64 {
        self.angle(offset) + 0.5 * self.increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn north_is_up_and_clockwise() {
        let north = Polar::new(0.0, 10.0).to_point();
        assert!(north.is_near(Point::new(0.0, 10.0), 1e-12), "{north:?}");
        let east = Polar::new(FRAC_PI_2, 10.0).to_point();
        assert!(east.is_near(Point::new(10.0, 0.0), 1e-12), "{east:?}");
        let south = Polar::new(PI, 2.0).to_point();
        assert!(south.is_near(Point::new(0.0, -2.0), 1e-12), "{south:?}");
    }

    #[test]
    fn polar_point_conversion() {
        for theta in [0.0, 0.3, 2.0, 4.5, 6.0] {
            let p = Polar::new(theta, 3.0);
            let back = Polar::from_point(p.to_point());
            assert_approx_eq(back.theta, theta);
            assert_approx_eq(back.r, 3.0);
        }
    }

    #[test]
    fn label_rotation_keeps_text_radial() {
        assert_approx_eq(label_rotation(0.0), 90.0);
        assert_approx_eq(label_rotation(FRAC_PI_2), 0.0);
        assert_approx_eq(label_rotation(PI), -90.0);
    }

    #[test]
    fn linspace_samples() {
        let v: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let one: Vec<f64> = linspace(2.0, 3.0, 1).collect();
        assert_eq!(one, vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
    }

    #[test]
    fn scale_covers_full_turn() {
        let scale = AngularScale::new(365);
        assert_eq!(scale.angle(0), 0.0);
        assert_approx_eq(scale.angle(364) + scale.increment(), TAU);
        assert_approx_eq(scale.increment() * 365.0, TAU);
        assert_approx_eq(scale.mid_angle(0), scale.increment() / 2.0);
    }

    #[test]
    #[should_panic(expected = "at least one day")]
    fn empty_scale_panics() {
        let _ = AngularScale::new(0);
    }
}
