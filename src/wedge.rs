// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled event wedges.

use crate::{linspace, Path, Point, Polar, Shape};

/// A pie slice between two angles, closed through the centre.
///
/// The outer edge is not a true arc: it is sampled at `points` angles spaced
/// evenly between `start_angle` and `end_angle`, and consecutive samples are
/// joined with straight segments. Two points give a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    /// Radius of the outer edge.
    pub radius: f64,
    /// Angle of the leading edge, in radians clockwise from north.
    pub start_angle: f64,
    /// Angle of the trailing edge.
    pub end_angle: f64,
    /// Number of samples along the outer edge.
    pub points: usize,
}

impl Wedge {
    /// Create a wedge out of its constituent parts.
    pub fn new(radius: f64, start_angle: f64, end_angle: f64, points: usize) -> Self {
        Self {
            radius,
            start_angle,
            end_angle,
            points,
        }
    }

    /// Angular width of the wedge.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The sampled points of the outer edge, in order.
    pub fn outer_edge(&self) -> impl Iterator<Item = Point> + '_ {
        linspace(self.start_angle, self.end_angle, self.points)
            .map(move |theta| Polar::new(theta, self.radius).to_point())
    }
}

impl Shape for Wedge {
    fn to_path(&self) -> Path {
        Path::polygon(self.outer_edge().chain(core::iter::once(Point::ORIGIN)))
    }
}
