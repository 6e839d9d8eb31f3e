// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::f64::consts::PI;

use crate::{Path, Point, Polar, Shape};

/// Number of vertices used when a circle is flattened.
pub const CIRCLE_VERTICES: usize = 100;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }
}

impl Shape for Circle {
    fn to_path(&self) -> Path {
        let step = 2.0 * PI / CIRCLE_VERTICES as f64;
        Path::polygon(
            (0..CIRCLE_VERTICES)
                .map(|i| self.center + Polar::new(step * i as f64, self.radius).to_point()),
        )
    }

    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn winding(&self, pt: Point) -> i32 {
        if pt.distance(self.center) < self.radius.abs() {
            1
        } else {
            0
        }
    }
}
