// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::{Path, Point};

/// A closed shape that can be flattened to a polygonal [`Path`].
pub trait Shape {
    /// Convert to a path in plot space.
    fn to_path(&self) -> Path;

    /// Enclosed area.
    fn area(&self) -> f64 {
        self.to_path().area()
    }

    /// Winding number of point.
    fn winding(&self, pt: Point) -> i32 {
        self.to_path().winding(pt)
    }

    /// Is the point inside the shape?
    fn contains(&self, pt: Point) -> bool {
        self.winding(pt) != 0
    }
}

impl Shape for Path {
    fn to_path(&self) -> Path {
        self.clone()
    }
}
