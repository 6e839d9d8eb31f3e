// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygonal paths.

use smallvec::SmallVec;

use crate::Point;

/// The element of a path.
///
/// Everything on the dial is drawn with straight segments, so there are no
/// curve elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Close off the path.
    ClosePath,
}

/// A path made of straight line segments.
///
/// Small paths (a single-day wedge is a triangle) are stored inline.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Path(SmallVec<[PathEl; 8]>);

impl Path {
    /// Create a new path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closed polygon through the given vertices.
    ///
    /// An empty iterator gives an empty path.
    pub fn polygon(vertices: impl IntoIterator<Item = Point>) -> Self {
        let mut path = Self::new();
        for (i, pt) in vertices.into_iter().enumerate() {
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        if !path.is_empty() {
            path.close_path();
        }
        path
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply a point mapping to every vertex of the path.
    #[must_use]
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self(
            self.0
                .iter()
                .map(|el| match *el {
                    PathEl::MoveTo(p) => PathEl::MoveTo(f(p)),
                    PathEl::LineTo(p) => PathEl::LineTo(f(p)),
                    PathEl::ClosePath => PathEl::ClosePath,
                })
                .collect(),
        )
    }

    /// The vertices of each subpath.
    ///
    /// A closing element does not repeat the first vertex.
    pub fn subpaths(&self) -> Vec<Vec<Point>> {
        let mut result = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for el in self.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if !current.is_empty() {
                        result.push(core::mem::take(&mut current));
                    }
                    current.push(p);
                }
                PathEl::LineTo(p) => current.push(p),
                PathEl::ClosePath => {
                    if !current.is_empty() {
                        result.push(core::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            result.push(current);
        }
        result
    }

    /// Area enclosed by the path, treating every subpath as closed.
    ///
    /// Clockwise polygons (in a y-up frame) have negative signed area; this
    /// returns the sum of the signed areas.
    pub fn signed_area(&self) -> f64 {
        self.subpaths()
            .iter()
            .map(|poly| {
                let n = poly.len();
                (0..n)
                    .map(|i| poly[i].cross(poly[(i + 1) % n]))
                    .sum::<f64>()
                    * 0.5
            })
            .sum()
    }

    /// Absolute enclosed area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding number of a point, treating every subpath as closed.
    pub fn winding(&self, pt: Point) -> i32 {
        self.subpaths()
            .iter()
            .map(|poly| {
                let n = poly.len();
                let mut winding = 0;
                for i in 0..n {
                    let p0 = poly[i];
                    let p1 = poly[(i + 1) % n];
                    let side = (p1 - p0).cross(pt - p0);
                    if p0.y <= pt.y {
                        if p1.y > pt.y && side > 0.0 {
                            winding += 1;
                        }
                    } else if p1.y <= pt.y && side < 0.0 {
                        winding -= 1;
                    }
                }
                winding
            })
            .sum()
    }

    /// Largest distance of any vertex from the origin.
    pub fn max_radius(&self) -> f64 {
        self.elements()
            .iter()
            .filter_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p.hypot()),
                PathEl::ClosePath => None,
            })
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Path {
        Path::polygon([
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ])
    }

    #[test]
    fn polygon_elements() {
        let path = unit_square();
        assert_eq!(path.elements().len(), 5);
        assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(0., 0.)));
        assert_eq!(path.elements()[4], PathEl::ClosePath);
        assert!(Path::polygon(core::iter::empty()).is_empty());
    }

    #[test]
    fn area_sign() {
        let path = unit_square();
        assert_eq!(path.signed_area(), 1.0);
        let reversed = Path::polygon(path.subpaths()[0].iter().rev().copied());
        assert_eq!(reversed.signed_area(), -1.0);
        assert_eq!(reversed.area(), 1.0);
    }

    #[test]
    fn winding_inside_outside() {
        let path = unit_square();
        assert_eq!(path.winding(Point::new(0.5, 0.5)), 1);
        assert_eq!(path.winding(Point::new(1.5, 0.5)), 0);
        assert_eq!(path.winding(Point::new(0.5, -0.5)), 0);
    }

    #[test]
    fn subpaths_split_on_move() {
        let mut path = unit_square();
        path.move_to((5., 5.));
        path.line_to((6., 5.));
        let subpaths = path.subpaths();
        assert_eq!(subpaths.len(), 2);
        assert_eq!(subpaths[0].len(), 4);
        assert_eq!(subpaths[1], vec![Point::new(5., 5.), Point::new(6., 5.)]);
    }

    #[test]
    fn map_points_and_radius() {
        let path = unit_square().map_points(|p| Point::new(p.x * 3.0, p.y * 4.0));
        assert_eq!(path.max_radius(), 5.0);
    }
}
