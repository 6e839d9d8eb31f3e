// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A backend-independent display list.
//!
//! A [`Scene`] records marks in plot space, each tagged with the [`Layer`] it
//! belongs to. Backends implement [`Canvas`] and receive the marks back to
//! front through [`Scene::replay`].

use crate::{Color, Frame, Line, Path, Point, Result, StrokeStyle, TextStyle};

/// Z-order slots, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// One thin line per day.
    DayTicks,
    /// Filled event wedges.
    Events,
    /// Week-start lines.
    WeekTicks,
    /// Month-start lines.
    MonthTicks,
    /// The line where the period starts and ends.
    StartLine,
    /// The disk hiding where the wedges meet.
    Center,
    /// Text.
    Labels,
}

/// A run of text centred on a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The text. Leading and trailing spaces are significant.
    pub text: String,
    /// Centre of the text in plot space.
    pub position: Point,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f64,
    /// Size and colour.
    pub style: TextStyle,
}

/// A single drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    /// A filled path.
    Fill {
        /// The outline.
        path: Path,
        /// Fill colour.
        color: Color,
    },
    /// A stroked line.
    Stroke {
        /// The line.
        line: Line,
        /// Stroke width and colour.
        style: StrokeStyle,
    },
    /// Text.
    Text(Label),
}

/// A drawing backend.
pub trait Canvas {
    /// Fill `path` with `color`.
    ///
    /// # Errors
    ///
    /// Backends writing to a sink return its errors.
    fn fill(&mut self, path: &Path, color: Color) -> Result<()>;

    /// Stroke `line`.
    ///
    /// # Errors
    ///
    /// Backends writing to a sink return its errors.
    fn stroke(&mut self, line: &Line, style: &StrokeStyle) -> Result<()>;

    /// Draw `label`.
    ///
    /// # Errors
    ///
    /// Backends writing to a sink return its errors.
    fn text(&mut self, label: &Label) -> Result<()>;
}

/// An ordered collection of marks.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    frame: Frame,
    marks: Vec<(Layer, Mark)>,
}

impl Scene {
    /// An empty scene showing `frame`.
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            marks: Vec::new(),
        }
    }

    /// The region of plot space the scene occupies.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Add a mark.
    pub fn push(&mut self, layer: Layer, mark: Mark) {
        self.marks.push((layer, mark));
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks back to front.
    ///
    /// Within a layer, marks keep the order they were pushed in.
    pub fn marks(&self) -> impl Iterator<Item = (Layer, &Mark)> {
        let mut ordered: Vec<(Layer, &Mark)> = self.marks.iter().map(|(l, m)| (*l, m)).collect();
        ordered.sort_by_key(|(layer, _)| *layer);
        ordered.into_iter()
    }

    /// Marks on one layer, in the order they were pushed.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Mark> {
        self.marks
            .iter()
            .filter(move |(l, _)| *l == layer)
            .map(|(_, m)| m)
    }

    /// Labels anywhere in the scene.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.marks.iter().filter_map(|(_, m)| match m {
            Mark::Text(label) => Some(label),
            _ => None,
        })
    }

    /// Feed every mark to `canvas`, back to front.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from the canvas.
    pub fn replay(&self, canvas: &mut impl Canvas) -> Result<()> {
        for (_, mark) in self.marks() {
            match mark {
                Mark::Fill { path, color } => canvas.fill(path, *color)?,
                Mark::Stroke { line, style } => canvas.stroke(line, style)?,
                Mark::Text(label) => canvas.text(label)?,
            }
        }
        Ok(())
    }
}
