// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster output.
//!
//! Fills and strokes are scan converted with `imageproc`. Each label is set
//! on its own transparent tile, rotated about the tile's centre, and
//! composited over the image. DejaVu Sans Mono is built in; any TrueType or
//! OpenType file can replace it.

use std::path::Path as FsPath;

use ab_glyph::{FontArc, PxScale};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut, draw_text_mut, text_size};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use log::debug;

use crate::{
    svg::MARGIN, Canvas, Color, Error, Figure, Label, Line, Path, Point, Result, Scene,
    StrokeStyle, Viewport,
};

/// Strokes thinner than this many pixels are drawn as one-pixel lines.
const HAIRLINE: f64 = 1.5;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const DEFAULT_FONT_NAME: &str = "DejaVuSansMono.ttf";
const DEFAULT_FONT: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// The built-in monospace font.
///
/// # Errors
///
/// Returns [`Error::Font`] if the embedded font fails to parse.
pub fn default_font() -> Result<FontArc> {
    FontArc::try_from_slice(DEFAULT_FONT).map_err(|e| Error::Font {
        path: DEFAULT_FONT_NAME.into(),
        reason: e.to_string(),
    })
}

/// Load a TrueType or OpenType font from disk.
///
/// # Errors
///
/// Returns [`Error::Font`] if the file cannot be read or parsed.
pub fn load_font(path: &FsPath) -> Result<FontArc> {
    let bytes = std::fs::read(path).map_err(|e| Error::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    FontArc::try_from_vec(bytes).map_err(|e| Error::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn rgba(color: Color) -> Rgba<u8> {
    Rgba(color.to_rgba8())
}

/// Integer vertices for `imageproc`, which wants an open polygon with no
/// repeated neighbours.
fn pixel_polygon(points: &[Point]) -> Vec<imageproc::point::Point<i32>> {
    let mut poly: Vec<imageproc::point::Point<i32>> = Vec::with_capacity(points.len());
    for p in points {
        let q = imageproc::point::Point::new(p.x.round() as i32, p.y.round() as i32);
        if poly.last() != Some(&q) {
            poly.push(q);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    poly
}

/// A [`Canvas`] that paints into an RGBA image.
pub struct RasterCanvas<'a> {
    image: RgbaImage,
    viewport: Viewport,
    px_per_pt: f64,
    font: &'a FontArc,
}

impl core::fmt::Debug for RasterCanvas<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("viewport", &self.viewport)
            .field("px_per_pt", &self.px_per_pt)
            .finish_non_exhaustive()
    }
}

impl<'a> RasterCanvas<'a> {
    /// A canvas sized for `figure`, cleared to `background`.
    pub fn new(scene: &Scene, figure: &Figure, background: Color, font: &'a FontArc) -> Self {
        let px = figure.pixels();
        Self {
            image: RgbaImage::from_pixel(px, px, rgba(background)),
            viewport: Viewport::fit(scene.frame(), px, MARGIN),
            px_per_pt: figure.px_per_pt(),
            font,
        }
    }

    /// Finish drawing.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn fill_pixels(&mut self, points: &[Point], color: Color) {
        let poly = pixel_polygon(points);
        if poly.len() >= 3 {
            draw_polygon_mut(&mut self.image, &poly, rgba(color));
        }
    }
}

impl Canvas for RasterCanvas<'_> {
    fn fill(&mut self, path: &Path, color: Color) -> Result<()> {
        let viewport = self.viewport;
        for poly in path.map_points(|p| viewport.apply(p)).subpaths() {
            self.fill_pixels(&poly, color);
        }
        Ok(())
    }

    fn stroke(&mut self, line: &Line, style: &StrokeStyle) -> Result<()> {
        let viewport = self.viewport;
        let l = line.map_points(|p| viewport.apply(p));
        let width = style.width * self.px_per_pt;
        if width < HAIRLINE {
            draw_line_segment_mut(
                &mut self.image,
                (l.p0.x as f32, l.p0.y as f32),
                (l.p1.x as f32, l.p1.y as f32),
                rgba(style.color),
            );
        } else {
            let outline = l.outline(width);
            self.fill_pixels(&outline, style.color);
        }
        Ok(())
    }

    fn text(&mut self, label: &Label) -> Result<()> {
        let font = self.font;
        let scale = PxScale::from((label.style.size * self.px_per_pt) as f32);
        let (w, h) = text_size(scale, font, &label.text);
        if w == 0 || h == 0 {
            debug!("nothing to draw for label {:?}", label.text);
            return Ok(());
        }
        // Large enough to hold the text at any rotation.
        let side = f64::from(w).hypot(f64::from(h)).ceil() as u32 + 2;
        let mut tile = RgbaImage::from_pixel(side, side, TRANSPARENT);
        draw_text_mut(
            &mut tile,
            rgba(label.style.color),
            ((side - w) / 2) as i32,
            ((side - h) / 2) as i32,
            scale,
            font,
            &label.text,
        );
        // `rotate_about_center` turns clockwise; label rotations are
        // counter-clockwise.
        let tile = if label.rotation == 0.0 {
            tile
        } else {
            rotate_about_center(
                &tile,
                -label.rotation.to_radians() as f32,
                Interpolation::Bilinear,
                TRANSPARENT,
            )
        };
        let at = self.viewport.apply(label.position);
        let half = i64::from(side / 2);
        imageops::overlay(
            &mut self.image,
            &tile,
            at.x.round() as i64 - half,
            at.y.round() as i64 - half,
        );
        Ok(())
    }
}

/// Render `scene` to an image.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other backends.
pub fn render_raster(
    scene: &Scene,
    figure: &Figure,
    background: Color,
    font: &FontArc,
) -> Result<RgbaImage> {
    let mut canvas = RasterCanvas::new(scene, figure, background, font);
    scene.replay(&mut canvas)?;
    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, Layer, Mark, TextStyle};

    fn font() -> FontArc {
        default_font().unwrap()
    }

    fn figure() -> Figure {
        Figure {
            size: 1.0,
            dpi: 100.0,
        }
    }

    fn pixel(img: &RgbaImage, p: Point, viewport: Viewport) -> Rgba<u8> {
        let px = viewport.apply(p).round();
        *img.get_pixel(px.x as u32, px.y as u32)
    }

    #[test]
    fn pixel_polygon_drops_repeats() {
        let poly = pixel_polygon(&[
            Point::new(0.2, 0.2),
            Point::new(0.4, 0.1),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(poly.len(), 3);
        assert_eq!(poly[0], imageproc::point::Point::new(0, 0));
    }

    #[test]
    fn fill_and_stroke() {
        let mut scene = Scene::new(Frame::square(10.0));
        scene.push(
            Layer::Events,
            Mark::Fill {
                path: Path::polygon([Point::ORIGIN, Point::new(8.0, 0.0), Point::new(0.0, 8.0)]),
                color: Color::rgb(255, 0, 0),
            },
        );
        scene.push(
            Layer::MonthTicks,
            Mark::Stroke {
                line: Line::new((-8.0, -4.0), (8.0, -4.0)),
                style: StrokeStyle::new(3.0, Color::rgb(0, 0, 255)),
            },
        );
        let img = render_raster(&scene, &figure(), Color::WHITE, &font()).unwrap();
        assert_eq!(img.dimensions(), (100, 100));
        let vp = Viewport::fit(scene.frame(), 100, MARGIN);
        assert_eq!(pixel(&img, Point::new(2.0, 2.0), vp), Rgba([255, 0, 0, 255]));
        assert_eq!(pixel(&img, Point::new(-5.0, 5.0), vp), Rgba([255, 255, 255, 255]));
        assert_eq!(pixel(&img, Point::new(0.0, -4.0), vp), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn hairline_stroke() {
        let mut scene = Scene::new(Frame::square(10.0));
        scene.push(
            Layer::DayTicks,
            Mark::Stroke {
                line: Line::new((0.0, 0.0), (0.0, 9.0)),
                style: StrokeStyle::new(0.5, Color::BLACK),
            },
        );
        let img = render_raster(&scene, &figure(), Color::WHITE, &font()).unwrap();
        let vp = Viewport::fit(scene.frame(), 100, MARGIN);
        assert_eq!(pixel(&img, Point::new(0.0, 4.0), vp), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn text_uses_the_built_in_font() {
        let mut scene = Scene::new(Frame::square(10.0));
        scene.push(
            Layer::Labels,
            Mark::Text(Label {
                text: "JAN".into(),
                position: Point::ORIGIN,
                rotation: 45.0,
                style: TextStyle::new(11.0, Color::BLACK),
            }),
        );
        let img = render_raster(&scene, &figure(), Color::WHITE, &font()).unwrap();
        let inked = img
            .pixels()
            .filter(|p| **p != Rgba([255, 255, 255, 255]))
            .count();
        assert!(inked > 0, "label left no ink");
        // Ink stays near the label's centre.
        let vp = Viewport::fit(scene.frame(), 100, MARGIN);
        let centre = vp.apply(Point::ORIGIN);
        for (x, y, p) in img.enumerate_pixels() {
            if *p != Rgba([255, 255, 255, 255]) {
                let d = Point::new(f64::from(x), f64::from(y)).distance(centre);
                assert!(d < 20.0, "ink at ({x}, {y})");
            }
        }
    }

    #[test]
    fn blank_label_draws_nothing() {
        let mut scene = Scene::new(Frame::square(10.0));
        scene.push(
            Layer::Labels,
            Mark::Text(Label {
                text: String::new(),
                position: Point::ORIGIN,
                rotation: 0.0,
                style: TextStyle::new(11.0, Color::BLACK),
            }),
        );
        let img = render_raster(&scene, &figure(), Color::WHITE, &font()).unwrap();
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn missing_font_file() {
        let err = load_font(FsPath::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, Error::Font { .. }), "{err}");
    }

    #[test]
    fn garbage_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(load_font(&path), Err(Error::Font { .. })));
    }
}
