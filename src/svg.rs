// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output.

use std::io::{self, Write};

use crate::{
    Canvas, Color, Figure, Label, Line, Path, PathEl, Point, Result, Scene, StrokeStyle,
    Viewport,
};

/// Fraction of the figure left blank around the scene.
pub const MARGIN: f64 = 0.02;

impl Path {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)
            .expect("writing to a Vec never fails");
        String::from_utf8(buffer).expect("path data is ASCII")
    }

    /// Write the SVG representation of this path to the provided buffer.
    ///
    /// # Errors
    ///
    /// Returns any error from `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, el) in self.elements().iter().enumerate() {
            if i > 0 {
                write!(writer, " ")?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(writer, "M{},{}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(writer, "L{},{}", p.x, p.y)?,
                PathEl::ClosePath => write!(writer, "Z")?,
            }
        }
        Ok(())
    }
}

/// Escape text for use in SVG character data and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Round to hundredths of a pixel so the markup stays short.
fn snap(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn snap_point(p: Point) -> Point {
    Point::new(snap(p.x), snap(p.y))
}

fn write_paint(writer: &mut impl Write, attr: &str, color: Color) -> io::Result<()> {
    write!(writer, " {attr}=\"#{:02x}{:02x}{:02x}\"", color.r, color.g, color.b)?;
    if color.a != 255 {
        write!(writer, " {attr}-opacity=\"{}\"", snap(f64::from(color.a) / 255.0))?;
    }
    Ok(())
}

/// A [`Canvas`] that writes SVG markup.
#[derive(Debug)]
pub struct SvgCanvas<W: Write> {
    writer: W,
    viewport: Viewport,
    px_per_pt: f64,
}

impl<W: Write> SvgCanvas<W> {
    /// Start a document sized for `figure`, showing the scene's frame.
    ///
    /// # Errors
    ///
    /// Returns any error from `writer`.
    pub fn new(mut writer: W, scene: &Scene, figure: &Figure, background: Color) -> Result<Self> {
        let px = figure.pixels();
        writeln!(
            writer,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{px}\" height=\"{px}\" \
             viewBox=\"0 0 {px} {px}\">"
        )?;
        write!(writer, "<rect width=\"{px}\" height=\"{px}\"")?;
        write_paint(&mut writer, "fill", background)?;
        writeln!(writer, "/>")?;
        Ok(Self {
            writer,
            viewport: Viewport::fit(scene.frame(), px, MARGIN),
            px_per_pt: figure.px_per_pt(),
        })
    }

    /// Close the document and hand back the writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.writer, "</svg>")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Canvas for SvgCanvas<W> {
    fn fill(&mut self, path: &Path, color: Color) -> Result<()> {
        let viewport = self.viewport;
        let mapped = path.map_points(|p| snap_point(viewport.apply(p)));
        write!(self.writer, "<path d=\"")?;
        mapped.write_to(&mut self.writer)?;
        write!(self.writer, "\"")?;
        write_paint(&mut self.writer, "fill", color)?;
        writeln!(self.writer, "/>")?;
        Ok(())
    }

    fn stroke(&mut self, line: &Line, style: &StrokeStyle) -> Result<()> {
        let viewport = self.viewport;
        let l = line.map_points(|p| snap_point(viewport.apply(p)));
        write!(
            self.writer,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke-width=\"{}\"",
            l.p0.x,
            l.p0.y,
            l.p1.x,
            l.p1.y,
            snap(style.width * self.px_per_pt)
        )?;
        write_paint(&mut self.writer, "stroke", style.color)?;
        writeln!(self.writer, "/>")?;
        Ok(())
    }

    fn text(&mut self, label: &Label) -> Result<()> {
        let at = snap_point(self.viewport.apply(label.position));
        // SVG rotates clockwise.
        let rotation = snap(-label.rotation);
        write!(
            self.writer,
            "<text transform=\"translate({} {}) rotate({rotation})\" \
             font-family=\"monospace\" font-size=\"{}\" text-anchor=\"middle\" \
             dominant-baseline=\"central\" xml:space=\"preserve\"",
            at.x,
            at.y,
            snap(label.style.size * self.px_per_pt)
        )?;
        write_paint(&mut self.writer, "fill", label.style.color)?;
        writeln!(self.writer, ">{}</text>", escape(&label.text))?;
        Ok(())
    }
}

/// Write `scene` as an SVG document.
///
/// # Errors
///
/// Returns any error from `writer`.
pub fn write_svg<W: Write>(
    scene: &Scene,
    figure: &Figure,
    background: Color,
    writer: W,
) -> Result<W> {
    let mut canvas = SvgCanvas::new(writer, scene, figure, background)?;
    scene.replay(&mut canvas)?;
    canvas.finish()
}

/// Render `scene` to an SVG string.
///
/// # Errors
///
/// Never fails in practice; the signature matches [`write_svg`].
pub fn render_svg(scene: &Scene, figure: &Figure, background: Color) -> Result<String> {
    let buffer = write_svg(scene, figure, background, Vec::new())?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, Layer, Mark, TextStyle};

    #[test]
    fn path_to_svg() {
        let path = Path::polygon([Point::new(0., 0.), Point::new(1., 0.), Point::new(1., 1.5)]);
        assert_eq!(path.to_svg(), "M0,0 L1,0 L1,1.5 Z");
        assert_eq!(Path::new().to_svg(), "");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("Christmas & Boxing day"),
            "Christmas &amp; Boxing day"
        );
        assert_eq!(escape("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
    }

    fn scene() -> Scene {
        let mut scene = Scene::new(Frame::square(10.0));
        scene.push(
            Layer::Labels,
            Mark::Text(Label {
                text: "  Fish & chips".into(),
                position: Point::new(0.0, 5.0),
                rotation: 90.0,
                style: TextStyle::new(11.0, Color::BLACK),
            }),
        );
        scene.push(
            Layer::DayTicks,
            Mark::Stroke {
                line: Line::new((0.0, 0.0), (0.0, 10.0)),
                style: StrokeStyle::new(0.72, Color::rgb(0x96, 0x96, 0x96)),
            },
        );
        scene.push(
            Layer::Events,
            Mark::Fill {
                path: Path::polygon([Point::ORIGIN, Point::new(5.0, 0.0), Point::new(0.0, 5.0)]),
                color: Color {
                    a: 128,
                    ..Color::BLACK
                },
            },
        );
        scene
    }

    #[test]
    fn document_structure() {
        let figure = Figure {
            size: 1.0,
            dpi: 100.0,
        };
        let svg = render_svg(&scene(), &figure, Color::WHITE).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("<rect width=\"100\" height=\"100\" fill=\"#ffffff\"/>"));
        // Stroke width converts points to pixels.
        assert!(svg.contains("stroke-width=\"1\" stroke=\"#969696\""), "{svg}");
        assert!(svg.contains("fill-opacity=\"0.5\""), "{svg}");
        assert!(svg.contains(">  Fish &amp; chips</text>"), "{svg}");
        assert!(svg.contains("rotate(-90)"), "{svg}");

        // Back to front: the day tick, then the wedge, then the label.
        let line = svg.find("<line").unwrap();
        let path = svg.find("<path").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(line < path && path < text, "{svg}");
    }

    #[test]
    fn geometry_lands_on_pixels() {
        let figure = Figure {
            size: 1.0,
            dpi: 100.0,
        };
        let svg = render_svg(&scene(), &figure, Color::WHITE).unwrap();
        // 96 usable pixels for 20 units: 4.8 px per unit, centred at 50.
        assert!(svg.contains("x1=\"50\" y1=\"50\" x2=\"50\" y2=\"2\""), "{svg}");
        assert!(svg.contains("d=\"M50,50 L74,50 L50,26 Z\""), "{svg}");
    }
}
