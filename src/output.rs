// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing finished calendars to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::str::FromStr;

use ab_glyph::FontArc;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    default_font, load_font, render_raster, write_svg, CalendarConfig, CalendarPlot, Error,
    Figure, Result, Scene, Style,
};

/// An output file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Scalable vector graphics.
    Svg,
    /// Portable network graphics.
    Png,
}

impl Format {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where and how to save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the files go in.
    pub dir: PathBuf,
    /// File name without extension.
    pub name: String,
    /// One file is written per format.
    pub formats: Vec<Format>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            name: "annulus".to_string(),
            formats: vec![Format::Svg, Format::Png],
        }
    }
}

impl OutputConfig {
    /// Path of the file for `format`.
    pub fn path(&self, format: Format) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, format.extension()))
    }
}

/// Save `scene` in every requested format and return the paths written.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Image`] if a file cannot be written.
pub fn export(
    scene: &Scene,
    figure: &Figure,
    style: &Style,
    font: &FontArc,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&output.dir)?;
    let mut written = Vec::with_capacity(output.formats.len());
    for &format in &output.formats {
        let path = output.path(format);
        match format {
            Format::Svg => {
                let writer = BufWriter::new(File::create(&path)?);
                write_svg(scene, figure, style.background, writer)?;
            }
            Format::Png => {
                let image = render_raster(scene, figure, style.background, font)?;
                image.save_with_format(&path, image::ImageFormat::Png)?;
            }
        }
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Draw the calendar `config` describes and save it.
///
/// # Errors
///
/// Returns configuration, event, font and I/O errors; nothing is written
/// if the configuration or an event is invalid.
pub fn run(config: &CalendarConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let period = config.period()?;
    info!(
        "drawing {} to {} ({} days)",
        period.start(),
        period.end(),
        period.len()
    );
    let plot = CalendarPlot::new(period, config.radius, config.week_start, config.style.clone());
    let title = config.title();
    let scene = plot.render(&config.events(), Some(&title), config.day_labels)?;

    // Only raster output reads the font; SVG names a generic family.
    let font = match &config.font {
        Some(path) if config.output.formats.contains(&Format::Png) => load_font(path)?,
        _ => default_font()?,
    };
    export(&scene, &config.figure, &config.style, &font, &config.output)
}
