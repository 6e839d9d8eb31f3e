// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colours and line/text styles.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An sRGB colour with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// An opaque grey, `level` from 0 (black) to 1 (white).
    pub fn grey(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(v, v, v)
    }

    /// The colour as `[r, g, b, a]`.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// The nine greys the default style is drawn from, lightest first.
pub const GREYS: [Color; 9] = [
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0xf0, 0xf0, 0xf0),
    Color::rgb(0xd9, 0xd9, 0xd9),
    Color::rgb(0xbd, 0xbd, 0xbd),
    Color::rgb(0x96, 0x96, 0x96),
    Color::rgb(0x73, 0x73, 0x73),
    Color::rgb(0x52, 0x52, 0x52),
    Color::rgb(0x25, 0x25, 0x25),
    Color::rgb(0x00, 0x00, 0x00),
];

/// How to stroke a line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Line width in points.
    pub width: f64,
    /// Line colour.
    pub color: Color,
}

impl StrokeStyle {
    /// Create a stroke style.
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// How to set text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    /// Text colour.
    pub color: Color,
}

impl TextStyle {
    /// Create a text style.
    pub const fn new(size: f64, color: Color) -> Self {
        Self { size, color }
    }
}

/// Every style used on the dial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Background of the whole figure.
    pub background: Color,
    /// Day tick lines.
    pub day_lines: StrokeStyle,
    /// Week-start tick lines.
    pub week_lines: StrokeStyle,
    /// Month-start tick lines.
    pub month_lines: StrokeStyle,
    /// The line marking where the period starts and ends.
    pub start_line: StrokeStyle,
    /// Event wedge fill.
    pub event_fill: Color,
    /// Event names.
    pub event_text: TextStyle,
    /// The disk covering the centre of the dial.
    pub center: Color,
    /// Month names.
    pub month_text: TextStyle,
    /// Week-start day numbers.
    pub week_text: TextStyle,
    /// Diagnostic per-day labels.
    pub day_text: TextStyle,
    /// The title above the dial.
    pub title: TextStyle,
}

/// Default font size for labels, in points.
pub const LABEL_FONT_SIZE: f64 = 11.0;

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            day_lines: StrokeStyle::new(0.5, GREYS[4]),
            week_lines: StrokeStyle::new(1.0, GREYS[6]),
            month_lines: StrokeStyle::new(2.0, GREYS[7]),
            start_line: StrokeStyle::new(3.0, GREYS[8]),
            event_fill: GREYS[4],
            event_text: TextStyle::new(LABEL_FONT_SIZE, GREYS[5]),
            center: Color::WHITE,
            month_text: TextStyle::new(LABEL_FONT_SIZE, Color::BLACK),
            week_text: TextStyle::new(LABEL_FONT_SIZE, Color::BLACK),
            day_text: TextStyle::new(LABEL_FONT_SIZE, Color::grey(0.75)),
            title: TextStyle::new(30.0, Color::BLACK),
        }
    }
}
