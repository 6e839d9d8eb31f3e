// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar calendars: a year (or any run of days) drawn as a dial.
//!
//! Each day owns an equal slice of the circle, starting from north and
//! running clockwise. Day, week and month starts are radial lines; events
//! are filled wedges just inside the rim with their names written along
//! the radius.
//!
//! The pipeline has three stages:
//!
//! - [`Period`] and [`Event`] describe what to draw. [`Event::clip`] turns
//!   an event into an [`EventSpan`] of angles within a period.
//! - [`CalendarPlot`] lays everything out as a [`Scene`], a list of marks
//!   in plot space tagged with their [`Layer`].
//! - A [`Canvas`] backend replays the scene: [`SvgCanvas`] writes markup
//!   and [`RasterCanvas`] paints an image.
//!
//! # Examples
//!
//! ```
//! use annulus::{render_svg, CalendarPlot, Event, Figure, Period, Style};
//! use chrono::{NaiveDate, Weekday};
//!
//! let period = Period::year(2024).unwrap();
//! let launch = Event::single_day("Launch", NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
//!
//! let plot = CalendarPlot::new(period, 10.0, Weekday::Mon, Style::default());
//! let scene = plot.render(&[launch], Some("2024"), false).unwrap();
//!
//! let svg = render_svg(&scene, &Figure::default(), Style::default().background).unwrap();
//! assert!(svg.contains("Launch</text>"));
//! ```
//!
//! [`CalendarConfig`] collects every setting, with TOML loading, and
//! [`run`] draws and saves a configured calendar in one call.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod circle;
mod config;
mod error;
mod event;
mod line;
mod output;
mod path;
mod period;
mod plot;
mod point;
mod polar;
mod raster;
mod scene;
mod shape;
mod style;
mod svg;
mod viewport;
mod wedge;

pub use crate::circle::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::event::*;
pub use crate::line::*;
pub use crate::output::*;
pub use crate::path::*;
pub use crate::period::*;
pub use crate::plot::*;
pub use crate::point::*;
pub use crate::polar::*;
pub use crate::raster::*;
pub use crate::scene::*;
pub use crate::shape::*;
pub use crate::style::*;
pub use crate::svg::*;
pub use crate::viewport::*;
pub use crate::wedge::*;
