// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for annulus.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for annulus operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can abort building or exporting a calendar.
#[derive(Error, Debug)]
pub enum Error {
    /// The period's end is not after its start.
    #[error("empty period: end {end} is not after start {start}")]
    EmptyPeriod {
        /// Requested first day.
        start: NaiveDate,
        /// Requested exclusive end.
        end: NaiveDate,
    },

    /// A multi-day event lies wholly outside the period.
    #[error(
        "event `{name}` ({start} to {end}) lies outside the period \
         {period_start} to {period_end}"
    )]
    EventOutsidePeriod {
        /// Event name.
        name: String,
        /// Event start, after any re-anchoring.
        start: NaiveDate,
        /// Event end, after any re-anchoring.
        end: NaiveDate,
        /// First day of the period.
        period_start: NaiveDate,
        /// Exclusive end of the period.
        period_end: NaiveDate,
    },

    /// A multi-day event ends before it starts.
    #[error("event `{name}` starts on {start}, after its end on {end}")]
    EventStartAfterEnd {
        /// Event name.
        name: String,
        /// Event start.
        start: NaiveDate,
        /// Event end.
        end: NaiveDate,
    },

    /// A recurring date has no counterpart in the period's year.
    #[error("recurring event `{name}`: {date} does not exist in {year}")]
    InvalidRecurringDate {
        /// Event name.
        name: String,
        /// The date as configured.
        date: NaiveDate,
        /// The year it was moved into.
        year: i32,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A colour string is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid colour `{0}`")]
    InvalidColor(String),

    /// An output format name is not recognised.
    #[error("unknown output format `{0}` (expected svg or png)")]
    UnknownFormat(String),

    /// Reading the configuration file failed.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for a calendar.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A font file could not be read or parsed.
    #[error("failed to load font {}: {reason}", path.display())]
    Font {
        /// Path of the font file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
