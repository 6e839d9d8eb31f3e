// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar configuration.
//!
//! Every setting has a default, so an empty file (or no file at all) draws
//! 2019 with a handful of birthdays and UK bank holidays. A TOML file
//! overrides any subset:
//!
//! ```toml
//! start = "2024-01-01"
//! end = "2025-01-01"
//! week_start = "Sun"
//!
//! [[birthdays]]
//! name = "Ada"
//! start = "1815-12-10"
//!
//! [[holidays]]
//! name = "Summer break"
//! start = "2024-07-22"
//! end = "2024-08-30"
//! recurring = false
//!
//! [output]
//! formats = ["svg"]
//! ```

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, Event, Figure, OutputConfig, Period, Result, Style};

/// One event as written in the configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Display name.
    pub name: String,
    /// First (or only) day.
    pub start: NaiveDate,
    /// Last day, included, for events longer than a day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Ignore the year of the dates.
    #[serde(default = "default_recurring")]
    pub recurring: bool,
}

fn default_recurring() -> bool {
    true
}

impl EventConfig {
    fn recurring(name: &str, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
            recurring: true,
        }
    }
}

impl From<&EventConfig> for Event {
    fn from(config: &EventConfig) -> Self {
        let event = match config.end {
            Some(end) => Self::multi_day(config.name.clone(), config.start, end),
            None => Self::single_day(config.name.clone(), config.start),
        };
        if config.recurring {
            event.recurring()
        } else {
            event
        }
    }
}

/// Everything needed to draw and save a calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// First day shown.
    pub start: NaiveDate,
    /// Day after the last day shown.
    pub end: NaiveDate,
    /// Dial radius, in plot units.
    pub radius: f64,
    /// Day that starts a week.
    pub week_start: Weekday,
    /// Title above the dial; defaults to the start year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Label every day with its full date.
    pub day_labels: bool,
    /// Font file replacing the built-in one for raster labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
    /// Output size.
    pub figure: Figure,
    /// Colours and line widths.
    pub style: Style,
    /// Birthdays and other personal dates.
    pub birthdays: Vec<EventConfig>,
    /// Public holidays.
    pub holidays: Vec<EventConfig>,
    /// Where to write the results.
    pub output: OutputConfig,
}

/// A date from one of the literals below.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start: date(2019, 1, 1),
            end: date(2020, 1, 1),
            radius: 10.0,
            week_start: Weekday::Mon,
            title: None,
            day_labels: false,
            font: None,
            figure: Figure::default(),
            style: Style::default(),
            birthdays: vec![
                EventConfig::recurring("Dad birthday", date(1, 6, 7), None),
                EventConfig::recurring("Mum birthday", date(1, 8, 9), None),
            ],
            holidays: vec![
                EventConfig::recurring("New year's day", date(1, 1, 1), None),
                EventConfig::recurring(
                    "Christmas & Boxing day",
                    date(1, 12, 25),
                    Some(date(1, 12, 26)),
                ),
                EventConfig::recurring("Summer bank holiday", date(2017, 8, 26), None),
                EventConfig::recurring("Spring bank holiday", date(2017, 5, 27), None),
                EventConfig::recurring("Early may bank holiday", date(2017, 5, 6), None),
                EventConfig::recurring("Easter Monday", date(2017, 4, 22), None),
                EventConfig::recurring("Good Friday", date(2017, 4, 19), None),
            ],
            output: OutputConfig::default(),
        }
    }
}

impl CalendarConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML, unknown keys or
    /// values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read, or the
    /// errors of [`CalendarConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check values that would produce a meaningless drawing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a non-positive radius or figure,
    /// or [`Error::EmptyPeriod`] if `end` is not after `start`.
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        self.figure.validate()?;
        self.period().map(drop)
    }

    /// The period to draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPeriod`] if `end` is not after `start`.
    pub fn period(&self) -> Result<Period> {
        Period::new(self.start, self.end)
    }

    /// The title, falling back to the start year.
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| chrono::Datelike::year(&self.start).to_string())
    }

    /// Every configured event: birthdays first, then holidays.
    pub fn events(&self) -> Vec<Event> {
        self.birthdays
            .iter()
            .chain(&self.holidays)
            .map(Event::from)
            .collect()
    }
}
