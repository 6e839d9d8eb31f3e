// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The range of days shown on the dial.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{AngularScale, Error, Result};

/// A contiguous, half-open range of days `[start, end)`.
///
/// A period is never empty, so its [`AngularScale`] is always well defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    days: Vec<NaiveDate>,
    end: NaiveDate,
}

impl Period {
    /// Expand `[start, end)` into its days.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPeriod`] if `end` is not after `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(Error::EmptyPeriod { start, end });
        }
        let days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d < end).collect();
        Ok(Self { days, end })
    }

    /// The calendar year `year`, from 1 January up to the next 1 January.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the year is outside the range
    /// `chrono` can represent.
    pub fn year(year: i32) -> Result<Self> {
        let first = |y| {
            NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| Error::InvalidConfig(format!("year {y} is out of range")))
        };
        Self::new(first(year)?, first(year + 1)?)
    }

    /// The first day.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.days[0]
    }

    /// The day after the last day.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The last day shown.
    #[inline]
    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Number of days in the period.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; provided for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The days, in order.
    #[inline]
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Iterate over the days.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Is `date` one of the period's days?
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date < self.end
    }

    /// Signed number of days from the start of the period to `date`.
    #[inline]
    pub fn offset(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.start()).num_days()
    }

    /// The day `offset` days into the period.
    pub fn date_at(&self, offset: usize) -> Option<NaiveDate> {
        self.days.get(offset).copied()
    }

    /// The year the period starts in.
    #[inline]
    pub fn start_year(&self) -> i32 {
        self.start().year()
    }

    /// The day-to-angle scale for this period.
    pub fn scale(&self) -> AngularScale {
        AngularScale::new(self.len())
    }

    /// Angle of the line at the start of `date`.
    pub fn angle_of(&self, date: NaiveDate) -> f64 {
        self.scale().angle(self.offset(date))
    }

    /// Days falling on `weekday`.
    pub fn week_starts(&self, weekday: Weekday) -> impl Iterator<Item = NaiveDate> + '_ {
        self.iter().filter(move |d| d.weekday() == weekday)
    }

    /// Days that are the first of a month.
    pub fn month_starts(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.iter().filter(|d| d.day() == 1)
    }

    /// Every day with its classification.
    pub fn ticks(&self, week_start: Weekday) -> impl Iterator<Item = Tick> + '_ {
        self.iter().enumerate().map(move |(offset, date)| Tick {
            date,
            offset,
            kind: TickKind::classify(date, week_start),
        })
    }
}

/// How significant a tick is.
///
/// Variants are ordered from least to most significant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickKind {
    /// An ordinary day.
    Day,
    /// The first day of a week.
    Week,
    /// The first day of a month.
    Month,
}

impl TickKind {
    /// The most significant kind `date` qualifies for.
    pub fn classify(date: NaiveDate, week_start: Weekday) -> Self {
        if date.day() == 1 {
            Self::Month
        } else if date.weekday() == week_start {
            Self::Week
        } else {
            Self::Day
        }
    }
}

/// A day of the period with its position and classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// The day.
    pub date: NaiveDate,
    /// Days since the start of the period.
    pub offset: usize,
    /// Classification.
    pub kind: TickKind,
}
