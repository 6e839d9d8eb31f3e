// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events and their placement on the dial.
//!
//! An event covers one day or an inclusive range of days. Clipping an event
//! against a [`Period`] produces the [`EventSpan`] to fill. The two shapes of
//! event treat dates outside the period differently:
//!
//! - a multi-day event wholly outside the period is an error, as is one that
//!   ends before it starts;
//! - a single-day event outside the period is skipped.
//!
//! Birthdays recur every year and routinely fall outside a shortened period,
//! which is why the single-day case is lenient.

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::{Error, Period, Result, Wedge};

/// Width that event labels are right-justified to.
pub const LABEL_WIDTH: usize = 30;

/// The days an event covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDates {
    /// A single day.
    SingleDay(NaiveDate),
    /// An inclusive range of days.
    MultiDay {
        /// First day.
        start: NaiveDate,
        /// Last day, included.
        end: NaiveDate,
    },
}

impl EventDates {
    /// The first day.
    pub fn start(&self) -> NaiveDate {
        match *self {
            Self::SingleDay(date) => date,
            Self::MultiDay { start, .. } => start,
        }
    }

    /// Replace the year of every date.
    ///
    /// Returns the first date that has no counterpart in `year`, which can
    /// only be 29 February.
    pub fn with_year(&self, year: i32) -> Result<Self, NaiveDate> {
        let move_date = |d: NaiveDate| d.with_year(year).ok_or(d);
        Ok(match *self {
            Self::SingleDay(date) => Self::SingleDay(move_date(date)?),
            Self::MultiDay { start, end } => Self::MultiDay {
                start: move_date(start)?,
                end: move_date(end)?,
            },
        })
    }
}

/// Whether the year of an event's dates matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recurrence {
    /// The dates are taken as written.
    #[default]
    Fixed,
    /// The dates repeat every year; their year is replaced with the year the
    /// period starts in.
    Annual,
}

/// A named event to fill in on the dial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Display name.
    pub name: String,
    /// The days covered.
    pub dates: EventDates,
    /// Whether the year of `dates` is ignored.
    pub recurrence: Recurrence,
}

impl Event {
    /// A fixed single-day event.
    pub fn single_day(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dates: EventDates::SingleDay(date),
            recurrence: Recurrence::Fixed,
        }
    }

    /// A fixed event covering `start` through `end`, both included.
    pub fn multi_day(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dates: EventDates::MultiDay { start, end },
            recurrence: Recurrence::Fixed,
        }
    }

    /// Make the event recur every year.
    #[must_use]
    pub fn recurring(mut self) -> Self {
        self.recurrence = Recurrence::Annual;
        self
    }

    /// Does the event recur every year?
    pub fn is_recurring(&self) -> bool {
        self.recurrence == Recurrence::Annual
    }

    /// The event's dates as they apply to `period`.
    ///
    /// Recurring events are moved into the year the period starts in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecurringDate`] when a recurring date does
    /// not exist in that year.
    pub fn dates_in(&self, period: &Period) -> Result<EventDates> {
        match self.recurrence {
            Recurrence::Fixed => Ok(self.dates),
            Recurrence::Annual => {
                let year = period.start_year();
                debug!("recurring event `{}`, moving to {year}", self.name);
                self.dates
                    .with_year(year)
                    .map_err(|date| Error::InvalidRecurringDate {
                        name: self.name.clone(),
                        date,
                        year,
                    })
            }
        }
    }

    /// Fit the event onto `period`.
    ///
    /// Returns `Ok(None)` for a single-day event outside the period.
    ///
    /// Range checks compare against the period's exclusive end, so an event
    /// on that day is still accepted and lands one increment past the full
    /// turn, on top of the first day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EventOutsidePeriod`] for a multi-day event wholly
    /// outside the period, [`Error::EventStartAfterEnd`] for one that ends
    /// before it starts, and [`Error::InvalidRecurringDate`] as for
    /// [`Event::dates_in`].
    pub fn clip(&self, period: &Period) -> Result<Option<EventSpan>> {
        debug!("considering event `{}`", self.name);
        let scale = period.scale();
        let (period_start, period_end) = (period.start(), period.end());

        let (start, end, points) = match self.dates_in(period)? {
            EventDates::MultiDay { start, end } => {
                debug!("multi-day event, start={start}, end={end}");
                if start > period_end || end < period_start {
                    return Err(Error::EventOutsidePeriod {
                        name: self.name.clone(),
                        start,
                        end,
                        period_start,
                        period_end,
                    });
                }
                if start > end {
                    return Err(Error::EventStartAfterEnd {
                        name: self.name.clone(),
                        start,
                        end,
                    });
                }
                let start = if start < period_start {
                    debug!("event starts before period, clipping to {period_start}");
                    period_start
                } else {
                    start
                };
                let end = if end > period_end {
                    debug!("event ends after period, clipping to {period_end}");
                    period_end
                } else {
                    end
                };
                let days = end.signed_duration_since(start).num_days();
                // A one-day range still needs two samples to enclose anything.
                let points = usize::try_from(days + 1).unwrap_or(0).max(2);
                (start, end, points)
            }
            EventDates::SingleDay(date) => {
                if date < period_start || date > period_end {
                    debug!(
                        "single-day event out of range: {date} not in {period_start}..={period_end}"
                    );
                    return Ok(None);
                }
                debug!("single-day event in range");
                (date, date, 2)
            }
        };

        let span = EventSpan {
            start,
            end,
            start_angle: scale.angle(period.offset(start)),
            end_angle: scale.angle(period.offset(end) + 1),
            points,
        };
        debug!(
            "angle_start, angle_end = {}, {}; {} points",
            span.start_angle, span.end_angle, span.points
        );
        Ok(Some(span))
    }

    /// The name padded for drawing inside the dial.
    pub fn label(&self) -> String {
        pad_label(&self.name)
    }
}

/// Right-justify `name` to [`LABEL_WIDTH`] columns.
///
/// Padding pushes the visible text towards the rim when the label is centred
/// on a radius.
pub fn pad_label(name: &str) -> String {
    format!("{name:>width$}", width = LABEL_WIDTH)
}

/// The part of the dial an event occupies after clipping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventSpan {
    /// First day drawn.
    pub start: NaiveDate,
    /// Last day drawn.
    pub end: NaiveDate,
    /// Angle of the start of the first day.
    pub start_angle: f64,
    /// Angle of the end of the last day.
    pub end_angle: f64,
    /// Samples along the outer edge of the wedge.
    pub points: usize,
}

impl EventSpan {
    /// Angular width.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Number of days drawn.
    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    /// The filled shape for this span at `radius`.
    pub fn wedge(&self, radius: f64) -> Wedge {
        Wedge::new(radius, self.start_angle, self.end_angle, self.points)
    }

    /// Angle the label is centred on: the middle of the first day.
    pub fn label_angle(&self, increment: f64) -> f64 {
        self.start_angle + 0.5 * increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::TAU;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_2019() -> Period {
        Period::year(2019).unwrap()
    }

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn new_years_day() {
        let period = year_2019();
        let inc = period.scale().increment();
        let event = Event::single_day("New year's day", ymd(1, 1, 1)).recurring();
        let span = event.clip(&period).unwrap().unwrap();
        assert_eq!(span.start, ymd(2019, 1, 1));
        assert_eq!(span.start_angle, 0.0);
        assert_approx_eq(span.end_angle, inc);
        assert_eq!(span.points, 2);
    }

    #[test]
    fn christmas_and_boxing_day() {
        let period = year_2019();
        let inc = period.scale().increment();
        let event =
            Event::multi_day("Christmas & Boxing day", ymd(1, 12, 25), ymd(1, 12, 26)).recurring();
        let span = event.clip(&period).unwrap().unwrap();
        assert_approx_eq(span.start_angle, 358.0 * inc);
        assert_approx_eq(span.end_angle, 360.0 * inc);
        assert_approx_eq(span.sweep(), 2.0 * inc);
        assert_eq!(span.days(), 2);
        assert_eq!(span.points, 2);
    }

    #[test]
    fn recurring_year_is_rewritten() {
        let period = year_2019();
        for year in [1, 1999, 2017, 2030] {
            let event = Event::single_day("Dad birthday", ymd(year, 6, 7)).recurring();
            let dates = event.dates_in(&period).unwrap();
            assert_eq!(dates, EventDates::SingleDay(ymd(2019, 6, 7)));
        }
        let fixed = Event::single_day("Once", ymd(2017, 6, 7));
        assert_eq!(
            fixed.dates_in(&period).unwrap(),
            EventDates::SingleDay(ymd(2017, 6, 7))
        );
    }

    #[test]
    fn leap_day_in_common_year() {
        let event = Event::single_day("Leap", ymd(2016, 2, 29)).recurring();
        let err = event.clip(&year_2019()).unwrap_err();
        assert!(
            matches!(err, Error::InvalidRecurringDate { year: 2019, .. }),
            "{err}"
        );
        let leap_year = Period::year(2020).unwrap();
        assert!(event.clip(&leap_year).unwrap().is_some());
    }

    #[test]
    fn multi_day_width() {
        let period = year_2019();
        let inc = period.scale().increment();
        let event = Event::multi_day("Trip", ymd(2019, 3, 10), ymd(2019, 3, 16));
        let span = event.clip(&period).unwrap().unwrap();
        assert_eq!(span.days(), 7);
        assert_approx_eq(span.sweep(), 7.0 * inc);
        assert_eq!(span.points, 7);
    }

    #[test]
    fn multi_day_clipped_at_start() {
        let period = year_2019();
        let inc = period.scale().increment();
        let event = Event::multi_day("Holiday", ymd(2018, 12, 28), ymd(2019, 1, 3));
        let span = event.clip(&period).unwrap().unwrap();
        assert_eq!(span.start, period.start());
        assert_eq!(span.start_angle, 0.0);
        assert_approx_eq(span.end_angle, 3.0 * inc);
    }

    #[test]
    fn multi_day_clipped_at_end() {
        let period = year_2019();
        let event = Event::multi_day("Holiday", ymd(2019, 12, 30), ymd(2020, 1, 5));
        let span = event.clip(&period).unwrap().unwrap();
        assert_eq!(span.end, period.end());
        assert!(span.end_angle > TAU, "{}", span.end_angle);
    }

    #[test]
    fn multi_day_outside_is_an_error() {
        let period = year_2019();
        let before = Event::multi_day("Old", ymd(2018, 3, 1), ymd(2018, 3, 4));
        assert!(matches!(
            before.clip(&period),
            Err(Error::EventOutsidePeriod { .. })
        ));
        let after = Event::multi_day("Later", ymd(2020, 3, 1), ymd(2020, 3, 4));
        assert!(matches!(
            after.clip(&period),
            Err(Error::EventOutsidePeriod { .. })
        ));
    }

    #[test]
    fn recurring_multi_day_outside_is_an_error() {
        // Moved into 2019, Christmas still misses March.
        let period = Period::new(ymd(2019, 3, 1), ymd(2019, 4, 1)).unwrap();
        let christmas =
            Event::multi_day("Christmas & Boxing day", ymd(1, 12, 25), ymd(1, 12, 26)).recurring();
        let err = christmas.clip(&period).unwrap_err();
        assert!(
            matches!(
                err,
                Error::EventOutsidePeriod { start, .. } if start == ymd(2019, 12, 25)
            ),
            "{err}"
        );
    }

    #[test]
    fn reversed_and_outside_reports_outside() {
        let event = Event::multi_day("Backwards", ymd(2018, 5, 4), ymd(2018, 5, 1));
        assert!(matches!(
            event.clip(&year_2019()),
            Err(Error::EventOutsidePeriod { .. })
        ));
    }

    #[test]
    fn multi_day_reversed_is_an_error() {
        let event = Event::multi_day("Backwards", ymd(2019, 5, 4), ymd(2019, 5, 1));
        assert!(matches!(
            event.clip(&year_2019()),
            Err(Error::EventStartAfterEnd { .. })
        ));
    }

    #[test]
    fn single_day_outside_is_skipped() {
        let period = Period::new(ymd(2019, 3, 1), ymd(2019, 4, 1)).unwrap();
        let birthday = Event::single_day("Mum birthday", ymd(1, 8, 9)).recurring();
        assert_eq!(birthday.clip(&period).unwrap(), None);
        let early = Event::single_day("Early", ymd(2019, 2, 28));
        assert_eq!(early.clip(&period).unwrap(), None);
    }

    #[test]
    fn single_day_at_exclusive_end_is_kept() {
        let period = Period::new(ymd(2019, 3, 1), ymd(2019, 4, 1)).unwrap();
        let event = Event::single_day("Edge", ymd(2019, 4, 1));
        let span = event.clip(&period).unwrap().unwrap();
        assert_approx_eq(span.start_angle, TAU);
    }

    #[test]
    fn single_element_range_gets_two_points() {
        let event = Event::multi_day("One", ymd(2019, 7, 1), ymd(2019, 7, 1));
        let span = event.clip(&year_2019()).unwrap().unwrap();
        assert_eq!(span.points, 2);
        assert_eq!(span.days(), 1);
    }

    #[test]
    fn labels_are_right_justified() {
        let event = Event::single_day("Good Friday", ymd(2017, 4, 19));
        let label = event.label();
        assert_eq!(label.len(), LABEL_WIDTH);
        assert!(label.ends_with("Good Friday"));
        let long = "x".repeat(40);
        assert_eq!(pad_label(&long), long);
    }

    #[test]
    fn wedge_from_span() {
        let period = year_2019();
        let inc = period.scale().increment();
        let span = Event::single_day("Day", ymd(2019, 1, 1))
            .clip(&period)
            .unwrap()
            .unwrap();
        let wedge = span.wedge(9.5);
        assert_approx_eq(wedge.sweep(), inc);
        assert_approx_eq(span.label_angle(inc), inc / 2.0);
    }
}
