// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing pipeline: a period and its events laid out as a [`Scene`].
//!
//! All distances are in units of the dial radius `R`. Ticks run from the
//! centre to `R`; event wedges stop half a unit short of the rim and the
//! centre disk covers everything within `R - 1`, so each event shows as a
//! band just inside the rim.

use chrono::{Datelike, Weekday};
use log::{debug, info};

use crate::{
    label_rotation, Circle, Event, EventSpan, Frame, Label, Layer, Line, Mark, Period, Point,
    Polar, Result, Scene, Shape, StrokeStyle, Style, TextStyle,
};

/// How far inside the rim event wedges stop.
pub const EVENT_INSET: f64 = 0.5;
/// How far inside the rim the centre disk reaches.
pub const CENTER_INSET: f64 = 1.0;
/// How far inside the rim event names are centred.
pub const EVENT_LABEL_INSET: f64 = 5.0;
/// How far outside the rim month names are centred.
pub const MONTH_LABEL_OFFSET: f64 = 1.0;
/// How far outside the rim week-start day numbers are centred.
pub const WEEK_LABEL_OFFSET: f64 = 0.3;
/// How far outside the rim diagnostic day labels are centred.
pub const DAY_LABEL_OFFSET: f64 = 2.0;
/// How far above the rim the title is centred.
pub const TITLE_OFFSET: f64 = 3.0;

/// Builds a [`Scene`] for one period.
///
/// Each `draw_*` method adds marks on its own [`Layer`], so the finished
/// scene stacks the same way whatever order the methods are called in.
#[derive(Clone, Debug)]
pub struct CalendarPlot {
    period: Period,
    radius: f64,
    week_start: Weekday,
    style: Style,
    scene: Scene,
}

impl CalendarPlot {
    /// Start an empty plot.
    pub fn new(period: Period, radius: f64, week_start: Weekday, style: Style) -> Self {
        let frame = Frame {
            half_width: radius + DAY_LABEL_OFFSET + 1.5,
            bottom: -(radius + DAY_LABEL_OFFSET + 1.5),
            top: radius + TITLE_OFFSET + 1.5,
        };
        Self {
            period,
            radius,
            week_start,
            style,
            scene: Scene::new(frame),
        }
    }

    /// The period being drawn.
    pub fn period(&self) -> &Period {
        &self.period
    }

    /// The dial radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The scene so far.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Finish drawing.
    pub fn into_scene(self) -> Scene {
        self.scene
    }

    fn tick(&mut self, layer: Layer, offset: i64, style: StrokeStyle) {
        let theta = self.period.scale().angle(offset);
        self.scene.push(
            layer,
            Mark::Stroke {
                line: Line::radial(theta, 0.0, self.radius),
                style,
            },
        );
    }

    fn label(&mut self, text: String, theta: f64, r: f64, style: TextStyle) {
        self.scene.push(
            Layer::Labels,
            Mark::Text(Label {
                text,
                position: Polar::new(theta, r).to_point(),
                rotation: label_rotation(theta),
                style,
            }),
        );
    }

    /// A thin line at the start of every day.
    pub fn draw_day_ticks(&mut self) {
        let style = self.style.day_lines;
        for offset in 0..self.period.len() as i64 {
            self.tick(Layer::DayTicks, offset, style);
        }
    }

    /// A line at the start of every week, labelled with the day of the month.
    pub fn draw_week_ticks(&mut self) {
        let scale = self.period.scale();
        let starts: Vec<_> = self.period.week_starts(self.week_start).collect();
        for date in starts {
            let offset = self.period.offset(date);
            self.tick(Layer::WeekTicks, offset, self.style.week_lines);
            self.label(
                date.day().to_string(),
                scale.mid_angle(offset),
                self.radius + WEEK_LABEL_OFFSET,
                self.style.week_text,
            );
        }
    }

    /// A heavy line at the start of every month, labelled with its name.
    pub fn draw_month_ticks(&mut self) {
        let scale = self.period.scale();
        let starts: Vec<_> = self.period.month_starts().collect();
        for date in starts {
            let offset = self.period.offset(date);
            self.tick(Layer::MonthTicks, offset, self.style.month_lines);
            self.label(
                date.format("%b").to_string().to_uppercase(),
                scale.mid_angle(offset),
                self.radius + MONTH_LABEL_OFFSET,
                self.style.month_text,
            );
        }
    }

    /// The line at angle zero where the period starts and ends.
    pub fn draw_start_line(&mut self) {
        self.tick(Layer::StartLine, 0, self.style.start_line);
    }

    /// Fill in one event.
    ///
    /// Returns the span drawn, or `None` if the event was skipped.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Event::clip`]; nothing is drawn in that case.
    pub fn draw_event(&mut self, event: &Event) -> Result<Option<EventSpan>> {
        let Some(span) = event.clip(&self.period)? else {
            return Ok(None);
        };
        let wedge = span.wedge(self.radius - EVENT_INSET);
        self.scene.push(
            Layer::Events,
            Mark::Fill {
                path: wedge.to_path(),
                color: self.style.event_fill,
            },
        );
        if !event.name.is_empty() {
            let theta = span.label_angle(self.period.scale().increment());
            self.label(
                event.label(),
                theta,
                self.radius - EVENT_LABEL_INSET,
                self.style.event_text,
            );
        }
        Ok(Some(span))
    }

    /// Fill in every event, stopping at the first error.
    ///
    /// Returns how many events were drawn.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`CalendarPlot::draw_event`].
    pub fn draw_events<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) -> Result<usize> {
        let mut drawn = 0;
        for event in events {
            if self.draw_event(event)?.is_some() {
                drawn += 1;
            } else {
                debug!("skipped event `{}`", event.name);
            }
        }
        Ok(drawn)
    }

    /// The disk covering the centre, where the wedges converge.
    pub fn draw_center(&mut self) {
        let disk = Circle::new(Point::ORIGIN, self.radius - CENTER_INSET);
        self.scene.push(
            Layer::Center,
            Mark::Fill {
                path: disk.to_path(),
                color: self.style.center,
            },
        );
    }

    /// A title centred above the dial.
    pub fn draw_title(&mut self, title: &str) {
        self.scene.push(
            Layer::Labels,
            Mark::Text(Label {
                text: title.to_string(),
                position: Point::new(0.0, self.radius + TITLE_OFFSET),
                rotation: 0.0,
                style: self.style.title,
            }),
        );
    }

    /// The full date and weekday of every day, outside the rim.
    ///
    /// Crowded at a year's resolution; meant for checking the layout.
    pub fn draw_day_labels(&mut self) {
        let scale = self.period.scale();
        let days: Vec<_> = self.period.iter().collect();
        for (offset, date) in days.into_iter().enumerate() {
            self.label(
                date.format("%Y-%m-%d %a").to_string(),
                scale.mid_angle(offset as i64),
                self.radius + DAY_LABEL_OFFSET,
                self.style.day_text,
            );
        }
    }

    /// Draw everything in order and return the scene.
    ///
    /// # Errors
    ///
    /// Returns the first event error; see [`Event::clip`].
    pub fn render(
        mut self,
        events: &[Event],
        title: Option<&str>,
        day_labels: bool,
    ) -> Result<Scene> {
        if let Some(title) = title {
            self.draw_title(title);
        }
        self.draw_start_line();
        self.draw_day_ticks();
        if day_labels {
            self.draw_day_labels();
        }
        self.draw_month_ticks();
        self.draw_week_ticks();
        let drawn = self.draw_events(events)?;
        self.draw_center();
        info!(
            "laid out {} days and {drawn} of {} events ({} marks)",
            self.period.len(),
            events.len(),
            self.scene.len()
        );
        Ok(self.scene)
    }
}
