// Copyright 2026 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line front end: draw a configured calendar and save it.

use std::path::PathBuf;

use annulus::{run, CalendarConfig, Format, Period};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::debug;

/// Draw a year as a circular calendar.
#[derive(Parser, Debug)]
#[command(name = "annulus", version, about)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First day drawn (YYYY-MM-DD).
    #[arg(long, conflicts_with = "year")]
    start: Option<NaiveDate>,

    /// Day after the last day drawn (YYYY-MM-DD).
    #[arg(long, conflicts_with = "year")]
    end: Option<NaiveDate>,

    /// Draw one calendar year.
    #[arg(long)]
    year: Option<i32>,

    /// Directory for the output files.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output file name, without extension.
    #[arg(short, long)]
    name: Option<String>,

    /// Output format; repeat for several.
    #[arg(short, long = "format")]
    formats: Vec<Format>,

    /// Font used for PNG labels.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Title above the dial.
    #[arg(long)]
    title: Option<String>,

    /// Label every day with its date.
    #[arg(long)]
    day_labels: bool,

    /// More logging; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Load the config file, if any, and apply the flags on top.
    fn config(&self) -> Result<CalendarConfig> {
        let mut config = match &self.config {
            Some(path) => CalendarConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => CalendarConfig::default(),
        };
        if let Some(year) = self.year {
            let period = Period::year(year).with_context(|| format!("invalid --year {year}"))?;
            config.start = period.start();
            config.end = period.end();
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(end) = self.end {
            config.end = end;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir.clone_from(dir);
        }
        if let Some(name) = &self.name {
            config.output.name.clone_from(name);
        }
        if !self.formats.is_empty() {
            config.output.formats.clone_from(&self.formats);
        }
        if self.font.is_some() {
            config.font.clone_from(&self.font);
        }
        if self.title.is_some() {
            config.title.clone_from(&self.title);
        }
        config.day_labels |= self.day_labels;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();
    debug!("{args:?}");

    let config = args.config()?;
    let written = run(&config).context("failed to draw the calendar")?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "annulus",
            "--year",
            "2024",
            "--format",
            "svg",
            "--name",
            "leap",
            "--title",
            "Leap year",
            "-vv",
        ]);
        assert_eq!(args.log_filter(), "debug");
        let config = args.config().unwrap();
        assert_eq!(config.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(config.output.formats, vec![Format::Svg]);
        assert_eq!(config.output.name, "leap");
        assert_eq!(config.title(), "Leap year");
    }

    #[test]
    fn year_conflicts_with_start() {
        let parsed = Args::try_parse_from(["annulus", "--year", "2024", "--start", "2024-02-01"]);
        assert!(parsed.is_err(), "--year and --start should conflict");
    }

    #[test]
    fn year_out_of_range_is_an_error() {
        for year in ["2147483647", "300000"] {
            let args = Args::parse_from(["annulus", "--year", year]);
            assert!(args.config().is_err(), "--year {year} accepted");
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["annulus", "--format", "pdf"]).is_err());
    }
}
