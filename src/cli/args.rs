//! Command-line argument parsing for Bikeshare Explorer
//!
//! This module defines the CLI structure using clap derive macros. The
//! `explore` command runs the interactive session; every prompt answer can be
//! pre-supplied through flags, and `stats` produces the same statistics
//! without any prompting at all.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::models::{City, Day, Month};

/// Bikeshare Explorer - descriptive statistics over US bikeshare trip logs
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare_explorer",
    version,
    about = "Explore US bikeshare trip logs by city, month and day",
    long_about = "An interactive tool for exploring bicycle-share trip logs.
Select a city, optionally narrow to a month and day of week, page through raw
trips, and review travel-time, station, duration and rider statistics."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing the city trip logs
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explore a trip log interactively
    Explore(ExploreArgs),

    /// Print all statistics for one filter selection, without prompts
    Stats(StatsArgs),
}

/// Arguments for the explore command
///
/// Flags pre-answer the corresponding prompt for the first filter cycle;
/// a restarted cycle prompts from scratch.
#[derive(Args, Debug, Clone, Default)]
pub struct ExploreArgs {
    /// City to analyze ("chicago", "new york city", "washington")
    #[arg(short, long)]
    pub city: Option<String>,

    /// Month filter, "january" through "june", or "all"
    #[arg(short, long)]
    pub month: Option<String>,

    /// Day-of-week filter, "monday" through "sunday", or "all"
    #[arg(short, long)]
    pub day: Option<String>,

    /// Skip the raw-data paging prompt entirely
    #[arg(long)]
    pub skip_raw: bool,
}

/// Arguments for the stats command
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// City to analyze ("chicago", "new york city", "washington")
    #[arg(short, long)]
    pub city: String,

    /// Month filter, "january" through "june", or "all"
    #[arg(short, long, default_value = "all")]
    pub month: String,

    /// Day-of-week filter, "monday" through "sunday", or "all"
    #[arg(short, long, default_value = "all")]
    pub day: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level requested by flags, if any
    ///
    /// `None` defers to the configured default level.
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

/// Parse a month flag value: a month name or "all" (None)
pub fn parse_month_filter(value: &str) -> Result<Option<Month>, String> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Month::from_name(value)
        .map(Some)
        .ok_or_else(|| format!("Unknown month: {value:?} (january-june or \"all\")"))
}

/// Parse a day flag value: a weekday name or "all" (None)
pub fn parse_day_filter(value: &str) -> Result<Option<Day>, String> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Day::from_name(value)
        .map(Some)
        .ok_or_else(|| format!("Unknown day: {value:?} (monday-sunday or \"all\")"))
}

/// Parse a city flag value
pub fn parse_city(value: &str) -> Result<City, String> {
    City::from_name(value)
        .ok_or_else(|| format!("Unknown city: {value:?} (chicago, new york city, washington)"))
}

impl ExploreArgs {
    /// Check flag values early so a typo fails before any prompting
    pub fn validate(&self) -> Result<(), String> {
        if let Some(city) = &self.city {
            parse_city(city)?;
        }
        if let Some(month) = &self.month {
            parse_month_filter(month)?;
        }
        if let Some(day) = &self.day {
            parse_day_filter(day)?;
        }
        Ok(())
    }
}

impl StatsArgs {
    /// Check flag values
    pub fn validate(&self) -> Result<(), String> {
        parse_city(&self.city)?;
        parse_month_filter(&self.month)?;
        parse_day_filter(&self.day)?;
        Ok(())
    }
}
