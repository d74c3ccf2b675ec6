//! Command handlers for Bikeshare Explorer CLI
//!
//! This module implements the session flow: resolve a filter selection from
//! flags or prompts, load and filter the trip log, page through raw rows on
//! request, and render the four statistic groups. A `DataSourceError` ends
//! the cycle; it is never papered over with substitute data.

use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::app::dataset::{load_filtered_dataset, Dataset, RawDataPager};
use crate::app::models::FilterSelection;
use crate::app::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::cli::args::{parse_city, parse_day_filter, parse_month_filter, ExploreArgs, StatsArgs};
use crate::cli::{display, prompt};
use crate::errors::{AppError, Result};

/// Handle the explore command
///
/// Runs filter cycles until the user declines to restart. Flags pre-answer
/// the prompts for the first cycle only; each restart selects from scratch.
pub fn handle_explore(args: &ExploreArgs, data_dir: &Path) -> Result<()> {
    args.validate().map_err(AppError::generic)?;

    let mut preset = Some(args);
    loop {
        let selection = match preset.take() {
            Some(args) => resolve_selection(args)?,
            None => prompt::get_filters()?,
        };

        let dataset = load_selection(&selection, data_dir)?;

        if !args.skip_raw && !dataset.is_empty() {
            page_raw_data(&dataset)?;
        }
        show_statistics(&dataset);

        if !prompt::confirm("\nWould you like to restart? [y]es or [n]o: ")? {
            break;
        }
    }
    Ok(())
}

/// Handle the stats command: one selection, no prompts, no paging
pub fn handle_stats(args: &StatsArgs, data_dir: &Path) -> Result<()> {
    args.validate().map_err(AppError::generic)?;

    let selection = FilterSelection {
        city: parse_city(&args.city).map_err(AppError::generic)?,
        month: parse_month_filter(&args.month).map_err(AppError::generic)?,
        day: parse_day_filter(&args.day).map_err(AppError::generic)?,
    };

    let dataset = load_selection(&selection, data_dir)?;
    show_statistics(&dataset);
    Ok(())
}

/// Fill in whatever the explore flags left unanswered
fn resolve_selection(args: &ExploreArgs) -> Result<FilterSelection> {
    // Flag values were validated up front; parse failures cannot occur here
    let city = match &args.city {
        Some(city) => parse_city(city).map_err(AppError::generic)?,
        None => prompt::ask_city()?,
    };
    let month = match &args.month {
        Some(month) => parse_month_filter(month).map_err(AppError::generic)?,
        None => prompt::ask_month()?,
    };
    let day = match &args.day {
        Some(day) => parse_day_filter(day).map_err(AppError::generic)?,
        None => prompt::ask_day()?,
    };

    Ok(FilterSelection { city, month, day })
}

/// Load and filter the selected trip log behind a spinner
fn load_selection(selection: &FilterSelection, data_dir: &Path) -> Result<Dataset> {
    let started = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message(format!("Loading trip log for {}...", selection.city));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = load_filtered_dataset(selection, data_dir);
    spinner.finish_and_clear();
    let dataset = result?;

    info!(
        "Loaded {} matching trips for {} in {:?}",
        dataset.len(),
        selection.city,
        started.elapsed()
    );
    println!(
        "Loaded {} trips for {} (month: {}, day: {}).",
        dataset.len(),
        selection.city,
        selection.month.map_or("all", |m| m.name()),
        selection.day.map_or("all", |d| d.name()),
    );
    if dataset.is_empty() {
        warn!("No trips match the selected filters");
    }

    Ok(dataset)
}

/// Offer the raw data in windows of five until declined or exhausted
///
/// A partial final window still offers to continue; the next, empty window
/// prints the end-of-data notice and ends the loop.
fn page_raw_data(dataset: &Dataset) -> Result<()> {
    println!("Would you like to see the raw data?");
    if !prompt::confirm("Please enter [y]es or [n]o: ")? {
        return Ok(());
    }

    let mut pager = RawDataPager::new(dataset);
    loop {
        let window = pager.next_window();
        if window.is_empty() {
            println!("No more raw data to show.");
            break;
        }
        display::print_raw_window(window);
        if !prompt::confirm("Would you like to continue? [y]es or [n]o: ")? {
            break;
        }
    }
    Ok(())
}

/// Run and render the four statistic passes, with per-pass timing
fn show_statistics(dataset: &Dataset) {
    let started = Instant::now();
    display::print_time_stats(TimeStats::compute(dataset).as_ref());
    finish_pass(started);

    let started = Instant::now();
    display::print_station_stats(StationStats::compute(dataset).as_ref());
    finish_pass(started);

    let started = Instant::now();
    display::print_duration_stats(DurationStats::compute(dataset).as_ref());
    finish_pass(started);

    let started = Instant::now();
    display::print_user_stats(UserStats::compute(dataset).as_ref());
    finish_pass(started);
}

fn finish_pass(started: Instant) {
    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    display::print_divider();
}
