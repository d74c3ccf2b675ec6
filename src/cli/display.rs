//! Console rendering of statistics and raw records
//!
//! The statistics engine returns structured results; this module turns them
//! into the session's console output. Every renderer accepts the pass's
//! `Option` result and prints a "no data" notice for `None`, so an empty
//! filtered dataset flows through the whole session without special-casing.

use crate::app::models::TripRecord;
use crate::app::stats::{DurationStats, StationStats, TimeStats, UserStats};

/// Session divider, matching the prompt section breaks
pub fn print_divider() {
    println!("{}", "-".repeat(40));
}

const NO_DATA: &str = "No trips match the selected filters.";

/// Render the temporal pass
pub fn print_time_stats(stats: Option<&TimeStats>) {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    match stats {
        Some(stats) => {
            println!("The most common month is: {}.", stats.most_common_month);
            println!("The most common day of week is: {}.", stats.most_common_day);
            println!("The most common hour is: {}.", stats.most_common_hour);
        }
        None => println!("{NO_DATA}"),
    }
}

/// Render the station pass
pub fn print_station_stats(stats: Option<&StationStats>) {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    match stats {
        Some(stats) => {
            println!(
                "The most commonly used start station is: {}.",
                stats.top_start_station
            );
            println!(
                "The most commonly used end station is: {}.",
                stats.top_end_station
            );
            println!(
                "The most frequent trip is: {} to {}.",
                stats.top_trip.0, stats.top_trip.1
            );
        }
        None => println!("{NO_DATA}"),
    }
}

/// Render the duration pass
pub fn print_duration_stats(stats: Option<&DurationStats>) {
    println!("\nCalculating Trip Duration...\n");
    let Some(stats) = stats else {
        println!("{NO_DATA}");
        return;
    };

    println!(
        "The total travel time is: {} ({} seconds).",
        format_duration_secs(stats.total_secs),
        stats.total_secs
    );
    println!(
        "The mean travel time is: {} ({:.1} seconds).",
        format_duration_secs(stats.mean_secs.round() as u64),
        stats.mean_secs
    );

    if let Some(by_user_type) = &stats.by_user_type {
        println!("Total travel time per user category:");
        for (user_type, aggregate) in by_user_type {
            println!(
                "  * {}: {}",
                user_type,
                format_duration_secs(aggregate.total_secs)
            );
        }
        println!("Mean travel time per user category:");
        for (user_type, aggregate) in by_user_type {
            println!(
                "  * {}: {}",
                user_type,
                format_duration_secs(aggregate.mean_secs.round() as u64)
            );
        }
    }

    println!("Mean travel time per hour of the day:");
    for (hour, mean_secs) in &stats.mean_by_hour {
        println!(
            "  * {:02}: {}",
            hour,
            format_duration_secs(mean_secs.round() as u64)
        );
    }
}

/// Render the user pass
pub fn print_user_stats(stats: Option<&UserStats>) {
    println!("\nCalculating User Stats...\n");
    let Some(stats) = stats else {
        println!("{NO_DATA}");
        return;
    };

    if let Some(user_type_counts) = &stats.user_type_counts {
        println!("The users category and quantity are:");
        for (user_type, count) in user_type_counts {
            println!("  * {user_type}: {count}");
        }
    }

    if let Some(gender_counts) = &stats.gender_counts {
        println!("The number of users by gender is:");
        for (gender, count) in gender_counts {
            println!("  * {gender}: {count}");
        }
    }

    if let Some(birth_years) = &stats.birth_years {
        println!("The earliest user birth year is: {}.", birth_years.earliest);
        println!(
            "The most recent user birth year is: {}.",
            birth_years.most_recent
        );
        println!(
            "The most common user birth year is: {}.",
            birth_years.most_common
        );
    }
}

/// Render one raw-data window
pub fn print_raw_window(records: &[TripRecord]) {
    for record in records {
        println!("{}", record_line(record));
    }
}

/// One raw record on one line, demographic fields only where present
fn record_line(record: &TripRecord) -> String {
    let mut line = format!(
        "#{}  {}  {}s  {} -> {}",
        record.row_id,
        record.start_time.format("%Y-%m-%d %H:%M:%S"),
        record.duration_secs,
        record.start_station,
        record.end_station
    );

    if let Some(user_type) = &record.user_type {
        line.push_str(&format!("  [{user_type}]"));
    }
    if let Some(gender) = &record.gender {
        line.push_str(&format!(" {gender}"));
    }
    if let Some(birth_year) = record.birth_year {
        line.push_str(&format!(" b.{birth_year}"));
    }
    line
}

/// Format whole seconds as `[Nd ]HH:MM:SS`
pub fn format_duration_secs(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
