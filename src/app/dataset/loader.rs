//! Trip log loading and parsing
//!
//! Reads a city's CSV trip log into typed records. The header row is resolved
//! into column positions once, the demographic column capabilities are
//! recorded, and every data row is parsed with the required/optional split of
//! the data contract: an unparseable `Start Time` or `Trip Duration` is fatal,
//! an unparseable optional value makes that field absent for the record.

use std::fs::File;
use std::path::Path;

use chrono::{NaiveDateTime, Timelike};
use csv::StringRecord;
use tracing::debug;

use crate::app::dataset::Dataset;
use crate::app::models::{City, OptionalColumns, TripRecord};
use crate::constants::timestamps;
use crate::errors::{DataSourceError, DataSourceResult};

/// Header positions resolved once per file
///
/// Recognized columns only; anything else in the header is ignored. The
/// unnamed leading column, when present, carries the original row index.
#[derive(Debug)]
struct ColumnIndex {
    row_id: Option<usize>,
    start_time: usize,
    end_time: Option<usize>,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> DataSourceResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or(DataSourceError::MissingColumn { column: name })
        };

        Ok(Self {
            row_id: headers.iter().position(|h| h.trim().is_empty()),
            start_time: require("Start Time")?,
            end_time: find("End Time"),
            duration: require("Trip Duration")?,
            start_station: require("Start Station")?,
            end_station: require("End Station")?,
            user_type: find("User Type"),
            gender: find("Gender"),
            birth_year: find("Birth Year"),
        })
    }

    fn capabilities(&self) -> OptionalColumns {
        OptionalColumns {
            user_type: self.user_type.is_some(),
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }
}

/// Load the complete trip log for a city
///
/// # Errors
///
/// Returns [`DataSourceError`] when the file is missing or unreadable, a
/// required column is absent from the header, or a required field fails to
/// parse in any row.
pub fn load_city(city: City, data_dir: &Path) -> DataSourceResult<Dataset> {
    let path = data_dir.join(city.data_file_name());
    if !path.exists() {
        return Err(DataSourceError::NotFound { path });
    }

    debug!("Loading trip log: {}", path.display());
    let file = File::open(&path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;
    let capabilities = columns.capabilities();

    let mut records = Vec::new();
    for (data_row, row) in reader.records().enumerate() {
        let row = row?;
        records.push(parse_record(&row, &columns, data_row)?);
    }

    debug!("Loaded {} trips for {}", records.len(), city);
    Ok(Dataset::new(city, capabilities, records))
}

/// Parse one data row into a trip record with derived calendar columns
fn parse_record(
    row: &StringRecord,
    columns: &ColumnIndex,
    data_row: usize,
) -> DataSourceResult<TripRecord> {
    let field = |index: usize| row.get(index).unwrap_or("").trim();

    let start_raw = field(columns.start_time);
    let start_time =
        parse_timestamp(start_raw).ok_or_else(|| DataSourceError::InvalidTimestamp {
            row: data_row,
            value: start_raw.to_string(),
        })?;

    let duration_raw = field(columns.duration);
    let duration_secs =
        parse_duration_secs(duration_raw).ok_or_else(|| DataSourceError::InvalidDuration {
            row: data_row,
            value: duration_raw.to_string(),
        })?;

    let row_id = columns
        .row_id
        .and_then(|i| field(i).parse().ok())
        .unwrap_or(data_row);

    Ok(TripRecord {
        row_id,
        start_time,
        end_time: columns.end_time.and_then(|i| parse_timestamp(field(i))),
        duration_secs,
        start_station: field(columns.start_station).to_string(),
        end_station: field(columns.end_station).to_string(),
        user_type: columns.user_type.and_then(|i| non_empty(field(i))),
        gender: columns.gender.and_then(|i| non_empty(field(i))),
        birth_year: columns.birth_year.and_then(|i| parse_birth_year(field(i))),
        month: TripRecord::month_name(&start_time).to_string(),
        day_of_week: TripRecord::weekday_name(&start_time).to_string(),
        hour: start_time.hour(),
    })
}

/// Parse a timestamp, trying the accepted formats in order
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    timestamps::FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Parse a non-negative duration in seconds, accepting "100" and "100.0"
fn parse_duration_secs(value: &str) -> Option<u64> {
    let secs: f64 = value.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(secs.round() as u64)
}

/// Parse a birth year, accepting the float spelling the sources use ("1992.0")
fn parse_birth_year(value: &str) -> Option<i32> {
    let year: f64 = value.parse().ok()?;
    if !year.is_finite() {
        return None;
    }
    let year = year.round() as i32;
    // Plausibility bound keeps sentinel values out of the min/max stats
    (1850..=2100).contains(&year).then_some(year)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
