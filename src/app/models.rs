//! Data models for Bikeshare Explorer
//!
//! This module defines the core data structures used throughout the
//! application: the closed city/month/day selection sets, the per-row trip
//! record, and the column capability flags computed at load time.

use chrono::NaiveDateTime;

use crate::constants::calendar::{DAY_NAMES, MONTH_NAMES};

/// Cities with a published trip log
///
/// The set is closed: every variant maps to exactly one source file, so an
/// out-of-set city is unrepresentable and the loader can trust its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All supported cities, in prompt order
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Convert from a user-supplied name (e.g., "new york city")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "chicago" => Some(Self::Chicago),
            "new york city" => Some(Self::NewYorkCity),
            "washington" => Some(Self::Washington),
            _ => None,
        }
    }

    /// Get the display name (e.g., "new york city")
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Get the trip log file name for this city
    pub fn data_file_name(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Months available as a filter
///
/// The published trip logs cover January through June only, so the filter set
/// stops at June even though derived record months span the full year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// All filterable months, calendar order
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Convert from a lowercase month name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "january" => Some(Self::January),
            "february" => Some(Self::February),
            "march" => Some(Self::March),
            "april" => Some(Self::April),
            "may" => Some(Self::May),
            "june" => Some(Self::June),
            _ => None,
        }
    }

    /// Get the lowercase month name
    pub fn name(&self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Days of the week available as a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All weekdays, Monday first
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Convert from a lowercase weekday name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        DAY_NAMES
            .iter()
            .position(|d| *d == name)
            .map(|i| Self::ALL[i])
    }

    /// Get the lowercase weekday name
    pub fn name(&self) -> &'static str {
        DAY_NAMES[*self as usize]
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One complete filter selection: city plus optional month and day predicates
///
/// Produced once per filter cycle by the prompt (or CLI arguments) and
/// consumed immutably by the loader and filter engine. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    /// City whose trip log is analyzed
    pub city: City,
    /// Retain only trips starting in this month, if set
    pub month: Option<Month>,
    /// Retain only trips starting on this weekday, if set
    pub day: Option<Day>,
}

impl FilterSelection {
    /// Create a selection with no month/day narrowing
    pub fn all_of(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }
}

/// One ride entry from a city trip log
///
/// Required fields are guaranteed populated by the loader; optional fields
/// follow the per-city column capabilities in [`OptionalColumns`]. The derived
/// calendar columns are computed once at load time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Original row identity from the source file, preserved for raw display
    pub row_id: usize,
    /// Trip start timestamp
    pub start_time: NaiveDateTime,
    /// Trip end timestamp; absent when the source value is unparseable
    pub end_time: Option<NaiveDateTime>,
    /// Trip duration in seconds, from the independent source column
    pub duration_secs: u64,
    /// Start station name
    pub start_station: String,
    /// End station name
    pub end_station: String,
    /// Rider category (e.g., "Subscriber", "Customer"), where published
    pub user_type: Option<String>,
    /// Rider gender, where published
    pub gender: Option<String>,
    /// Rider birth year, where published
    pub birth_year: Option<i32>,
    /// Derived: lowercase month name of `start_time`
    pub month: String,
    /// Derived: lowercase weekday name of `start_time`
    pub day_of_week: String,
    /// Derived: hour of day of `start_time` (0-23)
    pub hour: u32,
}

impl TripRecord {
    /// Derive the lowercase month name for a timestamp
    pub fn month_name(start_time: &NaiveDateTime) -> &'static str {
        use chrono::Datelike;
        MONTH_NAMES[start_time.month0() as usize]
    }

    /// Derive the lowercase weekday name for a timestamp
    pub fn weekday_name(start_time: &NaiveDateTime) -> &'static str {
        use chrono::Datelike;
        DAY_NAMES[start_time.weekday().num_days_from_monday() as usize]
    }
}

/// Column capabilities of one city's trip log
///
/// Presence of the demographic columns is uniform per dataset: a column either
/// exists for every record of a city or for none. Computing the flags once
/// from the header keeps the statistic passes branch-free per record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalColumns {
    /// `User Type` column present
    pub user_type: bool,
    /// `Gender` column present
    pub gender: bool,
    /// `Birth Year` column present
    pub birth_year: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_city_name_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_name(city.name()), Some(city));
        }
        assert_eq!(City::from_name("New York City"), Some(City::NewYorkCity));
        assert_eq!(City::from_name("  chicago "), Some(City::Chicago));
        assert_eq!(City::from_name("boston"), None);
    }

    #[test]
    fn test_city_data_files() {
        assert_eq!(City::Chicago.data_file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.data_file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.data_file_name(), "washington.csv");
    }

    #[test]
    fn test_month_name_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_name(month.name()), Some(month));
        }
        // July exists on records but is not a filterable month
        assert_eq!(Month::from_name("july"), None);
        assert_eq!(Month::from_name("JUNE"), Some(Month::June));
    }

    #[test]
    fn test_day_name_round_trip() {
        for day in Day::ALL {
            assert_eq!(Day::from_name(day.name()), Some(day));
        }
        assert_eq!(Day::from_name("Friday"), Some(Day::Friday));
        assert_eq!(Day::from_name("someday"), None);
    }

    #[test]
    fn test_derived_calendar_names() {
        // 2017-01-02 was a Monday
        let ts = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        assert_eq!(TripRecord::month_name(&ts), "january");
        assert_eq!(TripRecord::weekday_name(&ts), "monday");

        let ts = NaiveDate::from_ymd_opt(2017, 6, 4)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        assert_eq!(TripRecord::month_name(&ts), "june");
        assert_eq!(TripRecord::weekday_name(&ts), "sunday");
    }

    #[test]
    fn test_filter_selection_all_of() {
        let selection = FilterSelection::all_of(City::Washington);
        assert_eq!(selection.city, City::Washington);
        assert!(selection.month.is_none());
        assert!(selection.day.is_none());
    }
}
