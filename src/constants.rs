//! Application constants for Bikeshare Explorer
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain.

/// Environment variable names
pub mod env {
    /// Environment variable overriding the trip log directory
    pub const DATA_DIR: &str = "BIKESHARE_DATA_DIR";
}

/// Data source constants
pub mod data {
    /// Default directory containing the city trip logs
    pub const DEFAULT_DATA_DIR: &str = "data";
}

/// Calendar name tables
///
/// Derived columns are canonicalized to these lowercase names by the loader,
/// so the filter engine compares with plain string equality.
pub mod calendar {
    /// Lowercase month names, January first
    pub const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    /// Lowercase weekday names, Monday first
    pub const DAY_NAMES: [&str; 7] = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];
}

/// Timestamp parsing
pub mod timestamps {
    /// Accepted `Start Time` / `End Time` formats, tried in order
    pub const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];
}

/// Raw-data paging
pub mod paging {
    /// Number of records shown per raw-data window
    pub const PAGE_SIZE: usize = 5;
}

/// Interactive prompt configuration
pub mod prompt {
    /// Maximum invalid answers accepted for a single question
    pub const MAX_ATTEMPTS: usize = 10;

    /// Keyword that prints the option list instead of answering
    pub const HELP_KEYWORD: &str = "help";
}

/// Logging constants
pub mod logging {
    /// Default log level when neither flags nor config specify one
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

// Re-export commonly used constants for convenience
pub use calendar::{DAY_NAMES, MONTH_NAMES};
pub use data::DEFAULT_DATA_DIR;
pub use env::DATA_DIR as ENV_DATA_DIR;
pub use paging::PAGE_SIZE;
