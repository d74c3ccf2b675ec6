//! Bikeshare Explorer CLI application
//!
//! Command-line interface for exploring US bikeshare trip logs: interactive
//! filter selection, raw-data paging and descriptive statistics.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use bikeshare_explorer::cli::{handle_explore, handle_stats, Cli, Commands};
use bikeshare_explorer::config::AppConfig;
use bikeshare_explorer::errors::Result;

fn main() {
    let result = run();

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration (explicit path, discovered file, or defaults)
    let config = AppConfig::load(cli.global.config.as_deref())?;

    // Initialize logging based on verbosity flags and config
    init_logging(&cli, &config);

    info!("Bikeshare Explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = config.resolve_data_dir(cli.global.data_dir.as_deref());
    info!("Using trip log directory: {}", data_dir.display());

    // Execute the appropriate command
    match &cli.command {
        Commands::Explore(args) => {
            info!("Executing explore command");
            handle_explore(args, &data_dir)
        }
        Commands::Stats(args) => {
            info!("Executing stats command");
            handle_stats(args, &data_dir)
        }
    }
}

/// Initialize logging from CLI verbosity flags, falling back to the config level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = match cli.log_level() {
        Some(level) => level.to_string().to_lowercase(),
        None => config.logging.level.clone(),
    };

    // Create environment filter
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("bikeshare_explorer={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
