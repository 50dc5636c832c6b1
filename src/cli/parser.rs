use crate::errors::{AppError, AppResult};
use crate::models::filter::{DimFilter, FilterSelection};
use crate::utils::date::parse_date;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for wodash
/// Maintenance work-order reporting over a local SQLite store
#[derive(Parser)]
#[command(
    name = "wodash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Maintenance work-order reporting: import CSV exports and compute KPIs, chart aggregates and calendar views",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by every view command. Omitted dimensions and the
/// literal value "All" both mean no restriction.
#[derive(Args, Clone)]
pub struct FilterArgs {
    /// Start of the notification date range (YYYY-MM-DD, inclusive)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// End of the notification date range (YYYY-MM-DD, inclusive)
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Work order status (repeatable)
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Vec<String>,

    /// Station (repeatable)
    #[arg(long = "station", value_name = "STATION")]
    pub station: Vec<String>,

    /// Notification type (repeatable)
    #[arg(long = "type", value_name = "TYPE")]
    pub notification_type: Vec<String>,

    /// Responsible staff member (repeatable)
    #[arg(long = "staff", value_name = "NAME")]
    pub staff: Vec<String>,
}

impl FilterArgs {
    pub fn to_selection(&self) -> AppResult<FilterSelection> {
        let date_range = match (&self.from, &self.to) {
            (None, None) => None,
            (Some(from), Some(to)) => {
                let start = parse_date(from)
                    .ok_or_else(|| AppError::InvalidDate(from.clone()))?;
                let end = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;
                Some((start, end))
            }
            _ => {
                return Err(AppError::InvalidFilter(
                    "--from and --to must be used together".to_string(),
                ));
            }
        };

        Ok(FilterSelection {
            date_range,
            status: DimFilter::new(self.status.clone()),
            station: DimFilter::new(self.station.clone()),
            notification_type: DimFilter::new(self.notification_type.clone()),
            staff: DimFilter::new(self.staff.clone()),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Import a CSV export, replacing the entire store
    Import {
        /// CSV file to import
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// KPI cards, period deltas and chart aggregates
    Overview {
        #[command(flatten)]
        filters: FilterArgs,

        /// Show deltas as absolute differences instead of percentages
        #[arg(long = "absolute")]
        absolute: bool,
    },

    /// Browse, search and export the record table
    Records {
        #[command(flatten)]
        filters: FilterArgs,

        /// Keyword filter across all text fields (case-insensitive)
        #[arg(long, short, value_name = "TERM")]
        search: Option<String>,

        /// Export the current view as CSV (timestamped name when FILE
        /// is omitted)
        #[arg(
            long = "export",
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = ""
        )]
        export: Option<String>,
    },

    /// Project filtered records onto calendar events (JSON)
    Calendar {
        #[command(flatten)]
        filters: FilterArgs,

        /// Write the events to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
