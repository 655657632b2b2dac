use crate::core::navigate::Direction;
use crate::export::{ExportFormat, ExportScope};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance client: daily, weekly and monthly work-time summaries from check-in/check-out records",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Read attendance from a local JSON file instead of the service
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Employee whose attendance is shown (overrides the configured profile)
    #[arg(global = true, long = "employee", value_name = "ID")]
    pub employee: Option<i64>,

    /// Base URL of the attendance service
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one day's merged record and timeline
    Day {
        #[arg(long, help = "Date to show (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, value_enum, help = "Move one day back or forward from --date")]
        step: Option<Direction>,
    },

    /// Show the Sunday-start week containing a date
    Week {
        #[arg(long, help = "Any date inside the week (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, value_enum, help = "Move one week back or forward")]
        step: Option<Direction>,
    },

    /// Show a calendar month with its weekly breakdown
    Month {
        #[arg(long, help = "Month to show (YYYY-MM, default current month)")]
        month: Option<String>,

        #[arg(long, value_enum, help = "Move one month back or forward")]
        step: Option<Direction>,
    },

    /// Dashboard statistics for the Monday-start week
    Stats {
        #[arg(long, help = "Any date inside the week (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Latest check-in/check-out activity of the past seven days
    Recent {
        #[arg(long, help = "Number of entries to show")]
        limit: Option<usize>,
    },

    /// Whether the employee is clocked in right now
    Status,

    /// Keep today's record live, re-polling the service on a timer
    Watch {
        #[arg(long, help = "Stop after this many updates (default: until Ctrl-C)")]
        ticks: Option<u64>,
    },

    /// Export day records or a summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "days")]
        scope: ExportScope,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter day records by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Anchor date for week/month summaries (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
