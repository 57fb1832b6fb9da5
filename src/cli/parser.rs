use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for timereport
/// CLI application to report worked hours per employee and location with SQLite
#[derive(Parser)]
#[command(
    name = "timereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Worked hours, active employees and per-location breakdowns from SQLite",
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

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn from_config(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "limit", default_value_t = 50)]
        limit: usize,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage locations
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Manage time entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Manage activity logs (time spent at a location within an entry)
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Generate a report over a date range
    Report {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long = "from", conflicts_with = "period")]
        from: Option<String>,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long = "to", conflicts_with = "period")]
        to: Option<String>,

        #[arg(
            long,
            short,
            help = "Year/month/day or a custom range, e.g. 2025, 2025-06, 2025-01:2025-03"
        )]
        period: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write the report to FILE instead of stdout"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE if it exists")]
        force: bool,

        #[arg(long = "no-chart", help = "Skip bar charts in text output")]
        no_chart: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add { first_name: String },
    /// List employees
    List,
}

#[derive(Subcommand)]
pub enum LocationAction {
    /// Add a location
    Add { name: String },
    /// List locations
    List,
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Add a time entry
    Add {
        #[arg(long = "employee")]
        employee: i64,

        /// Clock-in (YYYY-MM-DD HH:MM)
        #[arg(long = "in")]
        clock_in: String,

        /// Clock-out (YYYY-MM-DD HH:MM)
        #[arg(long = "out")]
        clock_out: Option<String>,

        #[arg(long, help = "in_progress | on_break | completed")]
        status: Option<String>,
    },

    /// Clock out an open entry and mark it completed
    Close {
        entry: i64,

        #[arg(long = "out")]
        clock_out: String,
    },

    /// List time entries of an employee
    List {
        #[arg(long = "employee")]
        employee: i64,
    },
}

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Add an activity log to a time entry
    Add {
        #[arg(long = "entry")]
        entry: i64,

        #[arg(long = "location")]
        location: i64,

        #[arg(long = "in")]
        check_in: String,

        #[arg(long = "out")]
        check_out: Option<String>,
    },

    /// List activity logs of a time entry
    List {
        #[arg(long = "entry")]
        entry: i64,
    },
}
