use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for rMaintKPI
/// CLI dashboard for industrial maintenance KPIs read from Excel work orders
#[derive(Parser)]
#[command(
    name = "rmaintkpi",
    version = env!("CARGO_PKG_VERSION"),
    about = "Maintenance KPI dashboard: availability, MTBF, MTTR and trends from an Excel work-order log",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output of the `dashboard` and `scopes` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Date range and scope shared by `dashboard` and `export`.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long = "to")]
    pub to: Option<String>,

    /// Period shorthand: YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same shape
    #[arg(long = "period", conflicts_with_all = ["from", "to"])]
    pub period: Option<String>,

    /// Scope: ALL, AREA__<name>, EQUIP__<id> (or area:<name>, equip:<id>)
    #[arg(long = "scope", default_value = "ALL")]
    pub scope: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Load a workbook and list its scope options and default date range
    Scopes {
        /// Excel work-order file (.xlsx)
        #[arg(long = "file")]
        file: PathBuf,

        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show KPI cards and chart series for a selection
    Dashboard {
        /// Excel work-order file (.xlsx)
        #[arg(long = "file")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Export the dashboard for a selection as a report file
    Export {
        /// Excel work-order file (.xlsx)
        #[arg(long = "file")]
        file: PathBuf,

        /// Output file
        #[arg(long = "out")]
        out: PathBuf,

        /// Report format (inferred from the output extension when omitted)
        #[arg(long = "format", value_enum)]
        format: Option<ExportFormat>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Overwrite an existing output file without asking
        #[arg(long = "force")]
        force: bool,
    },
}
