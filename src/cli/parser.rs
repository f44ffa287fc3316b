use clap::{Parser, Subcommand};

/// Command-line interface definition for trcheck
/// CLI application to validate and normalize HH:MM time-range fields
#[derive(Parser)]
#[command(
    name = "trcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time-range checking CLI: validate and normalize paired HH:MM form fields",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (defaults only, never touches the config file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Validate a single time-range payload
    Check {
        /// Start hour field, as typed (missing = empty)
        #[arg(long = "start-hour", help = "Start hour field (HH)")]
        start_hour: Option<String>,

        /// Start minute field, as typed (missing = empty)
        #[arg(long = "start-minute", help = "Start minute field (MM)")]
        start_minute: Option<String>,

        /// End hour field, as typed (missing = empty)
        #[arg(long = "end-hour", help = "End hour field (HH)")]
        end_hour: Option<String>,

        /// End minute field, as typed (missing = empty)
        #[arg(long = "end-minute", help = "End minute field (MM)")]
        end_minute: Option<String>,

        /// Read the payload as JSON from a file, or '-' for stdin
        #[arg(
            long = "json",
            conflicts_with_all = ["start_hour", "start_minute", "end_hour", "end_minute"],
            help = "Read the payload as JSON from a file ('-' = stdin)"
        )]
        json: Option<String>,

        /// Output format override
        #[arg(long = "format", help = "Output format: text or json")]
        format: Option<String>,
    },

    /// Validate a JSON array of time-range payloads
    Batch {
        /// Input file containing a JSON array, or '-' for stdin
        file: String,

        /// Output format override
        #[arg(long = "format", help = "Output format: text or json")]
        format: Option<String>,
    },
}
