use clap::{Parser, Subcommand};

/// Command-line interface definition for ramostamp
/// CLI application to generate simulated workday time entries as SQL
#[derive(Parser)]
#[command(
    name = "ramostamp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate simulated workday time entries as SQL INSERT statements",
    long_about = None
)]
pub struct Cli {
    /// Path of the JSON configuration file (default: ./config.json)
    #[arg(global = true, long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<String>,

    /// Only report errors on stderr
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        /// Overwrite an existing configuration file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the loaded configuration as JSON")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Validate the configuration and report the working days in range"
        )]
        check: bool,
    },

    /// Generate the SQL INSERT statement
    Generate {
        /// Output destination: a file path, or `stdout`
        #[arg(long = "out", short = 'o', value_name = "FILE", default_value = "stdout")]
        out: String,

        /// Prefix each row with a human-readable comment line
        #[arg(long = "comment")]
        comment: bool,

        /// Seed the random generator to get reproducible output
        #[arg(long = "seed", short = 's')]
        seed: Option<u64>,

        /// Resolve daily times in UTC instead of the local time zone
        #[arg(long = "utc")]
        utc: bool,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
