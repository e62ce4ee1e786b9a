use clap::{Parser, Subcommand};

/// Command-line interface definition for bikeshare
/// CLI application to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: travel times, popular stations, trip durations and riders",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Without a subcommand the interactive explorer starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive exploration (the default)
    Explore,

    /// Print the statistics for one city without prompting
    Stats {
        #[arg(long, help = "City: Chicago, New York City or Washington")]
        city: String,

        #[arg(
            long,
            default_value = "all",
            help = "Month filter: January..June or all"
        )]
        month: String,

        #[arg(
            long,
            default_value = "all",
            help = "Day filter: Monday..Sunday or all"
        )]
        day: String,

        #[arg(long, value_name = "N", help = "Also print the first N raw rows")]
        raw: Option<usize>,
    },

    /// Write the default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
