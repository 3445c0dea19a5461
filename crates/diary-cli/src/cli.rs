//! Command-line arguments.

use clap::{ArgAction, Parser};

use diary_core::VERSION;

/// Diary - a small interactive personal journal
#[derive(Debug, Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the diary database file
    #[arg(long = "db", value_name = "PATH", env = "DIARY_PATH")]
    pub db: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH", env = "DIARY_CONFIG")]
    pub config: Option<String>,

    /// Do not clear the screen between views
    #[arg(long)]
    pub no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
