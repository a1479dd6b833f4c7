//! Command-line interface implementation for create-discord-app.
//! Provides argument parsing using clap.

use clap::Parser;

/// Command-line arguments structure for create-discord-app.
#[derive(Parser, Debug)]
#[command(version, about = "create-discord-app: bootstrap a Discord.js bot project", long_about = None)]
pub struct Args {
    /// Directory name of the generated project.
    /// Prompted for interactively when omitted.
    #[arg(value_name = "PROJECT_DIRECTORY")]
    pub project_directory: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
