//! Command-line interface implementation for startoff.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::profile::ProjectType;

/// Command-line arguments structure for startoff.
#[derive(Parser, Debug)]
#[command(author, version, about = "startoff: scaffold a vue3 frontend project from a remote template", long_about = None)]
pub struct Args {
    /// Directory in which the project directory will be created
    #[arg(value_name = "DESTINATION", default_value = ".")]
    pub destination: PathBuf,

    /// Project type, skips the type selection prompt
    #[arg(short = 't', long = "type", value_enum)]
    pub project_type: Option<ProjectType>,

    /// Path to a configuration file (startoff.json, startoff.yml or startoff.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not install dependencies after generating the project
    #[arg(long)]
    pub skip_install: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
