//! Command-line argument definitions for the Pathstate CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the paths to resolve, the configuration
//! file, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Pathstate path resolver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Location paths to resolve
    #[arg(required = true, help = "Paths to resolve, with or without the base URL")]
    pub paths: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL stripped from each path, overriding the configuration file
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
