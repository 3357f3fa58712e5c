//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "confswap",
    version,
    about = "Convert between small configuration text formats"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert between .properties and YAML configuration files
    Config(ConvertArgs),
    /// Convert between env-variable list dialects (idea, dotenv, linux)
    Env(ConvertArgs),
    /// Extract Spring Boot settings from a Docker Compose file
    Compose(ComposeArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source format tag; falls back to the saved preference
    #[arg(long)]
    pub from: Option<String>,

    /// Target format tag; falls back to the saved preference
    #[arg(long)]
    pub to: Option<String>,

    /// Input file; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Output flavor: spring-yaml, spring-properties or spring-env;
    /// falls back to the saved preference
    #[arg(long)]
    pub to: Option<String>,

    /// Input file; reads stdin when omitted
    pub file: Option<PathBuf>,
}
