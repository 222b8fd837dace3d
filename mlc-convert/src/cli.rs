use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mlc-convert")]
#[command(about = "Migrate v1 application-shell configurations to the v2 component-tree format")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert a v1 auth + config pair into a v2 configuration.
    Config(ConfigArgs),
    /// Show the menu tree a v1 config converts to.
    Menu(MenuArgs),
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// v1 authentication file (JSON).
    pub auth: PathBuf,
    /// v1 configuration file (JSON).
    pub config: PathBuf,
    /// Directory to write configuration.v2.json into; prints to stdout when omitted.
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
    /// Optional layout defaults TOML (script URLs, theme variable prefixes).
    #[arg(long)]
    pub defaults_file: Option<PathBuf>,
    /// Print a one-line conversion summary on stderr.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct MenuArgs {
    /// v1 configuration file (JSON).
    pub config: PathBuf,
    #[arg(long, default_value_t = 8)]
    pub depth: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
