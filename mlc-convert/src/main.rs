use anyhow::Result;
use clap::Parser;

mod cli;
mod config_cmd;
mod menu_cmd;
mod path_guard;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Config(args) => config_cmd::run_config(args),
        Command::Menu(args) => menu_cmd::run_menu(args),
    }
}
