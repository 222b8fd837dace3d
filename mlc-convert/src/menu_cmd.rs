use anyhow::{Context, Result};
use mlc_config_core::write;
use mlc_convert::inspect::render_menu_tree;
use mlc_convert::loader::load_config;
use mlc_convert::transform::menu::build_menu_items;
use mlc_convert::transform::plugins::sort_plugins;

use crate::cli::{MenuArgs, OutputFormat};

pub fn run_menu(args: MenuArgs) -> Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let sorted = sort_plugins(config.plugins.as_deref().unwrap_or_default());
    let items = build_menu_items(&sorted);

    match args.format {
        OutputFormat::Text => print!("{}", render_menu_tree(&items, args.depth)),
        OutputFormat::Json => println!("{}", write(&items)?),
    }

    Ok(())
}
