use anyhow::{Context, Result};
use mlc_config_core::{write, write_file};
use mlc_convert::conversion_summary::summarize;
use mlc_convert::convert::{convert_config_with_warnings, OUTPUT_FILE_NAME};
use mlc_convert::defaults::{default_layout_defaults, load_layout_defaults, LayoutDefaults};
use mlc_convert::loader::load_inputs;
use mlc_convert::report::{render_failure, render_success, render_summary, render_warning};

use crate::cli::ConfigArgs;
use crate::path_guard::{ensure_output_dir, ensure_output_not_same};

/// Convert the auth + config pair named in `args`.
///
/// Without `--dir` the pretty-printed document goes to stdout; with it the
/// document is written to `<dir>/configuration.v2.json`. Load failures print
/// a red banner before the error propagates.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    let output_path = match &args.dir {
        Some(dir) => {
            ensure_output_dir(dir)?;
            let path = dir.join(OUTPUT_FILE_NAME);
            ensure_output_not_same(&path, &[&args.auth, &args.config])?;
            Some(path)
        }
        None => None,
    };

    let defaults = resolve_defaults(&args)?;

    let (auth, config) = load_inputs(&args.auth, &args.config).map_err(|err| {
        eprintln!("{}", render_failure());
        err
    })?;

    let conversion = convert_config_with_warnings(&auth, &config, &defaults)
        .with_context(|| format!("failed to convert {}", args.config.display()))?;
    for warning in &conversion.warnings {
        eprintln!("{}", render_warning(warning));
    }

    match output_path {
        Some(path) => {
            write_file(&conversion.config, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{}", render_success(&path));
        }
        None => println!("{}", write(&conversion.config)?),
    }

    if args.summary {
        eprintln!("{}", render_summary(&summarize(&conversion.config)));
    }

    Ok(())
}

fn resolve_defaults(args: &ConfigArgs) -> Result<LayoutDefaults> {
    match &args.defaults_file {
        Some(path) => load_layout_defaults(path)
            .with_context(|| format!("failed to load layout defaults {}", path.display())),
        None => Ok(default_layout_defaults()),
    }
}
