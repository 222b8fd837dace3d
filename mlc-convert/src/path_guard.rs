use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail unless `dir` exists and is a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("output directory {} does not exist", dir.display());
    }
    Ok(())
}

/// Refuse to write `output` over any of `inputs`.
pub fn ensure_output_not_same(output: &Path, inputs: &[&Path]) -> Result<()> {
    let output_key = comparable(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;

    for input in inputs {
        let input_key = comparable(input)
            .with_context(|| format!("failed to resolve input path {}", input.display()))?;
        if output_key == input_key {
            bail!(
                "refusing to overwrite source file: output {} matches input {}",
                output.display(),
                input.display()
            );
        }
    }
    Ok(())
}

// Existing paths are canonicalized; the output usually does not exist yet,
// so it is canonicalized through its parent directory instead.
fn comparable(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if parent.is_dir() => Ok(parent
            .canonicalize()
            .with_context(|| format!("canonicalize {}", parent.display()))?
            .join(name)),
        _ => Ok(std::env::current_dir().context("current_dir")?.join(path)),
    }
}
