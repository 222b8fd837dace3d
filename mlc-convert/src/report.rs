use std::path::Path;

use colored::Colorize;

use crate::conversion_summary::{render as render_conversion_summary, ConversionSummary};

/// Success line printed after writing the converted document.
pub fn render_success(output: &Path) -> String {
    format!(
        "Successfully converted configurations file to {}",
        output.display()
    )
    .green()
    .to_string()
}

/// Failure banner printed before a load or conversion error.
pub fn render_failure() -> String {
    "error converting configuration".red().to_string()
}

/// Warning line for non-fatal findings.
pub fn render_warning(message: &str) -> String {
    format!("{} {message}", "warning:".yellow())
}

pub fn render_summary(summary: &ConversionSummary) -> String {
    render_conversion_summary(summary).cyan().to_string()
}
