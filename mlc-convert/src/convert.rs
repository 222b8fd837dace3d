//! v1 → v2 configuration conversion.
//!
//! ## Pipeline
//!
//! 1. **Sort** — plugins ordered by `order` at every depth (stable)
//! 2. **Settings** — default route from the first routed leaf
//! 3. **Layout** — navigation component, slot content, theme manager, sources
//! 4. **Applications** — routed applications from the original plugin tree
//! 5. **Shared** — `props` renamed to `properties`
//!
//! Conversion is pure: it never reads or writes files and returns either a
//! complete document or the first error encountered.

use thiserror::Error;

use crate::defaults::LayoutDefaults;
use crate::transform::applications::build_applications;
use crate::transform::layout::build_layout;
use crate::transform::plugins::sort_plugins;
use crate::transform::settings::build_settings;
use crate::transform::shared::convert_shared;
use crate::v1::{self, AuthConfig};
use crate::v2;

pub const OUTPUT_VERSION: u8 = 2;
pub const OUTPUT_FILE_NAME: &str = "configuration.v2.json";

/// Errors raised while assembling the v2 document.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to build component properties: {0}")]
    Properties(#[from] serde_json::Error),
}

/// A converted document plus non-fatal findings worth surfacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub config: v2::Config,
    pub warnings: Vec<String>,
}

/// Convert a v1 configuration into a v2 document.
pub fn convert_config(
    auth: &AuthConfig,
    config: &v1::Config,
    defaults: &LayoutDefaults,
) -> Result<v2::Config, ConvertError> {
    convert_config_with_warnings(auth, config, defaults).map(|conversion| conversion.config)
}

/// Convert a v1 configuration, also reporting skipped duplicate application ids.
pub fn convert_config_with_warnings(
    auth: &AuthConfig,
    config: &v1::Config,
    defaults: &LayoutDefaults,
) -> Result<Conversion, ConvertError> {
    let sorted_plugins = sort_plugins(config.plugins.as_deref().unwrap_or_default());

    let settings = build_settings(&sorted_plugins);
    let layout = build_layout(config, auth, &sorted_plugins, defaults)?;
    let applications = build_applications(config);
    let shared = convert_shared(config.shared.as_ref());

    let warnings = applications
        .duplicate_ids
        .iter()
        .map(|id| format!("duplicate plugin id '{id}'; keeping the first application"))
        .collect();

    Ok(Conversion {
        config: v2::Config {
            version: OUTPUT_VERSION,
            shared,
            settings,
            layout,
            applications: applications.applications,
        },
        warnings,
    })
}
