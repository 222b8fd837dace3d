use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const LAYOUT_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/@micro-lc/layout@latest/dist/mlc-layout.js";
pub const THEME_MANAGER_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/@micro-lc/layout@latest/dist/mlc-antd-theme-manager.js";

/// Script URLs and theme settings the layout assembler injects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutDefaults {
    pub layout: LayoutScript,
    pub theme_manager: ThemeManagerDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutScript {
    pub script_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeManagerDefaults {
    pub script_url: String,
    pub vars_prefix: Vec<String>,
}

/// Errors returned when loading a layout defaults file.
#[derive(Debug, Error)]
pub enum DefaultsLoadError {
    #[error("failed to read layout defaults file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse layout defaults file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load layout defaults from a TOML file.
pub fn load_layout_defaults(path: &Path) -> Result<LayoutDefaults, DefaultsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DefaultsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_defaults(&raw, path.display().to_string())
}

/// Built-in defaults shipped with the crate.
pub fn default_layout_defaults() -> LayoutDefaults {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/layout.toml"));
    parse_defaults(embedded, "embedded layout defaults".to_string())
        .unwrap_or_else(|_| fallback_layout_defaults())
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        default_layout_defaults()
    }
}

fn parse_defaults(raw: &str, path: String) -> Result<LayoutDefaults, DefaultsLoadError> {
    toml::from_str(raw).map_err(|source| DefaultsLoadError::Parse { path, source })
}

fn fallback_layout_defaults() -> LayoutDefaults {
    LayoutDefaults {
        layout: LayoutScript {
            script_url: LAYOUT_SCRIPT_URL.to_string(),
        },
        theme_manager: ThemeManagerDefaults {
            script_url: THEME_MANAGER_SCRIPT_URL.to_string(),
            vars_prefix: vec![
                "micro-lc".to_string(),
                "microlc".to_string(),
                "back-kit".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::{
        default_layout_defaults, fallback_layout_defaults, load_layout_defaults, parse_defaults,
        DefaultsLoadError,
    };

    #[test]
    fn loads_valid_defaults_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("layout.toml");
        fs::write(
            &path,
            r#"
[layout]
script_url = "https://mirror.example.com/mlc-layout.js"

[theme_manager]
script_url = "https://mirror.example.com/theme.js"
vars_prefix = ["acme"]
"#,
        )
        .expect("write defaults");

        let defaults = load_layout_defaults(&path).expect("defaults should parse");
        assert_eq!(defaults.layout.script_url, "https://mirror.example.com/mlc-layout.js");
        assert_eq!(defaults.theme_manager.vars_prefix, vec!["acme"]);
    }

    #[test]
    fn returns_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[layout\nscript_url = ").expect("write broken file");

        let err = load_layout_defaults(&path).expect_err("should fail parse");
        match err {
            DefaultsLoadError::Parse { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn returns_io_error_for_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_layout_defaults(&dir.path().join("missing.toml")).expect_err("should fail");
        assert!(matches!(err, DefaultsLoadError::Io { .. }));
    }

    #[test]
    fn embedded_defaults_match_fallback() {
        let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/layout.toml"));
        let parsed = parse_defaults(embedded, "embedded layout defaults".to_string())
            .expect("embedded defaults should parse");
        assert_eq!(parsed, fallback_layout_defaults());
        assert_eq!(default_layout_defaults(), parsed);
    }
}
