//! Pure v1 → v2 transformation steps.
//!
//! Each submodule handles one section of the output document and never
//! touches the filesystem. [`crate::convert::convert_config`] wires them
//! together:
//!
//! - [`plugins`] — stable recursive ordering and deep flattening of the plugin tree
//! - [`icon`] — icon-font tokens to structured icon references
//! - [`menu`] — plugin nodes to href / application / category menu items
//! - [`settings`] — default route resolution
//! - [`layout`] — navigation layout, slot content, theme manager and script sources
//! - [`shared`] — shared properties block
//! - [`applications`] — routed applications keyed by plugin id

pub mod applications;
pub mod icon;
pub mod layout;
pub mod menu;
pub mod plugins;
pub mod settings;
pub mod shared;
