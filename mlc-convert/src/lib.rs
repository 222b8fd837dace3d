//! Application-shell configuration migration from v1 to v2.
//!
//! A v1 document describes the shell as a tree of plugins (links, embedded
//! applications, and groupings of both) plus theming, help and right-menu
//! settings. A v2 document describes the same shell declaratively: a list of
//! component descriptors, the scripts that define them, a default route, and
//! a map of routed applications. This library turns the former into the
//! latter.
//!
//! # Architecture
//!
//! ## Models
//!
//! - [`v1`] — legacy input shapes (plugins, theming, auth)
//! - [`v2`] — output shapes (menu items, layout properties, applications)
//!
//! ## Transformation
//!
//! - [`transform`] — pure, per-section conversion steps
//!   - Stable recursive plugin ordering and deep flattening
//!   - Menu item classification and category grouping
//!   - Default route resolution
//!   - Layout assembly with explicit script source accumulation
//!   - Shared block and applications mapping
//! - [`convert`] — orchestration of the steps into one v2 document
//!
//! ## Input & Configuration
//!
//! - [`loader`] — JSON loading of the auth and config documents
//! - [`defaults`] — layout script URLs and theme prefixes (TOML)
//!
//! ## Reporting
//!
//! - [`report`] — terminal-friendly colored status lines
//! - [`conversion_summary`] — post-conversion counts
//! - [`inspect`] — menu tree rendering
//!
//! # Examples
//!
//! ```ignore
//! use mlc_convert::convert::convert_config;
//! use mlc_convert::defaults::default_layout_defaults;
//! use mlc_convert::loader::load_inputs;
//!
//! let (auth, config) = load_inputs("auth.json".as_ref(), "config.json".as_ref())?;
//! let v2 = convert_config(&auth, &config, &default_layout_defaults())?;
//! println!("{}", mlc_config_core::write(&v2)?);
//! ```
//!
//! # Built on mlc-config-core
//!
//! Component descriptors and JSON reading/writing come from
//! `mlc-config-core`; everything specific to the v1/v2 schemas lives here.

pub mod conversion_summary;
pub mod convert;
pub mod defaults;
pub mod inspect;
pub mod loader;
pub mod report;
pub mod transform;
pub mod v1;
pub mod v2;
