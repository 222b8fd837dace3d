//! Legacy (v1) configuration shapes.
//!
//! Only the fields the converter reads are modelled; everything else in a
//! v1 document is ignored on load. Optional fields stay `Option` so a
//! missing value degrades by omission in the output.

use mlc_config_core::Component;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Root of a v1 configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub theming: Option<Theming>,
    #[serde(default)]
    pub plugins: Option<Vec<Plugin>>,
    #[serde(default)]
    pub help_menu: Option<HelpMenu>,
    #[serde(default)]
    pub right_menu: Option<Vec<RightMenuEntry>>,
    #[serde(default)]
    pub shared: Option<Shared>,
}

/// How a plugin is mounted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMode {
    Href,
    Iframe,
    Qiankun,
    #[serde(other)]
    Unknown,
}

impl IntegrationMode {
    /// True for modes that embed an application inside the shell.
    pub fn is_embedded(self) -> bool {
        matches!(self, IntegrationMode::Iframe | IntegrationMode::Qiankun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    pub url: String,
    #[serde(default)]
    pub same_window: bool,
}

/// A node of the v1 plugin tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub order: Option<f64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub integration_mode: Option<IntegrationMode>,
    #[serde(default)]
    pub external_link: Option<ExternalLink>,
    #[serde(default)]
    pub content: Option<Vec<Plugin>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub plugin_url: Option<String>,
    #[serde(default)]
    pub plugin_route: Option<String>,
    #[serde(default)]
    pub props: Option<Map<String, Value>>,
}

impl Plugin {
    /// Sort key; a missing order counts as zero.
    pub fn sort_key(&self) -> f64 {
        // `+ 0.0` folds -0.0 into 0.0 so both tie under a total order.
        self.order.unwrap_or(0.0) + 0.0
    }

    /// True when the node carries no child plugins.
    pub fn has_no_content(&self) -> bool {
        self.content.as_ref().map_or(true, |content| content.is_empty())
    }

    /// Category name if set and non-empty.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuLocation {
    FixedSideBar,
    SideBar,
    TopBar,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theming {
    #[serde(default)]
    pub menu_location: Option<MenuLocation>,
    #[serde(default)]
    pub logo: Option<Logo>,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub variables: Option<Variables>,
    #[serde(default)]
    pub enable_dark_mode: Option<bool>,
}

/// Logo block; keys keep the legacy snake_case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Logo {
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub navigation_url: Option<String>,
    #[serde(default)]
    pub url_light_image: String,
    #[serde(default)]
    pub url_dark_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub page_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpMenu {
    #[serde(default)]
    pub help_link: Option<String>,
}

/// Right-menu slot entry: a component descriptor plus the script defining it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RightMenuEntry {
    pub entry: String,
    #[serde(flatten)]
    pub component: Component,
}

/// Shared properties block; everything but `props` is carried verbatim.
///
/// Kept as a raw object so a `props: null` entry stays distinguishable
/// from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Shared(pub Map<String, Value>);

/// Authentication document loaded next to the main configuration.
///
/// Built by [`crate::loader::load_auth_config`], which enforces the
/// presence of `isAuthNecessary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub is_auth_necessary: bool,
    pub user_info_url: Option<String>,
    pub user_logout_url: Option<String>,
}
