//! Component-tree (v2) configuration shapes produced by the converter.

use std::collections::BTreeMap;

use mlc_config_core::Component;
use serde::Serialize;
use serde_json::{Map, Value};

/// Root of a v2 configuration document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<Shared>,
    pub settings: Settings,
    pub layout: Layout,
    pub applications: BTreeMap<String, Application>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,
}

/// Top-level component list plus the scripts that define those components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub content: Vec<Component>,
    pub sources: Vec<String>,
}

/// Shared block as emitted; a single object so every key appears once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shared(pub Map<String, Value>);

/// Application mounted by the shell on a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "integrationMode", rename_all = "lowercase")]
pub enum Application {
    Iframe {
        route: String,
        src: String,
    },
    Parcel {
        route: String,
        entry: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        properties: Option<Map<String, Value>>,
    },
}

impl Application {
    pub fn route(&self) -> &str {
        match self {
            Application::Iframe { route, .. } | Application::Parcel { route, .. } => route,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconLibrary {
    #[serde(rename = "@fortawesome/free-solid-svg-icons")]
    Solid,
    #[serde(rename = "@fortawesome/free-regular-svg-icons")]
    Regular,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub library: IconLibrary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Target {
    #[serde(rename = "_self")]
    SelfWindow,
    #[serde(rename = "_blank")]
    NewWindow,
}

/// Navigation entry rendered by the layout component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuItem {
    Href {
        id: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        href: String,
        target: Target,
    },
    Application {
        id: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
    },
    Category {
        id: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        children: Vec<MenuItem>,
    },
    Group {
        id: String,
        label: String,
        children: Vec<MenuItem>,
    },
}

impl MenuItem {
    pub fn id(&self) -> &str {
        match self {
            MenuItem::Href { id, .. }
            | MenuItem::Application { id, .. }
            | MenuItem::Category { id, .. }
            | MenuItem::Group { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuItem::Href { label, .. }
            | MenuItem::Application { label, .. }
            | MenuItem::Category { label, .. }
            | MenuItem::Group { label, .. } => label,
        }
    }

    /// Lowercase variant name, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuItem::Href { .. } => "href",
            MenuItem::Application { .. } => "application",
            MenuItem::Category { .. } => "category",
            MenuItem::Group { .. } => "group",
        }
    }

    pub fn children(&self) -> &[MenuItem] {
        match self {
            MenuItem::Category { children, .. } | MenuItem::Group { children, .. } => children,
            MenuItem::Href { .. } | MenuItem::Application { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    FixedSideBar,
    OverlaySideBar,
    TopBar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LogoUrl {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    Themed {
        url_dark_image: String,
        url_light_image: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click_href: Option<String>,
    pub url: LogoUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpMenu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logout {
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMenu {
    pub user_info_url: String,
    pub logout: Logout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Head {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Properties of the `mlc-layout` component; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub menu_items: Vec<MenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_menu: Option<HelpMenu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_menu: Option<UserMenu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Head>,
}

/// Properties of the `mlc-antd-theme-manager` component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManagerProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    pub vars_prefix: Vec<String>,
}
