//! Navigation layout assembly.
//!
//! Produces the `layout` section: the `mlc-layout` navigation component
//! (with optional right-menu slot content), an optional
//! `mlc-antd-theme-manager` component, and the ordered script sources
//! those components need.
//!
//! Every builder returns the sources it contributes next to its component;
//! [`build_layout`] concatenates them in the order
//! `[layout script, right-menu entries..., theme manager script]`.

use mlc_config_core::{Component, Content};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::defaults::LayoutDefaults;
use crate::transform::menu::build_menu_items;
use crate::v1::{self, AuthConfig, MenuLocation, Plugin, RightMenuEntry};
use crate::v2::{
    Head, HelpMenu, Layout, LayoutProperties, Logo, LogoUrl, Logout, Mode, ThemeManagerProperties,
    UserMenu,
};

pub const LAYOUT_TAG: &str = "mlc-layout";
pub const THEME_MANAGER_TAG: &str = "mlc-antd-theme-manager";
const SLOT_STYLE: &str = "display: flex; align-items: center;";

/// Assemble the layout section from the v1 config and its sorted plugins.
pub fn build_layout(
    config: &v1::Config,
    auth: &AuthConfig,
    sorted_plugins: &[Plugin],
    defaults: &LayoutDefaults,
) -> Result<Layout, serde_json::Error> {
    let (navigation, navigation_sources) =
        build_navigation_layout(config, auth, sorted_plugins, defaults)?;
    let (theme_manager, theme_sources) = build_theme_manager(config.theming.as_ref(), defaults)?;

    let mut content = vec![navigation];
    content.extend(theme_manager);

    let sources = navigation_sources.into_iter().chain(theme_sources).collect();
    Ok(Layout { content, sources })
}

fn build_navigation_layout(
    config: &v1::Config,
    auth: &AuthConfig,
    sorted_plugins: &[Plugin],
    defaults: &LayoutDefaults,
) -> Result<(Component, Vec<String>), serde_json::Error> {
    let mut sources = vec![defaults.layout.script_url.clone()];

    let properties = build_layout_properties(config, auth, sorted_plugins);
    let mut component = Component::new(LAYOUT_TAG);
    component.properties = Some(to_properties(&properties)?);

    let (slot, slot_sources) = build_slot_content(config.right_menu.as_deref());
    sources.extend(slot_sources);
    if let Some(slot) = slot {
        component = component.with_content(Content::Component(Box::new(slot)));
    }

    Ok((component, sources))
}

/// Typed properties of the navigation component.
pub fn build_layout_properties(
    config: &v1::Config,
    auth: &AuthConfig,
    sorted_plugins: &[Plugin],
) -> LayoutProperties {
    let theming = config.theming.as_ref();

    LayoutProperties {
        mode: theming.and_then(|t| t.menu_location).map(layout_mode),
        enable_dark_mode: theming.and_then(|t| t.enable_dark_mode),
        logo: theming.and_then(|t| t.logo.as_ref()).map(build_logo),
        menu_items: build_menu_items(sorted_plugins),
        help_menu: config.help_menu.as_ref().map(build_help_menu),
        user_menu: build_user_menu(auth),
        head: theming.and_then(|t| t.header.as_ref()).map(build_head),
    }
}

pub fn layout_mode(location: MenuLocation) -> Mode {
    match location {
        MenuLocation::FixedSideBar => Mode::FixedSideBar,
        MenuLocation::SideBar => Mode::OverlaySideBar,
        MenuLocation::TopBar => Mode::TopBar,
    }
}

fn build_logo(input: &v1::Logo) -> Logo {
    let url = match input.url_dark_image.as_deref().filter(|url| !url.is_empty()) {
        Some(dark) => LogoUrl::Themed {
            url_dark_image: dark.to_string(),
            url_light_image: input.url_light_image.clone(),
        },
        None => LogoUrl::Plain(input.url_light_image.clone()),
    };

    Logo {
        alt_text: input.alt.clone(),
        on_click_href: input.navigation_url.clone(),
        url,
    }
}

fn build_help_menu(input: &v1::HelpMenu) -> HelpMenu {
    HelpMenu {
        help_href: input.help_link.clone(),
    }
}

fn build_user_menu(auth: &AuthConfig) -> Option<UserMenu> {
    if !auth.is_auth_necessary {
        return None;
    }
    let user_info_url = auth.user_info_url.as_deref().filter(|url| !url.is_empty())?;

    Some(UserMenu {
        user_info_url: user_info_url.to_string(),
        logout: Logout {
            method: "GET",
            url: auth.user_logout_url.clone(),
        },
    })
}

fn build_head(input: &v1::Header) -> Head {
    Head {
        fav_icon_url: input.favicon.clone(),
        title: input.page_title.clone(),
    }
}

/// Wrap right-menu entries into a flex container, collecting their scripts.
fn build_slot_content(entries: Option<&[RightMenuEntry]>) -> (Option<Component>, Vec<String>) {
    let Some(entries) = entries.filter(|entries| !entries.is_empty()) else {
        return (None, Vec::new());
    };

    let sources = entries.iter().map(|entry| entry.entry.clone()).collect();
    let children = entries.iter().map(|entry| entry.component.clone()).collect();

    let container = Component::new("div")
        .with_attribute("style", SLOT_STYLE)
        .with_content(Content::Components(children));

    (Some(container), sources)
}

fn build_theme_manager(
    theming: Option<&v1::Theming>,
    defaults: &LayoutDefaults,
) -> Result<(Option<Component>, Vec<String>), serde_json::Error> {
    let Some(variables) = theming.and_then(|t| t.variables.as_ref()) else {
        return Ok((None, Vec::new()));
    };

    let properties = ThemeManagerProperties {
        primary_color: variables.primary_color.clone(),
        vars_prefix: defaults.theme_manager.vars_prefix.clone(),
    };
    let mut component = Component::new(THEME_MANAGER_TAG);
    component.properties = Some(to_properties(&properties)?);

    Ok((
        Some(component),
        vec![defaults.theme_manager.script_url.clone()],
    ))
}

fn to_properties<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "component properties must serialize to an object, got {other}"
        ))),
    }
}
