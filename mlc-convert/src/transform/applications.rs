use std::collections::BTreeMap;

use crate::transform::plugins::flatten;
use crate::v1::{self, IntegrationMode, Plugin};
use crate::v2::Application;

/// Applications keyed by plugin id, plus the ids skipped as duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationsSection {
    pub applications: BTreeMap<String, Application>,
    pub duplicate_ids: Vec<String>,
}

/// Build the routed applications for every embedded plugin in the tree.
///
/// `iframe` plugins map to iframe applications and `qiankun` plugins to
/// parcels. Plugins without a `pluginUrl` have nothing to mount and are
/// skipped; when two plugins share an id the first one in pre-order wins.
pub fn build_applications(config: &v1::Config) -> ApplicationsSection {
    let plugins = config.plugins.as_deref().unwrap_or_default();
    let mut section = ApplicationsSection::default();

    for plugin in flatten(plugins) {
        let Some(application) = build_application(plugin) else {
            continue;
        };
        if section.applications.contains_key(&plugin.id) {
            section.duplicate_ids.push(plugin.id.clone());
            continue;
        }
        section.applications.insert(plugin.id.clone(), application);
    }

    section
}

fn build_application(plugin: &Plugin) -> Option<Application> {
    let url = plugin.plugin_url.as_deref().filter(|url| !url.is_empty())?;
    let route = plugin
        .plugin_route
        .clone()
        .unwrap_or_else(|| format!("./{}/", plugin.id));

    match plugin.integration_mode? {
        IntegrationMode::Iframe => Some(Application::Iframe {
            route,
            src: url.to_string(),
        }),
        IntegrationMode::Qiankun => Some(Application::Parcel {
            route,
            entry: url.to_string(),
            properties: plugin.props.clone(),
        }),
        IntegrationMode::Href | IntegrationMode::Unknown => None,
    }
}
