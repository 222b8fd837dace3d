use crate::transform::icon::resolve_icon;
use crate::v1::{IntegrationMode, Plugin};
use crate::v2::{MenuItem, Target};

/// Build the menu item for one plugin node, or `None` if the node is inert.
///
/// Classification order:
/// 1. `href` with an external link becomes [`MenuItem::Href`]
/// 2. `iframe` / `qiankun` becomes [`MenuItem::Application`]
/// 3. any `content` (even empty) becomes [`MenuItem::Category`]
///
/// Inside a category, children carrying a `category` are gathered into one
/// [`MenuItem::Group`] per distinct value, in first-seen order, ahead of the
/// uncategorized children.
pub fn build_menu_item(plugin: &Plugin) -> Option<MenuItem> {
    if let (Some(IntegrationMode::Href), Some(link)) =
        (plugin.integration_mode, &plugin.external_link)
    {
        let target = if link.same_window {
            Target::SelfWindow
        } else {
            Target::NewWindow
        };
        return Some(MenuItem::Href {
            id: plugin.id.clone(),
            label: plugin.label.clone(),
            icon: resolve_icon(plugin.icon.as_deref()),
            href: link.url.clone(),
            target,
        });
    }

    if plugin.integration_mode.is_some_and(IntegrationMode::is_embedded) {
        return Some(MenuItem::Application {
            id: plugin.id.clone(),
            label: plugin.label.clone(),
            icon: resolve_icon(plugin.icon.as_deref()),
        });
    }

    let content = plugin.content.as_ref()?;
    Some(MenuItem::Category {
        id: plugin.id.clone(),
        label: plugin.label.clone(),
        icon: resolve_icon(plugin.icon.as_deref()),
        children: build_category_children(content),
    })
}

/// Build menu items for a sequence of plugins, skipping inert nodes.
pub fn build_menu_items(plugins: &[Plugin]) -> Vec<MenuItem> {
    plugins.iter().filter_map(build_menu_item).collect()
}

fn build_category_children(content: &[Plugin]) -> Vec<MenuItem> {
    let mut groups: Vec<(&str, Vec<&Plugin>)> = Vec::new();
    let mut uncategorized = Vec::new();

    for plugin in content {
        let Some(category) = plugin.category_name() else {
            uncategorized.push(plugin);
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(plugin),
            None => groups.push((category, vec![plugin])),
        }
    }

    let mut children: Vec<MenuItem> = groups
        .into_iter()
        .map(|(category, members)| MenuItem::Group {
            id: group_id(category),
            label: category.to_string(),
            children: members.into_iter().filter_map(build_menu_item).collect(),
        })
        .collect();
    children.extend(uncategorized.into_iter().filter_map(build_menu_item));
    children
}

fn group_id(category: &str) -> String {
    category.replace(' ', "_")
}
