use crate::transform::plugins::flatten;
use crate::v1::{IntegrationMode, Plugin};
use crate::v2::Settings;

/// Resolve the default route from already sorted plugins.
///
/// The first leaf in pre-order whose integration mode is set and is not
/// `href` wins; its `pluginUrl` is prefixed with a literal `.`, so
/// `/app` becomes `./app`. The prefix is applied verbatim, not path-joined.
pub fn find_default_url(sorted_plugins: &[Plugin]) -> Option<String> {
    let first = flatten(sorted_plugins).into_iter().find(|plugin| {
        plugin.has_no_content()
            && plugin
                .integration_mode
                .is_some_and(|mode| mode != IntegrationMode::Href)
    })?;

    first
        .plugin_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| format!(".{url}"))
}

pub fn build_settings(sorted_plugins: &[Plugin]) -> Settings {
    Settings {
        default_url: find_default_url(sorted_plugins),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_settings, find_default_url};
    use crate::v1::{IntegrationMode, Plugin};

    fn leaf(id: &str, mode: Option<IntegrationMode>, url: Option<&str>) -> Plugin {
        Plugin {
            id: id.to_string(),
            integration_mode: mode,
            plugin_url: url.map(str::to_string),
            ..Plugin::default()
        }
    }

    #[test]
    fn skips_containers_and_href_nodes() {
        let container = Plugin {
            id: "group".to_string(),
            integration_mode: Some(IntegrationMode::Iframe),
            plugin_url: Some("/group".to_string()),
            content: Some(vec![leaf("nested-link", Some(IntegrationMode::Href), Some("/x"))]),
            ..Plugin::default()
        };
        let plugins = vec![
            container,
            leaf("app", Some(IntegrationMode::Iframe), Some("/app")),
            leaf("other", Some(IntegrationMode::Href), Some("/other")),
        ];

        // Known quirk: the URL is prefixed with a bare dot rather than joined.
        assert_eq!(find_default_url(&plugins).as_deref(), Some("./app"));
    }

    #[test]
    fn searches_nested_content_depth_first() {
        let deepest = leaf("deep", Some(IntegrationMode::Qiankun), Some("/deep/"));
        let middle = Plugin {
            id: "middle".to_string(),
            content: Some(vec![deepest]),
            ..Plugin::default()
        };
        let top = Plugin {
            id: "top".to_string(),
            content: Some(vec![middle]),
            ..Plugin::default()
        };
        let plugins = vec![top, leaf("later", Some(IntegrationMode::Iframe), Some("/later"))];

        assert_eq!(find_default_url(&plugins).as_deref(), Some("./deep/"));
    }

    #[test]
    fn empty_content_counts_as_leaf() {
        let plugin = Plugin {
            content: Some(Vec::new()),
            ..leaf("empty", Some(IntegrationMode::Iframe), Some("/empty"))
        };
        assert_eq!(find_default_url(&[plugin]).as_deref(), Some("./empty"));
    }

    #[test]
    fn unknown_modes_are_still_candidates() {
        let plugins = vec![leaf("custom", Some(IntegrationMode::Unknown), Some("/custom"))];
        assert_eq!(find_default_url(&plugins).as_deref(), Some("./custom"));
    }

    #[test]
    fn first_match_without_url_leaves_route_unset() {
        let plugins = vec![
            leaf("no-url", Some(IntegrationMode::Iframe), None),
            leaf("with-url", Some(IntegrationMode::Iframe), Some("/later")),
        ];
        assert_eq!(find_default_url(&plugins), None);

        let empty = vec![leaf("blank", Some(IntegrationMode::Iframe), Some(""))];
        assert_eq!(find_default_url(&empty), None);
    }

    #[test]
    fn no_candidate_leaves_route_unset() {
        let plugins = vec![
            leaf("link", Some(IntegrationMode::Href), Some("/link")),
            leaf("bare", None, Some("/bare")),
        ];
        assert_eq!(build_settings(&plugins).default_url, None);
        assert_eq!(build_settings(&[]).default_url, None);
    }
}
