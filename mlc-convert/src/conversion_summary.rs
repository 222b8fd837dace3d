use serde::Serialize;
use serde_json::Value;

use crate::transform::layout::LAYOUT_TAG;
use crate::v2::Config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub menu_items: usize,
    pub applications: usize,
    pub components: usize,
    pub sources: usize,
    pub default_url: Option<String>,
}

pub fn summarize(config: &Config) -> ConversionSummary {
    ConversionSummary {
        menu_items: count_menu_items(config),
        applications: config.applications.len(),
        components: config.layout.content.len(),
        sources: config.layout.sources.len(),
        default_url: config.settings.default_url.clone(),
    }
}

pub fn render(summary: &ConversionSummary) -> String {
    format!(
        "convert_summary menu_items={} applications={} components={} sources={} default_url={}",
        summary.menu_items,
        summary.applications,
        summary.components,
        summary.sources,
        summary.default_url.as_deref().unwrap_or("none")
    )
}

fn count_menu_items(config: &Config) -> usize {
    config
        .layout
        .content
        .iter()
        .filter(|component| component.tag == LAYOUT_TAG)
        .filter_map(|component| component.get_property("menuItems"))
        .filter_map(Value::as_array)
        .map(|items| count_items(items))
        .sum()
}

// Every item at every depth, groups included.
fn count_items(items: &[Value]) -> usize {
    items
        .iter()
        .map(|item| {
            1 + item
                .get("children")
                .and_then(Value::as_array)
                .map_or(0, |children| count_items(children))
        })
        .sum()
}
