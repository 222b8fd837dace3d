use std::cmp::Ordering;

use crate::v1::Plugin;

/// Return a copy of `plugins` ordered by ascending `order` at every depth.
///
/// Missing orders count as zero. The sort is stable, so plugins sharing an
/// order keep their original relative position.
pub fn sort_plugins(plugins: &[Plugin]) -> Vec<Plugin> {
    let mut sorted = plugins.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

fn sort_in_place(plugins: &mut [Plugin]) {
    plugins.sort_by(compare_order);
    for plugin in plugins.iter_mut() {
        if let Some(content) = plugin.content.as_mut() {
            sort_in_place(content);
        }
    }
}

fn compare_order(a: &Plugin, b: &Plugin) -> Ordering {
    a.sort_key().total_cmp(&b.sort_key())
}

/// Depth-first pre-order walk over every plugin in the tree.
pub fn flatten(plugins: &[Plugin]) -> Vec<&Plugin> {
    let mut out = Vec::new();
    collect(plugins, &mut out);
    out
}

fn collect<'a>(plugins: &'a [Plugin], out: &mut Vec<&'a Plugin>) {
    for plugin in plugins {
        out.push(plugin);
        if let Some(content) = &plugin.content {
            collect(content, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{flatten, sort_plugins};
    use crate::v1::Plugin;

    fn plugin(id: &str, order: Option<f64>) -> Plugin {
        Plugin {
            id: id.to_string(),
            label: id.to_uppercase(),
            order,
            ..Plugin::default()
        }
    }

    fn ids(plugins: &[Plugin]) -> Vec<&str> {
        plugins.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_with_missing_order_as_zero() {
        let input = vec![
            plugin("c", Some(2.0)),
            plugin("a", None),
            plugin("neg", Some(-1.0)),
            plugin("b", Some(1.0)),
        ];

        assert_eq!(ids(&sort_plugins(&input)), vec!["neg", "a", "b", "c"]);
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let input = vec![
            plugin("first", Some(1.0)),
            plugin("zero", None),
            plugin("second", Some(1.0)),
            plugin("explicit-zero", Some(0.0)),
            plugin("third", Some(1.0)),
        ];

        assert_eq!(
            ids(&sort_plugins(&input)),
            vec!["zero", "explicit-zero", "first", "second", "third"]
        );
    }

    #[test]
    fn negative_zero_ties_with_missing_order() {
        let input = vec![
            plugin("one", Some(1.0)),
            plugin("missing", None),
            plugin("negative-zero", Some(-0.0)),
            plugin("zero", Some(0.0)),
        ];

        assert_eq!(
            ids(&sort_plugins(&input)),
            vec!["missing", "negative-zero", "zero", "one"]
        );
    }

    #[test]
    fn sorts_content_at_every_depth() {
        let mut deep = plugin("deep", Some(0.0));
        deep.content = Some(vec![
            plugin("z", Some(9.0)),
            plugin("y", Some(1.0)),
            plugin("x", Some(1.0)),
        ]);
        let mut middle = plugin("middle", Some(1.0));
        middle.content = Some(vec![plugin("m2", Some(5.0)), deep]);
        let input = vec![middle, plugin("top", Some(0.0))];

        let sorted = sort_plugins(&input);
        assert_eq!(ids(&sorted), vec!["top", "middle"]);

        let middle_content = sorted[1].content.as_ref().expect("middle content");
        assert_eq!(ids(middle_content), vec!["deep", "m2"]);

        let deep_content = middle_content[0].content.as_ref().expect("deep content");
        assert_eq!(ids(deep_content), vec!["y", "x", "z"]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let input = vec![plugin("b", Some(1.0)), plugin("a", Some(0.0))];
        let _ = sort_plugins(&input);
        assert_eq!(ids(&input), vec!["b", "a"]);
    }

    #[test]
    fn flatten_is_pre_order_at_every_depth() {
        let mut inner = plugin("inner", None);
        inner.content = Some(vec![plugin("leaf", None)]);
        let mut outer = plugin("outer", None);
        outer.content = Some(vec![inner, plugin("sibling", None)]);
        let input = vec![outer, plugin("last", None)];

        let flat: Vec<&str> = flatten(&input).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(flat, vec!["outer", "inner", "leaf", "sibling", "last"]);
    }
}
