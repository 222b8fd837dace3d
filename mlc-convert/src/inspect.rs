use crate::v2::MenuItem;

/// Render a menu tree, one item per line, indented two spaces per level.
pub fn render_menu_tree(items: &[MenuItem], max_depth: usize) -> String {
    let mut out = String::new();
    for item in items {
        render_item(item, 0, max_depth, &mut out);
    }
    out
}

fn render_item(item: &MenuItem, depth: usize, max_depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{}{} {} ({})\n",
        indent,
        item.kind(),
        item.id(),
        item.label()
    ));

    if depth >= max_depth {
        return;
    }

    for child in item.children() {
        render_item(child, depth + 1, max_depth, out);
    }
}
