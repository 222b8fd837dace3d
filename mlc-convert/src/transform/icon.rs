use crate::v2::{Icon, IconLibrary};

const SOLID_PREFIX: &str = "fas";

/// Convert a `"<prefix> <name>"` icon-font token into an [`Icon`].
///
/// `fas` selects the solid library, any other prefix the regular one. A
/// token without a space still yields an icon, just without a selector.
pub fn resolve_icon(token: Option<&str>) -> Option<Icon> {
    let token = token.filter(|token| !token.is_empty())?;
    let (prefix, selector) = match token.split_once(' ') {
        Some((prefix, rest)) => (prefix, Some(first_segment(rest))),
        None => (token, None),
    };

    let library = if prefix == SOLID_PREFIX {
        IconLibrary::Solid
    } else {
        IconLibrary::Regular
    };

    Some(Icon {
        library,
        selector: selector.map(str::to_string),
    })
}

// "fas  home" and "fas home extra" keep the segment right after the first space.
fn first_segment(rest: &str) -> &str {
    rest.split(' ').next().unwrap_or(rest)
}
