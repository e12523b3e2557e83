//! # ht-svg: SVG constructors for ht-html
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/SVG/Element> for an
//! overview. Everything here is a zero-logic wrapper around the `ht-html`
//! core; [`svg`] additionally sets the `xmlns` attribute so the result can
//! be embedded standalone.
//!
//! ```rust
//! use ht_svg::{d, fill, path, svg};
//!
//! let icon = svg([path([d("M0 0h24v24H0z"), fill("none")])]);
//! assert_eq!(
//!     icon.to_string(),
//!     r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0h24v24H0z" fill="none"></path></svg>"#
//! );
//! ```

use ht_html::{Node, attr_value, el, group};

/// An `<svg>` element with the SVG namespace set, children spliced after it.
pub fn svg(children: impl IntoIterator<Item = Node>) -> Node {
    el(
        "svg",
        [
            attr_value("xmlns", "http://www.w3.org/2000/svg"),
            group(children),
        ],
    )
}

pub fn path(children: impl IntoIterator<Item = Node>) -> Node {
    el("path", children)
}

pub fn clip_rule(value: impl Into<String>) -> Node {
    attr_value("clip-rule", value)
}

pub fn d(value: impl Into<String>) -> Node {
    attr_value("d", value)
}

pub fn fill(value: impl Into<String>) -> Node {
    attr_value("fill", value)
}

pub fn fill_rule(value: impl Into<String>) -> Node {
    attr_value("fill-rule", value)
}

pub fn stroke(value: impl Into<String>) -> Node {
    attr_value("stroke", value)
}

pub fn view_box(value: impl Into<String>) -> Node {
    attr_value("viewBox", value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_svg_sets_the_namespace_before_caller_children() {
        let e = svg([view_box("0 0 24 24")]);
        assert_eq!(
            e.to_string(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"></svg>"#
        );
    }

    #[test]
    fn test_path() {
        assert_eq!(path([]).to_string(), "<path></path>");
    }

    #[rstest]
    #[case::clip_rule("clip-rule", clip_rule as fn(&'static str) -> Node)]
    #[case::d("d", d)]
    #[case::fill("fill", fill)]
    #[case::fill_rule("fill-rule", fill_rule)]
    #[case::stroke("stroke", stroke)]
    #[case::view_box("viewBox", view_box)]
    fn test_attributes(#[case] name: &str, #[case] constructor: fn(&'static str) -> Node) {
        let e = path([constructor("hat")]);
        assert_eq!(e.to_string(), format!(r#"<path {name}="hat"></path>"#));
    }
}
