//! Constructors for the HTML attributes.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/HTML/Attributes> for an
//! overview. Names that clash with a Rust keyword get a trailing underscore
//! (`async_`, `for_`); names that clash with an element constructor get an
//! `_attr` suffix (`form_attr`, `style_attr`).

use std::collections::BTreeMap;

use compact_str::CompactString;
use itertools::Itertools;

use crate::node::{Node, attr, attr_value};

/// A map from class name to an included flag, rendering as a single `class`
/// attribute listing the included names.
///
/// Names are emitted sorted and space-separated, so the output never depends
/// on insertion order.
///
/// ```
/// use ht_html::attributes::classes;
/// use ht_html::elements::div;
///
/// let e = div([classes([("party-hat", true), ("boring-hat", false)])]);
/// assert_eq!(e.to_string(), r#"<div class="party-hat"></div>"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Classes(BTreeMap<CompactString, bool>);

impl Classes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the included flag for a class name, replacing any previous flag.
    pub fn set(&mut self, name: impl Into<CompactString>, included: bool) {
        self.0.insert(name.into(), included);
    }
}

impl<S: Into<CompactString>> FromIterator<(S, bool)> for Classes {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, included)| (name.into(), included))
                .collect(),
        )
    }
}

impl From<Classes> for Node {
    fn from(classes: Classes) -> Self {
        class(
            classes
                .0
                .iter()
                .filter(|&(_, &included)| included)
                .map(|(name, _)| name.as_str())
                .join(" "),
        )
    }
}

/// One-shot form of [`Classes`].
pub fn classes<S: Into<CompactString>>(pairs: impl IntoIterator<Item = (S, bool)>) -> Node {
    pairs.into_iter().collect::<Classes>().into()
}

pub fn async_() -> Node {
    attr("async")
}

pub fn autofocus() -> Node {
    attr("autofocus")
}

pub fn autoplay() -> Node {
    attr("autoplay")
}

pub fn controls() -> Node {
    attr("controls")
}

pub fn defer() -> Node {
    attr("defer")
}

pub fn disabled() -> Node {
    attr("disabled")
}

pub fn loop_() -> Node {
    attr("loop")
}

pub fn multiple() -> Node {
    attr("multiple")
}

pub fn muted() -> Node {
    attr("muted")
}

pub fn playsinline() -> Node {
    attr("playsinline")
}

pub fn readonly() -> Node {
    attr("readonly")
}

pub fn required() -> Node {
    attr("required")
}

pub fn selected() -> Node {
    attr("selected")
}

pub fn accept(value: impl Into<String>) -> Node {
    attr_value("accept", value)
}

pub fn action(value: impl Into<String>) -> Node {
    attr_value("action", value)
}

pub fn alt(value: impl Into<String>) -> Node {
    attr_value("alt", value)
}

/// Aria attributes automatically have their name prefixed with `aria-`.
pub fn aria(name: &str, value: impl Into<String>) -> Node {
    attr_value(format!("aria-{name}"), value)
}

pub fn as_(value: impl Into<String>) -> Node {
    attr_value("as", value)
}

pub fn autocomplete(value: impl Into<String>) -> Node {
    attr_value("autocomplete", value)
}

pub fn charset(value: impl Into<String>) -> Node {
    attr_value("charset", value)
}

pub fn class(value: impl Into<String>) -> Node {
    attr_value("class", value)
}

pub fn cols(value: impl Into<String>) -> Node {
    attr_value("cols", value)
}

pub fn content(value: impl Into<String>) -> Node {
    attr_value("content", value)
}

/// Data attributes automatically have their name prefixed with `data-`.
pub fn data_attr(name: &str, value: impl Into<String>) -> Node {
    attr_value(format!("data-{name}"), value)
}

pub fn enctype(value: impl Into<String>) -> Node {
    attr_value("enctype", value)
}

pub fn for_(value: impl Into<String>) -> Node {
    attr_value("for", value)
}

pub fn form_attr(value: impl Into<String>) -> Node {
    attr_value("form", value)
}

pub fn height(value: impl Into<String>) -> Node {
    attr_value("height", value)
}

pub fn href(value: impl Into<String>) -> Node {
    attr_value("href", value)
}

pub fn id(value: impl Into<String>) -> Node {
    attr_value("id", value)
}

pub fn lang(value: impl Into<String>) -> Node {
    attr_value("lang", value)
}

pub fn loading(value: impl Into<String>) -> Node {
    attr_value("loading", value)
}

pub fn max(value: impl Into<String>) -> Node {
    attr_value("max", value)
}

pub fn maxlength(value: impl Into<String>) -> Node {
    attr_value("maxlength", value)
}

pub fn method(value: impl Into<String>) -> Node {
    attr_value("method", value)
}

pub fn min(value: impl Into<String>) -> Node {
    attr_value("min", value)
}

pub fn minlength(value: impl Into<String>) -> Node {
    attr_value("minlength", value)
}

pub fn name(value: impl Into<String>) -> Node {
    attr_value("name", value)
}

pub fn pattern(value: impl Into<String>) -> Node {
    attr_value("pattern", value)
}

pub fn placeholder(value: impl Into<String>) -> Node {
    attr_value("placeholder", value)
}

pub fn poster(value: impl Into<String>) -> Node {
    attr_value("poster", value)
}

pub fn preload(value: impl Into<String>) -> Node {
    attr_value("preload", value)
}

pub fn rel(value: impl Into<String>) -> Node {
    attr_value("rel", value)
}

pub fn role(value: impl Into<String>) -> Node {
    attr_value("role", value)
}

pub fn rows(value: impl Into<String>) -> Node {
    attr_value("rows", value)
}

pub fn src(value: impl Into<String>) -> Node {
    attr_value("src", value)
}

pub fn srcset(value: impl Into<String>) -> Node {
    attr_value("srcset", value)
}

pub fn style_attr(value: impl Into<String>) -> Node {
    attr_value("style", value)
}

pub fn tabindex(value: impl Into<String>) -> Node {
    attr_value("tabindex", value)
}

pub fn target(value: impl Into<String>) -> Node {
    attr_value("target", value)
}

pub fn title_attr(value: impl Into<String>) -> Node {
    attr_value("title", value)
}

pub fn type_(value: impl Into<String>) -> Node {
    attr_value("type", value)
}

pub fn value(value: impl Into<String>) -> Node {
    attr_value("value", value)
}

pub fn width(value: impl Into<String>) -> Node {
    attr_value("width", value)
}

#[cfg(test)]
mod tests {
    use crate::elements::div;

    use super::*;

    #[test]
    fn test_classes_renders_sorted_included_names() {
        let classes: Classes = [
            ("boheme-hat", true),
            ("hat", true),
            ("partyhat", true),
            ("turtlehat", false),
        ]
        .into_iter()
        .collect();
        let node: Node = classes.into();
        assert_eq!(node.to_string(), r#" class="boheme-hat hat partyhat""#);
    }

    #[test]
    fn test_classes_output_is_insertion_order_independent() {
        let forward = classes([("a", true), ("c", true), ("b", false)]);
        let backward = classes([("b", false), ("c", true), ("a", true)]);
        assert_eq!(forward.to_string(), r#" class="a c""#);
        assert_eq!(forward.to_string(), backward.to_string());
    }

    #[test]
    fn test_classes_renders_as_attribute_in_an_element() {
        let e = div([classes([("hat", true)])]);
        assert_eq!(e.to_string(), r#"<div class="hat"></div>"#);
    }

    #[test]
    fn test_classes_set_replaces_earlier_flags() {
        let mut c = Classes::new();
        c.set("hat", false);
        c.set("hat", true);
        assert_eq!(Node::from(c).to_string(), r#" class="hat""#);
    }

    #[test]
    fn test_boolean_attributes() {
        let cases: &[(&str, fn() -> Node)] = &[
            ("async", async_),
            ("autofocus", autofocus),
            ("autoplay", autoplay),
            ("controls", controls),
            ("defer", defer),
            ("disabled", disabled),
            ("loop", loop_),
            ("multiple", multiple),
            ("muted", muted),
            ("playsinline", playsinline),
            ("readonly", readonly),
            ("required", required),
            ("selected", selected),
        ];

        for (attr_name, constructor) in cases {
            let e = div([constructor()]);
            assert_eq!(e.to_string(), format!("<div {attr_name}></div>"));
        }
    }

    #[test]
    fn test_valued_attributes() {
        let cases: &[(&str, fn(&'static str) -> Node)] = &[
            ("accept", accept),
            ("action", action),
            ("alt", alt),
            ("as", as_),
            ("autocomplete", autocomplete),
            ("charset", charset),
            ("class", class),
            ("cols", cols),
            ("content", content),
            ("enctype", enctype),
            ("for", for_),
            ("form", form_attr),
            ("height", height),
            ("href", href),
            ("id", id),
            ("lang", lang),
            ("loading", loading),
            ("max", max),
            ("maxlength", maxlength),
            ("method", method),
            ("min", min),
            ("minlength", minlength),
            ("name", name),
            ("pattern", pattern),
            ("placeholder", placeholder),
            ("poster", poster),
            ("preload", preload),
            ("rel", rel),
            ("role", role),
            ("rows", rows),
            ("src", src),
            ("srcset", srcset),
            ("style", style_attr),
            ("tabindex", tabindex),
            ("target", target),
            ("title", title_attr),
            ("type", type_),
            ("value", value),
            ("width", width),
        ];

        for (attr_name, constructor) in cases {
            let e = div([constructor("hat")]);
            assert_eq!(e.to_string(), format!(r#"<div {attr_name}="hat"></div>"#));
        }
    }

    #[test]
    fn test_aria_prefixes_the_name() {
        let e = div([aria("label", "turtle")]);
        assert_eq!(e.to_string(), r#"<div aria-label="turtle"></div>"#);
    }

    #[test]
    fn test_data_attr_prefixes_the_name() {
        let e = div([data_attr("id", "hat")]);
        assert_eq!(e.to_string(), r#"<div data-id="hat"></div>"#);
    }
}
