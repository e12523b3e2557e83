//! Constructors for the HTML elements.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/HTML/Element> for an
//! overview. Every function is a zero-logic wrapper around [`el`].

use std::io::Write;

use crate::node::{Node, Render, el, group, node_fn};

/// Prefixes its sibling with the literal `<!doctype html>` declaration.
pub fn doctype(sibling: Node) -> Node {
    node_fn(move |out: &mut dyn Write| {
        out.write_all(b"<!doctype html>")?;
        sibling.render(out)
    })
}

pub fn a(children: impl IntoIterator<Item = Node>) -> Node {
    el("a", children)
}

pub fn address(children: impl IntoIterator<Item = Node>) -> Node {
    el("address", children)
}

pub fn area(children: impl IntoIterator<Item = Node>) -> Node {
    el("area", children)
}

pub fn article(children: impl IntoIterator<Item = Node>) -> Node {
    el("article", children)
}

pub fn aside(children: impl IntoIterator<Item = Node>) -> Node {
    el("aside", children)
}

pub fn audio(children: impl IntoIterator<Item = Node>) -> Node {
    el("audio", children)
}

pub fn base(children: impl IntoIterator<Item = Node>) -> Node {
    el("base", children)
}

pub fn blockquote(children: impl IntoIterator<Item = Node>) -> Node {
    el("blockquote", children)
}

pub fn body(children: impl IntoIterator<Item = Node>) -> Node {
    el("body", children)
}

pub fn br(children: impl IntoIterator<Item = Node>) -> Node {
    el("br", children)
}

pub fn button(children: impl IntoIterator<Item = Node>) -> Node {
    el("button", children)
}

pub fn canvas(children: impl IntoIterator<Item = Node>) -> Node {
    el("canvas", children)
}

pub fn cite(children: impl IntoIterator<Item = Node>) -> Node {
    el("cite", children)
}

pub fn code(children: impl IntoIterator<Item = Node>) -> Node {
    el("code", children)
}

pub fn col(children: impl IntoIterator<Item = Node>) -> Node {
    el("col", children)
}

pub fn colgroup(children: impl IntoIterator<Item = Node>) -> Node {
    el("colgroup", children)
}

pub fn data(children: impl IntoIterator<Item = Node>) -> Node {
    el("data", children)
}

pub fn datalist(children: impl IntoIterator<Item = Node>) -> Node {
    el("datalist", children)
}

pub fn details(children: impl IntoIterator<Item = Node>) -> Node {
    el("details", children)
}

pub fn dialog(children: impl IntoIterator<Item = Node>) -> Node {
    el("dialog", children)
}

pub fn div(children: impl IntoIterator<Item = Node>) -> Node {
    el("div", children)
}

pub fn dl(children: impl IntoIterator<Item = Node>) -> Node {
    el("dl", children)
}

pub fn embed(children: impl IntoIterator<Item = Node>) -> Node {
    el("embed", children)
}

pub fn form(children: impl IntoIterator<Item = Node>) -> Node {
    el("form", children)
}

pub fn fieldset(children: impl IntoIterator<Item = Node>) -> Node {
    el("fieldset", children)
}

pub fn figure(children: impl IntoIterator<Item = Node>) -> Node {
    el("figure", children)
}

pub fn footer(children: impl IntoIterator<Item = Node>) -> Node {
    el("footer", children)
}

pub fn head(children: impl IntoIterator<Item = Node>) -> Node {
    el("head", children)
}

pub fn header(children: impl IntoIterator<Item = Node>) -> Node {
    el("header", children)
}

pub fn hgroup(children: impl IntoIterator<Item = Node>) -> Node {
    el("hgroup", children)
}

pub fn hr(children: impl IntoIterator<Item = Node>) -> Node {
    el("hr", children)
}

pub fn html(children: impl IntoIterator<Item = Node>) -> Node {
    el("html", children)
}

pub fn iframe(children: impl IntoIterator<Item = Node>) -> Node {
    el("iframe", children)
}

pub fn img(children: impl IntoIterator<Item = Node>) -> Node {
    el("img", children)
}

pub fn input(children: impl IntoIterator<Item = Node>) -> Node {
    el("input", children)
}

/// An `<input type="hidden">` with the given name and value.
pub fn input_hidden(
    name: impl Into<String>,
    value: impl Into<String>,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    input([
        crate::attributes::type_("hidden"),
        crate::attributes::name(name),
        crate::attributes::value(value),
        group(children),
    ])
}

pub fn label(children: impl IntoIterator<Item = Node>) -> Node {
    el("label", children)
}

pub fn legend(children: impl IntoIterator<Item = Node>) -> Node {
    el("legend", children)
}

pub fn li(children: impl IntoIterator<Item = Node>) -> Node {
    el("li", children)
}

pub fn link(children: impl IntoIterator<Item = Node>) -> Node {
    el("link", children)
}

/// A `<link rel="stylesheet">` pointing at `href`.
pub fn link_stylesheet(
    href: impl Into<String>,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    link([
        crate::attributes::rel("stylesheet"),
        crate::attributes::href(href),
        group(children),
    ])
}

/// A `<link rel="preload">` for `href` loaded as `as_`.
pub fn link_preload(
    href: impl Into<String>,
    as_: impl Into<String>,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    link([
        crate::attributes::rel("preload"),
        crate::attributes::href(href),
        crate::attributes::as_(as_),
        group(children),
    ])
}

pub fn main(children: impl IntoIterator<Item = Node>) -> Node {
    el("main", children)
}

pub fn menu(children: impl IntoIterator<Item = Node>) -> Node {
    el("menu", children)
}

pub fn meta(children: impl IntoIterator<Item = Node>) -> Node {
    el("meta", children)
}

pub fn meter(children: impl IntoIterator<Item = Node>) -> Node {
    el("meter", children)
}

pub fn nav(children: impl IntoIterator<Item = Node>) -> Node {
    el("nav", children)
}

pub fn noscript(children: impl IntoIterator<Item = Node>) -> Node {
    el("noscript", children)
}

pub fn object(children: impl IntoIterator<Item = Node>) -> Node {
    el("object", children)
}

pub fn ol(children: impl IntoIterator<Item = Node>) -> Node {
    el("ol", children)
}

pub fn optgroup(children: impl IntoIterator<Item = Node>) -> Node {
    el("optgroup", children)
}

pub fn option(children: impl IntoIterator<Item = Node>) -> Node {
    el("option", children)
}

pub fn p(children: impl IntoIterator<Item = Node>) -> Node {
    el("p", children)
}

pub fn param(children: impl IntoIterator<Item = Node>) -> Node {
    el("param", children)
}

pub fn picture(children: impl IntoIterator<Item = Node>) -> Node {
    el("picture", children)
}

pub fn pre(children: impl IntoIterator<Item = Node>) -> Node {
    el("pre", children)
}

pub fn progress(children: impl IntoIterator<Item = Node>) -> Node {
    el("progress", children)
}

pub fn script(children: impl IntoIterator<Item = Node>) -> Node {
    el("script", children)
}

pub fn section(children: impl IntoIterator<Item = Node>) -> Node {
    el("section", children)
}

pub fn select(children: impl IntoIterator<Item = Node>) -> Node {
    el("select", children)
}

pub fn source(children: impl IntoIterator<Item = Node>) -> Node {
    el("source", children)
}

pub fn span(children: impl IntoIterator<Item = Node>) -> Node {
    el("span", children)
}

pub fn style(children: impl IntoIterator<Item = Node>) -> Node {
    el("style", children)
}

pub fn summary(children: impl IntoIterator<Item = Node>) -> Node {
    el("summary", children)
}

pub fn svg(children: impl IntoIterator<Item = Node>) -> Node {
    el("svg", children)
}

pub fn table(children: impl IntoIterator<Item = Node>) -> Node {
    el("table", children)
}

pub fn tbody(children: impl IntoIterator<Item = Node>) -> Node {
    el("tbody", children)
}

pub fn td(children: impl IntoIterator<Item = Node>) -> Node {
    el("td", children)
}

pub fn textarea(children: impl IntoIterator<Item = Node>) -> Node {
    el("textarea", children)
}

pub fn tfoot(children: impl IntoIterator<Item = Node>) -> Node {
    el("tfoot", children)
}

pub fn th(children: impl IntoIterator<Item = Node>) -> Node {
    el("th", children)
}

pub fn thead(children: impl IntoIterator<Item = Node>) -> Node {
    el("thead", children)
}

pub fn tr(children: impl IntoIterator<Item = Node>) -> Node {
    el("tr", children)
}

pub fn ul(children: impl IntoIterator<Item = Node>) -> Node {
    el("ul", children)
}

pub fn wbr(children: impl IntoIterator<Item = Node>) -> Node {
    el("wbr", children)
}

pub fn abbr(children: impl IntoIterator<Item = Node>) -> Node {
    el("abbr", children)
}

pub fn b(children: impl IntoIterator<Item = Node>) -> Node {
    el("b", children)
}

pub fn caption(children: impl IntoIterator<Item = Node>) -> Node {
    el("caption", children)
}

pub fn dd(children: impl IntoIterator<Item = Node>) -> Node {
    el("dd", children)
}

pub fn del(children: impl IntoIterator<Item = Node>) -> Node {
    el("del", children)
}

pub fn dfn(children: impl IntoIterator<Item = Node>) -> Node {
    el("dfn", children)
}

pub fn dt(children: impl IntoIterator<Item = Node>) -> Node {
    el("dt", children)
}

pub fn em(children: impl IntoIterator<Item = Node>) -> Node {
    el("em", children)
}

pub fn figcaption(children: impl IntoIterator<Item = Node>) -> Node {
    el("figcaption", children)
}

pub fn h1(children: impl IntoIterator<Item = Node>) -> Node {
    el("h1", children)
}

pub fn h2(children: impl IntoIterator<Item = Node>) -> Node {
    el("h2", children)
}

pub fn h3(children: impl IntoIterator<Item = Node>) -> Node {
    el("h3", children)
}

pub fn h4(children: impl IntoIterator<Item = Node>) -> Node {
    el("h4", children)
}

pub fn h5(children: impl IntoIterator<Item = Node>) -> Node {
    el("h5", children)
}

pub fn h6(children: impl IntoIterator<Item = Node>) -> Node {
    el("h6", children)
}

pub fn i(children: impl IntoIterator<Item = Node>) -> Node {
    el("i", children)
}

pub fn ins(children: impl IntoIterator<Item = Node>) -> Node {
    el("ins", children)
}

pub fn kbd(children: impl IntoIterator<Item = Node>) -> Node {
    el("kbd", children)
}

pub fn mark(children: impl IntoIterator<Item = Node>) -> Node {
    el("mark", children)
}

pub fn q(children: impl IntoIterator<Item = Node>) -> Node {
    el("q", children)
}

pub fn s(children: impl IntoIterator<Item = Node>) -> Node {
    el("s", children)
}

pub fn samp(children: impl IntoIterator<Item = Node>) -> Node {
    el("samp", children)
}

pub fn small(children: impl IntoIterator<Item = Node>) -> Node {
    el("small", children)
}

pub fn strong(children: impl IntoIterator<Item = Node>) -> Node {
    el("strong", children)
}

pub fn sub(children: impl IntoIterator<Item = Node>) -> Node {
    el("sub", children)
}

pub fn sup(children: impl IntoIterator<Item = Node>) -> Node {
    el("sup", children)
}

pub fn time(children: impl IntoIterator<Item = Node>) -> Node {
    el("time", children)
}

pub fn title(children: impl IntoIterator<Item = Node>) -> Node {
    el("title", children)
}

pub fn u(children: impl IntoIterator<Item = Node>) -> Node {
    el("u", children)
}

pub fn var(children: impl IntoIterator<Item = Node>) -> Node {
    el("var", children)
}

pub fn video(children: impl IntoIterator<Item = Node>) -> Node {
    el("video", children)
}
