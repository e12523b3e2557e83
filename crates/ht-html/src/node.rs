use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::{Arc, LazyLock};

use compact_str::CompactString;
use rustc_hash::FxHashSet;

use crate::escape::escape_into;

/// The ability to write oneself as markup to an output stream.
///
/// Everything in a view tree implements this, and custom leaf types can be
/// embedded in a tree via [`Node::custom`] by implementing it too. Errors
/// from the destination stream are returned verbatim and abort the
/// traversal; output already written stays written.
pub trait Render {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Tags that never get a closing tag or content children.
static VOID_ELEMENTS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "!doctype", "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
        "param", "source", "wbr",
    ]
    .into_iter()
    .collect()
});

/// Reports whether `tag` is a void element, i.e. one rendered as `<tag>`
/// with no closing tag and no content.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(tag)
}

/// A single unit of a view tree: an element, an attribute, text, raw markup,
/// a spliced group, or a custom render function. Built with [`el`], [`attr`],
/// [`text`] and friends; the variant is not part of the public API.
///
/// Nodes are immutable values. A tree can be rendered any number of times,
/// from any thread, because rendering never mutates the tree.
#[derive(Clone, Debug)]
pub struct Node(Kind);

#[derive(Clone, Debug)]
enum Kind {
    Element(Element),
    Attribute(Attribute),
    Group(Vec<Node>),
    Text(String),
    Raw(String),
    Func(NodeFunc),
    Empty,
}

impl Node {
    /// The absent node. Renders nothing and contributes to neither the
    /// attribute nor the content partition of its parent.
    pub const EMPTY: Node = Node(Kind::Empty);

    /// Wraps any [`Render`] value as a content leaf.
    pub fn custom(value: impl Render + Send + Sync + 'static) -> Node {
        node_fn(move |out: &mut dyn Write| value.render(out))
    }
}

impl Render for Node {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.0 {
            Kind::Element(element) => element.render(out),
            Kind::Attribute(attribute) => attribute.render(out),
            Kind::Group(_) => panic!(
                "group nodes cannot be rendered directly, splice them into an element instead"
            ),
            Kind::Text(value) => escape_into(out, value),
            Kind::Raw(value) => out.write_all(value.as_bytes()),
            Kind::Func(func) => (func.0)(out),
            Kind::Empty => Ok(()),
        }
    }
}

/// Best-effort string conversion: renders into a buffer and discards any
/// render error. Panics for a bare group, like [`Render::render`] does.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Kind::Group(_) = self.0 {
            panic!("group nodes cannot be rendered directly, splice them into an element instead");
        }
        let mut buf: Vec<u8> = Vec::new();
        let _ = self.render(&mut buf);
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

/// An element with a tag name and ordered children.
///
/// At render time the children are partitioned: attribute children are
/// emitted on the opening tag in encounter order, everything else as nested
/// content. Groups are transparent to both passes.
#[derive(Clone, Debug)]
struct Element {
    tag: CompactString,
    children: Vec<Node>,
}

impl Element {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"<")?;
        out.write_all(self.tag.as_bytes())?;
        render_attributes(&self.children, out)?;
        out.write_all(b">")?;

        if is_void_element(&self.tag) {
            // Content children under a void tag are dropped, not rejected.
            return Ok(());
        }

        render_content(&self.children, out)?;
        out.write_all(b"</")?;
        out.write_all(self.tag.as_bytes())?;
        out.write_all(b">")
    }
}

fn render_attributes(children: &[Node], out: &mut dyn Write) -> io::Result<()> {
    for child in children {
        match &child.0 {
            Kind::Attribute(attribute) => attribute.render(out)?,
            Kind::Group(nodes) => render_attributes(nodes, out)?,
            _ => {}
        }
    }
    Ok(())
}

fn render_content(children: &[Node], out: &mut dyn Write) -> io::Result<()> {
    for child in children {
        match &child.0 {
            Kind::Attribute(_) | Kind::Empty => {}
            Kind::Group(nodes) => render_content(nodes, out)?,
            _ => child.render(out)?,
        }
    }
    Ok(())
}

/// A boolean (` name`) or valued (` name="value"`) attribute.
///
/// The leading space is part of the attribute's own output, so attributes
/// concatenate without the element tracking separators. Values are escaped
/// at render time.
#[derive(Clone, Debug)]
struct Attribute {
    name: CompactString,
    value: Option<String>,
}

impl Attribute {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b" ")?;
        out.write_all(self.name.as_bytes())?;
        if let Some(value) = &self.value {
            out.write_all(b"=\"")?;
            escape_into(out, value)?;
            out.write_all(b"\"")?;
        }
        Ok(())
    }
}

#[derive(Clone)]
struct NodeFunc(Arc<dyn Fn(&mut dyn Write) -> io::Result<()> + Send + Sync>);

impl fmt::Debug for NodeFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NodeFunc")
    }
}

/// Creates an element with the given tag name and children.
///
/// ```
/// use ht_html::{Render, el};
///
/// let mut buf: Vec<u8> = Vec::new();
/// el("div", [el("span", [])]).render(&mut buf).unwrap();
/// assert_eq!(buf, b"<div><span></span></div>");
/// ```
pub fn el(tag: impl Into<CompactString>, children: impl IntoIterator<Item = Node>) -> Node {
    Node(Kind::Element(Element {
        tag: tag.into(),
        children: children.into_iter().collect(),
    }))
}

/// Creates a boolean attribute, rendered as ` name`.
pub fn attr(name: impl Into<CompactString>) -> Node {
    Node(Kind::Attribute(Attribute {
        name: name.into(),
        value: None,
    }))
}

/// Creates a name/value attribute, rendered as ` name="value"` with the
/// value escaped.
pub fn attr_value(name: impl Into<CompactString>, value: impl Into<String>) -> Node {
    Node(Kind::Attribute(Attribute {
        name: name.into(),
        value: Some(value.into()),
    }))
}

/// Groups nodes so they can be passed around as one.
///
/// A group has no output of its own; its children are spliced into the
/// surrounding element as if passed directly, attributes included. Rendering
/// a bare group panics.
pub fn group(children: impl IntoIterator<Item = Node>) -> Node {
    Node(Kind::Group(children.into_iter().collect()))
}

/// Returns `node` if `condition` holds, otherwise [`Node::EMPTY`].
///
/// ```
/// use ht_html::{el, text, when};
///
/// let n = el("div", [when(false, text("hidden"))]);
/// assert_eq!(n.to_string(), "<div></div>");
/// ```
pub fn when(condition: bool, node: Node) -> Node {
    if condition { node } else { Node::EMPTY }
}

/// Maps `items` to nodes in order. Combine with [`group`] to splice the
/// result into an element's children.
pub fn map<T, F>(items: impl IntoIterator<Item = T>, f: F) -> Vec<Node>
where
    F: FnMut(T) -> Node,
{
    items.into_iter().map(f).collect()
}

/// Creates a text node, escaped at render time.
pub fn text(value: impl Into<String>) -> Node {
    Node(Kind::Text(value.into()))
}

/// Creates a raw node, rendered verbatim with no escaping. The caller vouches
/// for the markup being safe.
pub fn raw(value: impl Into<String>) -> Node {
    Node(Kind::Raw(value.into()))
}

/// Wraps a render function as a node. This is the escape hatch for output
/// that none of the built-in variants cover.
pub fn node_fn(f: impl Fn(&mut dyn Write) -> io::Result<()> + Send + Sync + 'static) -> Node {
    Node(Kind::Func(NodeFunc(Arc::new(f))))
}

/// Creates a text node from a format string, like [`format!`].
///
/// The whole interpolated string is escaped once at render time; individual
/// arguments are not escaped separately, so don't pass pre-escaped fragments.
///
/// ```
/// use ht_html::textf;
///
/// let n = textf!("{} party hats > {} normal hats.", 2, 3);
/// assert_eq!(n.to_string(), "2 party hats &gt; 3 normal hats.");
/// ```
#[macro_export]
macro_rules! textf {
    ($($arg:tt)*) => {
        $crate::text(format!($($arg)*))
    };
}
