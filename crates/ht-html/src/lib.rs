//! # ht-html: composable HTML views in pure Rust
//!
//! This crate lets you build HTML trees out of plain function calls and
//! render them to any [`std::io::Write`]. There is no template syntax to
//! learn: views are ordinary values, so they can be named, passed around,
//! stored in collections, and composed with ordinary control flow.
//!
//! ## Quick start
//!
//! ```rust
//! use ht_html::elements::{div, span};
//! use ht_html::text;
//!
//! let view = div([span([text("Party hats!")])]);
//! assert_eq!(view.to_string(), "<div><span>Party hats!</span></div>");
//! ```
//!
//! ## Attributes mix freely with children
//!
//! Attribute nodes are hoisted onto the opening tag no matter where they
//! appear in the argument list, so helper functions can forward a caller's
//! nodes without caring what is in them:
//!
//! ```rust
//! use ht_html::attributes::{class, href};
//! use ht_html::elements::a;
//! use ht_html::text;
//!
//! let link = a([text("Home"), href("/"), class("nav")]);
//! assert_eq!(link.to_string(), r#"<a href="/" class="nav">Home</a>"#);
//! ```
//!
//! ## Conditions, sequences, and escaping
//!
//! ```rust
//! use ht_html::attributes::class;
//! use ht_html::elements::{li, ul};
//! use ht_html::{group, map, text, when};
//!
//! let items = ["hat", "party hat"];
//! let list = ul([
//!     when(items.len() > 1, class("crowded")),
//!     group(map(items, |i| li([text(i)]))),
//! ]);
//! assert_eq!(
//!     list.to_string(),
//!     r#"<ul class="crowded"><li>hat</li><li>party hat</li></ul>"#
//! );
//! ```
//!
//! Text is escaped at render time; [`raw`] opts out for markup you vouch
//! for. Rendering streams directly into the destination writer and aborts
//! on the first write error:
//!
//! ```rust
//! use ht_html::elements::p;
//! use ht_html::{Render, text};
//!
//! let mut out: Vec<u8> = Vec::new();
//! p([text("2 > 1")]).render(&mut out).unwrap();
//! assert_eq!(out, b"<p>2 &gt; 1</p>");
//! ```
//!
//! ## Whole documents
//!
//! [`document::html5`] assembles a standard HTML5 skeleton from a
//! [`document::Html5Props`], and the [`elements`] and [`attributes`]
//! modules cover the usual catalogs. SVG constructors live in the
//! companion `ht-svg` crate.

pub mod attributes;
pub mod document;
pub mod elements;
mod escape;
mod node;

pub use attributes::Classes;
pub use escape::escape;
pub use node::{
    Node, Render, attr, attr_value, el, group, is_void_element, map, node_fn, raw, text, when,
};
