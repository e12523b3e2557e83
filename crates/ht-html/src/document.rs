//! High-level document assembly on top of the element and attribute
//! catalogs.

use crate::attributes::{charset, content, lang, name};
use crate::elements::{body, doctype, head, html, meta, title};
use crate::node::{Node, group, text, when};

/// Properties for [`html5`]. The title is always emitted; description and
/// language only when non-empty.
#[derive(Clone, Debug, Default)]
pub struct Html5Props {
    pub title: String,
    pub description: String,
    pub language: String,
    pub head: Vec<Node>,
    pub body: Vec<Node>,
}

/// An HTML5 document skeleton: doctype, charset and viewport metas, title,
/// optional description, then the given head and body nodes.
pub fn html5(props: Html5Props) -> Node {
    doctype(html([
        when(!props.language.is_empty(), lang(props.language)),
        head([
            meta([charset("utf-8")]),
            meta([
                name("viewport"),
                content("width=device-width, initial-scale=1"),
            ]),
            title([text(props.title)]),
            when(
                !props.description.is_empty(),
                meta([name("description"), content(props.description)]),
            ),
            group(props.head),
        ]),
        body([group(props.body)]),
    ]))
}

#[cfg(test)]
mod tests {
    use crate::elements::{h1, link_stylesheet};

    use super::*;

    #[test]
    fn test_html5_with_all_props() {
        let page = html5(Html5Props {
            title: "Hat".into(),
            description: "Party hats".into(),
            language: "en".into(),
            head: vec![link_stylesheet("/style.css", [])],
            body: vec![h1([text("Hat")])],
        });

        assert_eq!(
            page.to_string(),
            concat!(
                "<!doctype html>",
                r#"<html lang="en">"#,
                "<head>",
                r#"<meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                "<title>Hat</title>",
                r#"<meta name="description" content="Party hats">"#,
                r#"<link rel="stylesheet" href="/style.css">"#,
                "</head>",
                "<body><h1>Hat</h1></body>",
                "</html>"
            )
        );
    }

    #[test]
    fn test_html5_omits_empty_language_and_description() {
        let page = html5(Html5Props {
            title: "Hat".into(),
            ..Default::default()
        });

        assert_eq!(
            page.to_string(),
            concat!(
                "<!doctype html>",
                "<html>",
                "<head>",
                r#"<meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                "<title>Hat</title>",
                "</head>",
                "<body></body>",
                "</html>"
            )
        );
    }
}
