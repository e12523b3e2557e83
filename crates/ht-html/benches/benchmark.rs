use ht_html::attributes::{class, href, id};
use ht_html::elements::{a, div, li, ul};
use ht_html::{attr, attr_value, el, group, map, text};

fn main() {
    divan::main();
}

#[divan::bench]
fn render_boolean_attribute() -> String {
    attr("hat").to_string()
}

#[divan::bench]
fn render_name_value_attribute() -> String {
    attr_value("hat", "party").to_string()
}

#[divan::bench]
fn render_element() -> String {
    el("div", []).to_string()
}

#[divan::bench]
fn render_list_page() -> String {
    let items = ["hat", "partyhat", "turtlehat", "boheme-hat"];
    div([
        id("hats"),
        ul([
            class("hat-list"),
            group(map(items, |i| {
                li([a([href(format!("/hats/{i}")), text(i)])])
            })),
        ]),
    ])
    .to_string()
}
