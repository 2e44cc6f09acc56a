//! Edge-case coverage for placeholder resolution and sanitization.
//!
//! These tests focus on boundary behavior: hostile prop access patterns,
//! malformed-looking attribute payloads, deep trees, and the invariants
//! that must hold regardless of input (key preservation, idempotence,
//! totality).

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use stencil::testing::ScopedHost;
use stencil::{
    make_stencil, sanitize, AttributeValue, Component, Element, EventHandler, RenderNode,
    SafeValue, StyleMap, StyleValue, Tag,
};

#[test]
fn iterator_shaped_prop_without_length_does_not_crash() {
    // A component that treats a prop as an iterable without ever asking for
    // its length just walks an empty sequence.
    let stencil = make_stencil(Component::from_fn("List", |props| {
        let items = props.member("items").placeholder().unwrap_or_default();
        let rendered: Vec<RenderNode> = items
            .iter()
            .map(|item| Element::new("li").child(RenderNode::text(item.to_string())).into())
            .collect();
        Element::new("ul").children(rendered).into()
    }));

    let RenderNode::Element(ul) = stencil.render(&ScopedHost::new()).unwrap() else {
        panic!("the list element must survive");
    };
    assert!(ul.children.is_empty());
}

#[test]
fn boolean_and_empty_attribute_values_collapse_without_error() {
    let input = Element::new("input")
        .attr("disabled", true)
        .attr("checked", false)
        .attr("placeholder", "");
    let RenderNode::Element(output) = sanitize(input.into()) else {
        panic!("the element must survive");
    };
    assert_eq!(output.attributes["disabled"], AttributeValue::Bool(true));
    assert_eq!(output.attributes["checked"], AttributeValue::Bool(false));
    assert_eq!(
        output.attributes["placeholder"],
        AttributeValue::Text(String::new())
    );
}

#[test]
fn attribute_key_sets_are_preserved_exactly() {
    let input = Element::new("div")
        .attr("class", "card")
        .attr("then", "ordinary")
        .attr("onclick", EventHandler::new(|| ()))
        .attr("data-blob", SafeValue::new())
        .attr("style", AttributeValue::style([("color", "red")]));
    let before: BTreeSet<String> = input.attributes.keys().cloned().collect();

    let RenderNode::Element(output) = sanitize(input.into()) else {
        panic!("the element must survive");
    };
    let after: BTreeSet<String> = output.attributes.keys().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn an_attribute_named_then_is_not_specially_filtered() {
    // The "then" suppression rule belongs to the placeholder, not the
    // sanitizer: as an attribute it is an ordinary primitive.
    let input = Element::new("a").attr("then", "navigate");
    let RenderNode::Element(output) = sanitize(input.into()) else {
        panic!("the element must survive");
    };
    assert_eq!(
        output.attributes["then"],
        AttributeValue::Text("navigate".into())
    );
}

#[test]
fn empty_style_mapping_survives_as_an_empty_mapping() {
    let input = Element::new("div").attr("style", AttributeValue::Style(StyleMap::new()));
    let RenderNode::Element(output) = sanitize(input.into()) else {
        panic!("the element must survive");
    };
    assert_eq!(output.attributes["style"], AttributeValue::Style(StyleMap::new()));
}

#[test]
fn deeply_nested_trees_sanitize_completely() {
    let mut node: RenderNode = RenderNode::text("deep secret");
    for depth in 0..200 {
        node = Element::new(if depth % 2 == 0 { "div" } else { "span" })
            .child(node)
            .into();
    }

    let mut sanitized = sanitize(node);
    loop {
        match sanitized {
            RenderNode::Element(element) => {
                assert!(matches!(element.tag, Tag::Named(_)));
                sanitized = element.children.into_iter().next().unwrap();
            }
            RenderNode::Text(text) => {
                assert_eq!(text, "");
                break;
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }
}

#[test]
fn sanitize_is_idempotent_over_a_mixed_tree() {
    let tree: RenderNode = RenderNode::Sequence(vec![
        RenderNode::Null,
        RenderNode::text("caption"),
        Element::fragment()
            .child(
                Element::new("article")
                    .attr("class", "post")
                    .attr("onclick", EventHandler::new(|| ()))
                    .attr(
                        "style",
                        AttributeValue::style([
                            ("color", StyleValue::Text("teal".into())),
                            (
                                "margin",
                                StyleValue::Nested(stencil::StyleMap::new()),
                            ),
                        ]),
                    )
                    .child(RenderNode::text("body")),
            )
            .into(),
    ]);

    let once = sanitize(tree);
    assert_eq!(sanitize(once.clone()), once);
}

#[test]
fn number_attributes_keep_their_values() {
    let input = Element::new("img").attr("width", 320).attr("height", 180);
    let RenderNode::Element(output) = sanitize(input.into()) else {
        panic!("the element must survive");
    };
    assert_eq!(output.attributes["width"], AttributeValue::Number(320.0));
    assert_eq!(output.attributes["height"], AttributeValue::Number(180.0));
}

#[test]
fn hostile_component_probing_every_special_member_still_renders() {
    let stencil = make_stencil(Component::from_fn("Hostile", |props| {
        // Exercise every special member and a call chain, then misuse the
        // results as attribute and text content.
        let user = props.member("user").placeholder().unwrap_or_default();
        let coerced = user.to_string();
        let called = user.call(&[user, SafeValue::new()]);
        let pending = !called.member("then").is_absent();
        let len = called.len();
        Element::new("div")
            .attr("data-coerced", coerced)
            .attr("data-pending", pending)
            .attr("data-len", i32::try_from(len).unwrap_or(i32::MAX))
            .child(RenderNode::text(called.to_string()))
            .into()
    }));

    let RenderNode::Element(div) = stencil.render(&ScopedHost::new()).unwrap() else {
        panic!("the element must survive");
    };
    assert_eq!(div.attributes["data-coerced"], AttributeValue::Text(String::new()));
    assert_eq!(div.attributes["data-pending"], AttributeValue::Bool(false));
    assert_eq!(div.attributes["data-len"], AttributeValue::Number(0.0));
}
