//! The render-tree sanitizer: value-redacting, structure-preserving.
//!
//! [`sanitize`] rewrites whatever a component produced under placeholder
//! props into content-free, execution-free output. The walk is pure and
//! total, and it preserves structure:
//!
//! - Sequences keep their order and length; elements keep their tag and
//!   every attribute *key*.
//! - Primitive attribute values (text, numbers, booleans) survive
//!   unchanged; every other attribute value is redacted to the empty
//!   string.
//! - The one exception is a style mapping stored under
//!   [`STYLE_ATTRIBUTE`]: it is rebuilt entry-by-entry, keeping primitive
//!   entries and dropping data-derived nested structures, so author-supplied
//!   static styling survives.
//! - Text leaves collapse to empty text. Literal content is never trusted,
//!   even when it looks harmless, because it may be the coercion of real
//!   data.
//! - Composite nodes pass through unchanged; deciding whether a nested
//!   custom component is itself stencil-rendered is the orchestrator's job,
//!   not this pass's.
//!
//! Sanitization is idempotent: a second pass is a no-op.

use crate::node::{AttributeValue, Element, RenderNode, StyleMap, STYLE_ATTRIBUTE};

/// Rewrites `node` into its content-free form.
#[must_use]
pub fn sanitize(node: RenderNode) -> RenderNode {
    match node {
        RenderNode::Sequence(items) => {
            RenderNode::Sequence(items.into_iter().map(sanitize).collect())
        }
        RenderNode::Null => RenderNode::Null,
        RenderNode::Text(_) => RenderNode::Text(String::new()),
        RenderNode::Element(element) => RenderNode::Element(sanitize_element(element)),
        RenderNode::Composite(composite) => RenderNode::Composite(composite),
    }
}

fn sanitize_element(element: Element) -> Element {
    let Element {
        tag,
        attributes,
        children,
    } = element;

    let attributes = attributes
        .into_iter()
        .map(|(name, value)| {
            let value = if name == STYLE_ATTRIBUTE {
                sanitize_style_slot(value)
            } else {
                sanitize_attribute(value)
            };
            (name, value)
        })
        .collect();

    Element {
        tag,
        attributes,
        children: children.into_iter().map(sanitize).collect(),
    }
}

/// Primitives pass; everything else becomes the empty string. Redaction is
/// value-level only: the caller keeps the attribute key either way.
fn sanitize_attribute(value: AttributeValue) -> AttributeValue {
    if value.is_primitive() {
        value
    } else {
        AttributeValue::Text(String::new())
    }
}

/// The style slot keeps its mapping shape, filtered to primitive entries.
/// A non-mapping value under the style key is handled like any other
/// attribute.
fn sanitize_style_slot(value: AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::Style(map) => AttributeValue::Style(sanitize_style_map(map)),
        other => sanitize_attribute(other),
    }
}

fn sanitize_style_map(map: StyleMap) -> StyleMap {
    map.into_iter()
        .filter(|(_, value)| value.is_primitive())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize;
    use crate::node::{AttributeValue, Element, EventHandler, RenderNode, StyleValue};
    use crate::placeholder::SafeValue;

    #[test]
    fn text_leaves_collapse_to_empty() {
        assert_eq!(
            sanitize(RenderNode::text("Ada Lovelace")),
            RenderNode::Text(String::new())
        );
        assert_eq!(sanitize(RenderNode::text("")), RenderNode::Text(String::new()));
    }

    #[test]
    fn null_stays_null() {
        assert_eq!(sanitize(RenderNode::Null), RenderNode::Null);
    }

    #[test]
    fn sequences_preserve_order_and_count() {
        let input = RenderNode::Sequence(vec![
            RenderNode::text("one"),
            RenderNode::Null,
            Element::new("p").into(),
        ]);
        let RenderNode::Sequence(items) = sanitize(input) else {
            panic!("sequence shape must be preserved");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], RenderNode::Text(String::new()));
        assert_eq!(items[1], RenderNode::Null);
        assert!(matches!(items[2], RenderNode::Element(_)));
    }

    #[test]
    fn primitive_attributes_survive_unchanged() {
        let input = Element::new("div")
            .attr("class", "box")
            .attr("tabindex", 2)
            .attr("hidden", true);
        let RenderNode::Element(output) = sanitize(input.clone().into()) else {
            panic!("element shape must be preserved");
        };
        assert_eq!(output.attributes, input.attributes);
    }

    #[test]
    fn handlers_and_placeholders_redact_to_empty_text() {
        let input = Element::new("button")
            .attr("onclick", EventHandler::new(|| ()))
            .attr("aria-label", SafeValue::new());
        let RenderNode::Element(output) = sanitize(input.into()) else {
            panic!("element shape must be preserved");
        };
        assert_eq!(
            output.attributes["onclick"],
            AttributeValue::Text(String::new())
        );
        assert_eq!(
            output.attributes["aria-label"],
            AttributeValue::Text(String::new())
        );
    }

    #[test]
    fn attribute_keys_are_never_dropped() {
        let input = Element::new("div")
            .attr("data-raw", AttributeValue::Style(crate::node::StyleMap::new()))
            .attr("onclick", EventHandler::new(|| ()));
        let RenderNode::Element(output) = sanitize(input.into()) else {
            panic!("element shape must be preserved");
        };
        let keys: Vec<&str> = output.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["data-raw", "onclick"]);
    }

    #[test]
    fn style_slot_keeps_primitives_and_drops_nested_entries() {
        let nested: crate::node::StyleMap =
            [("left".to_owned(), StyleValue::Number(1.0))].into_iter().collect();
        let input = Element::new("div").attr(
            "style",
            AttributeValue::style([
                ("color", StyleValue::Text("blue".into())),
                ("padding", StyleValue::Nested(nested)),
                ("width", StyleValue::Number(50.0)),
            ]),
        );
        let RenderNode::Element(output) = sanitize(input.into()) else {
            panic!("element shape must be preserved");
        };
        let AttributeValue::Style(map) = &output.attributes["style"] else {
            panic!("style slot must keep its mapping shape");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["color"], StyleValue::Text("blue".into()));
        assert_eq!(map["width"], StyleValue::Number(50.0));
        assert!(!map.contains_key("padding"));
    }

    #[test]
    fn style_mapping_outside_the_style_slot_is_opaque() {
        let input =
            Element::new("div").attr("data-style", AttributeValue::style([("color", "red")]));
        let RenderNode::Element(output) = sanitize(input.into()) else {
            panic!("element shape must be preserved");
        };
        assert_eq!(
            output.attributes["data-style"],
            AttributeValue::Text(String::new())
        );
    }

    #[test]
    fn an_attribute_named_then_is_ordinary() {
        // The "then" rule belongs to the placeholder, not the sanitizer.
        let input = Element::new("div").attr("then", "later");
        let RenderNode::Element(output) = sanitize(input.into()) else {
            panic!("element shape must be preserved");
        };
        assert_eq!(output.attributes["then"], AttributeValue::Text("later".into()));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let input: RenderNode = Element::new("section")
            .attr("class", "card")
            .attr("onclick", EventHandler::new(|| ()))
            .attr(
                "style",
                AttributeValue::style([("color", StyleValue::Text("red".into()))]),
            )
            .child(RenderNode::text("hello"))
            .child(Element::new("p").child(RenderNode::text("world")))
            .into();
        let once = sanitize(input);
        let twice = sanitize(once.clone());
        assert_eq!(once, twice);
    }
}
