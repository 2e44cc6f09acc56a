//! The render-tree data model consumed and produced by the sanitizer.
//!
//! This is the crate's rendition of the host framework's render output: the
//! node kinds and attribute shapes the sanitizer needs to agree on with the
//! host engine. It deliberately models only what sanitization needs:
//!
//! - [`RenderNode`]: the tree itself (text, null, element, composite,
//!   sequence).
//! - [`Element`]: a structural/display node whose tag and attributes carry
//!   rendering meaning.
//! - [`AttributeValue`]: primitives, the one structured value (the style
//!   mapping), and the opaque values a component may smuggle into an
//!   attribute slot (event handlers, forwarded placeholder props).
//! - [`Composite`]: an opaque nested custom-component invocation whose
//!   internals are owned by the host, not introspected here.
//!
//! Trees are render-phase data: single-threaded, reference-counted, built
//! once per render and discarded. Nothing here is `Send` or `Sync`.

use std::{borrow::Cow, collections::BTreeMap, fmt, rc::Rc};

use crate::placeholder::SafeValue;
use crate::stencil::Component;

/// The attribute name recognized as the style slot.
///
/// Only a [`AttributeValue::Style`] mapping stored under this key receives
/// the entry-by-entry filtering of the style rule; the same mapping under
/// any other key is an ordinary non-primitive value and is redacted whole.
pub const STYLE_ATTRIBUTE: &str = "style";

/// A style mapping: style property names to their values.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// One unit of a render-output tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cfg_attr(feature = "slog", serde(rename_all = "snake_case"))]
pub enum RenderNode {
    /// Renders nothing.
    Null,
    /// A leaf with textual content.
    Text(String),
    /// A structural/display node.
    Element(Element),
    /// An opaque nested custom-component invocation.
    Composite(Composite),
    /// An explicit ordered list of sibling nodes.
    Sequence(Vec<RenderNode>),
}

impl RenderNode {
    /// A textual leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Composite> for RenderNode {
    fn from(composite: Composite) -> Self {
        Self::Composite(composite)
    }
}

/// The tag of an [`Element`]: either a named display kind (markup element)
/// or the transparent grouping marker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cfg_attr(feature = "slog", serde(rename_all = "snake_case"))]
pub enum Tag {
    /// A named structural/display kind, e.g. `div` or `section`.
    Named(Cow<'static, str>),
    /// A transparent grouping marker with no display output of its own.
    Fragment,
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

/// A structural/display node.
///
/// Attributes are semantically meaningful for display (styling, data
/// attributes) and are keyed deterministically. The sanitizer narrows
/// attribute *values* but never drops the element, its tag, or any
/// attribute *key*.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
pub struct Element {
    /// The display kind.
    pub tag: Tag,
    /// Attribute name to value; key order is deterministic.
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Nested child nodes.
    pub children: Vec<RenderNode>,
}

impl Element {
    /// An element with the given named tag and no attributes or children.
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// A transparent grouping element.
    #[must_use]
    pub fn fragment() -> Self {
        Self {
            tag: Tag::Fragment,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<RenderNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends every node in `nodes` as a child.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(nodes);
        self
    }
}

/// The value of one element attribute.
///
/// Primitives (text, numbers, booleans) survive sanitization unchanged.
/// The style mapping is the one compound value treated as structured rather
/// than opaque. Everything else an attribute slot can hold — an event
/// handler or a forwarded placeholder prop — is opaque and is redacted to
/// the empty string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cfg_attr(feature = "slog", serde(rename_all = "snake_case"))]
pub enum AttributeValue {
    /// A textual primitive.
    Text(String),
    /// A numeric primitive.
    Number(f64),
    /// A boolean primitive.
    Bool(bool),
    /// A style mapping; structured, filtered entry-by-entry when stored
    /// under [`STYLE_ATTRIBUTE`].
    Style(StyleMap),
    /// A callback installed by the component; never carried into a stencil.
    Handler(EventHandler),
    /// A placeholder prop forwarded straight into an attribute slot.
    Placeholder(SafeValue),
}

impl AttributeValue {
    /// Builds a style mapping value from `(name, value)` entries.
    pub fn style<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<StyleValue>,
    {
        Self::Style(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns `true` for the primitive variants.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Number(_) | Self::Bool(_))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<StyleMap> for AttributeValue {
    fn from(value: StyleMap) -> Self {
        Self::Style(value)
    }
}

impl From<EventHandler> for AttributeValue {
    fn from(value: EventHandler) -> Self {
        Self::Handler(value)
    }
}

impl From<SafeValue> for AttributeValue {
    fn from(value: SafeValue) -> Self {
        Self::Placeholder(value)
    }
}

/// The value of one style entry.
///
/// Author-supplied static styling is primitive (colors, spacing, custom
/// properties); data-derived structures show up as nested mappings and are
/// dropped by the style rule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
#[cfg_attr(feature = "slog", serde(rename_all = "snake_case"))]
pub enum StyleValue {
    /// A textual primitive.
    Text(String),
    /// A numeric primitive.
    Number(f64),
    /// A boolean primitive.
    Bool(bool),
    /// A nested compound value; dropped by sanitization.
    Nested(StyleMap),
}

impl StyleValue {
    /// Returns `true` for the primitive variants.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Nested(_))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        Self::Nested(value)
    }
}

/// An event callback attached to an element attribute.
///
/// Handlers are side-effecting application code; a stencil must never keep
/// one, so sanitization replaces them with the empty string. Equality is
/// callback identity.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn()>);

impl EventHandler {
    /// Wraps a callback.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invokes the callback.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler").finish_non_exhaustive()
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(feature = "slog")]
impl serde::Serialize for EventHandler {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Content-free by contract: the callback itself is never emitted.
        serializer.serialize_str("")
    }
}

/// An opaque nested custom-component invocation within a render tree.
///
/// Its internals are owned by the host framework; the sanitizer preserves
/// composite identity unchanged. Whether and how to unwrap it is the
/// orchestrator's decision when the component is itself stencil-wrapped.
/// Equality is component identity.
#[derive(Clone, Debug)]
pub struct Composite {
    component: Component,
}

impl Composite {
    /// Wraps a nested component invocation.
    #[must_use]
    pub fn new(component: Component) -> Self {
        Self { component }
    }

    /// The invoked component.
    #[must_use]
    pub fn component(&self) -> &Component {
        &self.component
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        self.component.ptr_eq(&other.component)
    }
}

#[cfg(feature = "slog")]
impl serde::Serialize for Composite {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Only the diagnostic name is emitted, never the component's output.
        serializer.collect_str(&format_args!(
            "<{} />",
            self.component.name().unwrap_or("Component")
        ))
    }
}
