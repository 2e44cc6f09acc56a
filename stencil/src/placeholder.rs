//! The placeholder value fed to components during a stencil render.
//!
//! A [`SafeValue`] stands in for every prop a component might read. The
//! component under placeholder execution is untrusted code: it may chain
//! member accesses to arbitrary depth, call whatever it read, iterate it,
//! coerce it to text, or probe it for async-result shape. Every one of those
//! operations is total here:
//!
//! - [`SafeValue::member`] resolves any name; a short enumerated set of
//!   special names resolves to fixed sentinels, everything else resolves to
//!   another placeholder.
//! - [`SafeValue::call`] returns another placeholder, so `props.get_x().y`
//!   chains of arbitrary depth stay safe.
//! - Iteration yields zero elements, so spread/for-each usage is finite.
//! - Text coercion ([`fmt::Display`]) produces the empty string, so nothing
//!   real-looking can leak through formatting.
//!
//! Every placeholder is structurally identical (a fixed point), so there is
//! no depth limit to enforce: chains terminate only when the caller stops.
//!
//! One placeholder is created per stencil render and discarded afterwards;
//! nothing is cached or mutated.

use std::{fmt, iter};

/// A recursive placeholder value safe under arbitrary access, call, and
/// iteration.
///
/// `SafeValue` has no observable identity beyond being a placeholder:
/// equality and coercion results carry no information and must not be relied
/// upon by callers.
///
/// ```rust
/// use stencil::{Member, SafeValue};
///
/// let props = SafeValue::new();
/// let user = match props.member("user") {
///     Member::Placeholder(value) => value,
///     other => panic!("ordinary names resolve to placeholders, got {other:?}"),
/// };
/// // Deep chains and calls never fail.
/// let city = user.call(&[]).call(&[]);
/// assert_eq!(city.to_string(), "");
/// assert_eq!(city.iter().count(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafeValue(());

/// The result of resolving a member on a [`SafeValue`].
///
/// Resolution is total: every name maps to exactly one of these variants,
/// per the special-member table below. The terminal result of any access
/// chain is therefore a placeholder, an empty string, zero, or an explicit
/// absence — never a failure.
///
/// | member | result |
/// |--------|--------|
/// | `then` | [`Member::Absent`] (never mistaken for a pending async result) |
/// | `ref`, `key` | [`Member::Absent`] (host identity slots, not data) |
/// | `toString`, `valueOf` | [`Member::Text`] with `""` (coercion hooks) |
/// | `length` | [`Member::Length`] with `0` (array-like stays finite) |
/// | anything else | [`Member::Placeholder`] |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Member {
    /// The member is explicitly absent.
    Absent,
    /// A fixed textual sentinel; always the empty string.
    Text(&'static str),
    /// A fixed numeric sentinel; always zero.
    Length(usize),
    /// Any ordinary member: a further placeholder.
    Placeholder(SafeValue),
}

impl Member {
    /// Returns `true` for members resolved as explicitly absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the placeholder for ordinary members, or `None` for the
    /// special sentinels.
    #[must_use]
    pub fn placeholder(&self) -> Option<SafeValue> {
        match self {
            Self::Placeholder(value) => Some(*value),
            Self::Absent | Self::Text(_) | Self::Length(_) => None,
        }
    }
}

impl SafeValue {
    /// Creates a placeholder value.
    ///
    /// Pure and deterministic; every placeholder is structurally identical.
    #[must_use]
    pub fn new() -> Self {
        Self(())
    }

    /// Resolves a member by name.
    ///
    /// This is the single polymorphic lookup operation: special names
    /// resolve to fixed sentinels (see [`Member`]), every other name
    /// resolves to another placeholder. It never fails.
    #[must_use]
    pub fn member(&self, name: &str) -> Member {
        match name {
            // Never look like a pending async result, and never stand in
            // for host identity slots.
            "then" | "ref" | "key" => Member::Absent,
            // Coercion hooks stay content-free.
            "toString" | "valueOf" => Member::Text(""),
            // Array-like usage stays finite.
            "length" => Member::Length(0),
            _ => Member::Placeholder(Self::new()),
        }
    }

    /// Calls the value with any arguments, yielding another placeholder.
    #[must_use]
    pub fn call(&self, _args: &[SafeValue]) -> Self {
        Self::new()
    }

    /// Iterates the value, yielding zero elements.
    pub fn iter(&self) -> iter::Empty<SafeValue> {
        iter::empty()
    }

    /// The placeholder's length; always zero.
    #[must_use]
    pub fn len(&self) -> usize {
        0
    }

    /// Always `true`; placeholders hold no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        true
    }
}

/// Text coercion produces the empty string, so a placeholder formatted into
/// markup or interpolated into a message renders nothing.
impl fmt::Display for SafeValue {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl IntoIterator for SafeValue {
    type Item = SafeValue;
    type IntoIter = iter::Empty<SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl IntoIterator for &SafeValue {
    type Item = SafeValue;
    type IntoIter = iter::Empty<SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

#[cfg(feature = "slog")]
impl serde::Serialize for SafeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // A placeholder serializes the same way it coerces: as nothing.
        serializer.serialize_str("")
    }
}
