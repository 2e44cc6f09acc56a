//! Adapters for emitting sanitized render trees through `slog`.
//!
//! This module exists to connect [`sanitize`](crate::sanitize) with `slog`
//! by providing `slog::Value` implementations that serialize sanitized
//! output as structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the *sanitized*
//!   tree, never from the raw render output.
//! - Avoiding fallible logging APIs: serialization failures are represented
//!   as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`, define sanitization rules, or attempt to
//! validate that a host runtime produced well-formed output.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::node::RenderNode;
use crate::stencil::sanitize;

/// A `slog::Value` that emits an owned sanitized tree as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
///
/// This type does not return serialization errors to `slog`; if converting
/// the sanitized tree into a JSON value fails, it falls back to a JSON
/// string value.
pub struct SanitizedJson {
    value: JsonValue,
}

impl SanitizedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for SanitizedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts render trees into a `slog::Value` that logs their sanitized
/// form as JSON.
///
/// Calling `into_sanitized_json` consumes the tree, computes
/// `sanitize(self)`, and stores the result as a `serde_json::Value`. The
/// original (unsanitized) tree is not serialized.
///
/// ## Example
/// ```ignore
/// use stencil::slog::IntoSanitizedJson;
///
/// info!(logger, "stencil rendered"; "tree" => tree.into_sanitized_json());
/// ```
pub trait IntoSanitizedJson: Sized {
    /// Sanitizes `self` and returns a `slog::Value` that serializes as
    /// structured JSON.
    ///
    /// If converting the sanitized tree into `serde_json::Value` fails, the
    /// returned value stores a JSON string with the message
    /// `"Failed to serialize sanitized tree"`.
    fn into_sanitized_json(self) -> SanitizedJson;
}

impl IntoSanitizedJson for RenderNode {
    fn into_sanitized_json(self) -> SanitizedJson {
        let sanitized = sanitize(self);
        let json_value = serde_json::to_value(sanitized).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize sanitized tree".to_string())
        });
        SanitizedJson::new(json_value)
    }
}
