//! Stencil errors.
//!
//! Almost nothing here may fail visibly. Failures arising from *executing or
//! interpreting untrusted component output* — a direct invocation that
//! panics, a value the sanitizer does not recognize — are absorbed
//! internally: the first triggers the fallback instantiation path, the
//! second the catch-all redaction rule. The one condition allowed to reach
//! the caller is a contract violation by the caller itself: a target that
//! cannot be unwrapped to anything invocable and that the host cannot
//! instantiate either.
//!
//! Errors fail closed: they carry the target's diagnostic name and nothing
//! else. No fragment of the component's output or attribute values ever
//! appears in an error.

use thiserror::Error;

/// A user-visible stencil failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StencilError {
    /// The target is not a renderable component: it unwraps to nothing
    /// invocable and the host has no instantiation path for it.
    #[error("unresolvable target: `{0}` is not a renderable component")]
    UnresolvableTarget(String),
}
