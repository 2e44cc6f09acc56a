//! Stencil rendering: components, sanitization, and the orchestrator.
//!
//! This module ties the pieces together:
//!
//! - **`component`**: Target layer - what can be rendered (`Component`,
//!   `HostRuntime`)
//! - **`sanitize`**: Redaction layer - how render output is made
//!   content-free (`sanitize`)
//! - **`wrap`**: Orchestration layer - the attempt/fallback render strategy
//!   (`make_stencil`, `Stencil`)
//!
//! The placeholder value lives in `crate::placeholder`; the render-tree
//! data model in `crate::node`.

mod component;
mod sanitize;
mod wrap;

pub use component::{Component, ComponentKind, HostRuntime, RenderFn};
pub use sanitize::sanitize;
pub use wrap::{make_stencil, Stencil};
