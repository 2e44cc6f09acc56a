//! Content-free placeholder ("stencil") rendering for UI components.
//!
//! This crate separates:
//! - **Placeholder**: a value safe to hand to any component in place of its
//!   real props.
//! - **Sanitization**: how the component's render output is made
//!   content-free while keeping its structure.
//!
//! [`make_stencil`] ties the two together: it wraps a target component so
//! that rendering it with no real data always succeeds and never reveals
//! real content.
//!
//! Key rules:
//! - Every member access, call, or iteration on a [`SafeValue`] is total;
//!   special members (`then`, `ref`, `key`, coercion hooks, `length`)
//!   resolve to fixed harmless sentinels, everything else to another
//!   placeholder.
//! - [`sanitize`] keeps element tags and attribute keys, keeps primitive
//!   attribute values, filters the style mapping entry-by-entry, and
//!   collapses all text content and opaque values to nothing.
//! - Direct invocation of the target is attempted first; components that
//!   need framework-managed state fall back to the host's own
//!   instantiation path ([`HostRuntime`]).
//!
//! What this crate does:
//! - defines the placeholder value and its member-resolution rules
//! - defines a minimal render-tree data model and the sanitizer over it
//! - orchestrates the attempt/fallback render of a wrapped component
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - render trees to markup or a native UI surface
//! - reconcile, schedule, or otherwise act as a host framework
//! - detect components whose placeholder execution has external side
//!   effects; avoiding those is a caller responsibility
//!
//! The untrusted party here is the wrapped component: it may dereference
//! arbitrarily deep, call what it reads, coerce values to text, or depend
//! on state only its framework can supply. None of that can crash a stencil
//! render or leak into its output.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
#[cfg(feature = "stencil")]
mod error;
#[cfg(feature = "stencil")]
mod node;
#[cfg(feature = "placeholder")]
mod placeholder;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "stencil")]
mod stencil;
#[cfg(feature = "testing")]
pub mod testing;

// Re-exports
#[cfg(feature = "stencil")]
pub use error::StencilError;
#[cfg(feature = "stencil")]
pub use node::{
    AttributeValue, Composite, Element, EventHandler, RenderNode, StyleMap, StyleValue, Tag,
    STYLE_ATTRIBUTE,
};
#[cfg(feature = "placeholder")]
pub use placeholder::{Member, SafeValue};
#[cfg(feature = "stencil")]
pub use stencil::{
    make_stencil, sanitize, Component, ComponentKind, HostRuntime, RenderFn, Stencil,
};
