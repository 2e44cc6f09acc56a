//! Test support: a minimal host runtime with a managed render scope.
//!
//! The orchestrator treats the host engine as an opaque collaborator; this
//! module supplies just enough of one to exercise the attempt/fallback
//! strategy in tests and examples:
//!
//! - [`ScopedHost`] implements [`HostRuntime`] by running components inside
//!   a thread-local render scope, the way a real engine runs them inside
//!   its lifecycle.
//! - [`use_render_scope`] is the hook-like probe for framework-managed
//!   state: it panics outside a managed scope, which is exactly how a
//!   stateful component fails under bare direct invocation and triggers
//!   the fallback path.
//! - [`ManagedComponent`] is an opaque component payload only
//!   [`ScopedHost`] knows how to run, for targets that are not directly
//!   invocable at all.
//!
//! Scopes are per-thread and reference nothing across renders.

use std::{any::Any, cell::Cell, rc::Rc};

use crate::node::RenderNode;
use crate::placeholder::SafeValue;
use crate::stencil::{Component, HostRuntime, RenderFn};
use crate::StencilError;

thread_local! {
    static SCOPE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// True while a [`ScopedHost`] render is on the current thread's stack.
#[must_use]
pub fn in_render_scope() -> bool {
    SCOPE_DEPTH.with(|depth| depth.get() > 0)
}

/// Asserts that framework-managed state is available.
///
/// Call this at the top of a component that depends on host-managed state,
/// the way such a component would call a state hook.
///
/// # Panics
///
/// Panics when called outside a [`ScopedHost`] render; a bare function call
/// bypasses the host's instantiation machinery.
pub fn use_render_scope() {
    assert!(
        in_render_scope(),
        "framework-managed state accessed outside a host render scope"
    );
}

/// RAII guard for one level of render scope.
struct ScopeGuard;

impl ScopeGuard {
    fn enter() -> Self {
        SCOPE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPE_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// A component payload only the host understands.
///
/// Wrap one in [`Component::opaque`] (see [`ManagedComponent::component`])
/// to model a framework-managed component with no directly invocable
/// render function.
pub struct ManagedComponent {
    render: RenderFn,
}

impl ManagedComponent {
    /// Wraps a render function as a host-only payload.
    pub fn new(render: impl Fn(&SafeValue) -> RenderNode + 'static) -> Self {
        Self {
            render: Rc::new(render),
        }
    }

    /// A [`Component`] whose only execution path is [`ScopedHost`].
    pub fn component(
        name: impl Into<std::borrow::Cow<'static, str>>,
        render: impl Fn(&SafeValue) -> RenderNode + 'static,
    ) -> Component {
        let handle: Rc<dyn Any> = Rc::new(Self::new(render));
        Component::opaque(name, handle)
    }
}

/// A host runtime that instantiates components inside a managed render
/// scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScopedHost;

impl ScopedHost {
    /// A fresh host.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HostRuntime for ScopedHost {
    fn instantiate(
        &self,
        component: &Component,
        props: &SafeValue,
    ) -> Result<RenderNode, StencilError> {
        let _scope = ScopeGuard::enter();

        if let Some(render) = component.resolve() {
            return Ok(render(props));
        }
        if let Some(handle) = component.opaque_handle() {
            if let Some(managed) = handle.downcast_ref::<ManagedComponent>() {
                return Ok((managed.render)(props));
            }
        }

        Err(StencilError::UnresolvableTarget(
            component.name().unwrap_or("Component").to_owned(),
        ))
    }
}
