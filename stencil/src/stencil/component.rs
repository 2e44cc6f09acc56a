//! Target components and the host instantiation capability.
//!
//! The orchestrator accepts "any component shape" the way the host framework
//! produces them. Rather than shape-sniffing at runtime, the recognized
//! shapes form a closed tagged union:
//!
//! - [`ComponentKind::Direct`]: a plain render function, directly invocable.
//! - [`ComponentKind::Delegating`]: a wrapper (memoizing or ref-forwarding
//!   in the host framework) that delegates rendering to an inner component.
//! - [`ComponentKind::Opaque`]: a framework-managed component reachable only
//!   through the host's own instantiation path.
//!
//! Unwrapping a wrapper to the underlying render function is a lookup
//! ([`Component::resolve`]), not a render step. [`HostRuntime`] is the
//! collaborator contract with the host engine: the standard instantiation
//! path the orchestrator falls back to when direct invocation is impossible.

use std::{any::Any, borrow::Cow, fmt, rc::Rc};

use crate::error::StencilError;
use crate::node::RenderNode;
use crate::placeholder::SafeValue;

/// A directly invocable render function: one placeholder input, one render
/// tree out.
pub type RenderFn = Rc<dyn Fn(&SafeValue) -> RenderNode>;

/// The closed set of recognized component shapes.
#[derive(Clone)]
pub enum ComponentKind {
    /// A plain render function.
    Direct(RenderFn),
    /// A wrapper delegating rendering to an inner component.
    Delegating(Box<Component>),
    /// A framework-managed component; only the host can run it.
    Opaque(Rc<dyn Any>),
}

/// A renderable component as supplied by the caller.
///
/// Components are cheap to clone; the render function or host handle is
/// shared, and that shared pointer is the component's identity
/// ([`Component::ptr_eq`]).
#[derive(Clone)]
pub struct Component {
    name: Option<Cow<'static, str>>,
    kind: ComponentKind,
}

impl Component {
    /// A directly invocable component.
    pub fn from_fn(
        name: impl Into<Cow<'static, str>>,
        render: impl Fn(&SafeValue) -> RenderNode + 'static,
    ) -> Self {
        Self {
            name: Some(name.into()),
            kind: ComponentKind::Direct(Rc::new(render)),
        }
    }

    /// A directly invocable component without a diagnostic name.
    pub fn anonymous(render: impl Fn(&SafeValue) -> RenderNode + 'static) -> Self {
        Self {
            name: None,
            kind: ComponentKind::Direct(Rc::new(render)),
        }
    }

    /// A wrapper delegating to `inner`, keeping its own diagnostic name.
    pub fn delegating(name: impl Into<Cow<'static, str>>, inner: Component) -> Self {
        Self {
            name: Some(name.into()),
            kind: ComponentKind::Delegating(Box::new(inner)),
        }
    }

    /// A framework-managed component around an opaque host handle.
    pub fn opaque(name: impl Into<Cow<'static, str>>, handle: Rc<dyn Any>) -> Self {
        Self {
            name: Some(name.into()),
            kind: ComponentKind::Opaque(handle),
        }
    }

    /// The diagnostic name, if one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The component's shape.
    #[must_use]
    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// Unwraps delegating wrappers to the underlying render function.
    ///
    /// Returns `None` for opaque targets: those have no directly invocable
    /// function and must go through [`HostRuntime::instantiate`].
    #[must_use]
    pub fn resolve(&self) -> Option<&RenderFn> {
        match &self.kind {
            ComponentKind::Direct(render) => Some(render),
            ComponentKind::Delegating(inner) => inner.resolve(),
            ComponentKind::Opaque(_) => None,
        }
    }

    /// Unwraps delegating wrappers to the innermost opaque host handle, if
    /// that is what the target turns out to be.
    #[must_use]
    pub fn opaque_handle(&self) -> Option<&Rc<dyn Any>> {
        match &self.kind {
            ComponentKind::Direct(_) => None,
            ComponentKind::Delegating(inner) => inner.opaque_handle(),
            ComponentKind::Opaque(handle) => Some(handle),
        }
    }

    /// Identity comparison: two components are the same when they share the
    /// same underlying render function or host handle.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ComponentKind::Direct(a), ComponentKind::Direct(b)) => {
                std::ptr::eq(Rc::as_ptr(a).cast::<u8>(), Rc::as_ptr(b).cast::<u8>())
            }
            (ComponentKind::Delegating(a), ComponentKind::Delegating(b)) => a.ptr_eq(b),
            (ComponentKind::Opaque(a), ComponentKind::Opaque(b)) => {
                std::ptr::eq(Rc::as_ptr(a).cast::<u8>(), Rc::as_ptr(b).cast::<u8>())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            ComponentKind::Direct(_) => "Direct",
            ComponentKind::Delegating(_) => "Delegating",
            ComponentKind::Opaque(_) => "Opaque",
        };
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// The host engine's standard instantiation path.
///
/// This is the fallback execution strategy: constructing the component
/// through the framework's normal lifecycle, which succeeds even for
/// components that depend on framework-managed state a bare function call
/// cannot supply.
///
/// Implementations must not surface fragments of the component's output in
/// their errors; a failed instantiation reports the target, never its data.
pub trait HostRuntime {
    /// Renders `component` through the framework's own lifecycle with
    /// `props` as its sole input.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::UnresolvableTarget`] when the host does not
    /// recognize the component as anything it can instantiate.
    fn instantiate(
        &self,
        component: &Component,
        props: &SafeValue,
    ) -> Result<RenderNode, StencilError>;
}
