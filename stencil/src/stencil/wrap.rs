//! The stencil orchestrator: wrap a component, render it content-free.
//!
//! [`make_stencil`] takes a target component and produces a [`Stencil`]
//! that, when rendered, always succeeds without the target's cooperation.
//! Each render runs a fixed two-phase strategy:
//!
//! 1. **Direct invocation.** Unwrap the target to its underlying render
//!    function and call it with one fresh placeholder as its sole input.
//!    The target is untrusted, so the call is wrapped: a panic is caught
//!    locally and never propagates. Direct invocation is *expected* to fail
//!    for components that depend on framework-managed state, which a bare
//!    function call cannot supply.
//! 2. **Fallback.** Construct the component through the host's normal
//!    instantiation path ([`HostRuntime::instantiate`]), again with one
//!    placeholder input.
//!
//! Whichever phase produced output, that raw tree is passed through
//! [`sanitize`](crate::sanitize) and returned. The two phases are
//! sequential and mutually exclusive within one render; neither is ever
//! retried, and nothing is cached across renders.
//!
//! Panic-based probing here is deliberate: trying the direct call and
//! falling back on failure is how the mechanism detects components it
//! cannot run bare, without asking them.

use std::panic::{self, AssertUnwindSafe};

use crate::node::RenderNode;
use crate::placeholder::SafeValue;
use crate::stencil::component::{Component, HostRuntime};
use crate::stencil::sanitize::sanitize;
use crate::StencilError;

/// Diagnostic name used when the target has none.
const ANONYMOUS: &str = "Component";

/// A stencil: the content-free placeholder rendition of a component.
///
/// Produced by [`make_stencil`]. Rendering takes no props; the only input
/// is the host runtime used for the fallback instantiation path.
#[derive(Clone, Debug)]
pub struct Stencil {
    display_name: String,
    target: Component,
}

/// Wraps `target` so it can be rendered as a content-free placeholder.
///
/// The returned stencil is tagged with a derived display name,
/// `Stencil(<target name>)`, purely for debugging and inspection.
///
/// Wrapping an already-produced stencil is not detected or prevented;
/// callers are expected not to double-wrap.
#[must_use]
pub fn make_stencil(target: Component) -> Stencil {
    let display_name = format!("Stencil({})", target.name().unwrap_or(ANONYMOUS));
    Stencil {
        display_name,
        target,
    }
}

impl Stencil {
    /// The derived diagnostic name, e.g. `Stencil(Profile)`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The wrapped target.
    #[must_use]
    pub fn target(&self) -> &Component {
        &self.target
    }

    /// Renders one sanitized, content-free tree.
    ///
    /// Constructs a fresh placeholder, attempts direct invocation of the
    /// target, falls back to `host` instantiation if the direct attempt is
    /// impossible or panics, and sanitizes whichever raw output was
    /// captured.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::UnresolvableTarget`] only when the target
    /// unwraps to nothing invocable *and* the host cannot instantiate it.
    /// The error names the target; it never carries render output.
    pub fn render(&self, host: &dyn HostRuntime) -> Result<RenderNode, StencilError> {
        let props = SafeValue::new();

        if let Some(render) = self.target.resolve() {
            let attempt = panic::catch_unwind(AssertUnwindSafe(|| render(&props)));
            if let Ok(raw) = attempt {
                return Ok(sanitize(raw));
            }
            // The component needs framework-managed state a bare call
            // cannot supply. Fall through to host instantiation.
        }

        let fallback =
            panic::catch_unwind(AssertUnwindSafe(|| host.instantiate(&self.target, &props)));
        match fallback {
            Ok(Ok(raw)) => Ok(sanitize(raw)),
            // Fail closed: report the target by name, drop everything else.
            Ok(Err(_)) | Err(_) => Err(StencilError::UnresolvableTarget(
                self.target.name().unwrap_or(ANONYMOUS).to_owned(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::make_stencil;
    use crate::node::{Element, RenderNode};
    use crate::stencil::component::{Component, HostRuntime};
    use crate::{SafeValue, StencilError};

    /// A host with no instantiation path at all.
    struct NoHost;

    impl HostRuntime for NoHost {
        fn instantiate(
            &self,
            component: &Component,
            _props: &SafeValue,
        ) -> Result<RenderNode, StencilError> {
            Err(StencilError::UnresolvableTarget(
                component.name().unwrap_or("Component").to_owned(),
            ))
        }
    }

    #[test]
    fn display_name_derives_from_the_target() {
        let stencil = make_stencil(Component::from_fn("Card", |_| RenderNode::Null));
        assert_eq!(stencil.display_name(), "Stencil(Card)");
    }

    #[test]
    fn display_name_falls_back_to_a_generic_label() {
        let stencil = make_stencil(Component::anonymous(|_| RenderNode::Null));
        assert_eq!(stencil.display_name(), "Stencil(Component)");
    }

    #[test]
    fn direct_invocation_renders_without_a_usable_host() {
        let stencil = make_stencil(Component::from_fn("Para", |_| {
            Element::new("p").child(RenderNode::text("real text")).into()
        }));
        let tree = stencil.render(&NoHost).unwrap();
        let RenderNode::Element(element) = tree else {
            panic!("element shape must be preserved");
        };
        assert_eq!(element.children, [RenderNode::Text(String::new())]);
    }

    #[test]
    fn unresolvable_targets_surface_as_an_error() {
        let handle: std::rc::Rc<dyn std::any::Any> = std::rc::Rc::new(());
        let stencil = make_stencil(Component::opaque("Mystery", handle));
        assert_eq!(
            stencil.render(&NoHost),
            Err(StencilError::UnresolvableTarget("Mystery".into()))
        );
    }

    #[test]
    fn a_panicking_fallback_fails_closed() {
        struct PanickingHost;
        impl HostRuntime for PanickingHost {
            fn instantiate(
                &self,
                _component: &Component,
                _props: &SafeValue,
            ) -> Result<RenderNode, StencilError> {
                panic!("host blew up with sensitive payload");
            }
        }

        let stencil = make_stencil(Component::from_fn("Flaky", |_| panic!("no scope")));
        let err = stencil.render(&PanickingHost).unwrap_err();
        let StencilError::UnresolvableTarget(name) = err.clone();
        assert_eq!(name, "Flaky");
        assert!(!err.to_string().contains("payload"));
    }
}
