//! Type-erased request-scoped binding values.
//!
//! The surrounding context stores its bindings untyped, the same way request
//! extensions do. That is deliberate: the "current strategy" binding is wired
//! by application code, and a binding that holds the wrong kind of value must
//! be detectable at resolution time as a configuration error rather than
//! silently ignored.

use std::any::Any;
use std::rc::Rc;

use crate::http::authn::strategy::AuthenticationStrategy;

/// Well-known binding key names owned by the authentication adapter.
pub mod keys {
    /// The strategy applicable to the current request, if any.
    pub const STRATEGY: &str = "authn.strategy";
    /// The identity published by the authenticate action.
    pub const CURRENT_USER: &str = "authn.current_user";
}

/// A single type-erased binding value.
///
/// Cloning is cheap; the underlying value is shared.
#[derive(Clone)]
pub struct Binding(Rc<dyn Any>);

impl Binding {
    /// Wraps an arbitrary value.
    pub fn new<T: 'static>(value: T) -> Self {
        Binding(Rc::new(value))
    }

    /// Wraps a strategy so that [`Binding::strategy`] can recover it.
    pub fn from_strategy<S>(strategy: S) -> Self
    where
        S: AuthenticationStrategy + 'static,
    {
        Binding(Rc::new(Rc::new(strategy) as Rc<dyn AuthenticationStrategy>))
    }

    /// Recovers the value if the binding holds a `T`.
    pub fn downcast<T: Clone + 'static>(&self) -> Option<T> {
        self.0.downcast_ref::<T>().cloned()
    }

    /// Recovers the strategy if this binding holds one.
    ///
    /// `None` here on the strategy binding means the wiring is broken; the
    /// authenticate action turns that into `AuthError::InvalidStrategy`.
    pub fn strategy(&self) -> Option<Rc<dyn AuthenticationStrategy>> {
        self.downcast::<Rc<dyn AuthenticationStrategy>>()
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Binding(..)")
    }
}
