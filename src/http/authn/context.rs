//! Explicit request-scoped context for authentication state.
//!
//! One context is created per request and dropped with it. It replaces
//! ambient "current user" storage with a value that is passed down the
//! pipeline explicitly, and it is the owner of the two deferred operations
//! the authenticate action is built from: the strategy accessor and the
//! current-user mutator.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::{ready, LocalBoxFuture};

use crate::http::authn::binding::{keys, Binding};
use crate::http::authn::profile::UserProfile;
use crate::http::authn::strategy::AuthenticationStrategy;

/// Zero-argument deferred accessor for the current strategy binding.
///
/// Callable multiple times. The future form leaves room for resolvers whose
/// strategy selection is itself asynchronous (e.g. waiting on route matching
/// done by an earlier pipeline stage).
pub type StrategyGetter = Rc<dyn Fn() -> LocalBoxFuture<'static, Option<Binding>>>;

/// One-argument deferred mutator publishing the authenticated identity into
/// the request-scoped context.
pub type CurrentUserSetter = Rc<dyn Fn(UserProfile)>;

/// Request-scoped named bindings.
///
/// # Example
/// ```rust,ignore
/// let context = AuthenticationContext::new();
/// context.bind_strategy(MyTokenStrategy::default());
///
/// let action = AuthenticateAction::from_context(&context);
/// let profile = action.authenticate(&req).await?;
/// assert_eq!(profile, context.current_user());
/// ```
#[derive(Default)]
pub struct AuthenticationContext {
    bindings: RefCell<HashMap<&'static str, Binding>>,
}

impl AuthenticationContext {
    /// Creates an empty context.
    ///
    /// Returned behind `Rc` because the deferred accessor and mutator each
    /// hold a handle to it.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Binds a value under the given key, replacing any previous binding.
    pub fn bind(&self, key: &'static str, value: Binding) {
        self.bindings.borrow_mut().insert(key, value);
    }

    /// Convenience for binding the current strategy.
    pub fn bind_strategy<S>(&self, strategy: S)
    where
        S: AuthenticationStrategy + 'static,
    {
        self.bind(keys::STRATEGY, Binding::from_strategy(strategy));
    }

    /// Returns the binding under the given key, if any.
    pub fn get(&self, key: &str) -> Option<Binding> {
        self.bindings.borrow().get(key).cloned()
    }

    /// Removes and returns the binding under the given key.
    pub fn unbind(&self, key: &str) -> Option<Binding> {
        self.bindings.borrow_mut().remove(key)
    }

    /// Returns the identity published by the authenticate action, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.get(keys::CURRENT_USER)
            .and_then(|binding| binding.downcast::<UserProfile>())
    }

    /// Produces the deferred strategy accessor over this context.
    pub fn strategy_getter(self: &Rc<Self>) -> StrategyGetter {
        let context = Rc::clone(self);
        Rc::new(move || Box::pin(ready(context.get(keys::STRATEGY))))
    }

    /// Produces the deferred current-user mutator over this context.
    pub fn current_user_setter(self: &Rc<Self>) -> CurrentUserSetter {
        let context = Rc::clone(self);
        Rc::new(move |profile: UserProfile| {
            context.bind(keys::CURRENT_USER, Binding::new(profile));
        })
    }
}
