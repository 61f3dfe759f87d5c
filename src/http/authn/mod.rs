//! Request authentication: the deferred-strategy authenticate action and its
//! supporting pieces.
//!
//! # Module Structure
//!
//! - `action` - the authenticate action (deferred accessor in, identity out)
//! - `binding` - type-erased request-scoped binding values and key names
//! - `context` - explicit request-scoped context holding the bindings
//! - `extractor` - Actix Web extractors (AuthenticatedProfile, MaybeProfile)
//! - `middleware` - pipeline integration (AuthenticationTransform)
//! - `profile` - the UserProfile identity record
//! - `strategy` - the AuthenticationStrategy capability trait
//!
//! # Flow
//!
//! A pipeline stage (usually [`middleware::AuthenticationTransform`]) creates
//! an [`AuthenticationContext`] for the request and binds the applicable
//! strategy once route information is available. The
//! [`AuthenticateAction`] then resolves that strategy through the context's
//! deferred accessor, runs it, and publishes the resulting
//! [`UserProfile`] through the deferred mutator for downstream stages.

pub use action::AuthenticateAction;
pub use binding::{keys, Binding};
pub use context::{AuthenticationContext, CurrentUserSetter, StrategyGetter};
pub use extractor::{AuthenticatedProfile, AuthnExt, MaybeProfile};
pub use profile::UserProfile;
pub use strategy::AuthenticationStrategy;

pub mod action;
pub mod binding;
pub mod context;
pub mod extractor;
pub mod middleware;
pub mod profile;
pub mod strategy;
