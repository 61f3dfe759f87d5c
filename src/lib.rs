//! # Actix Authn
//!
//! Deferred-strategy request authentication for Actix Web.
//!
//! This crate is the glue between an HTTP pipeline and a set of pluggable
//! authentication strategies. It does not implement any authentication
//! algorithm itself, and it performs no authorization checks; it only
//! answers two questions per request: *is a strategy bound for this route,
//! and if so, what identity does it produce?*
//!
//! The central piece is [`AuthenticateAction`](http::authn::AuthenticateAction):
//! a per-request operation built from two late-bound closures, a
//! zero-argument *strategy accessor* and a one-argument *identity mutator*.
//! Strategy selection often depends on route metadata that is not known when
//! the pipeline is assembled, so the action resolves its strategy at call
//! time instead of at construction time. A route with no strategy bound is
//! simply not authenticated; that is the default, not an error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use actix_web::{get, App, HttpServer, Responder};
//! use actix_authn::http::authn::middleware::AuthenticationTransform;
//! use actix_authn::http::authn::{AuthenticatedProfile, Binding};
//! use futures_util::future::ready;
//!
//! #[get("/me")]
//! async fn me(profile: AuthenticatedProfile) -> impl Responder {
//!     format!("Hello, {}!", profile.get_id())
//! }
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(AuthenticationTransform::new().strategy_resolver(|req| {
//!             // Route-aware selection: only /api requires authentication.
//!             let binding = req
//!                 .path()
//!                 .starts_with("/api")
//!                 .then(|| Binding::from_strategy(MyTokenStrategy::default()));
//!             Box::pin(ready(binding))
//!         }))
//!         .service(me)
//! });
//! ```
//!
//! ## Modules
//!
//! - [`http::authn`] - the authenticate action, strategy seam, request-scoped
//!   context, middleware, and extractors
//! - [`http::error`] - error types and their HTTP mappings

pub mod http;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::http::authn::{
        AuthenticateAction, AuthenticatedProfile, AuthenticationContext, AuthenticationStrategy,
        AuthnExt, Binding, MaybeProfile, UserProfile,
    };
    pub use crate::http::authn::middleware::AuthenticationTransform;
    pub use crate::http::error::AuthError;
}
