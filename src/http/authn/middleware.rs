//! Pipeline integration for the authenticate action.
//!
//! The middleware owns the per-request plumbing: it creates the
//! request-scoped [`AuthenticationContext`], gives an application-supplied
//! resolver the chance to bind the route's strategy (this runs after Actix
//! route matching, so the resolver can look at the matched pattern), drives
//! the [`AuthenticateAction`], and copies the published identity into request
//! extensions where the extractors read it.
//!
//! Strategy selection itself stays with the application; this crate does not
//! keep a route-to-strategy registry.

use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, HttpRequest};
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::http::authn::action::AuthenticateAction;
use crate::http::authn::binding::{keys, Binding};
use crate::http::authn::context::AuthenticationContext;

/// Application-supplied closure choosing the strategy binding for a request.
///
/// Returning `None` means the route requires no authentication.
pub type StrategyResolver = Rc<dyn Fn(&HttpRequest) -> LocalBoxFuture<'static, Option<Binding>>>;

/// Authentication middleware factory.
///
/// # Example
/// ```rust,ignore
/// App::new().wrap(
///     AuthenticationTransform::new().strategy_resolver(|req| {
///         let binding = req
///             .path()
///             .starts_with("/api")
///             .then(|| Binding::from_strategy(TokenStrategy::default()));
///         Box::pin(ready(binding))
///     }),
/// )
/// ```
pub struct AuthenticationTransform {
    resolver: Option<StrategyResolver>,
}

impl AuthenticationTransform {
    pub fn new() -> Self {
        AuthenticationTransform { resolver: None }
    }

    /// Configures the strategy resolver.
    ///
    /// Without one, no strategy is ever bound and every request passes
    /// through unauthenticated.
    pub fn strategy_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&HttpRequest) -> LocalBoxFuture<'static, Option<Binding>> + 'static,
    {
        self.resolver = Some(Rc::new(resolver));
        self
    }
}

impl Default for AuthenticationTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthenticationTransform
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthenticationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationService {
            resolver: self.resolver.clone(),
            service: Rc::new(service),
        })
    }
}

/// Authentication middleware service.
pub struct AuthenticationService<S> {
    resolver: Option<StrategyResolver>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let resolver = self.resolver.clone();

        Box::pin(async move {
            let context = AuthenticationContext::new();
            req.extensions_mut().insert(Rc::clone(&context));

            if let Some(resolver) = resolver {
                if let Some(binding) = resolver(req.request()).await {
                    context.bind(keys::STRATEGY, binding);
                }
            }

            // Errors short-circuit here: an invalid strategy binding becomes
            // a 500, a strategy failure keeps whatever response it carries.
            let action = AuthenticateAction::from_context(&context);
            let profile = action.authenticate(req.request()).await?;

            if let Some(profile) = profile {
                req.extensions_mut().insert(profile);
            }

            service.call(req).await
        })
    }
}
