//! Common test utilities and configuration.
//!
//! Provides the strategies, handlers, and app builder shared by the
//! integration tests.

use std::rc::Rc;

use actix_web::error::ErrorBadRequest;
use actix_web::{get, test, web, App, Error, HttpMessage, HttpRequest, HttpResponse, Responder};
use async_trait::async_trait;
use futures_util::future::ready;

use actix_authn::http::authn::middleware::AuthenticationTransform;
use actix_authn::http::authn::{
    AuthenticatedProfile, AuthenticationContext, AuthenticationStrategy, Binding, MaybeProfile,
    UserProfile,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Trusts the `x-user` header: present means authenticated, absent means the
/// strategy ran but produced no identity.
pub struct HeaderStrategy;

#[async_trait(?Send)]
impl AuthenticationStrategy for HeaderStrategy {
    async fn authenticate(&self, req: &HttpRequest) -> Result<Option<UserProfile>, Error> {
        let user = req
            .headers()
            .get("x-user")
            .and_then(|value| value.to_str().ok());
        Ok(user.map(UserProfile::new))
    }

    fn name(&self) -> &str {
        "header"
    }
}

/// Rejects every request the way a real strategy rejects a malformed token.
pub struct FailingStrategy;

#[async_trait(?Send)]
impl AuthenticationStrategy for FailingStrategy {
    async fn authenticate(&self, _req: &HttpRequest) -> Result<Option<UserProfile>, Error> {
        Err(ErrorBadRequest("malformed token"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Route-aware strategy selection:
/// - /profile/* uses HeaderStrategy
/// - /broken/* is miswired (binding holds no strategy)
/// - /failing/* uses FailingStrategy
/// - everything else has no strategy bound
pub fn test_resolver(
    req: &HttpRequest,
) -> futures_util::future::LocalBoxFuture<'static, Option<Binding>> {
    let binding = if req.path().starts_with("/profile") {
        Some(Binding::from_strategy(HeaderStrategy))
    } else if req.path().starts_with("/broken") {
        Some(Binding::new("oops"))
    } else if req.path().starts_with("/failing") {
        Some(Binding::from_strategy(FailingStrategy))
    } else {
        None
    };
    Box::pin(ready(binding))
}

// =============================================================================
// Test Handlers
// =============================================================================

#[get("/greet")]
pub async fn greet(profile: MaybeProfile) -> impl Responder {
    match profile.into_inner() {
        Some(profile) => HttpResponse::Ok().body(format!("Hello, {}!", profile.get_id())),
        None => HttpResponse::Ok().body("Hello, guest!"),
    }
}

#[get("/profile/me")]
pub async fn me(profile: AuthenticatedProfile) -> impl Responder {
    HttpResponse::Ok().body(format!("Me: {}", profile.get_id()))
}

#[get("/profile/context")]
pub async fn context_user(req: HttpRequest) -> impl Responder {
    // Reads the identity out of the request-scoped context instead of the
    // extractor, proving the mutator published it.
    let current = req
        .extensions()
        .get::<Rc<AuthenticationContext>>()
        .and_then(|context| context.current_user());
    match current {
        Some(profile) => HttpResponse::Ok().body(format!("Context: {}", profile.get_id())),
        None => HttpResponse::Ok().body("Context: empty"),
    }
}

#[get("/broken/ping")]
pub async fn broken_ping() -> impl Responder {
    HttpResponse::Ok().body("never reached")
}

#[get("/failing/ping")]
pub async fn failing_ping() -> impl Responder {
    HttpResponse::Ok().body("never reached")
}

// =============================================================================
// Test App Builder
// =============================================================================

/// Creates a fully configured test application.
pub async fn create_test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new().service(
            web::scope("")
                .wrap(AuthenticationTransform::new().strategy_resolver(test_resolver))
                .service(greet)
                .service(me)
                .service(context_user)
                .service(broken_ping)
                .service(failing_ping),
        ),
    )
    .await
}
