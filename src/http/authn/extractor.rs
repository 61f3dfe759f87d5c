//! Extractors for reading the published identity in handlers.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::authn::profile::UserProfile;
use crate::http::error::AuthError;

/// Extractor for the authenticated profile.
///
/// # Usage
/// ```ignore
/// use actix_authn::http::authn::AuthenticatedProfile;
///
/// async fn handler(profile: AuthenticatedProfile) -> impl Responder {
///     format!("Hello, {}!", profile.get_id())
/// }
/// ```
///
/// # Errors
/// Returns `401 Unauthorized` if no identity was published for the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedProfile(UserProfile);

impl AuthenticatedProfile {
    /// Returns the inner UserProfile.
    pub fn into_inner(self) -> UserProfile {
        self.0
    }
}

impl Deref for AuthenticatedProfile {
    type Target = UserProfile;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthenticatedProfile {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<UserProfile>().cloned() {
            Some(profile) => ready(Ok(AuthenticatedProfile(profile))),
            None => ready(Err(AuthError::Unauthorized)),
        }
    }
}

/// Optional extractor for the authenticated profile.
///
/// Resolves to `None` instead of an error when the request is anonymous,
/// which is the normal case for routes with no strategy bound.
#[derive(Debug, Clone)]
pub struct MaybeProfile(Option<UserProfile>);

impl MaybeProfile {
    /// Returns the inner Option<UserProfile>.
    pub fn into_inner(self) -> Option<UserProfile> {
        self.0
    }

    /// Returns true if an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl Deref for MaybeProfile {
    type Target = Option<UserProfile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for MaybeProfile {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let profile = req.extensions().get::<UserProfile>().cloned();
        ready(Ok(MaybeProfile(profile)))
    }
}

/// Extension trait for HttpRequest to check authentication state.
pub trait AuthnExt {
    /// Returns a clone of the published profile if present.
    fn user_profile(&self) -> Option<UserProfile>;

    /// Returns true if an identity was published for this request.
    fn is_authenticated(&self) -> bool;
}

impl AuthnExt for HttpRequest {
    fn user_profile(&self) -> Option<UserProfile> {
        self.extensions().get::<UserProfile>().cloned()
    }

    fn is_authenticated(&self) -> bool {
        self.extensions().get::<UserProfile>().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_authenticated_profile_requires_identity() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedProfile::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[actix_web::test]
    async fn test_authenticated_profile_reads_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(UserProfile::new("u1"));

        let profile = AuthenticatedProfile::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(profile.get_id(), "u1");
    }

    #[actix_web::test]
    async fn test_maybe_profile_tolerates_anonymous() {
        let req = TestRequest::default().to_http_request();
        let maybe = MaybeProfile::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert!(!maybe.is_authenticated());
        assert!(maybe.into_inner().is_none());
    }

    #[actix_web::test]
    async fn test_authn_ext() {
        let req = TestRequest::default().to_http_request();
        assert!(!req.is_authenticated());

        req.extensions_mut().insert(UserProfile::new("u1"));
        assert!(req.is_authenticated());
        assert_eq!(req.user_profile().unwrap().get_id(), "u1");
    }
}
