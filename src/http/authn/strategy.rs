//! The capability trait concrete authentication strategies implement.
//!
//! This crate ships no strategy implementations. A strategy belongs to the
//! application (or to a companion crate): it knows how to pull credentials
//! out of a request and turn them into an identity. The adapter only needs
//! the seam below.

use actix_web::{Error, HttpRequest};
use async_trait::async_trait;

use crate::http::authn::profile::UserProfile;

/// A pluggable algorithm that inspects a request and produces an identity,
/// or nothing.
///
/// The distinction between the two non-error outcomes matters:
/// - `Ok(Some(profile))` - the request carries valid credentials
/// - `Ok(None)` - the strategy ran but did not authenticate the request
///
/// Anything that should abort the request (malformed credentials, expired
/// token, upstream introspection failure) is returned as `Err` and reaches
/// the client unchanged; the adapter never retries or translates it.
///
/// The trait is `?Send` because strategies run on the single-threaded Actix
/// worker that owns the request.
///
/// # Example
/// ```rust,ignore
/// use actix_authn::http::authn::{AuthenticationStrategy, UserProfile};
/// use actix_web::error::ErrorUnauthorized;
///
/// struct ApiKeyStrategy {
///     key: String,
/// }
///
/// #[async_trait::async_trait(?Send)]
/// impl AuthenticationStrategy for ApiKeyStrategy {
///     async fn authenticate(&self, req: &HttpRequest) -> Result<Option<UserProfile>, Error> {
///         match req.headers().get("x-api-key") {
///             Some(key) if key == self.key.as_str() => {
///                 Ok(Some(UserProfile::new("service-account")))
///             }
///             Some(_) => Err(ErrorUnauthorized("bad api key")),
///             None => Ok(None),
///         }
///     }
///
///     fn name(&self) -> &str {
///         "api-key"
///     }
/// }
/// ```
#[async_trait(?Send)]
pub trait AuthenticationStrategy {
    /// Attempts to authenticate the request.
    async fn authenticate(&self, req: &HttpRequest) -> Result<Option<UserProfile>, Error>;

    /// Strategy name, used for log attribution.
    fn name(&self) -> &str {
        "custom"
    }
}
