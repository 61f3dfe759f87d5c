use actix_web::{error, http::StatusCode, HttpResponse, HttpResponseBuilder};
use derive_more::{Display, Error};

/// Errors raised by the authentication adapter itself.
///
/// Failures raised *inside* a strategy (expired token, bad signature, ...)
/// are not part of this taxonomy; the action propagates them unchanged.
#[derive(Debug, Display, Error)]
pub enum AuthError {
    /// The "current strategy" binding resolved to a value that is not an
    /// authentication strategy. A wiring defect, not a request error.
    #[display("invalid strategy parameter")]
    InvalidStrategy,
    /// No identity was published for a handler that requires one.
    #[display("unauthorized")]
    Unauthorized,
}

impl error::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::InvalidStrategy => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponseBuilder::new(self.status_code()).body(self.to_string())
    }
}
