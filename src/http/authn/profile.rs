//! The identity record produced by authentication strategies.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An authenticated identity.
///
/// Produced by a strategy, published into the request-scoped context, and
/// passed through the pipeline unmodified. The adapter never inspects the
/// contents beyond the subject id; anything strategy-specific (token claims,
/// scopes, tenant ids) goes into the free-form claims map.
///
/// # Example
/// ```
/// use actix_authn::http::authn::UserProfile;
///
/// let profile = UserProfile::new("u1")
///     .name("Ada Lovelace")
///     .email("ada@example.com")
///     .claim("tenant", serde_json::json!("acme"));
///
/// assert_eq!(profile.get_id(), "u1");
/// assert!(profile.has_claim("tenant"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    claims: HashMap<String, Value>,
}

impl UserProfile {
    /// Creates a profile with the given subject id.
    pub fn new(id: impl Into<String>) -> Self {
        UserProfile {
            id: id.into(),
            name: None,
            email: None,
            claims: HashMap::new(),
        }
    }

    /// Sets the display name (builder pattern).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email address (builder pattern).
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds a claim (builder pattern). Re-adding a key overwrites it.
    pub fn claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.claims.insert(key.into(), value);
        self
    }

    /// Returns the subject id.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Returns the display name, if any.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email address, if any.
    pub fn get_email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns a claim by key.
    pub fn get_claim(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// Returns all claims.
    pub fn get_claims(&self) -> &HashMap<String, Value> {
        &self.claims
    }

    /// Checks whether a claim is present.
    pub fn has_claim(&self, key: &str) -> bool {
        self.claims.contains_key(key)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "UserProfile {{ id: {}, name: {} }}", self.id, name),
            None => write!(f, "UserProfile {{ id: {} }}", self.id),
        }
    }
}
