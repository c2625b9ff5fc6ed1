//! Wire types for the Animal Spotter API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials supplied by the user for sign-up and sign-in.
///
/// Serialized as `{"username": ..., "password": ...}`. The client never
/// stores these beyond the duration of a single request.
#[derive(Clone, Serialize)]
pub struct UserCredentials {
    /// Account username.
    pub username: String,
    /// Account password. Never logged or echoed.
    pub password: String,
}

impl UserCredentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Manual impl so the password can't leak through logs or error messages.
impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response from a successful sign-in.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) token: String,
}

/// A single animal sighting record.
///
/// Coordinates and timestamp are trusted from the server; the client does
/// not range-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Unique record identifier.
    pub id: i64,
    /// Animal name.
    pub name: String,
    /// Latitude of the sighting.
    pub latitude: f64,
    /// Longitude of the sighting.
    pub longitude: f64,
    /// When the animal was seen (ISO-8601 on the wire).
    #[serde(rename = "timeSeen")]
    pub time_seen: DateTime<Utc>,
    /// Free-form description of the sighting.
    pub description: String,
    /// Absolute URL of the sighting photo.
    #[serde(rename = "imageURL")]
    pub image_url: String,
}
