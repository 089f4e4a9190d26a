use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Last planning-form input, kept so the fallback synthesizer can produce a
/// plausible trip when the remote service is unreachable.
///
/// Overwritten on every planning submission, read only by the synthesizer,
/// never explicitly cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedPreferences {
    pub destination: String,
    pub duration: u32,
}

impl Default for CachedPreferences {
    fn default() -> Self {
        Self {
            destination: "Paris".to_string(),
            duration: 3,
        }
    }
}

/// Durable client state, persisted across reloads.
///
/// Holds the bearer token (absence means requests go out unauthenticated
/// and the server decides rejection) and the cached planning preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSession {
    #[serde(default)]
    pub auth_token: Option<String>,

    #[serde(default)]
    pub preferences: CachedPreferences,
}

/// Registered user profile as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,

    /// Free-form preference object; the service interprets it, we don't
    #[serde(default)]
    pub preferences: serde_json::Value,

    #[serde(default)]
    pub budget: f64,

    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
