//! Persisted browser session: bearer token plus cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads this store at startup and again whenever another tab
//! changes it. The login page writes it after a successful login and the
//! sidebar clears it on logout. Nothing else touches the underlying keys.
//!
//! ERROR HANDLING
//! ==============
//! A stored profile that no longer parses is treated as a corrupted session:
//! `load` wipes both keys and reports no session instead of failing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use super::storage::{StorageBackend, StorageError, Subscription};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-serialized [`UserProfile`].
pub const PROFILE_KEY: &str = "userData";

pub const DEFAULT_NAME: &str = "User Name";
pub const DEFAULT_ROLE: &str = "User Role";
pub const DEFAULT_EMAIL: &str = "demo@example.com";
pub const DEFAULT_PHONE: &str = "+91 9999999999";
pub const DEFAULT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Errors detected while reading persisted session state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("stored profile is malformed: {0}")]
    MalformedLocalState(String),
}

/// Display identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            role: DEFAULT_ROLE.to_owned(),
            email: DEFAULT_EMAIL.to_owned(),
            phone: DEFAULT_PHONE.to_owned(),
            photo: None,
        }
    }
}

impl UserProfile {
    /// Photo URL, or the generic avatar when none is set.
    pub fn avatar_url(&self) -> &str {
        self.photo.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }
}

/// Wire/storage shape of a profile: every field may be missing.
#[derive(Debug, Default, Deserialize)]
struct PartialProfile {
    name: Option<String>,
    role: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    photo: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<PartialProfile> for UserProfile {
    fn from(raw: PartialProfile) -> Self {
        Self {
            name: present(raw.name).unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            role: present(raw.role).unwrap_or_else(|| DEFAULT_ROLE.to_owned()),
            email: present(raw.email).unwrap_or_else(|| DEFAULT_EMAIL.to_owned()),
            phone: present(raw.phone).unwrap_or_else(|| DEFAULT_PHONE.to_owned()),
            photo: present(raw.photo),
        }
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PartialProfile::deserialize(deserializer).map(Self::from)
    }
}

/// Parse a stored profile, substituting defaults for missing fields.
///
/// # Errors
///
/// Returns [`SessionError::MalformedLocalState`] if `raw` is not a JSON object
/// of the expected shape.
pub fn parse_profile(raw: &str) -> Result<UserProfile, SessionError> {
    serde_json::from_str::<UserProfile>(raw).map_err(|e| SessionError::MalformedLocalState(e.to_string()))
}

/// Authenticated identity and credential held between login and logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self { token: token.into(), user }
    }

    /// Profile for display, with placeholders when none was stored.
    pub fn profile_or_default(&self) -> UserProfile {
        self.user.clone().unwrap_or_default()
    }
}

/// Session persistence over a [`StorageBackend`].
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Persist `session`, replacing whatever was stored before.
    ///
    /// The profile is written before the token so a reader that sees the new
    /// token also sees the matching profile. A failed write clears both keys,
    /// so storage never pairs one session's token with another's profile.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either key could not be written.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.write(session).inspect_err(|e| {
            log::warn!("session save failed, clearing stored session: {e}");
            self.clear();
        })
    }

    fn write(&self, session: &Session) -> Result<(), StorageError> {
        match &session.user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(|e| StorageError::Write(e.to_string()))?;
                self.backend.set(PROFILE_KEY, &raw)?;
            }
            None => self.backend.remove(PROFILE_KEY),
        }
        self.backend.set(TOKEN_KEY, &session.token)?;
        log::debug!("session saved");
        Ok(())
    }

    /// Read the persisted session, if any.
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = match self.backend.get(PROFILE_KEY) {
            None => None,
            Some(raw) => match parse_profile(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    log::warn!("discarding session: {e}");
                    self.clear();
                    return None;
                }
            },
        };
        Some(Session { token, user })
    }

    /// Bearer token of the persisted session, if any.
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    /// Remove the token and profile. Safe to call repeatedly.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(PROFILE_KEY);
    }

    /// Call `listener` whenever another context changes the stored session.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.backend.subscribe(std::rc::Rc::new(listener))
    }
}
