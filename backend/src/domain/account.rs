//! Account data model.
//!
//! [`UserProfile`] is the denormalised snapshot handed to the presentation
//! layer. It deliberately has no password field, so "the password never
//! leaves the store" holds at the type level rather than by convention.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bio given to accounts created through sign-up.
pub const DEFAULT_BIO: &str = "New explorer 🌍";

/// Avatar given to accounts created through sign-up.
pub const DEFAULT_AVATAR: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde";

/// Store-assigned account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account snapshot with the password stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Store-assigned identity.
    pub id: UserId,
    /// Login email, unique and case-sensitive as stored.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Free-text bio shown on the profile screen.
    pub bio: String,
    /// Avatar URI.
    pub avatar: String,
}

/// Login credentials compared verbatim against the stored row.
///
/// No trimming or case folding happens anywhere on this path; the stored
/// email and password must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Bundle an email/password pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Login email exactly as typed.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password exactly as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Input for account creation; bio and avatar receive stock defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Login email; creation fails with a conflict when already present.
    pub email: String,
    /// Password, stored verbatim in this design.
    pub password: String,
}

impl NewAccount {
    /// Bundle the sign-up fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Structured partial update for a profile.
///
/// Absent fields are left unchanged. Email and password are not updatable
/// through this record. An update with every field absent is a no-op the
/// store refuses to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Replacement display name, when present.
    pub name: Option<String>,
    /// Replacement bio, when present.
    pub bio: Option<String>,
    /// Replacement avatar URI, when present.
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the bio.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the avatar URI.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none() && self.avatar.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialisation_never_contains_a_password_key() {
        let profile = UserProfile {
            id: UserId::new(1),
            email: "ada@example.com".to_owned(),
            name: "Ada".to_owned(),
            bio: String::new(),
            avatar: String::new(),
        };

        let json = serde_json::to_value(&profile).expect("serialise");
        let keys: Vec<&str> = json
            .as_object()
            .expect("profile serialises to an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert!(!keys.contains(&"password"), "profile leaked a password key");
    }

    #[test]
    fn credentials_preserve_exact_input() {
        let creds = Credentials::new("Admin@Example.com", " secret ");
        assert_eq!(creds.email(), "Admin@Example.com");
        assert_eq!(creds.password(), " secret ");
    }

    #[test]
    fn default_update_is_empty() {
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn update_with_any_field_is_not_empty() {
        assert!(!ProfileUpdate::default().with_bio("hi").is_empty());
    }
}
