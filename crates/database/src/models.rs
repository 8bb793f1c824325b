//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user profile, mirrored from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// Identity provider user id (e.g., "user_2abc...").
    pub external_id: String,
    /// Primary email address.
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    /// Avatar URL.
    pub image_url: Option<String>,
    /// When the identity was created at the provider (RFC 3339).
    pub created_at: Option<String>,
    /// When the row was first written.
    pub inserted_at: String,
    /// Server time of the latest sign-in sync.
    pub last_sign_in_at: String,
    /// Server time of the latest write.
    pub updated_at: String,
}

/// The identity fields carried by a profile sync.
///
/// Every field is written on upsert, so `None` clears a stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub external_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

impl ProfileUpdate {
    /// An update for `external_id` with every other field empty.
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            ..Default::default()
        }
    }
}
