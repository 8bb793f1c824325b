//! Signed-in identity forwarded by the authenticating proxy.
//!
//! The identity provider sits in front of this server and forwards the
//! verified user's claims as request headers. Nothing here verifies them;
//! the server must only be reachable through that proxy.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use database::ProfileUpdate;

pub const USER_ID_HEADER: &str = "x-auth-user-id";
pub const EMAIL_HEADER: &str = "x-auth-email";
pub const FIRST_NAME_HEADER: &str = "x-auth-first-name";
pub const LAST_NAME_HEADER: &str = "x-auth-last-name";
pub const IMAGE_URL_HEADER: &str = "x-auth-image-url";
pub const CREATED_AT_HEADER: &str = "x-auth-created-at";

/// The signed-in user's claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider user id. Never empty.
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Read claims from request headers. `None` means signed out.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let id = header(headers, USER_ID_HEADER)?;

        let created_at = header(headers, CREATED_AT_HEADER).and_then(|raw| {
            match DateTime::parse_from_rfc3339(&raw) {
                Ok(at) => Some(at.with_timezone(&Utc)),
                Err(e) => {
                    tracing::debug!("Ignoring unparseable {}: {}", CREATED_AT_HEADER, e);
                    None
                }
            }
        });

        Some(Self {
            id,
            email: header(headers, EMAIL_HEADER),
            first_name: header(headers, FIRST_NAME_HEADER),
            last_name: header(headers, LAST_NAME_HEADER),
            image_url: header(headers, IMAGE_URL_HEADER),
            created_at,
        })
    }

    /// First and last name joined, when either is known.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Name to show in the page header.
    pub fn display_name(&self) -> String {
        self.full_name()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Account".to_string())
    }

    /// The profile sync payload for this identity.
    pub fn to_profile_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            external_id: self.id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            full_name: self.full_name(),
            image_url: self.image_url.clone(),
            created_at: self.created_at.map(|at| at.to_rfc3339()),
        }
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Extractor yielding the identity when the request is signed in.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for MaybeIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeIdentity(Identity::from_headers(&parts.headers)))
    }
}
