//! Profile sync for signed-in visitors.
//!
//! Every page request passes through [`auth_sync`]. It makes sure the browser
//! has a session cookie and, when the request is signed in, mirrors the
//! identity into the `users` table once per browser session.

use std::collections::HashSet;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use database::{user_profile, Database};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::identity::{Identity, MaybeIdentity};
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "edudiff_session";

/// Per-browser state that outlives a single page view.
#[derive(Debug, Default)]
pub struct BrowserSession {
    /// Identity ids a profile sync was started for.
    synced_identities: Mutex<HashSet<String>>,
}

impl BrowserSession {
    /// Claim the one sync this session allows for `identity_id`.
    ///
    /// Returns false when a sync for that identity was already started,
    /// whether or not it succeeded.
    pub async fn claim_sync(&self, identity_id: &str) -> bool {
        self.synced_identities
            .lock()
            .await
            .insert(identity_id.to_string())
    }
}

/// Result of a profile sync attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The profile was written.
    Synced,
    /// This session already synced the identity; nothing was written.
    AlreadySynced,
    /// The write failed. The session will not try again for this identity.
    Failed(String),
}

/// Mirror `identity` into the `users` table unless this session already did.
pub async fn sync_profile(session: &BrowserSession, db: &Database, identity: &Identity) -> SyncOutcome {
    if !session.claim_sync(&identity.id).await {
        return SyncOutcome::AlreadySynced;
    }

    match user_profile::upsert_profile(db.pool(), &identity.to_profile_update()).await {
        Ok(()) => SyncOutcome::Synced,
        Err(e) => SyncOutcome::Failed(e.to_string()),
    }
}

/// Middleware: attach the browser session cookie and sync signed-in profiles.
pub async fn auth_sync(
    State(state): State<AppState>,
    jar: CookieJar,
    MaybeIdentity(identity): MaybeIdentity,
    request: Request,
    next: Next,
) -> Response {
    let existing = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string());
    let (jar, session_id) = match existing {
        Some(id) => (jar, id),
        None => {
            let id = Uuid::new_v4().to_string();
            let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            (jar.add(cookie), id)
        }
    };

    if let Some(identity) = identity {
        let session = state
            .browsers
            .get_or_insert_with(&session_id, BrowserSession::default)
            .await;
        let db = state.db.clone();

        // Fire-and-forget: the page never waits on the sync, and a failure is
        // only logged. The claimed guard stays set, so it is not retried.
        tokio::spawn(async move {
            match sync_profile(&session, &db, &identity).await {
                SyncOutcome::Synced => info!(user = %identity.id, "User data synced"),
                SyncOutcome::AlreadySynced => {}
                SyncOutcome::Failed(reason) => {
                    warn!(user = %identity.id, error = %reason, "Failed to sync user data")
                }
            }
        });
    }

    let response = next.run(request).await;
    (jar, response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn ada() -> Identity {
        Identity {
            id: "user_ada".to_string(),
            email: Some("ada@example.com".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
            image_url: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_sync_fires_once_per_session() {
        let db = test_db().await;
        let session = BrowserSession::default();

        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::Synced);
        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::AlreadySynced);
        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::AlreadySynced);

        let profile = user_profile::get_profile(db.pool(), "user_ada")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_failed_sync_is_not_retried() {
        let db = test_db().await;
        db.close().await;
        let session = BrowserSession::default();

        let first = sync_profile(&session, &db, &ada()).await;
        assert!(matches!(first, SyncOutcome::Failed(_)));
        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::AlreadySynced);
    }

    #[tokio::test]
    async fn test_new_session_syncs_again() {
        let db = test_db().await;

        let first = BrowserSession::default();
        let second = BrowserSession::default();

        assert_eq!(sync_profile(&first, &db, &ada()).await, SyncOutcome::Synced);
        assert_eq!(sync_profile(&second, &db, &ada()).await, SyncOutcome::Synced);
    }

    #[tokio::test]
    async fn test_different_identity_in_same_session_syncs() {
        let db = test_db().await;
        let session = BrowserSession::default();

        let grace = Identity {
            id: "user_grace".to_string(),
            ..ada()
        };

        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::Synced);
        assert_eq!(sync_profile(&session, &db, &grace).await, SyncOutcome::Synced);
        assert_eq!(user_profile::count_profiles(db.pool()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_switching_back_does_not_sync_again() {
        let db = test_db().await;
        let session = BrowserSession::default();

        let grace = Identity {
            id: "user_grace".to_string(),
            ..ada()
        };

        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::Synced);
        assert_eq!(sync_profile(&session, &db, &grace).await, SyncOutcome::Synced);
        assert_eq!(sync_profile(&session, &db, &ada()).await, SyncOutcome::AlreadySynced);
        assert_eq!(sync_profile(&session, &db, &grace).await, SyncOutcome::AlreadySynced);
    }
}
