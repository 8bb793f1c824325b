//! The signed-in user's synced profile.

use axum::extract::State;
use axum::Json;
use database::{user_profile, UserProfile};

use crate::error::{Result, WebError};
use crate::identity::MaybeIdentity;
use crate::state::AppState;

/// Return the stored copy of the caller's profile.
pub async fn profile_api(
    State(state): State<AppState>,
    MaybeIdentity(identity): MaybeIdentity,
) -> Result<Json<UserProfile>> {
    let identity = identity.ok_or(WebError::Unauthorized)?;

    user_profile::get_profile(state.db.pool(), &identity.id)
        .await?
        .map(Json)
        .ok_or_else(|| WebError::ProfileNotFound(identity.id.clone()))
}
