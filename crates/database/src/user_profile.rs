//! User profile storage.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{ProfileUpdate, UserProfile};

/// Merge a profile into the `users` table.
///
/// Creates the row if it doesn't exist. Otherwise overwrites the identity
/// fields carried by `update` and refreshes `last_sign_in_at` and
/// `updated_at` with the database clock. `inserted_at` is never touched
/// after the first write.
pub async fn upsert_profile(pool: &SqlitePool, update: &ProfileUpdate) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (external_id, email, first_name, last_name, full_name, image_url, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(external_id) DO UPDATE SET
            email = excluded.email,
            first_name = excluded.first_name,
            last_name = excluded.last_name,
            full_name = excluded.full_name,
            image_url = excluded.image_url,
            created_at = excluded.created_at,
            last_sign_in_at = strftime('%Y-%m-%d %H:%M:%f', 'now'),
            updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
        "#,
    )
    .bind(&update.external_id)
    .bind(&update.email)
    .bind(&update.first_name)
    .bind(&update.last_name)
    .bind(&update.full_name)
    .bind(&update.image_url)
    .bind(&update.created_at)
    .execute(pool)
    .await?;

    tracing::debug!(external_id = %update.external_id, "Profile upserted");
    Ok(())
}

/// Get a user's profile.
pub async fn get_profile(pool: &SqlitePool, external_id: &str) -> Result<Option<UserProfile>> {
    let record = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT external_id, email, first_name, last_name, full_name, image_url,
               created_at, inserted_at, last_sign_in_at, updated_at
        FROM users
        WHERE external_id = ?
        "#,
    )
    .bind(external_id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Count stored profiles.
pub async fn count_profiles(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
