//! # API crate — shared fullstack server functions for ClipForge
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | OAuth (GitHub, Google) and local password authentication, session keys, password hashing |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models (`User`, `VideoRecord`) and their client-safe projections (`UserInfo`, `VideoInfo`, `Platform`) |
//! | [`validate`] | — | Draft validation shared by the form views and the server functions |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `get_login_url`, `logout`, `register`, `login_password`
//! - **Video records**: `list_videos`, `get_video`, `create_video`, `update_video`, `delete_video`
//!
//! Every video operation is scoped to the session's user id in SQL
//! (`user_id = $n` on every query), so a record that does not exist and a record
//! owned by someone else are indistinguishable to the caller: both come back as
//! `None` (or `false` for delete).

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod validate;

pub use models::{Platform, UserInfo, VideoInfo};
pub use validate::{ValidationError, VideoDraft, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};

/// Resolve the session to a user id, or fail with "Not authenticated".
#[cfg(feature = "server")]
async fn require_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Get the OAuth login URL for a provider.
#[cfg(feature = "server")]
#[get("/api/auth/login/:provider")]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    let Some(provider) = auth::OAuthProvider::from_key(&provider) else {
        return Err(ServerFnError::new(format!("Unknown provider: {}", provider)));
    };

    let flow = auth::OAuthFlow::new(provider).map_err(ServerFnError::new)?;
    flow.generate_auth_url().await.map_err(ServerFnError::new)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login/:provider")]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> = sqlx::query_as(
        "SELECT 1 as n FROM users WHERE provider = 'local' AND provider_id = $1",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, provider, provider_id, password_hash) VALUES ($1, $2, 'local', $1, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as(
        "SELECT * FROM users WHERE provider = 'local' AND provider_id = $1",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the current user's video records, newest creation first.
/// An empty list is a valid result, not an error.
#[cfg(feature = "server")]
#[get("/api/videos", session: tower_sessions::Session)]
pub async fn list_videos() -> Result<Vec<VideoInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VideoRecord;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let records: Vec<VideoRecord> = sqlx::query_as(
        "SELECT * FROM videos WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(records.iter().map(VideoRecord::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/videos")]
pub async fn list_videos() -> Result<Vec<VideoInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one of the current user's video records.
/// `None` covers both "does not exist" and "not yours" — also for malformed ids.
#[cfg(feature = "server")]
#[get("/api/videos/:id", session: tower_sessions::Session)]
pub async fn get_video(id: String) -> Result<Option<VideoInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VideoRecord;

    let user_id = require_user_id(&session).await?;

    let Ok(video_id) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let record: Option<VideoRecord> = sqlx::query_as(
        "SELECT * FROM videos WHERE id = $1 AND user_id = $2",
    )
    .bind(video_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(record.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/videos/:id")]
pub async fn get_video(id: String) -> Result<Option<VideoInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a video record for the current user. The draft is validated again
/// here; the returned record carries the database-assigned id and timestamp.
#[cfg(feature = "server")]
#[post("/api/videos", session: tower_sessions::Session)]
pub async fn create_video(
    title: String,
    description: Option<String>,
    platforms: Vec<Platform>,
) -> Result<VideoInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VideoRecord;

    let user_id = require_user_id(&session).await?;

    let title = title.trim().to_string();
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let draft = VideoDraft {
        title: title.clone(),
        description: description.clone(),
        platforms: platforms.clone(),
    };
    draft
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let tags: Vec<String> = platforms.iter().map(|p| p.as_str().to_string()).collect();

    let record: VideoRecord = sqlx::query_as(
        "INSERT INTO videos (user_id, title, description, platforms) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(user_id)
    .bind(&title)
    .bind(&description)
    .bind(&tags)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(record.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/videos")]
pub async fn create_video(
    title: String,
    description: Option<String>,
    platforms: Vec<Platform>,
) -> Result<VideoInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update one of the current user's video records. `None` parameters leave the
/// field unchanged; a blank description clears it. Returns the updated record,
/// or `None` under the same owner-scoping rule as [`get_video`].
#[cfg(feature = "server")]
#[post("/api/videos/update", session: tower_sessions::Session)]
pub async fn update_video(
    id: String,
    title: Option<String>,
    description: Option<String>,
    platforms: Option<Vec<Platform>>,
) -> Result<Option<VideoInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VideoRecord;

    let user_id = require_user_id(&session).await?;

    let Ok(video_id) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let title = title.map(|t| t.trim().to_string());
    if let Some(ref t) = title {
        validate::validate_title(t).map_err(|e| ServerFnError::new(e.to_string()))?;
    }
    if let Some(ref d) = description {
        validate::validate_description(Some(d))
            .map_err(|e| ServerFnError::new(e.to_string()))?;
    }
    if let Some(ref p) = platforms {
        validate::validate_platforms(p).map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let tags: Option<Vec<String>> =
        platforms.map(|ps| ps.iter().map(|p| p.as_str().to_string()).collect());

    let record: Option<VideoRecord> = sqlx::query_as(
        r#"
        UPDATE videos SET
            title = COALESCE($3, title),
            description = CASE WHEN $4::text IS NULL THEN description
                               ELSE NULLIF(btrim($4), '') END,
            platforms = COALESCE($5, platforms),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(video_id)
    .bind(user_id)
    .bind(&title)
    .bind(&description)
    .bind(&tags)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(record.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/videos/update")]
pub async fn update_video(
    id: String,
    title: Option<String>,
    description: Option<String>,
    platforms: Option<Vec<Platform>>,
) -> Result<Option<VideoInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete one of the current user's video records. Returns whether a record was
/// deleted; deleting an already-deleted or foreign id is `false`, never an error.
#[cfg(feature = "server")]
#[post("/api/videos/delete", session: tower_sessions::Session)]
pub async fn delete_video(id: String) -> Result<bool, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let Ok(video_id) = uuid::Uuid::parse_str(&id) else {
        return Ok(false);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM videos WHERE id = $1 AND user_id = $2")
        .bind(video_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(result.rows_affected() > 0)
}

#[cfg(not(feature = "server"))]
#[post("/api/videos/delete")]
pub async fn delete_video(id: String) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
