//! Session key constants.

/// Key for storing the authenticated user id in the tower-sessions record.
pub const SESSION_USER_ID_KEY: &str = "user_id";
