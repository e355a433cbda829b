//! User domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use mercadito_core::{UserId, Username};

/// A registered user.
///
/// Deliberately carries no credential material: the password hash lives only
/// in the repository layer and is never serialized in a response.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Given name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Unique login name.
    pub username: Username,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
