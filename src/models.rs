//! Entity models: one read view and one create view per table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user row, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned identity, immutable once set.
    pub id: i64,
    /// Intended unique, but no constraint declares or checks it.
    pub email: String,
}

/// Accepted input when creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub email: String,
}

/// A persisted item row, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Accepted input when creating an item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
