//! Persisted models.

use butane::{model, AutoPk, ForeignKey};
use chrono::{NaiveDateTime, Utc};

/// A registered account.
#[model]
#[table = "users"]
#[derive(Clone, Debug, Default)]
pub struct User {
    pub id: AutoPk<i64>,
    /// Display name.
    pub name: String,
    /// Always stored lowercase.
    #[unique]
    pub email: String,
    /// Handle as the user typed it.
    pub handle: String,
    /// Lowercase handle, used for case-insensitive uniqueness.
    #[unique]
    pub handle_key: String,
    pub password_digest: String,
    /// Digest of the current remember token, if any.
    pub remember_digest: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A directed "follows" edge.
#[model]
#[table = "relationships"]
#[derive(Clone, Debug)]
pub struct Relationship {
    pub id: AutoPk<i64>,
    pub follower: ForeignKey<User>,
    pub followee: ForeignKey<User>,
}
impl Relationship {
    pub fn new(follower: &User, followee: &User) -> Self {
        Relationship {
            id: AutoPk::uninitialized(),
            follower: follower.into(),
            followee: followee.into(),
        }
    }
}

/// A short post.
#[model]
#[table = "dweeds"]
#[derive(Clone, Debug)]
pub struct Dweed {
    pub id: AutoPk<i64>,
    pub author: ForeignKey<User>,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
impl Dweed {
    pub fn new(author: &User, body: impl Into<String>) -> Self {
        let now = now();
        Dweed {
            id: AutoPk::uninitialized(),
            author: author.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Current UTC time as stored in timestamp columns.
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
