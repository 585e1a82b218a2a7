//! Login state for one client.
//!
//! A [`Session`] holds what a client carries between requests: the id of
//! the logged-in user and, optionally, a persistent remember cookie. The
//! user model itself never learns about sessions.

use butane::db::ConnectionMethods;
use serde::{Deserialize, Serialize};

use crate::digest::Digester;
use crate::models::User;
use crate::{Error, Result};

/// Persistent credential: a user id and the plaintext remember token.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RememberCookie {
    pub user_id: i64,
    pub token: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub remember: Option<RememberCookie>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_in(&mut self, user: &User) -> Result<()> {
        let id = (*user.id).ok_or(Error::NotSaved)?;
        self.user_id = Some(id);
        log::debug!("session logged in user {id}");
        Ok(())
    }

    /// Issue a remember token for `user` and keep it as this session's
    /// cookie.
    pub fn remember(
        &mut self,
        conn: &impl ConnectionMethods,
        digester: &Digester,
        user: &mut User,
    ) -> Result<()> {
        let user_id = (*user.id).ok_or(Error::NotSaved)?;
        let token = user.remember(conn, digester)?;
        self.remember = Some(RememberCookie { user_id, token });
        Ok(())
    }

    /// Drop the cookie and invalidate the token server-side.
    pub fn forget(&mut self, conn: &impl ConnectionMethods, user: &mut User) -> Result<()> {
        user.forget(conn)?;
        self.remember = None;
        Ok(())
    }

    /// The logged-in user, if any.
    ///
    /// The session id is tried first. Failing that, a remember cookie whose
    /// token verifies logs the user back in. A stale or forged cookie yields
    /// `None` and is left untouched.
    pub fn current_user(&mut self, conn: &impl ConnectionMethods) -> Result<Option<User>> {
        if let Some(id) = self.user_id {
            match User::find(conn, id) {
                Ok(user) => return Ok(Some(user)),
                Err(Error::NotFound) => {
                    log::debug!("session user {id} no longer exists");
                    self.user_id = None;
                }
                Err(e) => return Err(e),
            }
        }
        let Some(cookie) = &self.remember else {
            return Ok(None);
        };
        let user = match User::find(conn, cookie.user_id) {
            Ok(user) => user,
            Err(Error::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        if user.verify_remember_token(&cookie.token) {
            self.log_in(&user)?;
            Ok(Some(user))
        } else {
            log::debug!("remember cookie for user {} rejected", cookie.user_id);
            Ok(None)
        }
    }

    pub fn is_logged_in(&mut self, conn: &impl ConnectionMethods) -> Result<bool> {
        Ok(self.current_user(conn)?.is_some())
    }

    /// Log out: forget the current user's remember token and clear
    /// everything this session holds.
    pub fn end_session(&mut self, conn: &impl ConnectionMethods) -> Result<()> {
        if let Some(mut user) = self.current_user(conn)? {
            user.forget(conn)?;
            log::debug!("session for user {} ended", user.id);
        }
        self.user_id = None;
        self.remember = None;
        Ok(())
    }
}
