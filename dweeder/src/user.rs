//! Account lifecycle: registration, profile updates, password checks,
//! remember tokens and cascading deletion.

use butane::db::{BackendConnection, ConnectionMethods};
use butane::prelude::*;
use butane::{query, AutoPk};

use crate::digest::{self, Digester};
use crate::models::{now, Dweed, Relationship, User};
use crate::token::new_token;
use crate::validation::{self, Password, Profile, ValidationErrors};
use crate::{Error, Result};

impl User {
    /// Validate and save a new user.
    ///
    /// Nothing is written unless every constraint holds; on failure the
    /// returned [`Error::Validation`] lists each failed field.
    pub fn register(
        conn: &impl ConnectionMethods,
        digester: &Digester,
        profile: &Profile,
        password: &Password,
    ) -> Result<User> {
        let mut errors = ValidationErrors::new();
        errors.check(profile);
        errors.check(password);
        check_unique(conn, &mut errors, profile, &AutoPk::uninitialized())?;
        errors.into_result()?;

        let now = now();
        let mut user = User {
            id: AutoPk::uninitialized(),
            name: profile.name.clone(),
            email: profile.normalized_email(),
            handle: profile.handle.clone(),
            handle_key: profile.handle_key(),
            password_digest: digester.digest(&password.password)?,
            remember_digest: None,
            created_at: now,
            updated_at: now,
        };
        user.save(conn)?;
        log::info!("registered user {} as {}", user.handle, user.id);
        Ok(user)
    }

    /// Validate and save changes to an existing user. A `None` password
    /// keeps the current digest.
    pub fn update_profile(
        &mut self,
        conn: &impl ConnectionMethods,
        digester: &Digester,
        profile: &Profile,
        password: Option<&Password>,
    ) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::NotSaved);
        }
        let mut errors = ValidationErrors::new();
        errors.check(profile);
        if let Some(password) = password {
            errors.check(password);
        }
        check_unique(conn, &mut errors, profile, &self.id)?;
        errors.into_result()?;

        let password_digest = match password {
            Some(password) => digester.digest(&password.password)?,
            None => self.password_digest.clone(),
        };
        self.save_changes(conn, |user| {
            user.name = profile.name.clone();
            user.email = profile.normalized_email();
            user.handle = profile.handle.clone();
            user.handle_key = profile.handle_key();
            user.password_digest = password_digest;
        })?;
        log::debug!("updated user {}", self.id);
        Ok(())
    }

    /// Whether `password` is this user's password.
    pub fn authenticate(&self, password: &str) -> bool {
        digest::verify(password, &self.password_digest)
    }

    pub fn find(conn: &impl ConnectionMethods, id: i64) -> Result<User> {
        Ok(User::get(conn, id)?)
    }

    /// Look a user up by email, ignoring case.
    pub fn find_by_email(conn: &impl ConnectionMethods, email: &str) -> Result<Option<User>> {
        let email = validation::normalize_email(email);
        Ok(query!(User, email == { email.as_str() }).load_first(conn)?)
    }

    /// Look a user up by handle, ignoring case.
    pub fn find_by_handle(conn: &impl ConnectionMethods, handle: &str) -> Result<Option<User>> {
        let key = validation::handle_key(handle);
        Ok(query!(User, handle_key == { key.as_str() }).load_first(conn)?)
    }

    /// Issue a new remember token, store its digest and return the
    /// plaintext for the client. Any previous token stops working.
    pub fn remember(&mut self, conn: &impl ConnectionMethods, digester: &Digester) -> Result<String> {
        let token = new_token();
        let remember_digest = digester.digest(&token)?;
        self.save_changes(conn, |user| user.remember_digest = Some(remember_digest))?;
        log::debug!("issued remember token for user {}", self.id);
        Ok(token)
    }

    /// Invalidate the remember token, if any.
    pub fn forget(&mut self, conn: &impl ConnectionMethods) -> Result<()> {
        self.save_changes(conn, |user| user.remember_digest = None)?;
        log::debug!("forgot remember token for user {}", self.id);
        Ok(())
    }

    /// Whether `token` is this user's current remember token. Has no
    /// side effects; a user with no token never matches.
    pub fn verify_remember_token(&self, token: &str) -> bool {
        match &self.remember_digest {
            Some(remember_digest) => digest::verify(token, remember_digest),
            None => false,
        }
    }

    pub fn is_remembered(&self) -> bool {
        self.remember_digest.is_some()
    }

    /// Save a copy with `change` applied and a fresh `updated_at`. `self`
    /// is only replaced once the write succeeds.
    fn save_changes(
        &mut self,
        conn: &impl ConnectionMethods,
        change: impl FnOnce(&mut User),
    ) -> Result<()> {
        let mut updated = self.clone();
        change(&mut updated);
        updated.updated_at = now();
        updated.save(conn)?;
        *self = updated;
        Ok(())
    }

    /// Delete this user together with their dweeds and every
    /// relationship they are part of, in one transaction.
    pub fn destroy(self, conn: &mut impl BackendConnection) -> Result<()> {
        let user = &self;
        let tx = conn.transaction()?;
        let dweeds = query!(Dweed, author == { user }).delete(&tx)?;
        let relationships =
            query!(Relationship, follower == { user } || followee == { user }).delete(&tx)?;
        self.delete(&tx)?;
        tx.commit()?;
        log::info!(
            "deleted user {} with {dweeds} dweeds and {relationships} relationships",
            self.id
        );
        Ok(())
    }
}

/// Record a failure for each of `profile`'s email and handle that
/// already belongs to a user other than `except`.
fn check_unique(
    conn: &impl ConnectionMethods,
    errors: &mut ValidationErrors,
    profile: &Profile,
    except: &AutoPk<i64>,
) -> Result<()> {
    let email = profile.normalized_email();
    if let Some(other) = query!(User, email == { email.as_str() }).load_first(conn)? {
        if other.id != *except {
            errors.add("email", "duplicate email");
        }
    }
    let key = profile.handle_key();
    if let Some(other) = query!(User, handle_key == { key.as_str() }).load_first(conn)? {
        if other.id != *except {
            errors.add("handle", "duplicate handle");
        }
    }
    Ok(())
}
