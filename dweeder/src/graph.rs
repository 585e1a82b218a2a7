//! Follow relationships between users.

use butane::db::{Column, ConnectionMethods};
use butane::prelude::*;
use butane::query::BoolExpr;
use butane::{colname, filter, query, SqlType};

use crate::models::{Relationship, User};
use crate::{Error, Result};

impl User {
    /// Follow `followee`. Following someone already followed returns
    /// the existing relationship.
    pub fn follow(&self, conn: &impl ConnectionMethods, followee: &User) -> Result<Relationship> {
        if self.id.is_none() || followee.id.is_none() {
            return Err(Error::NotSaved);
        }
        if self.id == followee.id {
            return Err(Error::SelfFollow);
        }
        if let Some(existing) = self.relationship_with(conn, followee)? {
            return Ok(existing);
        }
        let mut relationship = Relationship::new(self, followee);
        relationship.save(conn)?;
        log::debug!("user {} follows user {}", self.id, followee.id);
        Ok(relationship)
    }

    /// Stop following `followee`. Fails with [`Error::NotFollowing`]
    /// if there is nothing to undo.
    pub fn unfollow(&self, conn: &impl ConnectionMethods, followee: &User) -> Result<()> {
        let relationship = self
            .relationship_with(conn, followee)?
            .ok_or(Error::NotFollowing)?;
        relationship.delete(conn)?;
        log::debug!("user {} unfollowed user {}", self.id, followee.id);
        Ok(())
    }

    pub fn is_following(&self, conn: &impl ConnectionMethods, other: &User) -> Result<bool> {
        Ok(self.relationship_with(conn, other)?.is_some())
    }

    /// Users this user follows, ordered by handle.
    pub fn following(&self, conn: &impl ConnectionMethods) -> Result<Vec<User>> {
        let me = self;
        let ids = BoolExpr::Subquery {
            col: User::PKCOL,
            tbl2: Relationship::TABLE.into(),
            tbl2_col: colname!(Relationship, followee),
            expr: Box::new(filter!(Relationship, follower == { me })),
        };
        load_users(conn, ids)
    }

    /// Users following this user, ordered by handle.
    pub fn followers(&self, conn: &impl ConnectionMethods) -> Result<Vec<User>> {
        let me = self;
        let ids = BoolExpr::Subquery {
            col: User::PKCOL,
            tbl2: Relationship::TABLE.into(),
            tbl2_col: colname!(Relationship, follower),
            expr: Box::new(filter!(Relationship, followee == { me })),
        };
        load_users(conn, ids)
    }

    pub fn following_count(&self, conn: &impl ConnectionMethods) -> Result<usize> {
        let me = self;
        count_relationships(conn, filter!(Relationship, follower == { me }))
    }

    pub fn followers_count(&self, conn: &impl ConnectionMethods) -> Result<usize> {
        let me = self;
        count_relationships(conn, filter!(Relationship, followee == { me }))
    }

    fn relationship_with(
        &self,
        conn: &impl ConnectionMethods,
        other: &User,
    ) -> Result<Option<Relationship>> {
        let me = self;
        Ok(query!(Relationship, follower == { me } && followee == { other }).load_first(conn)?)
    }
}

/// Number of relationships matching `expr`. Butane has no aggregate
/// queries, so this selects only the id column and counts the rows.
fn count_relationships(conn: &impl ConnectionMethods, expr: BoolExpr) -> Result<usize> {
    let columns = [Column::new(Relationship::PKCOL, SqlType::BigInt)];
    let mut rows = conn.query(Relationship::TABLE, &columns, Some(expr), None, None, None)?;
    let mut count = 0;
    while rows.next()?.is_some() {
        count += 1;
    }
    Ok(count)
}

fn load_users(conn: &impl ConnectionMethods, expr: BoolExpr) -> Result<Vec<User>> {
    Ok(User::query()
        .filter(expr)
        .order_asc(colname!(User, handle_key))
        .load(conn)?
        .into_iter()
        .collect())
}
