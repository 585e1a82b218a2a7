//! Posting dweeds and reading feeds.

use butane::db::ConnectionMethods;
use butane::prelude::*;
use butane::query::{BoolExpr, Query};
use butane::{colname, filter};

use crate::models::{Dweed, Relationship, User};
use crate::validation::{DweedBody, ValidationErrors};
use crate::{Error, Result};

impl User {
    /// Publish a dweed authored by this user.
    pub fn post(&self, conn: &impl ConnectionMethods, body: &str) -> Result<Dweed> {
        if self.id.is_none() {
            return Err(Error::NotSaved);
        }
        let mut errors = ValidationErrors::new();
        errors.check(&DweedBody {
            body: body.to_string(),
        });
        errors.into_result()?;

        let mut dweed = Dweed::new(self, body);
        dweed.save(conn)?;
        log::debug!("user {} posted dweed {}", self.id, dweed.id);
        Ok(dweed)
    }

    /// This user's own dweeds, newest first.
    pub fn dweeds(&self, conn: &impl ConnectionMethods) -> Result<Vec<Dweed>> {
        let me = self;
        let query = Dweed::query().filter(filter!(Dweed, author == { me }));
        load(conn, newest_first(query))
    }

    /// Dweeds by this user and by everyone they follow, newest first.
    pub fn feed(&self, conn: &impl ConnectionMethods) -> Result<Vec<Dweed>> {
        load(conn, self.feed_query())
    }

    /// One page of [`User::feed`]. Pages are numbered from 1.
    pub fn feed_page(
        &self,
        conn: &impl ConnectionMethods,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Dweed>> {
        let per_page = per_page.clamp(1, i32::MAX as u32);
        let offset = u64::from(page.max(1) - 1) * u64::from(per_page);
        let offset = i32::try_from(offset).unwrap_or(i32::MAX);
        let query = self
            .feed_query()
            .limit(per_page as i32)
            .offset(offset);
        load(conn, query)
    }

    /// `author IN (SELECT followee FROM relationships WHERE follower = me)
    /// OR author = me`
    fn feed_query(&self) -> Query<Dweed> {
        let me = self;
        let followed = BoolExpr::Subquery {
            col: colname!(Dweed, author),
            tbl2: Relationship::TABLE.into(),
            tbl2_col: colname!(Relationship, followee),
            expr: Box::new(filter!(Relationship, follower == { me })),
        };
        let own = filter!(Dweed, author == { me });
        newest_first(Dweed::query().filter(BoolExpr::Or(Box::new(followed), Box::new(own))))
    }
}

fn newest_first(query: Query<Dweed>) -> Query<Dweed> {
    query
        .order_desc(colname!(Dweed, created_at))
        .order_desc(colname!(Dweed, id))
}

fn load(conn: &impl ConnectionMethods, query: Query<Dweed>) -> Result<Vec<Dweed>> {
    Ok(query.load(conn)?.into_iter().collect())
}
