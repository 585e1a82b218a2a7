//! Database schema setup.
//!
//! The migrations live under `.butane/migrations` in this crate and are
//! embedded into the library by [`crate::butane_migrations`], so applying
//! them needs nothing from the filesystem. After changing a model, create
//! a new migration with the `butane` CLI and re-embed it.

use butane::db::BackendConnection;
use butane::migrations::{MemMigrations, Migration, Migrations};

use crate::Result;

/// Every migration shipped with this crate.
pub fn migrations() -> Result<MemMigrations> {
    Ok(crate::butane_migrations::get_migrations()?)
}

/// Apply any migrations the database does not have yet. Returns the
/// number applied.
pub fn migrate(conn: &mut impl BackendConnection) -> Result<usize> {
    let migrations = migrations()?;
    let to_apply = migrations.unapplied_migrations(&*conn)?;
    for migration in &to_apply {
        log::info!("applying migration {}", migration.name());
    }
    if !to_apply.is_empty() {
        migrations.migrate(conn)?;
    }
    Ok(to_apply.len())
}
