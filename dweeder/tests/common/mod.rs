#![allow(dead_code)] //this module is used by multiple tests, not all use all parts
use butane::db::{Connection, ConnectionSpec};
use butane::migrations::adb::ADB;
use butane::migrations::{self, Migration, MigrationsMut};
use dweeder::{schema, Digester, Password, Profile, User};

pub const PASSWORD: &str = "foobar";

pub fn sqlite_connspec() -> ConnectionSpec {
    ConnectionSpec::new("sqlite", ":memory:")
}

/// A fresh in-memory database with the embedded migrations applied.
pub fn setup_db() -> Connection {
    env_logger::try_init().ok();
    let mut conn = butane::db::connect(&sqlite_connspec()).unwrap();
    let applied = schema::migrate(&mut conn).unwrap();
    assert_eq!(applied, 1, "expected the init migration to be applied");
    conn
}

/// The tables as `#[model]` recorded them when this crate was compiled.
pub fn model_schema() -> ADB {
    let mut disk_migrations =
        migrations::from_root(concat!(env!("CARGO_MANIFEST_DIR"), "/.butane/migrations"));
    disk_migrations.current().db().unwrap()
}

/// Make every later `UPDATE` of a user row fail.
pub fn reject_user_updates(conn: &Connection) {
    conn.execute(
        "CREATE TRIGGER users_read_only BEFORE UPDATE ON users \
         BEGIN SELECT RAISE(ABORT, 'users are read-only'); END;",
    )
    .unwrap();
}

pub fn digester() -> Digester {
    Digester::minimum()
}

pub fn profile(handle: &str) -> Profile {
    Profile::new(
        format!("{handle} Example"),
        format!("{handle}@example.com"),
        handle,
    )
}

pub fn password() -> Password {
    Password::new(PASSWORD, PASSWORD)
}

/// Register a user whose name, email and password derive from `handle`.
pub fn create_user(conn: &Connection, handle: &str) -> User {
    User::register(conn, &digester(), &profile(handle), &password()).unwrap()
}
